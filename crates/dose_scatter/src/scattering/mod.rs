//! Sampling of multiple-Coulomb-scattering deflection angles.
//!
//! This module defines the trait and concrete strategies used to draw
//! independent zero-mean Gaussian deflection angles whose standard deviation
//! comes from a closed-form scattering model, plus the survival decimation
//! applied to the generated samples.
use rand::RngCore;

pub mod highland;
pub mod moliere;
pub mod survival;

pub use highland::HighlandScattering;
pub use moliere::MoliereScattering;
pub use survival::{apply_survival, decimate, survival_fraction};

/// Trait for scattering-angle sampling.
pub trait AngleSampling: Send + Sync {
    /// Standard deviation of the deflection-angle distribution, in degrees.
    fn sigma_deg(&self) -> f64;

    /// Draws `count` independent deflection angles in degrees.
    ///
    /// Degenerate model parameters (non-positive or non-finite sigma) yield an
    /// empty vector.
    fn generate(&self, count: usize, rng: &mut dyn RngCore) -> Vec<f64>;
}

/// Generate a random float in the range [0, 1) with 53-bit resolution.
#[inline]
pub(crate) fn rand01(rng: &mut dyn RngCore) -> f64 {
    (rng.next_u64() >> 11) as f64 / (1u64 << 53) as f64
}

/// One standard-normal draw via the Box-Muller transform.
#[inline]
pub(crate) fn standard_normal(rng: &mut dyn RngCore) -> f64 {
    let u1 = (1.0 - rand01(rng)).clamp(f64::MIN_POSITIVE, 1.0);
    let u2 = rand01(rng);

    (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos()
}

/// Draws `count` samples from N(0, sigma^2).
pub(crate) fn gaussian_angles(sigma: f64, count: usize, rng: &mut dyn RngCore) -> Vec<f64> {
    if count == 0 || !sigma.is_finite() || sigma <= 0.0 {
        return Vec::new();
    }
    (0..count).map(|_| sigma * standard_normal(rng)).collect()
}

#[cfg(test)]
mod tests {
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    use super::*;

    struct FixedRng {
        value: u64,
    }

    impl RngCore for FixedRng {
        fn next_u32(&mut self) -> u32 {
            self.value as u32
        }

        fn next_u64(&mut self) -> u64 {
            self.value
        }

        fn fill_bytes(&mut self, dest: &mut [u8]) {
            let bytes = self.value.to_le_bytes();
            for (i, b) in dest.iter_mut().enumerate() {
                *b = bytes[i % 8];
            }
        }
    }

    #[test]
    fn rand01_returns_zero_for_zero_input() {
        let mut rng = FixedRng { value: 0 };
        assert_eq!(rand01(&mut rng), 0.0);
    }

    #[test]
    fn rand01_stays_below_one() {
        let mut rng = FixedRng { value: u64::MAX };
        let result = rand01(&mut rng);
        assert!((0.0..1.0).contains(&result));

        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..1000 {
            let v = rand01(&mut rng);
            assert!((0.0..1.0).contains(&v));
        }
    }

    #[test]
    fn gaussian_angles_empty_for_degenerate_inputs() {
        let mut rng = StdRng::seed_from_u64(1);
        assert!(gaussian_angles(1.0, 0, &mut rng).is_empty());
        assert!(gaussian_angles(0.0, 10, &mut rng).is_empty());
        assert!(gaussian_angles(-2.0, 10, &mut rng).is_empty());
        assert!(gaussian_angles(f64::NAN, 10, &mut rng).is_empty());
    }

    #[test]
    fn gaussian_angles_match_the_requested_moments() {
        let mut rng = StdRng::seed_from_u64(42);
        let sigma = 2.5;
        let samples = gaussian_angles(sigma, 20_000, &mut rng);
        assert_eq!(samples.len(), 20_000);

        let n = samples.len() as f64;
        let mean = samples.iter().sum::<f64>() / n;
        let var = samples.iter().map(|a| (a - mean) * (a - mean)).sum::<f64>() / n;
        assert!(mean.abs() < 0.1, "sample mean {mean} too far from 0");
        assert!(
            (var.sqrt() - sigma).abs() / sigma < 0.05,
            "sample sd {} too far from {sigma}",
            var.sqrt()
        );
    }

    #[test]
    fn gaussian_angles_deterministic_for_same_seed() {
        let mut rng_a = StdRng::seed_from_u64(123);
        let mut rng_b = StdRng::seed_from_u64(123);
        assert_eq!(
            gaussian_angles(1.0, 64, &mut rng_a),
            gaussian_angles(1.0, 64, &mut rng_b)
        );
    }
}

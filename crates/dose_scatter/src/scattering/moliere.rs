//! Moliere-approximation multiple-scattering angle sampling.
use rand::RngCore;

use crate::scattering::{gaussian_angles, AngleSampling};

/// Moliere-approximation angular spread accumulated down to a depth.
///
/// `sigma = (13.6 / E) * sqrt(depth) * (1 + 0.038 ln(depth))` with the kinetic
/// energy `E` in MeV and the depth in cm, floored at zero for the very shallow
/// depths where the logarithmic term would turn negative.
#[derive(Debug, Clone, Copy)]
pub struct MoliereScattering {
    /// Kinetic energy in MeV.
    pub energy_mev: f64,
    /// Accumulated depth in cm.
    pub depth: f64,
}

impl MoliereScattering {
    /// Creates a new Moliere sampler for the given energy and depth.
    pub fn new(energy_mev: f64, depth: f64) -> Self {
        Self { energy_mev, depth }
    }
}

impl AngleSampling for MoliereScattering {
    fn sigma_deg(&self) -> f64 {
        if self.energy_mev <= 0.0 || self.depth <= 0.0 {
            return 0.0;
        }
        let sigma =
            13.6 / self.energy_mev * self.depth.sqrt() * (1.0 + 0.038 * self.depth.ln());
        sigma.max(0.0)
    }

    fn generate(&self, count: usize, rng: &mut dyn RngCore) -> Vec<f64> {
        gaussian_angles(self.sigma_deg(), count, rng)
    }
}

//! Survival-fraction truncation of scattered particle samples.
//!
//! The surviving count at depth is modeled as an exponential of depth and the
//! generated sample list is truncated to its first `round(n * fraction)`
//! entries. The truncation is cosmetic decimation, not particle transport.
use crate::beam::Particle;
use crate::error::{Error, Result};

/// Fraction of particles surviving to `depth` cm.
///
/// Protons decay as `e^(-depth/3)`, electrons as `e^(-depth/2)`. Photons carry
/// no charged-particle survival model and are rejected.
pub fn survival_fraction(particle: Particle, depth: f64) -> Result<f64> {
    let fraction = match particle {
        Particle::Proton => (-depth / 3.0).exp(),
        Particle::Electron => (-depth / 2.0).exp(),
        Particle::Photon => {
            return Err(Error::UnsupportedParticle {
                name: particle.as_str().to_owned(),
            })
        }
    };
    Ok(fraction.clamp(0.0, 1.0))
}

/// Keeps the first `round(len * fraction)` samples, dropping the rest.
pub fn decimate(samples: &mut Vec<f64>, fraction: f64) {
    let fraction = fraction.clamp(0.0, 1.0);
    let keep = (samples.len() as f64 * fraction).round() as usize;
    samples.truncate(keep);
}

/// Applies the survival truncation for `particle` at `depth` to `samples`.
pub fn apply_survival(particle: Particle, depth: f64, samples: &mut Vec<f64>) -> Result<()> {
    let fraction = survival_fraction(particle, depth)?;
    decimate(samples, fraction);
    Ok(())
}

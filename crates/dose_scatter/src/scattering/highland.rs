//! Highland multiple-scattering angle sampling.
use rand::RngCore;

use crate::scattering::{gaussian_angles, AngleSampling};

/// Highland empirical angular spread for a charged particle crossing a slab.
///
/// `sigma = 14.1 / E^0.57 * sqrt(step_length)` with the kinetic energy `E` in
/// MeV and the step length in cm; the result is the standard deviation of the
/// projected deflection angle in degrees.
#[derive(Debug, Clone, Copy)]
pub struct HighlandScattering {
    /// Kinetic energy in MeV.
    pub energy_mev: f64,
    /// Traversed step length in cm.
    pub step_length: f64,
}

impl HighlandScattering {
    /// Creates a new Highland sampler for the given energy and step length.
    pub fn new(energy_mev: f64, step_length: f64) -> Self {
        Self {
            energy_mev,
            step_length,
        }
    }
}

impl AngleSampling for HighlandScattering {
    fn sigma_deg(&self) -> f64 {
        if self.energy_mev <= 0.0 || self.step_length < 0.0 {
            return 0.0;
        }
        14.1 / self.energy_mev.powf(0.57) * self.step_length.sqrt()
    }

    fn generate(&self, count: usize, rng: &mut dyn RngCore) -> Vec<f64> {
        gaussian_angles(self.sigma_deg(), count, rng)
    }
}

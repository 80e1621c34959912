//! Dual-energy photon attenuation with build-up correction.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::beam::DepthDose;

/// Dual-weighted exponential photon attenuation with a build-up factor.
///
/// `D(d) = (w1 e^(-mu1 d) + w2 e^(-mu2 d)) (1 - e^(-beta d))`
///
/// The two exponentials model the hard and soft components of a megavoltage
/// spectrum; the build-up factor suppresses surface dose until secondary
/// electrons reach equilibrium.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct PhotonAttenuation {
    /// Weight of the hard (weakly attenuated) spectral component.
    pub primary_weight: f64,
    /// Attenuation coefficient of the hard component (1/cm).
    pub primary_mu: f64,
    /// Weight of the soft (strongly attenuated) spectral component.
    pub secondary_weight: f64,
    /// Attenuation coefficient of the soft component (1/cm).
    pub secondary_mu: f64,
    /// Build-up coefficient controlling the surface dose rise (1/cm).
    pub buildup_mu: f64,
}

impl PhotonAttenuation {
    /// Stock megavoltage parameters: a 70/30 hard/soft mix with the build-up
    /// region ending within the first few centimeters.
    pub fn dual_energy() -> Self {
        Self {
            primary_weight: 0.7,
            primary_mu: 0.046,
            secondary_weight: 0.3,
            secondary_mu: 0.095,
            buildup_mu: 1.4,
        }
    }
}

impl DepthDose for PhotonAttenuation {
    fn dose(&self, depth: f64) -> f64 {
        if depth < 0.0 || !depth.is_finite() {
            return 0.0;
        }
        let attenuation = self.primary_weight * (-self.primary_mu * depth).exp()
            + self.secondary_weight * (-self.secondary_mu * depth).exp();
        attenuation * (1.0 - (-self.buildup_mu * depth).exp())
    }
}

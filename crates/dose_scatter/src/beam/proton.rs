//! Proton Bragg-peak depth dose.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::beam::DepthDose;

/// Gaussian Bragg peak with an entrance plateau and exponential distal falloff.
///
/// Proximal of the peak depth `range` the dose is
/// `plateau + (1 - plateau) e^(-(d - range)^2 / (2 sigma^2))`; distal of it the
/// curve drops as `e^(-(d - range) / falloff)`. Both branches equal 1 at the
/// peak, so the maximum sits exactly at `range`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct BraggPeak {
    /// Depth of the dose maximum (cm).
    pub range: f64,
    /// Width of the Gaussian peak (cm).
    pub sigma: f64,
    /// Entrance dose relative to the peak, in [0, 1).
    pub plateau: f64,
    /// Distal falloff length (cm).
    pub falloff: f64,
}

impl BraggPeak {
    /// Peak at `range` cm with stock width, plateau, and falloff.
    pub fn to_depth(range: f64) -> Self {
        Self {
            range,
            sigma: 0.5,
            plateau: 0.3,
            falloff: 0.25,
        }
    }

    /// Sets the Gaussian peak width.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Sets the entrance plateau level.
    pub fn with_plateau(mut self, plateau: f64) -> Self {
        self.plateau = plateau;
        self
    }

    /// Sets the distal falloff length.
    pub fn with_falloff(mut self, falloff: f64) -> Self {
        self.falloff = falloff;
        self
    }
}

impl DepthDose for BraggPeak {
    fn dose(&self, depth: f64) -> f64 {
        if depth < 0.0 || !depth.is_finite() {
            return 0.0;
        }
        if depth <= self.range {
            let z = depth - self.range;
            self.plateau + (1.0 - self.plateau) * (-(z * z) / (2.0 * self.sigma * self.sigma)).exp()
        } else {
            (-(depth - self.range) / self.falloff).exp()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dose_is_maximal_at_the_configured_peak_depth() {
        let model = BraggPeak::to_depth(5.0);
        let mut best = (0.0, 0.0);
        let mut d = 0.0;
        while d <= 10.0 {
            let dose = model.dose(d);
            if dose > best.1 {
                best = (d, dose);
            }
            d += 0.005;
        }
        assert!((best.0 - 5.0).abs() < 0.006, "peak at {} cm", best.0);
        assert!((best.1 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn entrance_dose_settles_at_the_plateau() {
        let model = BraggPeak::to_depth(8.0).with_plateau(0.25);
        let entrance = model.dose(0.5);
        assert!((entrance - 0.25).abs() < 1e-6);
    }

    #[test]
    fn both_branches_agree_at_the_peak() {
        let model = BraggPeak::to_depth(6.0);
        let proximal = model.dose(6.0);
        let distal = model.dose(6.0 + 1e-12);
        assert!((proximal - 1.0).abs() < 1e-9);
        assert!((distal - 1.0).abs() < 1e-9);
    }

    #[test]
    fn distal_falloff_is_steep() {
        let model = BraggPeak::to_depth(6.0);
        assert!(model.dose(7.0) < 0.02);
        assert!(model.dose(8.0) < 1e-3);
    }

    #[test]
    fn negative_depth_deposits_nothing() {
        let model = BraggPeak::to_depth(6.0);
        assert_eq!(model.dose(-0.1), 0.0);
    }
}

//! Electron depth dose (hyperbolic-tangent model).
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::beam::DepthDose;

/// Sigmoid electron depth dose `D(d) = (1 - tanh((d - r50) / width)) / 2`.
///
/// The curve holds near full dose through the therapeutic range, crosses 50%
/// at `r50`, and falls to the bremsstrahlung-free baseline over a few `width`.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct ElectronDepthDose {
    /// Depth of the 50% dose level (cm).
    pub r50: f64,
    /// Width of the distal falloff (cm).
    pub width: f64,
}

impl ElectronDepthDose {
    /// 50% dose at `r50` cm with the stock falloff width.
    pub fn half_depth(r50: f64) -> Self {
        Self { r50, width: 0.6 }
    }

    /// Sets the falloff width.
    pub fn with_width(mut self, width: f64) -> Self {
        self.width = width;
        self
    }
}

impl DepthDose for ElectronDepthDose {
    fn dose(&self, depth: f64) -> f64 {
        if depth < 0.0 || !depth.is_finite() {
            return 0.0;
        }
        0.5 * (1.0 - ((depth - self.r50) / self.width).tanh())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn half_dose_at_r50() {
        let model = ElectronDepthDose::half_depth(4.0);
        assert!((model.dose(4.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn near_full_dose_at_the_surface() {
        let model = ElectronDepthDose::half_depth(4.0);
        assert!(model.dose(0.0) > 0.99);
    }

    #[test]
    fn falls_off_past_the_practical_range() {
        let model = ElectronDepthDose::half_depth(4.0).with_width(0.5);
        assert!(model.dose(4.0 + 3.0 * 0.5) < 0.01);
    }

    #[test]
    fn monotonically_nonincreasing() {
        let model = ElectronDepthDose::half_depth(4.0);
        let mut previous = model.dose(0.0);
        for step in 1..=100 {
            let dose = model.dose(step as f64 * 0.1);
            assert!(dose <= previous + 1e-12);
            previous = dose;
        }
    }
}

//! Radiobiological response models.
//!
//! This module provides the linear-quadratic cell survival model with a
//! Poisson tumor control probability ([tcp]) and the Lyman normal-tissue
//! complication model ([`LymanNtcp`]). Doses are in Gy; use
//! [effective_dose] to fold in the particle's relative biological
//! effectiveness first.
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::beam::Particle;

/// Linear-quadratic cell survival parameters.
///
/// `alpha` is in 1/Gy, `beta` in 1/Gy^2; their ratio sets the fractionation
/// sensitivity of the tissue.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct LinearQuadratic {
    pub alpha: f64,
    pub beta: f64,
}

impl LinearQuadratic {
    /// Typical tumor parameters (alpha/beta = 10 Gy).
    pub fn tumor() -> Self {
        Self {
            alpha: 0.3,
            beta: 0.03,
        }
    }

    /// Surviving fraction after a single dose of `dose` Gy.
    pub fn surviving_fraction(&self, dose: f64) -> f64 {
        (-(self.alpha * dose + self.beta * dose * dose)).exp()
    }
}

/// Poisson tumor control probability for `clonogens` initial tumor cells.
pub fn tcp(lq: &LinearQuadratic, clonogens: f64, dose: f64) -> f64 {
    (-clonogens * lq.surviving_fraction(dose)).exp()
}

/// Lyman normal-tissue complication probability model.
///
/// `NTCP(D) = Phi((D - TD50) / (m TD50))` with `Phi` the standard normal CDF,
/// `TD50` the uniform dose with 50% complication risk, and `m` the relative
/// slope.
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Clone, Copy, Debug)]
pub struct LymanNtcp {
    pub td50: f64,
    pub m: f64,
}

impl LymanNtcp {
    /// Stock late-complication parameters.
    pub fn late_toxicity() -> Self {
        Self { td50: 45.0, m: 0.15 }
    }

    /// Complication probability at a uniform dose of `dose` Gy.
    pub fn ntcp(&self, dose: f64) -> f64 {
        let t = (dose - self.td50) / (self.m * self.td50);
        normal_cdf(t)
    }
}

/// Physical dose scaled by the particle's relative biological effectiveness.
pub fn effective_dose(particle: Particle, dose: f64) -> f64 {
    dose * particle.rbe()
}

fn normal_cdf(t: f64) -> f64 {
    0.5 * (1.0 + erf(t / std::f64::consts::SQRT_2))
}

/// Abramowitz & Stegun 7.1.26 polynomial approximation, |error| < 1.5e-7.
fn erf(x: f64) -> f64 {
    let sign = if x < 0.0 { -1.0 } else { 1.0 };
    let x = x.abs();
    let t = 1.0 / (1.0 + 0.3275911 * x);
    let poly = t
        * (0.254829592
            + t * (-0.284496736 + t * (1.421413741 + t * (-1.453152027 + t * 1.061405429))));
    sign * (1.0 - poly * (-x * x).exp())
}

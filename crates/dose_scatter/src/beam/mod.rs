//! Closed-form depth-dose models for the supported beam modalities.
//!
//! Each model maps depth below the body surface (cm) to relative dose. The
//! models are pure functions of depth with literal physical parameters;
//! fields built from them are normalized downstream by the synthesis runner.
use crate::error::{Error, Result};

pub mod electron;
pub mod photon;
pub mod proton;

pub use electron::ElectronDepthDose;
pub use photon::PhotonAttenuation;
pub use proton::BraggPeak;

/// Particle species of a treatment beam.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Particle {
    Photon,
    Proton,
    Electron,
}

impl Particle {
    /// Parses a lowercase particle name.
    pub fn parse(name: &str) -> Result<Self> {
        match name {
            "photon" => Ok(Self::Photon),
            "proton" => Ok(Self::Proton),
            "electron" => Ok(Self::Electron),
            _ => Err(Error::UnsupportedParticle {
                name: name.to_owned(),
            }),
        }
    }

    /// Canonical lowercase name.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Photon => "photon",
            Self::Proton => "proton",
            Self::Electron => "electron",
        }
    }

    /// Relative biological effectiveness used to scale physical dose.
    pub fn rbe(self) -> f64 {
        match self {
            Self::Proton => 1.1,
            Self::Photon | Self::Electron => 1.0,
        }
    }
}

/// A closed-form depth-dose curve.
pub trait DepthDose: Send + Sync {
    /// Relative (unnormalized) dose at `depth` cm below the surface.
    ///
    /// Negative and non-finite depths yield `0.0`.
    fn dose(&self, depth: f64) -> f64;
}

/// The stock model for a particle, with its default literal parameters.
pub fn default_model(particle: Particle) -> Box<dyn DepthDose> {
    match particle {
        Particle::Photon => Box::new(PhotonAttenuation::dual_energy()),
        Particle::Proton => Box::new(BraggPeak::to_depth(10.0)),
        Particle::Electron => Box::new(ElectronDepthDose::half_depth(4.0)),
    }
}

//! Dose-field synthesis pipeline: beams, plans, runner, events.
use std::sync::Arc;

use glam::DVec2;

use crate::beam::{default_model, DepthDose, Particle};

pub mod events;
pub mod plan;
pub mod runner;

pub type BeamId = String;

/// A treatment beam: a particle species with a depth-dose model and a
/// direction of incidence in the grid plane.
#[non_exhaustive]
#[derive(Clone)]
pub struct Beam {
    pub id: BeamId,
    pub particle: Particle,
    pub model: Arc<dyn DepthDose>,
    /// Unit beam direction; dose depth is measured along it.
    pub direction: DVec2,
}

impl Beam {
    /// Creates a beam with an explicit model, aimed along +X.
    pub fn new(id: impl Into<BeamId>, particle: Particle, model: Arc<dyn DepthDose>) -> Self {
        Self {
            id: id.into(),
            particle,
            model,
            direction: DVec2::X,
        }
    }

    /// Creates a beam with the particle's stock model.
    pub fn with_default_model(id: impl Into<BeamId>, particle: Particle) -> Self {
        Self::new(id, particle, Arc::from(default_model(particle)))
    }

    /// Sets the beam direction; the vector is normalized, falling back to +X
    /// for degenerate input.
    pub fn with_direction(mut self, direction: DVec2) -> Self {
        self.direction = direction.normalize_or(DVec2::X);
        self
    }
}

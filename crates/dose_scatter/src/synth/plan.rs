//! Planning module for composing beams into a synthesis plan.
use crate::beam::Particle;
use crate::synth::Beam;

/// An ordered set of beams whose dose fields are synthesized independently.
#[non_exhaustive]
#[derive(Default)]
pub struct Plan {
    pub beams: Vec<Beam>,
}

impl Plan {
    /// Creates a new empty plan.
    pub fn new() -> Self {
        Self { beams: Vec::new() }
    }

    /// Adds a single beam to the plan.
    pub fn with_beam(mut self, beam: Beam) -> Self {
        self.beams.push(beam);
        self
    }

    /// Adds multiple beams to the plan.
    pub fn with_beams(mut self, beams: Vec<Beam>) -> Self {
        self.beams.extend(beams);
        self
    }

    /// Stock comparison plan: one photon, one proton, and one electron beam
    /// along +X, each with its default model.
    pub fn modality_comparison() -> Self {
        Self::new()
            .with_beam(Beam::with_default_model("photon", Particle::Photon))
            .with_beam(Beam::with_default_model("proton", Particle::Proton))
            .with_beam(Beam::with_default_model("electron", Particle::Electron))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plan_builder_pushes_beams() {
        let plan = Plan::new()
            .with_beam(Beam::with_default_model("a", Particle::Photon))
            .with_beams(vec![Beam::with_default_model("b", Particle::Proton)]);
        assert_eq!(plan.beams.len(), 2);
        assert_eq!(plan.beams[1].id, "b");
    }

    #[test]
    fn modality_comparison_covers_all_species() {
        let plan = Plan::modality_comparison();
        let particles: Vec<_> = plan.beams.iter().map(|b| b.particle).collect();
        assert_eq!(
            particles,
            vec![Particle::Photon, Particle::Proton, Particle::Electron]
        );
    }
}

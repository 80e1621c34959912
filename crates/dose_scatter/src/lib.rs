#![forbid(unsafe_code)]
//! dose_scatter: Analytic dose-field synthesis and scattering-angle sampling
//! for 2D radiotherapy phantoms.
//!
//! Modules:
//! - dosefield: grids, dose rasters, and concentric-disc tissue masks
//! - beam: closed-form depth-dose models (photon, proton, electron)
//! - scattering: multiple-Coulomb-scattering angle samplers and survival decimation
//! - synth: plans, runner, events
//! - radbio: TCP/NTCP radiobiological response models
//!
//! For examples and docs, see README and docs.rs.
pub mod beam;
pub mod dosefield;
pub mod error;
pub mod radbio;
pub mod scattering;
pub mod synth;

/// Convenient re-exports for common types. Import with `use dose_scatter::prelude::*;`.
pub mod prelude {
    pub use crate::beam::{
        default_model, BraggPeak, DepthDose, ElectronDepthDose, Particle, PhotonAttenuation,
    };
    pub use crate::dosefield::grid::DoseGrid;
    pub use crate::dosefield::phantom::{Phantom, Tissue, TissueMasks};
    pub use crate::dosefield::raster::DoseRaster;
    pub use crate::error::{Error, Result};
    pub use crate::radbio::{effective_dose, tcp, LinearQuadratic, LymanNtcp};
    pub use crate::scattering::{
        apply_survival, decimate, survival_fraction, AngleSampling, HighlandScattering,
        MoliereScattering,
    };
    pub use crate::synth::events::{EventSink, FnSink, MultiSink, SynthEvent, VecSink};
    pub use crate::synth::plan::Plan;
    pub use crate::synth::runner::{
        run_plan, run_plan_with_events, DoseField, DoseSynthesizer, SynthConfig, SynthResult,
    };
    pub use crate::synth::{Beam, BeamId};
}

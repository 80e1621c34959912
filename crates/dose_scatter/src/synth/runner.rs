//! High-level runner that synthesizes normalized dose fields for a plan.
//!
//! For each beam the runner evaluates the beam's depth-dose model over every
//! grid cell (depth measured along the beam direction from the phantom
//! surface, zero dose outside the body), then normalizes the field to the
//! configured peak. Fields are independent; there is no cross-beam
//! accumulation.
use glam::DVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::beam::Particle;
use crate::dosefield::grid::DoseGrid;
use crate::dosefield::phantom::{Phantom, TissueMasks};
use crate::dosefield::raster::DoseRaster;
use crate::error::{Error, Result};
use crate::synth::events::{EventSink, SynthEvent};
use crate::synth::plan::Plan;
use crate::synth::{Beam, BeamId};

/// Configuration for a synthesis run.
#[non_exhaustive]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone)]
pub struct SynthConfig {
    /// Size of the evaluated domain in cm.
    pub extent: DVec2,
    /// World-space center of the evaluated domain.
    pub center: DVec2,
    /// Grid cell size in cm.
    pub cell_size: f64,
    /// Target maximum of each normalized field.
    pub peak_dose: f64,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            extent: DVec2::new(0.0, 0.0),
            center: DVec2::ZERO,
            cell_size: 0.1,
            peak_dose: 100.0,
        }
    }
}

impl SynthConfig {
    /// Creates a new [`SynthConfig`] with the specified domain extent.
    pub fn new(extent: DVec2) -> Self {
        Self {
            extent,
            ..Default::default()
        }
    }

    /// Sets the domain center in world coordinates.
    pub fn with_center(mut self, center: DVec2) -> Self {
        self.center = center;
        self
    }

    /// Sets the grid cell size.
    pub fn with_cell_size(mut self, cell_size: f64) -> Self {
        self.cell_size = cell_size;
        self
    }

    /// Sets the normalization peak.
    pub fn with_peak_dose(mut self, peak_dose: f64) -> Self {
        self.peak_dose = peak_dose;
        self
    }

    /// Validates the configuration, returning an error if invalid.
    pub fn validate(&self) -> Result<()> {
        if self.extent.x <= 0.0 || self.extent.y <= 0.0 {
            return Err(Error::InvalidConfig(
                "extent must be > 0 in both components".into(),
            ));
        }
        if self.cell_size <= 0.0 {
            return Err(Error::InvalidConfig("cell_size must be > 0".into()));
        }
        if self.peak_dose <= 0.0 {
            return Err(Error::InvalidConfig("peak_dose must be > 0".into()));
        }

        Ok(())
    }

    /// The evaluation grid covering the configured domain.
    pub fn grid(&self) -> DoseGrid {
        DoseGrid::from_extent(self.extent, self.center, self.cell_size)
    }
}

/// A synthesized, normalized dose field for one beam.
#[derive(Clone, Debug)]
pub struct DoseField {
    /// Id of the beam that produced this field.
    pub beam_id: BeamId,
    /// Particle species of the beam.
    pub particle: Particle,
    /// Peak of the raw field before normalization.
    pub peak_raw: f64,
    /// The normalized dose raster.
    pub raster: DoseRaster,
}

/// Result of synthesizing a plan.
#[non_exhaustive]
#[derive(Clone, Debug)]
pub struct SynthResult {
    /// One field per beam, in plan order.
    pub fields: Vec<DoseField>,
    /// Tissue masks derived once for the run's grid.
    pub masks: TissueMasks,
    /// Total grid cells evaluated across all beams.
    pub cells_evaluated: usize,
}

impl SynthResult {
    /// Finds a synthesized field by beam id.
    pub fn field(&self, id: &str) -> Option<&DoseField> {
        self.fields.iter().find(|f| f.beam_id == id)
    }
}

/// Runner that synthesizes dose fields for plans over a fixed phantom.
pub struct DoseSynthesizer<'a> {
    /// Run configuration applied to this synthesizer.
    pub config: SynthConfig,
    /// Phantom anatomy evaluated against.
    pub phantom: &'a Phantom,
}

impl<'a> DoseSynthesizer<'a> {
    /// Creates a synthesizer after validating the configuration.
    pub fn try_new(config: SynthConfig, phantom: &'a Phantom) -> Result<Self> {
        config.validate()?;
        Ok(Self { config, phantom })
    }

    /// Runs the given plan, returning the result.
    pub fn run(&self, plan: &Plan) -> SynthResult {
        run_plan(plan, &self.config, self.phantom, None)
    }

    /// Runs the given plan, forwarding progress events to `sink`.
    pub fn run_with_events(&self, plan: &Plan, sink: &mut dyn EventSink) -> SynthResult {
        run_plan(plan, &self.config, self.phantom, Some(sink))
    }
}

/// Runs a plan with an optional event sink.
pub fn run_plan(
    plan: &Plan,
    config: &SynthConfig,
    phantom: &Phantom,
    sink: Option<&mut dyn EventSink>,
) -> SynthResult {
    if let Some(s) = sink {
        run_plan_with_events(plan, config, phantom, s)
    } else {
        run_plan_with_events(plan, config, phantom, &mut ())
    }
}

/// Runs a plan, emitting events for every stage.
pub fn run_plan_with_events(
    plan: &Plan,
    config: &SynthConfig,
    phantom: &Phantom,
    sink: &mut dyn EventSink,
) -> SynthResult {
    sink.send(SynthEvent::RunStarted {
        config: config.clone(),
        beam_count: plan.beams.len(),
    });

    if plan.beams.is_empty() {
        warn!("Synthesis plan has no beams.");
        sink.send(SynthEvent::Warning {
            context: "plan".into(),
            message: "Synthesis plan has no beams".into(),
        });
    }

    let grid = config.grid();
    let masks = phantom.masks(&grid);

    let mut fields = Vec::with_capacity(plan.beams.len());
    let mut cells_evaluated = 0;

    for (index, beam) in plan.beams.iter().enumerate() {
        info!(
            "Beam {}: '{}' | particle: {}.",
            index,
            beam.id,
            beam.particle.as_str()
        );
        sink.send(SynthEvent::BeamStarted {
            index,
            id: beam.id.clone(),
            particle: beam.particle,
        });

        let field = synthesize_field(beam, &grid, phantom, config.peak_dose, index, sink);
        cells_evaluated += grid.cell_count();
        fields.push(field);
    }

    let result = SynthResult {
        fields,
        masks,
        cells_evaluated,
    };

    sink.send(SynthEvent::RunFinished {
        field_count: result.fields.len(),
        cells_evaluated,
    });

    result
}

fn synthesize_field(
    beam: &Beam,
    grid: &DoseGrid,
    phantom: &Phantom,
    peak_dose: f64,
    index: usize,
    sink: &mut dyn EventSink,
) -> DoseField {
    let mut raster = DoseRaster::new(grid.clone());

    for iy in 0..grid.height as isize {
        for ix in 0..grid.width as isize {
            let p = grid.index_to_world(ix, iy);
            // Dose is deposited only inside the body disc.
            let dose = match (phantom.classify(p), phantom.depth_along(p, beam.direction)) {
                (Some(_), Some(depth)) => beam.model.dose(depth),
                _ => 0.0,
            };
            raster.set(ix, iy, dose);
        }
    }

    let peak_raw = raster.max();
    let normalized = raster.normalize_to(peak_dose);
    if !normalized {
        warn!(
            "Field for beam '{}' is all zero; skipping normalization.",
            beam.id
        );
        sink.send(SynthEvent::Warning {
            context: format!("beam:{}", beam.id),
            message: "Field is all zero; skipping normalization".into(),
        });
    }

    sink.send(SynthEvent::FieldSynthesized {
        index,
        id: beam.id.clone(),
        peak_raw,
        normalized,
    });

    DoseField {
        beam_id: beam.id.clone(),
        particle: beam.particle,
        peak_raw,
        raster,
    }
}

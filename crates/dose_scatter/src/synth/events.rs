//! Event types and sinks for observing synthesis runs.
//!
//! This module defines [`SynthEvent`] and a set of sinks to emit, collect, or
//! forward events while executing a [`crate::synth::plan::Plan`] via
//! [`crate::synth::runner::DoseSynthesizer`] or
//! [`crate::synth::runner::run_plan`].
use crate::beam::Particle;
use crate::synth::runner::SynthConfig;
use crate::synth::BeamId;

/// Describes events emitted by synthesis operations.
#[non_exhaustive]
#[derive(Debug, Clone)]
pub enum SynthEvent {
    /// Emitted when a run starts for a plan.
    RunStarted {
        /// The run configuration used.
        config: SynthConfig,
        /// Number of beams in the plan.
        beam_count: usize,
    },

    /// Emitted when a beam's field synthesis starts.
    BeamStarted {
        /// Index of the beam in the plan.
        index: usize,
        /// The beam id.
        id: BeamId,
        /// Particle species of the beam.
        particle: Particle,
    },

    /// Emitted after a beam's field has been evaluated and normalized.
    FieldSynthesized {
        /// Index of the beam in the plan.
        index: usize,
        /// The beam id.
        id: BeamId,
        /// Peak of the raw field before normalization.
        peak_raw: f64,
        /// Whether normalization was applied (false for all-zero fields).
        normalized: bool,
    },

    /// Non-fatal warning generated during synthesis.
    Warning {
        /// Context string (e.g. beam id).
        context: String,
        /// Human-readable message.
        message: String,
    },

    /// Emitted when the entire plan finishes.
    RunFinished {
        /// Number of fields produced.
        field_count: usize,
        /// Total grid cells evaluated across all beams.
        cells_evaluated: usize,
    },
}

/// A generic event sink that accepts [`SynthEvent`]s.
pub trait EventSink {
    fn send(&mut self, event: SynthEvent);
}

/// A no-op event sink.
impl EventSink for () {
    #[inline]
    fn send(&mut self, _event: SynthEvent) {}
}

/// An event sink that forwards to a user-provided closure.
pub struct FnSink<F>
where
    F: FnMut(SynthEvent),
{
    f: F,
}

impl<F> FnSink<F>
where
    F: FnMut(SynthEvent),
{
    pub fn new(f: F) -> Self {
        Self { f }
    }
}

impl<F> EventSink for FnSink<F>
where
    F: FnMut(SynthEvent),
{
    #[inline]
    fn send(&mut self, event: SynthEvent) {
        (self.f)(event);
    }
}

/// An event sink that collects all events in a `Vec`.
#[derive(Default)]
pub struct VecSink {
    events: Vec<SynthEvent>,
}

impl VecSink {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    pub fn into_inner(self) -> Vec<SynthEvent> {
        self.events
    }

    pub fn as_slice(&self) -> &[SynthEvent] {
        &self.events
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

impl EventSink for VecSink {
    #[inline]
    fn send(&mut self, event: SynthEvent) {
        self.events.push(event);
    }
}

/// Fan-out sink that forwards each event to all contained sinks.
pub struct MultiSink<S: EventSink> {
    pub(crate) sinks: Vec<S>,
}

impl<S: EventSink> Default for MultiSink<S> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: EventSink> MultiSink<S> {
    pub fn new() -> Self {
        Self { sinks: Vec::new() }
    }

    pub fn with_sinks(sinks: Vec<S>) -> Self {
        Self { sinks }
    }

    pub fn push(&mut self, sink: S) {
        self.sinks.push(sink);
    }
}

impl<S: EventSink> EventSink for MultiSink<S> {
    fn send(&mut self, event: SynthEvent) {
        let Some(last_idx) = self.sinks.len().checked_sub(1) else {
            return;
        };
        for i in 0..last_idx {
            self.sinks[i].send(event.clone());
        }
        self.sinks[last_idx].send(event);
    }
}

//! Per-tick diagnostics reported alongside the compact estimate.
//!
//! `TickReport` is the full product of one tick: the estimate handed to the
//! publisher, the rendered ring frame, and a trace describing what the
//! pipeline saw and decided. Everything serializes for offline inspection.

use serde::{Deserialize, Serialize};

use crate::render::LedFrame;
use crate::types::{DirectionEstimate, LedSample};

/// Timing entry for a single stage of the tick pipeline.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StageTiming {
    pub label: String,
    pub elapsed_ms: f64,
}

impl StageTiming {
    pub fn new(label: impl Into<String>, elapsed_ms: f64) -> Self {
        Self {
            label: label.into(),
            elapsed_ms,
        }
    }
}

/// Aggregated timing trace for one tick.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimingBreakdown {
    pub total_ms: f64,
    pub stages: Vec<StageTiming>,
}

impl TimingBreakdown {
    pub fn with_total(total_ms: f64) -> Self {
        Self {
            total_ms,
            stages: Vec::new(),
        }
    }

    pub fn push(&mut self, label: impl Into<String>, elapsed_ms: f64) {
        self.stages.push(StageTiming::new(label, elapsed_ms));
    }
}

/// One accumulated event as seen by the tick pipeline.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EventSample {
    pub azimuth_deg: f32,
    pub bin: usize,
    pub energy: f32,
}

/// Full trace of one tick: inputs, per-LED view, candidate set and the
/// histogram snapshot after accumulation.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickTrace {
    pub timings: TimingBreakdown,
    pub events: Vec<EventSample>,
    pub leds: Vec<LedSample>,
    /// Candidate azimuths sorted ascending, as fed to the circular median.
    pub candidates: Vec<i32>,
    pub histogram: Vec<i32>,
}

/// Compact estimate plus the rendered frame and the full trace.
#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TickReport {
    pub estimate: DirectionEstimate,
    pub frame: LedFrame,
    pub trace: TickTrace,
}

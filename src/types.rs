use nalgebra::Vector3;
use serde::Serialize;

/// One localized sound source reported by the upstream localizer.
///
/// Events are ephemeral: each one is folded into the histogram exactly once
/// and then discarded. The z component is carried for completeness but the
/// azimuth mapping only uses x and y.
#[derive(Clone, Copy, Debug)]
pub struct SoundEvent {
    pub direction: Vector3<f32>,
    /// Non-negative energy magnitude.
    pub energy: f32,
    /// Source frame index assigned by the localizer.
    pub timestamp: u32,
}

/// Per-tick output: the dominant azimuth, if any, and the frame index of the
/// most recently observed event.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct DirectionEstimate {
    /// Dominant azimuth in degrees, `None` when no LED clears the threshold.
    pub azimuth_deg: Option<i32>,
    pub frame_index: u32,
}

/// Per-LED snapshot taken once per tick; input to the estimator and part of
/// the diagnostics trace.
#[derive(Clone, Copy, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LedSample {
    pub index: usize,
    /// Azimuth of this LED on the ring, from the active layout table.
    pub angle_deg: i32,
    /// Histogram bin the LED reads from.
    pub bin: usize,
    /// Rescaled intensity in display units (0..=max_brightness).
    pub intensity: i32,
    /// Whether the intensity clears the estimator threshold.
    pub candidate: bool,
}

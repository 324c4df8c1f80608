//! Parameter types configuring the tracker.
//!
//! The defaults are the reference configuration: 36 bins, an energy cap of
//! 200, and the display/threshold scaling tuned for the ring hardware. All
//! values are immutable for the process lifetime once the tracker is built.

use crate::layout::LayoutKind;

/// Tracker-wide parameters controlling the per-tick pipeline.
#[derive(Clone, Debug)]
pub struct TrackerParams {
    /// Number of azimuth sectors in the energy histogram (>= 1).
    pub bin_count: usize,
    /// Upper bound on per-bin energy; controls smoothness.
    pub max_energy: i32,
    /// Energy added per unit of event energy; controls sensitivity.
    pub increment: i32,
    /// Per-tick energy loss; controls how slowly the ring dims.
    pub decrement: i32,
    /// Intensity floor below which an LED neither lights nor votes.
    pub min_threshold: i32,
    /// Display intensity of a saturated bin.
    pub max_brightness: i32,
    /// Active ring hardware variant.
    pub layout: LayoutKind,
}

impl Default for TrackerParams {
    fn default() -> Self {
        Self {
            bin_count: 36,
            max_energy: 200,
            increment: 20,
            decrement: 1,
            min_threshold: 10,
            max_brightness: 50,
            layout: LayoutKind::default(),
        }
    }
}

#![doc = include_str!("../README.md")]

// Public modules (stable-ish surface)
pub mod config;
pub mod diagnostics;
pub mod tracker;
pub mod types;
pub mod wire;

// Lower-level building blocks – public for tools and tests.
pub mod angle;
pub mod estimator;
pub mod histogram;
pub mod layout;
pub mod render;

// --- High-level re-exports -------------------------------------------------

// Main entry points: tracker + results.
pub use crate::tracker::{DoaTracker, TrackerParams};
pub use crate::types::{DirectionEstimate, SoundEvent};

// Per-tick diagnostics returned by the tracker.
pub use crate::diagnostics::{TickReport, TickTrace};

// --- Prelude ---------------------------------------------------------------

/// Small prelude for quick experiments.
///
/// ```no_run
/// use doa_tracker::prelude::*;
/// use nalgebra::Vector3;
///
/// # fn main() {
/// let mut tracker = DoaTracker::new(TrackerParams::default());
/// let events = [SoundEvent {
///     direction: Vector3::new(0.0, 1.0, 0.0),
///     energy: 5.0,
///     timestamp: 1,
/// }];
/// let estimate = tracker.process(&events);
/// println!("azimuth={:?}", estimate.azimuth_deg);
/// # }
/// ```
pub mod prelude {
    pub use crate::layout::LayoutKind;
    pub use crate::{DirectionEstimate, DoaTracker, SoundEvent, TickReport, TrackerParams};
}

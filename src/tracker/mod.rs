//! Tick orchestration for the direction tracker.
//!
//! Overview
//! - Every inbound frame triggers one tick: the histogram decays once, the
//!   frame's events accumulate into their azimuth bins, the per-LED
//!   intensity field is recomputed, and the estimator collapses it into a
//!   single dominant azimuth (or none).
//! - Ticks are strictly sequential; the tracker is the unit of mutual
//!   exclusion if ingestion is ever parallelized.
//!
//! Modules
//! - [`params`] – configuration knobs with the reference defaults.
//! - `pipeline` – the [`DoaTracker`] implementation.

pub mod params;
mod pipeline;

pub use params::TrackerParams;
pub use pipeline::DoaTracker;

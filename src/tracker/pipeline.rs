//! Tick pipeline driving the tracker end-to-end.
//!
//! The [`DoaTracker`] exposes a simple API: feed the events of one frame and
//! get back the dominant azimuth for that tick, optionally with a full
//! diagnostics report. Internally it owns the energy histogram (no global
//! state), the active ring layout, and the estimator.
//!
//! Typical usage:
//! ```no_run
//! use doa_tracker::{DoaTracker, TrackerParams};
//!
//! # fn example(events: &[doa_tracker::SoundEvent]) {
//! let mut tracker = DoaTracker::new(TrackerParams::default());
//! let estimate = tracker.process(events);
//! if let Some(azimuth) = estimate.azimuth_deg {
//!     println!("dominant azimuth: {azimuth}°");
//! }
//! # }
//! ```

use std::time::Instant;

use log::debug;

use super::params::TrackerParams;
use crate::angle::{azimuth_to_bin, vector_azimuth};
use crate::diagnostics::{EventSample, TickReport, TickTrace, TimingBreakdown};
use crate::estimator::DirectionEstimator;
use crate::histogram::EnergyHistogram;
use crate::layout::LedLayout;
use crate::render::{led_intensity, render_frame};
use crate::types::{DirectionEstimate, LedSample, SoundEvent};

/// Direction-of-arrival tracker orchestrating decay, accumulation, ring
/// rendering and the circular-median estimate, one tick at a time.
pub struct DoaTracker {
    params: TrackerParams,
    layout: LedLayout,
    histogram: EnergyHistogram,
    estimator: DirectionEstimator,
    last_frame_index: u32,
}

impl DoaTracker {
    /// Create a tracker with the supplied parameters.
    pub fn new(params: TrackerParams) -> Self {
        let layout = LedLayout::new(params.layout);
        let histogram = EnergyHistogram::new(
            params.bin_count,
            params.max_energy,
            params.increment,
            params.decrement,
        );
        let estimator = DirectionEstimator::new(params.min_threshold);
        Self {
            params,
            layout,
            histogram,
            estimator,
            last_frame_index: 0,
        }
    }

    pub fn params(&self) -> &TrackerParams {
        &self.params
    }

    pub fn layout(&self) -> &LedLayout {
        &self.layout
    }

    /// Read-only view of the histogram, for tools and tests.
    pub fn histogram(&self) -> &EnergyHistogram {
        &self.histogram
    }

    /// Run one tick, returning the compact estimate.
    pub fn process(&mut self, events: &[SoundEvent]) -> DirectionEstimate {
        self.process_with_diagnostics(events).estimate
    }

    /// Run one tick and return the estimate together with the rendered
    /// frame and a detailed trace.
    ///
    /// A tick with zero events still decays the histogram and re-runs the
    /// estimator, so the indicator fades toward silence on its own.
    pub fn process_with_diagnostics(&mut self, events: &[SoundEvent]) -> TickReport {
        debug!("DoaTracker::process start events={}", events.len());
        let total_start = Instant::now();

        let decay_start = Instant::now();
        self.histogram.decay();
        let decay_ms = decay_start.elapsed().as_secs_f64() * 1000.0;

        let accumulate_start = Instant::now();
        let mut event_samples = Vec::with_capacity(events.len());
        for event in events {
            let azimuth = vector_azimuth(event.direction.x, event.direction.y);
            let bin = azimuth_to_bin(azimuth, self.histogram.len());
            self.histogram.accumulate(bin, event.energy);
            self.last_frame_index = event.timestamp;
            event_samples.push(EventSample {
                azimuth_deg: azimuth,
                bin,
                energy: event.energy,
            });
        }
        let accumulate_ms = accumulate_start.elapsed().as_secs_f64() * 1000.0;

        let render_start = Instant::now();
        let mut leds = Vec::with_capacity(self.layout.led_count());
        for (index, &angle_deg) in self.layout.angles().iter().enumerate() {
            let bin = azimuth_to_bin(angle_deg as f32, self.histogram.len());
            let intensity = led_intensity(&self.histogram, bin, self.params.max_brightness);
            leds.push(LedSample {
                index,
                angle_deg,
                bin,
                intensity,
                candidate: self.estimator.is_candidate(intensity),
            });
        }
        let frame = render_frame(&leds);
        let render_ms = render_start.elapsed().as_secs_f64() * 1000.0;

        let estimate_start = Instant::now();
        let candidates = self.estimator.candidates(&leds);
        let azimuth_deg = self.estimator.estimate(&leds);
        let estimate_ms = estimate_start.elapsed().as_secs_f64() * 1000.0;

        let estimate = DirectionEstimate {
            azimuth_deg,
            frame_index: self.last_frame_index,
        };

        let total_ms = total_start.elapsed().as_secs_f64() * 1000.0;
        debug!(
            "DoaTracker::process done azimuth={:?} candidates={} frame_index={} latency_ms={:.3}",
            azimuth_deg,
            candidates.len(),
            estimate.frame_index,
            total_ms
        );

        let mut timings = TimingBreakdown::with_total(total_ms);
        timings.push("decay", decay_ms);
        timings.push("accumulate", accumulate_ms);
        timings.push("render", render_ms);
        timings.push("estimate", estimate_ms);

        TickReport {
            estimate,
            frame,
            trace: TickTrace {
                timings,
                events: event_samples,
                leds,
                candidates,
                histogram: self.histogram.bins().to_vec(),
            },
        }
    }
}

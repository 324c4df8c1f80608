//! Ring display output derived from the histogram.
//!
//! The display contract is narrow: one colour channel per LED, driven by
//! the rescaled bin energy, with sub-threshold intensities forced to zero.

use serde::Serialize;

use crate::histogram::EnergyHistogram;
use crate::types::LedSample;

/// RGBW channel values for one ring LED.
#[derive(Clone, Copy, Debug, Default, Serialize)]
pub struct LedColor {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
    pub white: u8,
}

/// One rendered ring frame; the energy drives the blue channel.
#[derive(Clone, Debug, Serialize)]
pub struct LedFrame {
    pub leds: Vec<LedColor>,
}

impl LedFrame {
    /// All-channels-off frame used to clear the ring on startup/shutdown.
    pub fn off(led_count: usize) -> Self {
        LedFrame {
            leds: vec![LedColor::default(); led_count],
        }
    }
}

/// Rescales one bin's energy into display/threshold units:
/// `level * max_brightness / max_energy`, integer arithmetic.
#[inline]
pub fn led_intensity(histogram: &EnergyHistogram, bin: usize, max_brightness: i32) -> i32 {
    histogram.level(bin) * max_brightness / histogram.max_energy()
}

/// Builds the ring frame from the per-LED samples. Non-candidates render
/// dark even though their raw intensity may be non-zero.
pub fn render_frame(samples: &[LedSample]) -> LedFrame {
    let leds = samples
        .iter()
        .map(|sample| {
            let blue = if sample.candidate {
                sample.intensity.clamp(0, u8::MAX as i32) as u8
            } else {
                0
            };
            LedColor {
                blue,
                ..LedColor::default()
            }
        })
        .collect();
    LedFrame { leds }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn intensity_rescales_linearly() {
        let mut hist = EnergyHistogram::new(36, 200, 20, 1);
        hist.accumulate(0, 5.0);
        assert_eq!(led_intensity(&hist, 0, 50), 25);
        assert_eq!(led_intensity(&hist, 1, 50), 0);
        hist.accumulate(0, 100.0);
        assert_eq!(led_intensity(&hist, 0, 50), 50);
    }

    #[test]
    fn sub_threshold_leds_render_dark() {
        let samples = [
            LedSample {
                index: 0,
                angle_deg: 10,
                bin: 1,
                intensity: 25,
                candidate: true,
            },
            LedSample {
                index: 1,
                angle_deg: 30,
                bin: 3,
                intensity: 9,
                candidate: false,
            },
        ];
        let frame = render_frame(&samples);
        assert_eq!(frame.leds[0].blue, 25);
        assert_eq!(frame.leds[1].blue, 0);
        assert_eq!(frame.leds[0].red, 0);
    }

    #[test]
    fn off_frame_is_all_zero() {
        let frame = LedFrame::off(18);
        assert_eq!(frame.leds.len(), 18);
        assert!(frame.leds.iter().all(|led| led.blue == 0 && led.white == 0));
    }
}

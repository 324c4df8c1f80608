//! Dominant-direction estimation from thresholded LED intensities.

use crate::types::LedSample;

// Even-count medians whose middle pair falls inside this 60-degree window
// straddling 0°/360° are treated as seam-adjacent. The window is fixed and
// independent of the histogram bin count.
const SEAM_UPPER_DEG: i32 = 330;
const SEAM_LOWER_DEG: i32 = 30;

/// Collapses the per-LED intensity field into a single dominant azimuth.
#[derive(Clone, Copy, Debug)]
pub struct DirectionEstimator {
    min_threshold: i32,
}

impl DirectionEstimator {
    pub fn new(min_threshold: i32) -> Self {
        DirectionEstimator { min_threshold }
    }

    /// Whether an intensity is loud enough to vote (and to light its LED).
    #[inline]
    pub fn is_candidate(&self, intensity: i32) -> bool {
        intensity >= self.min_threshold
    }

    /// Returns the circular median of the candidate azimuths, or `None`
    /// when every LED is below the threshold.
    pub fn estimate(&self, leds: &[LedSample]) -> Option<i32> {
        let candidates = self.candidates(leds);
        if candidates.is_empty() {
            None
        } else {
            Some(circular_median(&candidates))
        }
    }

    /// Candidate azimuths sorted ascending.
    pub fn candidates(&self, leds: &[LedSample]) -> Vec<i32> {
        let mut angles: Vec<i32> = leds
            .iter()
            .filter(|sample| self.is_candidate(sample.intensity))
            .map(|sample| sample.angle_deg)
            .collect();
        angles.sort_unstable();
        angles
    }
}

/// Median over azimuths in degrees; `angles` must be sorted ascending and
/// non-empty.
///
/// For even counts the middle pair is averaged with integer division (bin
/// granularity is already coarse). A pair that straddles the 0°/360° seam
/// returns the upper element unchanged instead, since averaging across the
/// seam would point near 180°.
pub fn circular_median(angles: &[i32]) -> i32 {
    let n = angles.len();
    debug_assert!(n > 0, "median of empty candidate set");
    if n % 2 == 1 {
        return angles[n / 2];
    }
    let lower = angles[n / 2 - 1];
    let upper = angles[n / 2];
    if (SEAM_UPPER_DEG..360).contains(&upper) && (0..=SEAM_LOWER_DEG).contains(&lower) {
        upper
    } else {
        (lower + upper) / 2
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(angle_deg: i32, intensity: i32) -> LedSample {
        LedSample {
            index: 0,
            angle_deg,
            bin: 0,
            intensity,
            candidate: intensity >= 10,
        }
    }

    #[test]
    fn odd_count_takes_middle_element() {
        assert_eq!(circular_median(&[40, 90, 170]), 90);
        assert_eq!(circular_median(&[90]), 90);
    }

    #[test]
    fn even_count_averages_away_from_seam() {
        assert_eq!(circular_median(&[40, 90]), 65);
        assert_eq!(circular_median(&[100, 120, 140, 160]), 130);
    }

    #[test]
    fn even_count_keeps_upper_angle_across_seam() {
        assert_eq!(circular_median(&[10, 350]), 350);
        assert_eq!(circular_median(&[30, 330]), 330);
        assert_eq!(circular_median(&[0, 359]), 359);
    }

    #[test]
    fn seam_window_bounds_are_exclusive_outside() {
        // 31 is past the lower window, 329 short of the upper one.
        assert_eq!(circular_median(&[31, 350]), 190);
        assert_eq!(circular_median(&[10, 329]), 169);
    }

    #[test]
    fn estimate_filters_by_threshold() {
        let est = DirectionEstimator::new(10);
        let leds = [sample(40, 25), sample(90, 25), sample(170, 9)];
        assert_eq!(est.estimate(&leds), Some(65));
    }

    #[test]
    fn estimate_is_none_when_field_is_silent() {
        let est = DirectionEstimator::new(10);
        let leds = [sample(40, 3), sample(90, 9)];
        assert_eq!(est.estimate(&leds), None);
        assert_eq!(est.estimate(&[]), None);
    }

    #[test]
    fn candidates_are_sorted_ascending() {
        let est = DirectionEstimator::new(10);
        let leds = [sample(350, 25), sample(10, 25), sample(170, 25)];
        assert_eq!(est.candidates(&leds), vec![10, 170, 350]);
    }
}

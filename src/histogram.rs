//! Circular energy histogram over the full azimuth range.

/// Fixed-size circular histogram of acoustic energy indexed by azimuth bin.
///
/// The decay-then-accumulate cycle approximates a leaky integrator without
/// floating-point decay constants: energy rises fast on bursts and bleeds
/// off one decrement per tick. Every bin stays within `[0, max_energy]`.
pub struct EnergyHistogram {
    bins: Vec<i32>,
    max_energy: i32,
    increment: i32,
    decrement: i32,
}

impl EnergyHistogram {
    pub fn new(num_bins: usize, max_energy: i32, increment: i32, decrement: i32) -> Self {
        assert!(num_bins > 0, "energy histogram requires at least one bin");
        assert!(max_energy > 0, "energy cap must be positive");
        EnergyHistogram {
            bins: vec![0; num_bins],
            max_energy,
            increment,
            decrement,
        }
    }

    pub fn len(&self) -> usize {
        self.bins.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bins.is_empty()
    }

    pub fn bins(&self) -> &[i32] {
        &self.bins
    }

    pub fn level(&self, bin: usize) -> i32 {
        self.bins[bin]
    }

    pub fn max_energy(&self) -> i32 {
        self.max_energy
    }

    /// Per-tick dissipation: every non-empty bin loses the decrement,
    /// flooring at zero. Called exactly once per tick, before accumulation.
    pub fn decay(&mut self) {
        for level in &mut self.bins {
            if *level > 0 {
                *level = (*level - self.decrement).max(0);
            }
        }
    }

    /// Adds `increment * energy` (truncated) to `bin`, clamped to the cap.
    ///
    /// Panics if `bin` is out of range; that indicates a mapping bug
    /// upstream, not a recoverable condition.
    pub fn accumulate(&mut self, bin: usize, energy: f32) {
        assert!(
            bin < self.bins.len(),
            "bin {bin} out of range for {}-bin histogram",
            self.bins.len()
        );
        let added = (self.increment as f32 * energy.max(0.0)) as i32;
        self.bins[bin] = self.bins[bin].saturating_add(added).min(self.max_energy);
    }
}

#[cfg(test)]
mod tests {
    use super::EnergyHistogram;

    fn reference() -> EnergyHistogram {
        EnergyHistogram::new(36, 200, 20, 1)
    }

    #[test]
    fn accumulate_scales_and_clamps() {
        let mut hist = reference();
        hist.accumulate(0, 5.0);
        assert_eq!(hist.level(0), 100);
        hist.accumulate(0, 5.0);
        assert_eq!(hist.level(0), 200);
        hist.accumulate(0, 100.0);
        assert_eq!(hist.level(0), 200);
    }

    #[test]
    fn bounds_hold_under_arbitrary_sequences() {
        let mut hist = reference();
        for step in 0..500 {
            let bin = (step * 7) % 36;
            hist.accumulate(bin, (step % 11) as f32);
            if step % 3 == 0 {
                hist.decay();
            }
            for &level in hist.bins() {
                assert!((0..=200).contains(&level), "level={}", level);
            }
        }
    }

    #[test]
    fn decay_drives_bins_to_zero_and_keeps_them_there() {
        let mut hist = reference();
        hist.accumulate(5, 5.0);
        for _ in 0..300 {
            hist.decay();
        }
        assert!(hist.bins().iter().all(|&level| level == 0));
        hist.decay();
        assert!(hist.bins().iter().all(|&level| level == 0));
    }

    #[test]
    fn decay_on_empty_histogram_is_a_no_op() {
        let mut hist = reference();
        hist.decay();
        assert!(hist.bins().iter().all(|&level| level == 0));
    }

    #[test]
    fn extreme_event_energy_clamps_to_cap() {
        let mut hist = reference();
        hist.accumulate(0, 5.0);
        // The f32 product saturates the i32 cast; the bin must still land
        // on the cap rather than wrap.
        hist.accumulate(0, 2.0e8);
        assert_eq!(hist.level(0), 200);
        hist.accumulate(1, f32::MAX);
        assert_eq!(hist.level(1), 200);
    }

    #[test]
    fn negative_event_energy_adds_nothing() {
        let mut hist = reference();
        hist.accumulate(3, -4.0);
        assert_eq!(hist.level(3), 0);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn accumulate_rejects_out_of_range_bin() {
        let mut hist = reference();
        hist.accumulate(36, 1.0);
    }
}

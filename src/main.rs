use doa_tracker::{DoaTracker, SoundEvent, TrackerParams};
use nalgebra::Vector3;

fn main() {
    // Demo stub: one synthetic tick with a loud source at 90 degrees
    let mut tracker = DoaTracker::new(TrackerParams::default());
    let events = [SoundEvent {
        direction: Vector3::new(0.0, 1.0, 0.0),
        energy: 5.0,
        timestamp: 1,
    }];
    let estimate = tracker.process(&events);
    println!(
        "azimuth={:?} frame_index={}",
        estimate.azimuth_deg, estimate.frame_index
    );
}

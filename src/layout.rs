//! LED ring layouts for the two supported hardware variants.
//!
//! Each variant is a fixed LED-index → azimuth table measured on the
//! physical ring. The variant is chosen once at startup and never changes.

use serde::Deserialize;

const CREATOR_ANGLES: [i32; 35] = [
    170, 159, 149, 139, 129, 118, 108, 98, 87, 77, 67, 57, 46, 36, 26, 15, 5, 355, 345, 334, 324,
    314, 303, 293, 283, 273, 262, 252, 242, 231, 221, 211, 201, 190, 180,
];

const VOICE_ANGLES: [i32; 18] = [
    170, 150, 130, 110, 90, 70, 50, 30, 10, 350, 330, 310, 290, 270, 250, 230, 210, 190,
];

/// Hardware variant tag, selectable from configuration.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LayoutKind {
    /// MATRIX Creator ring, 35 LEDs.
    Creator,
    /// MATRIX Voice ring, 18 LEDs.
    #[default]
    Voice,
}

/// Immutable LED-index → azimuth table for the active ring.
#[derive(Clone, Copy, Debug)]
pub struct LedLayout {
    kind: LayoutKind,
    angles: &'static [i32],
}

impl LedLayout {
    pub fn new(kind: LayoutKind) -> Self {
        let angles: &'static [i32] = match kind {
            LayoutKind::Creator => &CREATOR_ANGLES,
            LayoutKind::Voice => &VOICE_ANGLES,
        };
        LedLayout { kind, angles }
    }

    pub fn kind(&self) -> LayoutKind {
        self.kind
    }

    pub fn led_count(&self) -> usize {
        self.angles.len()
    }

    /// Azimuth table in LED index order.
    pub fn angles(&self) -> &'static [i32] {
        self.angles
    }

    pub fn angle_of(&self, led_index: usize) -> i32 {
        self.angles[led_index]
    }
}

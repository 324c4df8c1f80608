//! Wire-format boundary: ODAS frame decoding and estimate encoding.
//!
//! The localizer delivers SSL frames as JSON objects,
//! `{"timeStamp": <int>, "src": [{"x", "y", "z", "E"}, ...]}`. Decoding is
//! a typed serde model; anything the model rejects never reaches the core,
//! so the tracker only ever sees well-formed [`SoundEvent`]s. The outbound
//! side mirrors the published message shape, with the "no direction"
//! sentinel encoded as `angle: -1`.

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::{DirectionEstimate, SoundEvent};

/// Topic the estimate stream is published under.
pub const ESTIMATE_TOPIC: &str = "iot-2/evt/newAngle";

#[derive(Debug, Error)]
pub enum FrameError {
    #[error("invalid frame json: {0}")]
    Json(#[from] serde_json::Error),
    #[error("negative energy {energy} in source {index}")]
    NegativeEnergy { index: usize, energy: f32 },
}

/// One localized source inside an SSL frame.
#[derive(Clone, Copy, Debug, Deserialize)]
pub struct WireSource {
    pub x: f32,
    pub y: f32,
    #[serde(default)]
    pub z: f32,
    #[serde(rename = "E")]
    pub energy: f32,
}

/// One SSL frame as delivered by the localizer.
#[derive(Clone, Debug, Deserialize)]
pub struct WireFrame {
    #[serde(rename = "timeStamp")]
    pub time_stamp: u32,
    #[serde(default)]
    pub src: Vec<WireSource>,
}

impl WireFrame {
    /// Flattens the frame into core events, stamping each with the frame
    /// timestamp.
    pub fn events(&self) -> Vec<SoundEvent> {
        self.src
            .iter()
            .map(|source| SoundEvent {
                direction: Vector3::new(source.x, source.y, source.z),
                energy: source.energy,
                timestamp: self.time_stamp,
            })
            .collect()
    }
}

/// Decodes and validates one raw frame.
pub fn parse_frame(raw: &str) -> Result<WireFrame, FrameError> {
    let frame: WireFrame = serde_json::from_str(raw)?;
    for (index, source) in frame.src.iter().enumerate() {
        if source.energy < 0.0 {
            return Err(FrameError::NegativeEnergy {
                index,
                energy: source.energy,
            });
        }
    }
    Ok(frame)
}

/// Outbound estimate message; "none" is encoded as `angle: -1`.
#[derive(Clone, Copy, Debug, Serialize)]
pub struct EstimateMessage {
    pub angle: i32,
    /// Publisher wall-clock timestamp in microseconds.
    pub ts: u64,
    #[serde(rename = "frameIdx")]
    pub frame_idx: u32,
}

impl EstimateMessage {
    pub fn new(estimate: &DirectionEstimate, ts: u64) -> Self {
        Self {
            angle: estimate.azimuth_deg.unwrap_or(-1),
            ts,
            frame_idx: estimate.frame_index,
        }
    }
}

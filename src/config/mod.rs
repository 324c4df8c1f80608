//! Runtime configuration for the tracker demos.

pub mod tracker;

pub use tracker::{load_config, OutputConfig, RuntimeConfig, TrackerConfig};

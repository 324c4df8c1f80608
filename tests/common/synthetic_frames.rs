use doa_tracker::SoundEvent;
use nalgebra::Vector3;

/// Builds one event aimed at `azimuth_deg` with the given energy.
///
/// Prefer mid-bin azimuths (5° + k·10° on the reference histogram) so the
/// cos/sin round trip cannot land on a bin boundary.
pub fn event_at(azimuth_deg: f32, energy: f32, timestamp: u32) -> SoundEvent {
    let rad = azimuth_deg.to_radians();
    SoundEvent {
        direction: Vector3::new(rad.cos(), rad.sin(), 0.0),
        energy,
        timestamp,
    }
}

/// One SSL frame line as the wire listener would deliver it.
pub fn frame_json(timestamp: u32, sources: &[(f32, f32)]) -> String {
    let src: Vec<String> = sources
        .iter()
        .map(|&(azimuth_deg, energy)| {
            let rad = azimuth_deg.to_radians();
            format!(
                r#"{{"x": {}, "y": {}, "z": 0.0, "E": {}}}"#,
                rad.cos(),
                rad.sin(),
                energy
            )
        })
        .collect();
    format!(
        r#"{{"timeStamp": {}, "src": [{}]}}"#,
        timestamp,
        src.join(", ")
    )
}

use doa_tracker::config::load_config;
use doa_tracker::wire::{parse_frame, EstimateMessage, ESTIMATE_TOPIC};
use doa_tracker::{DoaTracker, TickReport};
use std::env;
use std::fs;
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let config_path = env::args()
        .nth(1)
        .ok_or_else(|| "usage: track_demo <config.json>".to_string())?;
    let config = load_config(Path::new(&config_path))?;

    let raw = fs::read_to_string(&config.input_path).map_err(|e| {
        format!(
            "Failed to read frame log {}: {e}",
            config.input_path.display()
        )
    })?;

    let mut tracker = DoaTracker::new(config.tracker.resolve());
    let mut reports: Vec<TickReport> = Vec::new();

    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        let frame = parse_frame(line).map_err(|e| format!("frame {}: {e}", line_no + 1))?;
        let report = tracker.process_with_diagnostics(&frame.events());
        print_tick_summary(line_no + 1, &report);
        reports.push(report);
    }

    if let Some(last) = reports.last() {
        let message = EstimateMessage::new(&last.estimate, wall_clock_micros());
        let json = serde_json::to_string(&message)
            .map_err(|e| format!("Failed to serialize estimate message: {e}"))?;
        println!("\nFinal publish payload on {ESTIMATE_TOPIC}:\n{json}");
    }

    if let Some(path) = &config.output.json_out {
        let json = serde_json::to_string_pretty(&reports)
            .map_err(|e| format!("Failed to serialize reports: {e}"))?;
        fs::write(path, json)
            .map_err(|e| format!("Failed to write {}: {e}", path.display()))?;
        println!("JSON reports written to {}", path.display());
    }

    Ok(())
}

fn print_tick_summary(tick: usize, report: &TickReport) {
    let angle = report
        .estimate
        .azimuth_deg
        .map(|a| format!("{a}°"))
        .unwrap_or_else(|| "none".to_string());
    println!(
        "tick {:>4}: events={} candidates={} angle={} frame_idx={} total_ms={:.3}",
        tick,
        report.trace.events.len(),
        report.trace.candidates.len(),
        angle,
        report.estimate.frame_index,
        report.trace.timings.total_ms
    );
}

fn wall_clock_micros() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_micros() as u64)
        .unwrap_or(0)
}

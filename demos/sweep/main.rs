//! Sweeps the entry offset across the drop and logs the exit angle,
//! the way a slider-driven scene would each frame.
//!
//! Run with `RUST_LOG=debug` to also see the tracer's own events.
//! An optional first argument is a path to a scene JSON file.

use droplet::operations::trace::SegmentKind;
use droplet::SceneConfig;
use tracing::info;
use tracing_subscriber::EnvFilter;

const STEPS: u32 = 20;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = match std::env::args().nth(1) {
        Some(path) => SceneConfig::from_json(&std::fs::read_to_string(path)?)?,
        None => SceneConfig::from_json(
            r#"{ "light": { "name": "green", "wavelength_nm": 530, "air_index": 1.0, "water_index": 1.333 } }"#,
        )?,
    };

    let outline = config.outline()?;
    info!(
        light = %config.light.name,
        vertices = outline.points.len(),
        "drop outline ready"
    );

    let mut best = (0.0, f64::NEG_INFINITY);
    for step in 0..=STEPS {
        let offset = config.radius * (2.0 * f64::from(step) / f64::from(STEPS) - 1.0);
        let result = config.trace_at(offset)?;
        let exits = result
            .segments
            .iter()
            .filter(|s| s.kind == SegmentKind::ExitRefraction)
            .count();
        info!(offset, exits, "{} degrees", result.rounded_exit_angle());
        if result.exit_angle_deg > best.1 {
            best = (offset, result.exit_angle_deg);
        }
    }

    info!(offset = best.0, angle = best.1, "widest exit angle");
    Ok(())
}

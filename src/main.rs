//! Replays a TOML pointer trace and logs every notification it produces.
//!
//! ```text
//! RUST_LOG=info pointer-gestures trace.toml [options.toml]
//! ```

use std::path::Path;

use pointer_gestures::input::PointerEvent;
use pointer_gestures::options::Options;
use pointer_gestures::replay::Trace;

fn main() {
    env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or("info"),
    )
    .init();

    let Some(trace_path) = std::env::args().nth(1) else {
        log::error!("Usage: pointer-gestures <trace.toml> [options.toml]");
        std::process::exit(1);
    };

    let mut trace = match Trace::load(Path::new(&trace_path)) {
        Ok(trace) => trace,
        Err(e) => {
            log::error!("{e}");
            std::process::exit(1);
        }
    };

    if let Some(options_path) = std::env::args().nth(2) {
        match Options::load(Path::new(&options_path)) {
            Ok(options) => {
                log::info!("Loaded options '{options_path}'");
                trace.options = options;
            }
            Err(e) => {
                log::error!("Failed to load options '{options_path}': {e}");
                std::process::exit(1);
            }
        }
    }

    log::info!(
        "Replaying {} frames over {} colliders",
        trace.frames.len(),
        trace.colliders.len()
    );

    for record in trace.run() {
        match record.event {
            PointerEvent::TargetEnter(target) => {
                log::info!("{:>8.3}s  enter  {}", record.time, target.name);
            }
            PointerEvent::TargetCleared => {
                log::info!("{:>8.3}s  enter  (nothing)", record.time);
            }
            PointerEvent::TargetLeave(target) => {
                log::info!("{:>8.3}s  leave  {}", record.time, target.name);
            }
            PointerEvent::Gesture(gesture) => {
                log::info!(
                    "{:>8.3}s  {:?} ({:?}) at ({:.1}, {:.1})",
                    record.time,
                    gesture.kind,
                    gesture.gesture.button,
                    gesture.position.x,
                    gesture.position.y
                );
            }
        }
    }
}

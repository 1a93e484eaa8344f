//! The full gallery: four bundled faces, swipe/arrow navigation, and a
//! greeting alert shortly after startup.
//!
//! ```sh
//! cargo run --example gallery
//! ```
//!
//! Navigate with arrow keys or by dragging the mouse sideways; `q` quits.

use std::thread;
use std::time::Duration;

use tick_tui::state::AlertOptions;
use tick_tui::types::Rgba;
use tick_tui::{Engine, EngineError, TerminalSession, faces, wall_clock_ms};

fn main() -> Result<(), EngineError> {
    // Logs go to stderr; the alternate screen hides them until exit.
    // RUST_LOG=tick_tui=debug shows navigation and lifecycle events.
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let (width, height) = TerminalSession::size()?;
    let mut engine = Engine::new(width, height);

    engine.register(Box::new(faces::DigitalFace::new()))?;
    engine.register(Box::new(faces::WordClockFace::new()))?;
    engine.register(Box::new(faces::MatrixRainFace::new()))?;
    engine.register(Box::new(faces::MinimalAnalogFace::new()))?;

    engine.start(wall_clock_ms())?;

    let handle = engine.handle();
    thread::spawn(move || {
        thread::sleep(Duration::from_millis(1500));
        handle.alert(
            "swipe to change faces",
            AlertOptions {
                duration_ms: 3000,
                color: Rgba::rgb(170, 170, 170),
            },
        );
    });

    engine.run()
}

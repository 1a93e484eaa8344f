//! A single face, full screen, picked by name.
//!
//! ```sh
//! cargo run --example single_face -- rain
//! ```
//!
//! Accepts `digital`, `words`, `rain`, or `analog` (default `digital`).

use tick_tui::{Engine, EngineError, Face, TerminalSession, faces, wall_clock_ms};

fn pick(name: &str) -> Box<dyn Face> {
    match name {
        "words" => Box::new(faces::WordClockFace::new()),
        "rain" => Box::new(faces::MatrixRainFace::new()),
        "analog" => Box::new(faces::MinimalAnalogFace::new()),
        _ => Box::new(faces::DigitalFace::new()),
    }
}

fn main() -> Result<(), EngineError> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let name = std::env::args().nth(1).unwrap_or_default();

    let (width, height) = TerminalSession::size()?;
    let mut engine = Engine::new(width, height);
    engine.register(pick(&name))?;
    engine.start(wall_clock_ms())?;
    engine.run()
}

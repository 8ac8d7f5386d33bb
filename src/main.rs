//! Squares Calculator - Binary Entry Point
//!
//! Runs the calculator self-test and prints the result envelope as JSON.
//!
//! ```text
//! squares-calculator [config.toml]
//! ```

use std::process::ExitCode;

use squares_calculator::{Calculator, GameConfig};

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> squares_calculator::Result<()> {
    let config = match std::env::args().nth(1) {
        Some(path) => GameConfig::load(path)?,
        None => GameConfig::default(),
    };
    config.logging.init();

    let calculator = Calculator::with_config(config);
    let health = calculator.health_check();

    println!("{}", serde_json::to_string_pretty(&health)?);
    health.into_result()?;
    Ok(())
}

//! `tms` — batch CLI for the simulation engine.
//!
//! Reads a JSON-encoded `SimulationInput` from the file named by the first
//! argument (or standard input when no argument is given), runs the
//! simulation, and writes the JSON-encoded `SimulationLog` to standard
//! output.  Errors go to standard error with exit code 1.

use std::io::Read;

use anyhow::{Context, Result};

fn main() {
    env_logger::init();
    if let Err(e) = run() {
        eprintln!("simulation error: {e:#}");
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let text = match std::env::args().nth(1) {
        Some(path) => {
            log::debug!("reading input from {path}");
            std::fs::read_to_string(&path).with_context(|| format!("reading {path}"))?
        }
        None => {
            log::debug!("reading input from stdin");
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading stdin")?;
            buf
        }
    };

    let output = tms_engine::run_json(&text)?;
    println!("{output}");
    Ok(())
}

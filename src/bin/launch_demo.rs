//! Launch sequence demo.
//!
//! Runs the facade through both construction paths and prints each transcript:
//! first with subsystems the caller hands over, then with facade-constructed
//! defaults. The two transcripts are identical; the subsystems carry no state.
//!
//! Log output goes to stderr and is off by default:
//!   RUST_LOG=launch_control=debug cargo run --bin launch_demo

use std::io::Write;

use anyhow::Result;
use launch_control::prelude::*;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut stdout = std::io::stdout().lock();

    // Scenario 1: the client already has the subsystems and hands them over.
    let facade = Facade::new(SubsystemA, SubsystemB);
    write!(stdout, "{}", facade.operation())?;

    writeln!(stdout)?;

    // Scenario 2: the facade constructs its own subsystems.
    let facade = Facade::builder().build();
    write!(stdout, "{}", facade.operation())?;

    Ok(())
}

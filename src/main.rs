// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::env;
use std::process;

use anyhow::Context;
use the_observer::config::{load_and_validate_config, Config, RuntimeBuilder};
use the_observer::observability::init_tracing;

fn main() {
    init_tracing();

    let args: Vec<String> = env::args().collect();

    if args.len() > 2 {
        eprintln!("Usage: {} [scenario.yaml|scenario.toml]", args[0]);
        eprintln!("Example: {} configs/demo.yaml", args[0]);
        process::exit(1);
    }

    if let Err(e) = run(args.get(1).map(String::as_str)) {
        eprintln!("Error: {:#}", e);
        process::exit(1);
    }
}

/// Run the scenario at `config_path`, or the built-in demonstration.
fn run(config_path: Option<&str>) -> anyhow::Result<()> {
    let config = match config_path {
        Some(path) => load_and_validate_config(path)
            .with_context(|| format!("Failed to load scenario '{}'", path))?,
        None => Config::default(),
    };

    let mut runtime = RuntimeBuilder::from_config(&config);
    runtime.run().context("Notification failed")?;

    Ok(())
}

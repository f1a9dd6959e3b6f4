// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `dangle-verify`: check the closed-form rule against the count.
//!
//! Prints every n where they differ and exits with status 1 if there is any.

use anyhow::Result;
use cevian_count::geometry::constants::{DEFAULT_TOLERANCE, RULE_VERIFIED_MAX_N};
use cevian_count::{logging, output, verify_rule, EngineConfig, InvariantEngine};
use clap::Parser;
use std::io::{self, Write};
use std::process::ExitCode;

/// Verify d_angle_fast(n) == a_rule(n) for n = 1..MAX_N.
#[derive(Parser, Debug)]
#[command(name = "dangle-verify")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Upper end of the checked range
    #[arg(long, default_value_t = RULE_VERIFIED_MAX_N)]
    max_n: usize,

    /// Tolerance for the Ceva product check
    #[arg(long, default_value_t = DEFAULT_TOLERANCE)]
    tol: f64,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> Result<ExitCode> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    EngineConfig::new(cli.max_n, cli.tol).validate()?;
    let report = verify_rule(cli.max_n, &InvariantEngine::new(cli.tol));

    let stdout = io::stdout();
    let mut out = stdout.lock();
    output::write_verification(&mut out, &report)?;
    out.flush()?;

    if report.is_ok() {
        Ok(ExitCode::SUCCESS)
    } else {
        Ok(ExitCode::FAILURE)
    }
}

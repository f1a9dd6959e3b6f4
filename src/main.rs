// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! `dangle`: tabulate d_angle(n), list solution triples, write a b-file.

use anyhow::{Context, Result};
use cevian_count::geometry::constants::{DEFAULT_MAX_N, DEFAULT_TOLERANCE};
use cevian_count::{logging, output, EngineConfig, InvariantEngine, Sweep};
use clap::Parser;
use std::io::{self, Write};
use std::path::PathBuf;

/// d_angle(n) for equal-angle cevians; list solution triples; write b-file.
#[derive(Parser, Debug)]
#[command(name = "dangle")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Compute the table for n = 1..MAX_N
    #[arg(long, default_value_t = DEFAULT_MAX_N, env = "DANGLE_MAX_N")]
    max_n: usize,

    /// Tolerance for the Ceva product check
    #[arg(long, default_value_t = DEFAULT_TOLERANCE, env = "DANGLE_TOL")]
    tol: f64,

    /// Also print CSV (n,d_angle(n)) lines
    #[arg(long)]
    csv: bool,

    /// Also print a single OEIS-style data line for n = 1..MAX_N
    #[arg(long)]
    oeis_line: bool,

    /// Suppress the side-by-side table
    #[arg(long)]
    no_table: bool,

    /// List all solution triples (i,j,k) for this N
    #[arg(long, value_name = "N")]
    list_triples: Option<usize>,

    /// Write a b-file (n a(n) for n = 1..MAX_N) to this path
    #[arg(long, value_name = "PATH")]
    bfile: Option<PathBuf>,

    /// Print search statistics summed over the sweep
    #[arg(long)]
    stats: bool,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

impl Cli {
    fn config(&self) -> EngineConfig {
        EngineConfig {
            max_n: self.max_n,
            tolerance: self.tol,
            list_triples: self.list_triples,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let config = cli.config();
    let sweep = Sweep::from_config(&config)?;
    let values = sweep.values();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if !cli.no_table {
        output::write_table(&mut out, sweep.rows())?;
    }
    if cli.csv {
        output::write_csv(&mut out, &values)?;
    }
    if cli.oeis_line {
        output::write_oeis_line(&mut out, &values)?;
    }
    if let Some(n) = config.list_triples {
        let triples = InvariantEngine::new(config.tolerance).enumerate(n);
        output::write_triple_listing(&mut out, n, config.tolerance, &triples)?;
    }
    if cli.stats {
        writeln!(out, "\nSearch statistics (n=1..{}):", sweep.max_n())?;
        write!(out, "{}", sweep.statistics())?;
    }
    if let Some(path) = &cli.bfile {
        output::write_bfile(path, &values)
            .with_context(|| format!("writing b-file {}", path.display()))?;
        writeln!(out, "Wrote b-file: {}", path.display())?;
    }
    out.flush()?;
    Ok(())
}

//! Console demo for the `merge_sort` crate.
//!
//! Sorts one `i64` and one `f64` sequence and prints both before and after.

mod cli;
mod total_f64;

use std::fmt::Display;
use std::io::{self, Write};

use anyhow::Context;
use clap::Parser;
use tracing::debug;
use tracing_subscriber::{EnvFilter, fmt};

use cli::Cli;
use total_f64::TotalF64;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // RUST_LOG wins over --verbose
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.default_log_level()));

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .with_writer(io::stderr)
        .init();

    let mut out = io::stdout().lock();
    run(&mut out, &cli)?;
    out.flush()?;
    Ok(())
}

fn run<W: Write>(out: &mut W, cli: &Cli) -> anyhow::Result<()> {
    writeln!(out, "=== merge sort demo ===")?;
    writeln!(out)?;

    let mut ints = cli.ints();
    run_case(out, "1. i64", &mut ints).context("failed to print the i64 case")?;
    writeln!(out, "-----------------------------")?;

    let mut floats = cli.floats().into_iter().map(TotalF64).collect::<Vec<_>>();
    run_case(out, "2. f64", &mut floats).context("failed to print the f64 case")?;

    Ok(())
}

fn run_case<W, T>(out: &mut W, label: &str, data: &mut [T]) -> io::Result<()>
where
    W: Write,
    T: Ord + Clone + Display,
{
    writeln!(out, "{label}:")?;
    writeln!(out, "before: {}", join(data))?;

    debug!(case = label, len = data.len(), "sorting");
    merge_sort::sort(data);
    debug!(case = label, "sorted");

    writeln!(out, "after:  {}", join(data))?;
    Ok(())
}

fn join<T: Display>(data: &[T]) -> String {
    data.iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

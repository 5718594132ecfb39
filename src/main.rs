//! Command-line entry point for exon2bed.
//!
//! Reads an NCBI RefSeq-style transcript table, expands every transcript into
//! its exons, sorts by chromosome, and prints one BED-like line per exon to
//! stdout. Diagnostics and timing go to stderr so the data stream stays clean.

use clap::Parser;
use exon2bed::{cli::Args, convert};
use log::{error, info, Level};
use simple_logger::init_with_level;

fn main() {
    let start = std::time::Instant::now();
    init_with_level(Level::Info).unwrap();

    let args: Args = Args::parse();

    convert::run(&args).unwrap_or_else(|e| {
        error!("{}", e);
        std::process::exit(1);
    });

    let elapsed = start.elapsed();
    info!("Elapsed time: {:.3?}", elapsed);
}

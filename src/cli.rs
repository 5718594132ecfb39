use std::path::PathBuf;

use clap::Parser;

/// Command-line arguments.
///
/// The tool takes exactly one positional argument, the annotation table to
/// convert. Output always goes to stdout; diagnostics go to stderr. Running
/// with no argument prints usage and exits with a non-zero status.
#[derive(Debug, Parser)]
#[command(
    name = "exon2bed",
    version,
    about = "Expand NCBI RefSeq transcript tables into per-exon BED-like records"
)]
pub struct Args {
    /// Tab-separated RefSeq annotation file with a header row
    /// (required columns: chrom, strand, exonStarts, exonEnds, name, name2).
    /// A .gz extension enables transparent decompression.
    #[arg(value_name = "NCBI_REF_FILE")]
    pub input: PathBuf,
}

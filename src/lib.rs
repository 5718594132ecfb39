//! # exon2bed
//!
//! Expands NCBI RefSeq-style transcript tables into per-exon BED-like records.
//!
//! ## Overview
//!
//! The input is a tab-separated annotation table with a header row (the
//! refGene/genePred family of dumps); required columns are `chrom`, `strand`,
//! `exonStarts`, `exonEnds`, `name` (transcript accession), and `name2` (gene
//! symbol). Every row becomes one transcript; transcripts are sorted by a
//! chromosome rank (numbered chromosomes first, then X, then Y, everything
//! else last) and each exon is printed as one tab-separated line:
//!
//! ```text
//! chrom	exonStart	exonEnd	{name2}_exon-{N}_{name}
//! ```
//!
//! Exon numbering follows transcription direction: ascending with coordinates
//! on the `+` strand, descending on the `-` strand.
//!
//! ## Basic Usage
//!
//! ```rust,no_run
//! use exon2bed::Reader;
//! use exon2bed::record::sort_transcripts;
//! use exon2bed::writer::write_transcripts;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut reader = Reader::from_path("refGene.txt")?;
//!
//!     let mut transcripts = Vec::new();
//!     for record in reader.records() {
//!         transcripts.push(record?);
//!     }
//!
//!     sort_transcripts(&mut transcripts);
//!     write_transcripts(&transcripts, &mut std::io::stdout().lock())?;
//!
//!     Ok(())
//! }
//! ```
//!
//! Or run the whole pipeline over any pair of streams:
//!
//! ```rust,no_run
//! use std::io::Cursor;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let table = std::fs::read_to_string("refGene.txt")?;
//!     let mut out = Vec::new();
//!     exon2bed::process(Cursor::new(table), &mut out)?;
//!     Ok(())
//! }
//! ```

#![cfg_attr(doc, warn(missing_docs))]

pub mod cli;
pub mod convert;
pub mod reader;
pub mod record;
pub mod writer;

pub use cli::Args;
pub use convert::{process, run};
pub use reader::{Reader, ReaderBuilder, ReaderError, ReaderResult};
pub use record::{chrom_rank, Exon, Strand, Transcript};
pub use writer::{write_transcript, write_transcripts, WriterError, WriterResult};

use std::fmt;
use std::io::{self, BufWriter, Read, Write};

use log::info;

use crate::cli::Args;
use crate::reader::{Reader, ReaderError};
use crate::record::{sort_transcripts, Transcript};
use crate::writer::{write_transcripts, WriterError};

/// Result alias for whole-run operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error for a conversion run.
///
/// Every error is fatal: this is a single-pass batch conversion with no
/// partial-success or retry semantics.
#[derive(Debug)]
pub enum Error {
    /// Reading or parsing the input failed.
    Reader(ReaderError),
    /// Writing the output failed.
    Writer(WriterError),
    /// An I/O error outside the reader and writer proper.
    Io(io::Error),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Reader(err) => write!(f, "read error: {err}"),
            Error::Writer(err) => write!(f, "{err}"),
            Error::Io(err) => write!(f, "I/O error: {err}"),
        }
    }
}

impl std::error::Error for Error {
    /// Returns the source error, if any.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Reader(err) => Some(err),
            Error::Writer(err) => Some(err),
            Error::Io(err) => Some(err),
        }
    }
}

impl From<ReaderError> for Error {
    fn from(err: ReaderError) -> Self {
        Error::Reader(err)
    }
}

impl From<WriterError> for Error {
    fn from(err: WriterError) -> Self {
        Error::Writer(err)
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::Io(err)
    }
}

/// Runs the whole pipeline over explicit streams.
///
/// Parses every row, materializes all transcripts in memory, stable-sorts
/// them by chromosome rank, then emits every exon line. Nothing is written
/// before parsing finishes; a malformed row aborts the run before any output.
/// Returns the number of transcripts emitted.
///
/// # Example
///
/// ```
/// use std::io::Cursor;
///
/// let input = "chrom\tstrand\texonStarts\texonEnds\tname\tname2\n\
///              chr1\t+\t100,\t150,\tNM_001\tGENE1\n";
/// let mut output = Vec::new();
///
/// let count = exon2bed::process(Cursor::new(input), &mut output).unwrap();
/// assert_eq!(count, 1);
/// assert_eq!(output, b"chr1\t100\t150\tGENE1_exon-1_NM_001\n");
/// ```
pub fn process<R, W>(input: R, output: &mut W) -> Result<usize>
where
    R: Read + Send + 'static,
    W: Write,
{
    let mut reader = Reader::from_reader(input)?;
    let transcripts = collect(&mut reader)?;
    emit(transcripts, output)
}

/// Opens the input path, converts it, and writes to stdout.
pub fn run(args: &Args) -> Result<()> {
    let mut reader = Reader::from_path(&args.input)?;
    let transcripts = collect(&mut reader)?;

    let stdout = io::stdout();
    let mut writer = BufWriter::with_capacity(64 * 1024, stdout.lock());
    let count = emit(transcripts, &mut writer)?;
    writer.flush().map_err(WriterError::from)?;

    info!("wrote exon records for {count} transcripts");
    Ok(())
}

/// Drains a reader into the whole-file working set.
fn collect(reader: &mut Reader) -> Result<Vec<Transcript>> {
    let mut transcripts = Vec::new();
    for record in reader.records() {
        transcripts.push(record?);
    }
    info!("parsed {} transcripts", transcripts.len());
    Ok(transcripts)
}

/// Sorts the working set and writes every exon line.
fn emit<W: Write>(mut transcripts: Vec<Transcript>, output: &mut W) -> Result<usize> {
    sort_transcripts(&mut transcripts);
    write_transcripts(&transcripts, output)?;
    Ok(transcripts.len())
}

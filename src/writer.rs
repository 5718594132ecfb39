use std::fmt;
use std::io::{self, Write};

use crate::record::Transcript;

/// Result alias for writer operations.
pub type WriterResult<T> = Result<T, WriterError>;

/// Errors that can occur while writing records.
#[derive(Debug)]
pub enum WriterError {
    /// An I/O error occurred while writing.
    Io(io::Error),
}

impl fmt::Display for WriterError {
    /// Formats the writer error for display.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriterError::Io(err) => write!(f, "write error: {err}"),
        }
    }
}

impl std::error::Error for WriterError {
    /// Returns the source error, if any.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            WriterError::Io(err) => Some(err),
        }
    }
}

impl From<io::Error> for WriterError {
    /// Creates a new `WriterError` from an `io::Error`.
    fn from(err: io::Error) -> Self {
        WriterError::Io(err)
    }
}

/// Writes one BED-like line per exon of a transcript.
///
/// Exons are emitted in stored (ascending-start) order; the exon number in the
/// label follows transcription direction, so reverse-strand transcripts count
/// down. Each line has four tab-separated fields:
/// `chrom`, `start`, `end`, `{name2}_exon-{N}_{name}`.
///
/// # Example
///
/// ```
/// use exon2bed::record::{Exon, Strand, Transcript};
/// use exon2bed::writer::write_transcript;
///
/// let tx = Transcript::new(
///     "chr1".to_string(),
///     Strand::Forward,
///     vec![Exon::new(100, 150)],
///     "NM_001".to_string(),
///     "GENE1".to_string(),
/// );
///
/// let mut out = Vec::new();
/// write_transcript(&tx, &mut out).unwrap();
/// assert_eq!(out, b"chr1\t100\t150\tGENE1_exon-1_NM_001\n");
/// ```
pub fn write_transcript<W: Write>(transcript: &Transcript, writer: &mut W) -> WriterResult<()> {
    for (number, exon) in transcript.numbered_exons() {
        writer.write_all(transcript.chrom.as_bytes())?;
        writer.write_all(b"\t")?;
        write_u64(writer, exon.start)?;
        writer.write_all(b"\t")?;
        write_u64(writer, exon.end)?;
        writer.write_all(b"\t")?;
        writer.write_all(transcript.name2.as_bytes())?;
        writer.write_all(b"_exon-")?;
        write_u64(writer, number as u64)?;
        writer.write_all(b"_")?;
        writer.write_all(transcript.name.as_bytes())?;
        writer.write_all(b"\n")?;
    }
    Ok(())
}

/// Writes all provided transcripts, in slice order.
pub fn write_transcripts<W: Write>(transcripts: &[Transcript], writer: &mut W) -> WriterResult<()> {
    for transcript in transcripts {
        write_transcript(transcript, writer)?;
    }
    Ok(())
}

/// Writes a u64 value to the writer as decimal text.
///
/// Stack-buffer implementation that writes digits right to left without
/// allocating.
fn write_u64<W: Write>(writer: &mut W, mut value: u64) -> io::Result<()> {
    let mut buf = [0u8; 20];
    let mut idx = buf.len();
    if value == 0 {
        return writer.write_all(b"0");
    }
    while value > 0 {
        idx -= 1;
        buf[idx] = b'0' + (value % 10) as u8;
        value /= 10;
    }
    writer.write_all(&buf[idx..])
}

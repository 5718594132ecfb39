use std::fmt;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Read};
use std::path::Path;

use flate2::read::MultiGzDecoder;
use memchr::memchr_iter;

use crate::record::{Exon, Strand, Transcript};

/// Result alias for reader operations.
pub type ReaderResult<T> = Result<T, ReaderError>;

const CHROM: &str = "chrom";
const STRAND: &str = "strand";
const EXON_STARTS: &str = "exonStarts";
const EXON_ENDS: &str = "exonEnds";
const NAME: &str = "name";
const NAME2: &str = "name2";

/// An error that can occur when reading a RefSeq annotation table.
#[derive(Debug)]
pub enum ReaderError {
    /// An I/O error.
    Io(io::Error),
    /// The header row does not name a required column.
    MissingColumn {
        /// The name of the missing column.
        column: &'static str,
    },
    /// An error that occurred when parsing a field.
    InvalidField {
        /// The line number where the error occurred.
        line: usize,
        /// The name of the field that could not be parsed.
        field: &'static str,
        /// The error message.
        message: String,
    },
    /// A row had fewer fields than the header defines.
    UnexpectedFieldCount {
        /// The line number where the error occurred.
        line: usize,
        /// The expected number of fields.
        expected: usize,
        /// The actual number of fields.
        actual: usize,
    },
    /// `exonStarts` and `exonEnds` disagree on the number of exons.
    MismatchedExonLists {
        /// The line number where the error occurred.
        line: usize,
        /// Token count of `exonStarts` after dropping empties.
        starts: usize,
        /// Token count of `exonEnds` after dropping empties.
        ends: usize,
    },
    /// An error that occurred when building a reader.
    Builder(String),
}

impl fmt::Display for ReaderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReaderError::Io(err) => write!(f, "I/O error: {err}"),
            ReaderError::MissingColumn { column } => {
                write!(f, "header does not define required column '{column}'")
            }
            ReaderError::InvalidField {
                line,
                field,
                message,
            } => write!(f, "invalid {field} at line {line}: {message}"),
            ReaderError::UnexpectedFieldCount {
                line,
                expected,
                actual,
            } => write!(f, "line {line} had {actual} fields, expected {expected}"),
            ReaderError::MismatchedExonLists { line, starts, ends } => write!(
                f,
                "line {line} had {starts} exon starts but {ends} exon ends"
            ),
            ReaderError::Builder(msg) => write!(f, "builder error: {msg}"),
        }
    }
}

impl std::error::Error for ReaderError {
    /// Returns the source error, if any.
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ReaderError::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<io::Error> for ReaderError {
    /// Creates a new `ReaderError` from an `io::Error`.
    fn from(err: io::Error) -> Self {
        ReaderError::Io(err)
    }
}

impl ReaderError {
    /// Creates a new `ReaderError` for an invalid field.
    pub(crate) fn invalid_field(line: usize, field: &'static str, message: String) -> ReaderError {
        ReaderError::InvalidField {
            line,
            field,
            message,
        }
    }
}

/// Column positions of the required fields, resolved from the header row.
///
/// Extra columns in the input are ignored; only these six are ever read.
#[derive(Debug, Clone)]
struct Header {
    chrom: usize,
    strand: usize,
    exon_starts: usize,
    exon_ends: usize,
    name: usize,
    name2: usize,
    /// Total number of columns the header defines.
    width: usize,
}

impl Header {
    /// Resolves required column indices from a header line.
    fn parse(line: &str) -> ReaderResult<Self> {
        // UCSC table exports prefix the header with '#'
        let line = line.strip_prefix('#').unwrap_or(line);
        let columns: Vec<&str> = line.split('\t').collect();

        let find = |column: &'static str| -> ReaderResult<usize> {
            columns
                .iter()
                .position(|name| *name == column)
                .ok_or(ReaderError::MissingColumn { column })
        };

        Ok(Self {
            chrom: find(CHROM)?,
            strand: find(STRAND)?,
            exon_starts: find(EXON_STARTS)?,
            exon_ends: find(EXON_ENDS)?,
            name: find(NAME)?,
            name2: find(NAME2)?,
            width: columns.len(),
        })
    }
}

/// A builder for creating a `Reader`.
///
/// # Example
///
/// ```rust,no_run
/// use exon2bed::Reader;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let reader = Reader::builder()
///         .from_path("refGene.txt")
///         .buffer_capacity(128 * 1024)
///         .build()?;
///
///     for record in reader {
///         let record = record?;
///         // ...
///     }
///
///     Ok(())
/// }
/// ```
#[derive(Default)]
pub struct ReaderBuilder {
    source: Option<ReaderSource>,
    buffer_capacity: Option<usize>,
}

enum ReaderSource {
    Path(std::path::PathBuf),
    Reader(Box<dyn Read + Send>),
}

impl ReaderBuilder {
    /// Sets a filesystem path as the input source.
    ///
    /// Inputs with a `.gz` extension are decompressed transparently.
    pub fn from_path<P: AsRef<Path>>(mut self, path: P) -> Self {
        self.source = Some(ReaderSource::Path(path.as_ref().into()));
        self
    }

    /// Sets an arbitrary reader as the input source.
    pub fn from_reader<T>(mut self, reader: T) -> Self
    where
        T: Read + Send + 'static,
    {
        self.source = Some(ReaderSource::Reader(Box::new(reader)));
        self
    }

    /// Sets the buffer capacity for the reader.
    ///
    /// The default is 64 KB.
    pub fn buffer_capacity(mut self, capacity: usize) -> Self {
        self.buffer_capacity = Some(capacity.max(8 * 1024));
        self
    }

    /// Builds the `Reader`, consuming the header row if the input has one.
    pub fn build(mut self) -> ReaderResult<Reader> {
        let source = self
            .source
            .take()
            .ok_or_else(|| ReaderError::Builder("ERROR: no input source configured".into()))?;

        let stream: Box<dyn Read + Send> = match source {
            ReaderSource::Path(path) => {
                let file = File::open(&path)?;
                if path.extension().is_some_and(|ext| ext == "gz") {
                    Box::new(MultiGzDecoder::new(file))
                } else {
                    Box::new(file)
                }
            }
            ReaderSource::Reader(reader) => reader,
        };

        let capacity = self.buffer_capacity.unwrap_or(64 * 1024);
        Reader::from_stream(stream, capacity)
    }
}

/// A streaming reader for RefSeq-style annotation tables.
///
/// The first non-blank, non-comment line is the header; required columns are
/// located by name and every later line becomes one [`Transcript`]. The input
/// is held only one line at a time.
///
/// # Example
///
/// ```rust,no_run
/// use exon2bed::Reader;
///
/// fn main() -> Result<(), Box<dyn std::error::Error>> {
///     let mut reader = Reader::from_path("refGene.txt")?;
///
///     for record in reader.records() {
///         let record = record?;
///         println!("{}: {} exons", record.name, record.exon_count());
///     }
///
///     Ok(())
/// }
/// ```
pub struct Reader {
    inner: BufReader<Box<dyn Read + Send>>,
    buffer: String,
    header: Option<Header>,
    line_number: usize,
}

impl Reader {
    /// Creates a new `ReaderBuilder` to configure a `Reader`.
    pub fn builder() -> ReaderBuilder {
        ReaderBuilder::default()
    }

    /// Creates a new `Reader` from a path.
    pub fn from_path<P: AsRef<Path>>(path: P) -> ReaderResult<Self> {
        Self::builder().from_path(path).build()
    }

    /// Creates a new `Reader` from a reader.
    pub fn from_reader<T>(reader: T) -> ReaderResult<Self>
    where
        T: Read + Send + 'static,
    {
        Self::builder().from_reader(reader).build()
    }

    /// Creates a new `Reader` from a raw stream and resolves the header.
    fn from_stream(reader: Box<dyn Read + Send>, buffer_capacity: usize) -> ReaderResult<Self> {
        let mut reader = Self {
            inner: BufReader::with_capacity(buffer_capacity, reader),
            buffer: String::with_capacity(1024),
            header: None,
            line_number: 0,
        };

        // An input with no lines at all is an empty table, not an error.
        loop {
            if !reader.fill_buffer()? {
                break;
            }
            if reader.buffer.trim().is_empty() {
                continue;
            }
            // A comment only counts as the header when it names the required
            // columns ('#chrom\t...'); any other comment is skipped.
            if reader.buffer.starts_with('#') {
                match Header::parse(&reader.buffer) {
                    Ok(header) => reader.header = Some(header),
                    Err(ReaderError::MissingColumn { .. }) => continue,
                    Err(err) => return Err(err),
                }
            } else {
                reader.header = Some(Header::parse(&reader.buffer)?);
            }
            break;
        }

        Ok(reader)
    }

    /// Returns the current line number of the reader.
    pub fn current_line(&self) -> usize {
        self.line_number
    }

    /// Returns an iterator over the records in the reader.
    pub fn records(&mut self) -> Records<'_> {
        Records { reader: self }
    }

    /// Returns the next record in the reader.
    fn next_record(&mut self) -> Option<ReaderResult<Transcript>> {
        let header = self.header.as_ref()?.clone();
        loop {
            match self.fill_buffer() {
                Ok(true) => {
                    if should_skip(&self.buffer) {
                        continue;
                    }
                    return Some(parse_row(&self.buffer, &header, self.line_number));
                }
                Ok(false) => return None,
                Err(err) => return Some(Err(err)),
            }
        }
    }

    /// Fills the buffer with the next line, returning false at EOF.
    fn fill_buffer(&mut self) -> ReaderResult<bool> {
        self.buffer.clear();
        let bytes = self.inner.read_line(&mut self.buffer)?;
        if bytes == 0 {
            return Ok(false);
        }
        self.line_number += 1;
        trim_line(&mut self.buffer);
        Ok(true)
    }
}

impl Iterator for Reader {
    type Item = ReaderResult<Transcript>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_record()
    }
}

/// An iterator over the records in a `Reader`.
///
/// This struct is created by the `records` method on `Reader`.
pub struct Records<'a> {
    reader: &'a mut Reader,
}

impl<'a> Iterator for Records<'a> {
    type Item = ReaderResult<Transcript>;

    fn next(&mut self) -> Option<Self::Item> {
        self.reader.next_record()
    }
}

/// Parses one data row into a `Transcript`.
///
/// Fields are split on tabs with empty fields preserved, so column positions
/// from the header always line up. The i-th exon start pairs with the i-th
/// exon end in input order; the pairing happens before the transcript sorts
/// its exons.
fn parse_row(line: &str, header: &Header, line_number: usize) -> ReaderResult<Transcript> {
    let fields = split_fields(line);

    if fields.len() < header.width {
        return Err(ReaderError::UnexpectedFieldCount {
            line: line_number,
            expected: header.width,
            actual: fields.len(),
        });
    }

    let starts = __parse_coord_list(fields[header.exon_starts], line_number, EXON_STARTS)?;
    let ends = __parse_coord_list(fields[header.exon_ends], line_number, EXON_ENDS)?;

    if starts.len() != ends.len() {
        return Err(ReaderError::MismatchedExonLists {
            line: line_number,
            starts: starts.len(),
            ends: ends.len(),
        });
    }

    let exons = starts
        .into_iter()
        .zip(ends)
        .map(|(start, end)| Exon::new(start, end))
        .collect();

    Ok(Transcript::new(
        fields[header.chrom].to_string(),
        Strand::from_raw(fields[header.strand]),
        exons,
        fields[header.name].to_string(),
        fields[header.name2].to_string(),
    ))
}

/// Splits a line on tabs, keeping empty fields.
fn split_fields(line: &str) -> Vec<&str> {
    let bytes = line.as_bytes();
    let mut fields = Vec::with_capacity(16);
    let mut field_start = 0usize;

    for tab in memchr_iter(b'\t', bytes) {
        fields.push(&line[field_start..tab]);
        field_start = tab + 1;
    }
    fields.push(&line[field_start..]);

    fields
}

/// Parses a comma-separated coordinate list to a vector of u64.
///
/// The source format writes a trailing comma, so empty tokens are dropped
/// rather than parsed.
fn __parse_coord_list(list: &str, line: usize, label: &'static str) -> ReaderResult<Vec<u64>> {
    list.split(',')
        .filter(|s| !s.is_empty())
        .map(|item| {
            item.parse::<u64>().map_err(|_| {
                ReaderError::invalid_field(
                    line,
                    label,
                    format!(
                        "ERROR: failed to parse '{item}' as unsigned integer in {line}:{label}"
                    ),
                )
            })
        })
        .collect()
}

/// Trims trailing line terminators.
fn trim_line(line: &mut String) {
    while line.ends_with(['\n', '\r']) {
        line.pop();
    }
}

/// Returns `true` if the line should be skipped.
fn should_skip(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#')
}

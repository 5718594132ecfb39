use std::fmt;

/// Rank assigned to `chrX`; sorts after every numbered chromosome.
pub const RANK_CHR_X: u32 = 50;
/// Rank assigned to `chrY`; sorts after `chrX`.
pub const RANK_CHR_Y: u32 = 100;
/// Rank for unplaced contigs, scaffolds, and anything else unrecognized.
pub const RANK_UNPLACED: u32 = 9999;

/// Represents the strand of a transcript.
///
/// # Example
///
/// ```
/// use exon2bed::record::Strand;
///
/// let strand = Strand::from_raw("+");
/// assert_eq!(strand, Strand::Forward);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Strand {
    /// Positive strand (`+`).
    Forward,
    /// Negative strand (anything that is not `+`).
    Reverse,
}

impl Strand {
    /// Converts a raw strand field into a `Strand`.
    ///
    /// Only the exact string `"+"` is forward; every other value, including
    /// `"-"`, `"."`, and malformed input, is treated as reverse. This mapping
    /// is total, so it never fails.
    pub fn from_raw(raw: &str) -> Self {
        if raw == "+" {
            Strand::Forward
        } else {
            Strand::Reverse
        }
    }

    /// Returns `true` for the forward strand.
    #[inline]
    pub fn is_forward(&self) -> bool {
        matches!(self, Strand::Forward)
    }
}

impl fmt::Display for Strand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Strand::Forward => f.write_str("+"),
            Strand::Reverse => f.write_str("-"),
        }
    }
}

/// One exon interval; a single line in the output.
///
/// `start <= end` is assumed from the source data, not enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Exon {
    /// Genomic start coordinate.
    pub start: u64,
    /// Genomic end coordinate.
    pub end: u64,
}

impl Exon {
    /// Creates a new exon from a coordinate pair.
    #[inline]
    pub fn new(start: u64, end: u64) -> Self {
        Self { start, end }
    }
}

/// One parsed transcript row: a chromosome, a strand, and its exons.
///
/// Constructed once per input row and immutable afterwards. Exons are stored
/// sorted ascending by start regardless of input order, and the chromosome
/// rank is computed exactly once at construction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    /// Chromosome or scaffold name, emitted verbatim.
    pub chrom: String,
    /// Transcription direction; decides exon numbering order.
    pub strand: Strand,
    /// Exons sorted ascending by start.
    pub exons: Vec<Exon>,
    /// NCBI transcript accession (`name` column).
    pub name: String,
    /// HGNC gene symbol (`name2` column).
    pub name2: String,
    /// Sort key derived from `chrom`; never displayed.
    pub chrom_rank: u32,
}

impl Transcript {
    /// Creates a new transcript, sorting its exons and ranking its chromosome.
    ///
    /// # Example
    ///
    /// ```
    /// use exon2bed::record::{Exon, Strand, Transcript};
    ///
    /// let tx = Transcript::new(
    ///     "chr2".to_string(),
    ///     Strand::Forward,
    ///     vec![Exon::new(200, 250), Exon::new(100, 150)],
    ///     "NM_001".to_string(),
    ///     "GENE1".to_string(),
    /// );
    /// assert_eq!(tx.exons[0].start, 100);
    /// assert_eq!(tx.chrom_rank, 2);
    /// ```
    pub fn new(
        chrom: String,
        strand: Strand,
        mut exons: Vec<Exon>,
        name: String,
        name2: String,
    ) -> Self {
        exons.sort_by_key(|exon| exon.start);
        let chrom_rank = chrom_rank(&chrom);
        Self {
            chrom,
            strand,
            exons,
            name,
            name2,
            chrom_rank,
        }
    }

    /// Returns the number of exons.
    #[inline]
    pub fn exon_count(&self) -> usize {
        self.exons.len()
    }

    /// Pairs each exon with its biological exon number.
    ///
    /// Exons stay in stored (ascending-start) order. On the forward strand the
    /// lowest-start exon is exon 1; on the reverse strand numbering is flipped
    /// so the highest-start exon is exon 1, following transcription direction.
    pub fn numbered_exons(&self) -> Vec<(usize, &Exon)> {
        let count = self.exons.len();
        self.exons
            .iter()
            .enumerate()
            .map(|(idx, exon)| {
                let number = if self.strand.is_forward() {
                    idx + 1
                } else {
                    count - idx
                };
                (number, exon)
            })
            .collect()
    }
}

/// Computes the sort rank for a chromosome name.
///
/// `chrY` sorts last among recognized chromosomes, `chrX` second to last, and
/// numbered chromosomes sort by the digit run right after the `chr` prefix.
/// Everything else (unplaced contigs, scaffolds, a bare `chr`) goes to the end.
///
/// # Example
///
/// ```
/// use exon2bed::record::chrom_rank;
///
/// assert_eq!(chrom_rank("chr10"), 10);
/// assert_eq!(chrom_rank("chrX"), 50);
/// assert_eq!(chrom_rank("scaffold_1"), 9999);
/// ```
pub fn chrom_rank(chrom: &str) -> u32 {
    match chrom {
        "chrY" => RANK_CHR_Y,
        "chrX" => RANK_CHR_X,
        _ => match chrom.strip_prefix("chr") {
            Some(rest) => {
                let digits = rest
                    .as_bytes()
                    .iter()
                    .take_while(|byte| byte.is_ascii_digit())
                    .count();
                if digits == 0 {
                    RANK_UNPLACED
                } else {
                    rest[..digits].parse::<u32>().unwrap_or(RANK_UNPLACED)
                }
            }
            None => RANK_UNPLACED,
        },
    }
}

/// Stable-sorts transcripts ascending by chromosome rank.
///
/// Rank is the only key: transcripts with equal ranks, including everything
/// bucketed at the unplaced rank, keep their relative input order.
pub fn sort_transcripts(transcripts: &mut [Transcript]) {
    transcripts.sort_by_key(|tx| tx.chrom_rank);
}

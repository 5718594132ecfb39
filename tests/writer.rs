use exon2bed::process;
use exon2bed::record::{Exon, Strand, Transcript};
use exon2bed::writer::{write_transcript, write_transcripts};

use std::io::Cursor;

fn transcript(chrom: &str, strand: Strand, exons: Vec<Exon>, name: &str, name2: &str) -> Transcript {
    Transcript::new(
        chrom.to_string(),
        strand,
        exons,
        name.to_string(),
        name2.to_string(),
    )
}

#[test]
fn test_write_forward_strand() {
    let tx = transcript(
        "chr1",
        Strand::Forward,
        vec![Exon::new(100, 150), Exon::new(200, 250)],
        "NM_001",
        "GENE1",
    );
    let mut out = Vec::new();
    write_transcript(&tx, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "chr1\t100\t150\tGENE1_exon-1_NM_001\n\
         chr1\t200\t250\tGENE1_exon-2_NM_001\n"
    );
}

#[test]
fn test_write_reverse_strand_flips_numbering() {
    let tx = transcript(
        "chr1",
        Strand::Reverse,
        vec![Exon::new(100, 150), Exon::new(200, 250)],
        "NM_001",
        "GENE1",
    );
    let mut out = Vec::new();
    write_transcript(&tx, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "chr1\t100\t150\tGENE1_exon-2_NM_001\n\
         chr1\t200\t250\tGENE1_exon-1_NM_001\n"
    );
}

#[test]
fn test_write_line_count_matches_exon_count() {
    let tx = transcript(
        "chr5",
        Strand::Forward,
        (0..9).map(|i| Exon::new(i * 10, i * 10 + 5)).collect(),
        "NM_001",
        "GENE1",
    );
    let mut out = Vec::new();
    write_transcript(&tx, &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    assert_eq!(text.lines().count(), 9);
    assert!(!text.contains("\n\n"));
}

#[test]
fn test_write_no_exons_no_lines() {
    let tx = transcript("chr1", Strand::Forward, vec![], "NM_001", "GENE1");
    let mut out = Vec::new();
    write_transcript(&tx, &mut out).unwrap();
    assert!(out.is_empty());
}

#[test]
fn test_write_transcripts_in_slice_order() {
    let transcripts = vec![
        transcript("chr1", Strand::Forward, vec![Exon::new(1, 2)], "NM_001", "A"),
        transcript("chr2", Strand::Forward, vec![Exon::new(3, 4)], "NM_002", "B"),
    ];
    let mut out = Vec::new();
    write_transcripts(&transcripts, &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "chr1\t1\t2\tA_exon-1_NM_001\nchr2\t3\t4\tB_exon-1_NM_002\n"
    );
}

#[test]
fn test_process_round_trip_forward() {
    let input = "chrom\tstrand\texonStarts\texonEnds\tname\tname2\n\
                 chr1\t+\t100,200,\t150,250,\tNM_001\tGENE1\n";
    let mut out = Vec::new();
    let count = process(Cursor::new(input), &mut out).unwrap();
    assert_eq!(count, 1);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "chr1\t100\t150\tGENE1_exon-1_NM_001\n\
         chr1\t200\t250\tGENE1_exon-2_NM_001\n"
    );
}

#[test]
fn test_process_round_trip_reverse() {
    let input = "chrom\tstrand\texonStarts\texonEnds\tname\tname2\n\
                 chr1\t-\t100,200,\t150,250,\tNM_001\tGENE1\n";
    let mut out = Vec::new();
    process(Cursor::new(input), &mut out).unwrap();
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "chr1\t100\t150\tGENE1_exon-2_NM_001\n\
         chr1\t200\t250\tGENE1_exon-1_NM_001\n"
    );
}

#[test]
fn test_process_groups_by_chromosome_rank() {
    // chr2 arrives first in the file; chr1's lines must still come out first.
    let input = "chrom\tstrand\texonStarts\texonEnds\tname\tname2\n\
                 chr2\t+\t500,600,\t550,650,\tNM_002\tGENE2\n\
                 chr1\t+\t100,\t150,\tNM_001\tGENE1\n";
    let mut out = Vec::new();
    let count = process(Cursor::new(input), &mut out).unwrap();
    assert_eq!(count, 2);
    assert_eq!(
        String::from_utf8(out).unwrap(),
        "chr1\t100\t150\tGENE1_exon-1_NM_001\n\
         chr2\t500\t550\tGENE2_exon-1_NM_002\n\
         chr2\t600\t650\tGENE2_exon-2_NM_002\n"
    );
}

#[test]
fn test_process_full_ordering() {
    let input = "chrom\tstrand\texonStarts\texonEnds\tname\tname2\n\
                 chrUn\t+\t1,\t2,\tNM_005\tE\n\
                 chrY\t+\t1,\t2,\tNM_004\tD\n\
                 chrX\t+\t1,\t2,\tNM_003\tC\n\
                 chr10\t+\t1,\t2,\tNM_002\tB\n\
                 chr2\t+\t1,\t2,\tNM_001\tA\n";
    let mut out = Vec::new();
    process(Cursor::new(input), &mut out).unwrap();
    let text = String::from_utf8(out).unwrap();
    let chroms: Vec<&str> = text
        .lines()
        .map(|line| line.split('\t').next().unwrap())
        .collect();
    assert_eq!(chroms, vec!["chr2", "chr10", "chrX", "chrY", "chrUn"]);
}

#[test]
fn test_process_malformed_row_aborts_before_output() {
    let input = "chrom\tstrand\texonStarts\texonEnds\tname\tname2\n\
                 chr1\t+\t100,\t150,\tNM_001\tGENE1\n\
                 chr2\t+\t100,200,\t150,\tNM_002\tGENE2\n";
    let mut out = Vec::new();
    let result = process(Cursor::new(input), &mut out);
    assert!(result.is_err());
    assert!(out.is_empty());
}

#[test]
fn test_process_empty_input() {
    let mut out = Vec::new();
    let count = process(Cursor::new(""), &mut out).unwrap();
    assert_eq!(count, 0);
    assert!(out.is_empty());
}

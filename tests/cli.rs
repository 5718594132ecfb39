use clap::error::ErrorKind;
use clap::Parser;

use exon2bed::cli::Args;

#[test]
fn test_cli_parses_input_path() {
    let args = Args::try_parse_from(["exon2bed", "refGene.txt"]).unwrap();
    assert_eq!(args.input, std::path::PathBuf::from("refGene.txt"));
}

#[test]
fn test_cli_rejects_missing_input() {
    let err = Args::try_parse_from(["exon2bed"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
}

#[test]
fn test_cli_rejects_extra_arguments() {
    let err = Args::try_parse_from(["exon2bed", "a.txt", "b.txt"]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::UnknownArgument);
}

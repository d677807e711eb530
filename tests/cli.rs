use std::io::Write;
use std::process::{Command, Output};

fn seqsynth(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_seqsynth")).args(args).output().unwrap()
}

fn stdout(output: &Output) -> String {
    String::from_utf8(output.stdout.clone()).unwrap()
}

#[test]
fn encode_prints_json_report() {
    let output = seqsynth(&["mode=encode", "text=A"]);
    assert!(output.status.success());
    let json: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(json["dna_sequence"], "CAAC");
    assert_eq!(json["length"], 4);
    assert_eq!(
        json["issues"][0],
        "Sequence length (4 bp) is less than the minimum 300 bp required."
    );
}

#[test]
fn decode_normalizes_user_input() {
    let output = seqsynth(&["mode=decode", "seq= caac "]);
    assert!(output.status.success());
    assert_eq!(stdout(&output), "A\n");
}

#[test]
fn decode_rejects_foreign_symbols() {
    let output = seqsynth(&["mode=decode", "seq=CANC"]);
    assert!(!output.status.success());
}

#[test]
fn check_reads_fasta() {
    let mut fasta = tempfile::NamedTempFile::new().unwrap();
    writeln!(fasta, ">alternating\n{}\n>poly-a\n{}", "ACGT".repeat(100), "A".repeat(28)).unwrap();
    let fasta_arg = format!("fasta={}", fasta.path().display());
    let output = seqsynth(&["mode=check", &fasta_arg, "threads=2"]);
    assert!(output.status.success());
    let out = stdout(&output);
    assert!(out.contains("sequence 1 (400 bp"));
    assert!(out.contains("- Found 17955 repeats of 20+ bp."));
    assert!(out.contains("sequence 2 (28 bp"));
    assert!(out.contains("-   - AAAAAAAAAAAAAAAAAAAAAAAAAAAA at position 0"));
}

#[test]
fn check_uses_rule_file() {
    let mut rules = tempfile::NamedTempFile::new().unwrap();
    writeln!(rules, "min_length = 4\nrepeat_length = 30").unwrap();
    let rules_arg = format!("rules={}", rules.path().display());
    let output = seqsynth(&["mode=check", "seq=CAAC", &rules_arg]);
    assert!(output.status.success());
    assert!(stdout(&output).contains("passes all checks"));
}

#[test]
fn required_length() {
    let output = seqsynth(&["mode=required", "min_bp=301"]);
    assert_eq!(stdout(&output), "76\n");
}

#[test]
fn unknown_mode_fails() {
    assert!(!seqsynth(&["mode=fold"]).status.success());
    assert!(!seqsynth(&["encode"]).status.success());
}

mod common;

use assert_cmd::Command;

use crate::common::{UNIT, Workspace, gpred};

fn stderr_of(assert: assert_cmd::assert::Assert) -> String {
    String::from_utf8(assert.get_output().stderr.clone()).unwrap()
}

#[test]
fn missing_input_is_rejected() {
    let assert = Command::cargo_bin("gpred")
        .unwrap()
        .args(["-i", "no/such/genome.fna"])
        .assert()
        .failure();

    assert!(stderr_of(assert).contains("genome.fna does not exist."));
}

#[test]
fn directory_input_is_rejected() {
    let ws = Workspace::with_fasta(">empty\n").unwrap();
    let assert = Command::cargo_bin("gpred")
        .unwrap()
        .arg("-i")
        .arg(ws.path())
        .assert()
        .failure();

    assert!(stderr_of(assert).contains("is a directory."));
}

#[test]
fn input_is_required() {
    Command::cargo_bin("gpred").unwrap().assert().failure();
}

#[test]
fn unwritable_output_is_reported() {
    let ws = Workspace::with_fasta(&format!(">genome\n{UNIT}\n")).unwrap();
    let unwritable = ws.path().join("missing").join("genes.fna");

    let assert = Command::cargo_bin("gpred")
        .unwrap()
        .arg("-i")
        .arg(&ws.input)
        .arg("-p")
        .arg(&ws.positions)
        .arg("-o")
        .arg(&unwritable)
        .assert()
        .code(1);

    let stderr = stderr_of(assert);
    assert!(stderr.contains("Error cannot open"), "{stderr}");
    assert!(stderr.contains("genes.fna"), "{stderr}");
}

#[test]
fn ambiguous_bases_are_rejected() {
    let ws = Workspace::with_fasta(">genome\nATGNNNTAG\n").unwrap();

    let assert = gpred(&ws).assert().code(1);

    assert!(stderr_of(assert).contains("Invalid symbol 'N'"));
}

#[test]
fn non_numeric_threshold_is_rejected() {
    let ws = Workspace::with_fasta(&format!(">genome\n{UNIT}\n")).unwrap();

    gpred(&ws).args(["-g", "fifty"]).assert().failure();
}

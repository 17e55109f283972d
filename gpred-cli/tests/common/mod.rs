#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};

use assert_cmd::Command;
use tempfile::TempDir;

/// Gene ATGAAACGTTAG at 17..28 behind an AGGAGG motif
pub const UNIT: &str = "AGGAGGCCCCCCCCCCATGAAACGTTAGCCCC";
/// Reverse complement of [`UNIT`]
pub const UNIT_RC: &str = "GGGGCTAACGTTTCATGGGGGGGGGGCCTCCT";

/// Working directory holding an input genome and the output paths gpred writes to.
pub struct Workspace {
    pub dir: TempDir,
    pub input: PathBuf,
    pub positions: PathBuf,
    pub genes: PathBuf,
}

impl Workspace {
    /// Writes `fasta` as `genome.fna` in a fresh temporary directory.
    pub fn with_fasta(fasta: &str) -> Result<Self, Box<dyn std::error::Error>> {
        let dir = tempfile::tempdir()?;
        let input = dir.path().join("genome.fna");
        fs::write(&input, fasta)?;
        Ok(Self {
            positions: dir.path().join("predict_genes.csv"),
            genes: dir.path().join("genes.fna"),
            input,
            dir,
        })
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn read(&self, path: &Path) -> String {
        fs::read_to_string(path).unwrap()
    }
}

/// Builds a gpred invocation reading `workspace.input` and writing to its output paths.
pub fn gpred(workspace: &Workspace) -> Command {
    let mut cmd = Command::cargo_bin("gpred").unwrap();
    cmd.arg("-i")
        .arg(&workspace.input)
        .arg("-p")
        .arg(&workspace.positions)
        .arg("-o")
        .arg(&workspace.genes)
        .arg("-q");
    cmd
}

/// Runs gpred with small-gene thresholds and the given extra arguments.
pub fn run_gpred(workspace: &Workspace, args: &[&str]) -> Result<(), Box<dyn std::error::Error>> {
    gpred(workspace)
        .args(["-g", "9", "-d", "1"])
        .args(args)
        .assert()
        .success();
    Ok(())
}

/// Collapses a multi-line output file into one line for inline snapshots.
pub fn one_line(s: &str) -> String {
    s.lines().collect::<Vec<_>>().join(";")
}

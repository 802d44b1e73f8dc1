//! Test helpers for writing instance files and driving the solve command.

use super::*;
use camino::{Utf8Path, Utf8PathBuf};
use hgs_core::Solver;
use hgs_native::HgsSolver;
use hgs_native::test_support::reference_engine;
use std::fs;
use tempfile::TempDir;

use crate::solve::{SolveConfig, SolverBuilder};

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    fs::write(path.as_std_path(), contents).expect("write test file");
}

pub(super) fn write_json<T: serde::Serialize>(path: &Utf8Path, value: &T) {
    let payload = serde_json::to_string_pretty(value).expect("serialize test payload");
    write_utf8(path, payload.as_bytes());
}

/// Temporary directory with a UTF-8 root path.
#[derive(Debug)]
pub(super) struct Workspace {
    _dir: TempDir,
    root: Utf8PathBuf,
}

impl Workspace {
    pub(super) fn new() -> Self {
        let dir = TempDir::new().expect("tempdir");
        let root = Utf8PathBuf::from_path_buf(dir.path().to_path_buf()).expect("utf-8 workspace");
        Self { _dir: dir, root }
    }

    pub(super) fn path(&self, name: &str) -> Utf8PathBuf {
        self.root.join(name)
    }
}

/// Builds solvers over the in-process reference engine.
#[derive(Debug, Default)]
pub(super) struct ReferenceSolverBuilder;

impl SolverBuilder for ReferenceSolverBuilder {
    fn build(&self, _config: &SolveConfig) -> Result<Box<dyn Solver>, CliError> {
        Ok(Box::new(HgsSolver::new(reference_engine())))
    }
}

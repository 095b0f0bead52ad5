//! FILENAME: app/cli/src/outcome.rs
// PURPOSE: The single result of one run, shared by the text and JSON reports.

use std::path::{Path, PathBuf};

use engine::MissingColumns;
use serde::{Serialize, Serializer};

pub const EXIT_OK: u8 = 0;
pub const EXIT_FILE_ERROR: u8 = 1;
pub const EXIT_USAGE: u8 = 2;
pub const EXIT_MISSING_COLUMNS: u8 = 3;

/// Pipeline stage where an unexpected failure happened.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Load,
    Write,
}

/// How a run ended.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Outcome {
    /// Output file written; `rows` may be zero.
    Written {
        rows: usize,
        #[serde(serialize_with = "serialize_path_lossy")]
        output: PathBuf,
    },
    /// Required columns absent; nothing was written.
    MissingColumns(MissingColumns),
    /// Load or write failed.
    Failed { stage: Stage, message: String },
    /// Wrong arguments; nothing was attempted.
    Usage { message: String },
}

impl Outcome {
    pub fn failed(stage: Stage, err: impl std::fmt::Display) -> Self {
        Outcome::Failed {
            stage,
            message: err.to_string(),
        }
    }

    /// Process exit status. Without `distinct` every outcome exits 0.
    pub fn exit_status(&self, distinct: bool) -> u8 {
        if !distinct {
            return EXIT_OK;
        }
        match self {
            Outcome::Written { .. } => EXIT_OK,
            Outcome::Failed { .. } => EXIT_FILE_ERROR,
            Outcome::Usage { .. } => EXIT_USAGE,
            Outcome::MissingColumns(_) => EXIT_MISSING_COLUMNS,
        }
    }
}

/// Paths that are not valid UTF-8 are written with replacement characters
/// instead of failing the whole report.
fn serialize_path_lossy<S: Serializer>(path: &Path, serializer: S) -> Result<S::Ok, S::Error> {
    serializer.serialize_str(&path.to_string_lossy())
}

impl From<MissingColumns> for Outcome {
    fn from(err: MissingColumns) -> Self {
        Outcome::MissingColumns(err)
    }
}

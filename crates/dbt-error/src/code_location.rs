use std::path::PathBuf;

use dbt_serde_yaml::JsonSchema;
use serde::{Deserialize, Serialize};

/// Represents a concrete location in some source file.
#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize, Hash, JsonSchema)]
pub struct CodeLocation {
    pub line: usize,
    pub col: usize,
    pub index: usize,
    pub file: PathBuf,
}

impl PartialOrd for CodeLocation {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for CodeLocation {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.file
            .cmp(&other.file)
            .then(self.index.cmp(&other.index))
    }
}

impl CodeLocation {
    pub fn new(line: usize, column: usize, index: usize, file: impl Into<PathBuf>) -> Self {
        CodeLocation {
            line,
            col: column,
            index,
            file: file.into(),
        }
    }

    /// Whether this code location has line and column number info.
    pub fn has_position(&self) -> bool {
        // 0:0 means unknown location
        self.line != 0 || self.col != 0
    }

    pub fn with_file(self, file: impl Into<PathBuf>) -> Self {
        CodeLocation {
            file: file.into(),
            ..self
        }
    }
}

impl From<PathBuf> for CodeLocation {
    fn from(file: PathBuf) -> Self {
        CodeLocation {
            file,
            ..Default::default()
        }
    }
}

impl From<dbt_serde_yaml::Span> for CodeLocation {
    fn from(span: dbt_serde_yaml::Span) -> Self {
        CodeLocation::new(
            span.start.line,
            span.start.column,
            span.start.index,
            span.filename
                .as_deref()
                .map_or_else(|| PathBuf::from("<unknown>"), PathBuf::from),
        )
    }
}

impl std::fmt::Display for CodeLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let relative_path = if self.file.is_relative() {
            self.file.to_owned()
        } else if let Ok(cwd) = std::env::current_dir() {
            let cwd = std::fs::canonicalize(&cwd).unwrap_or(cwd);
            pathdiff::diff_paths(&self.file, &cwd).unwrap_or_else(|| self.file.to_owned())
        } else {
            self.file.to_owned()
        };

        if !self.has_position() {
            write!(f, "{}", relative_path.display())
        } else if self.col == 0 {
            write!(f, "{}:{}", relative_path.display(), self.line)
        } else {
            write!(f, "{}:{}:{}", relative_path.display(), self.line, self.col)
        }
    }
}

/// A location without an associated file path.
///
/// Can be converted to a concrete [CodeLocation] by calling [AbstractLocation::with_file].
pub trait AbstractLocation {
    fn with_file(&self, file: impl Into<PathBuf>) -> CodeLocation;
}

impl AbstractLocation for (usize, usize, usize) {
    fn with_file(&self, file: impl Into<PathBuf>) -> CodeLocation {
        CodeLocation::new(self.0, self.1, self.2, file)
    }
}

#[derive(Clone, Default, Debug, Eq, PartialEq, Serialize, Deserialize, Hash, PartialOrd, Ord)]
pub struct Span {
    pub start: CodeLocation,
    pub stop: CodeLocation,
}

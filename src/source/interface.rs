use std::path::PathBuf;

use thiserror::Error;

use crate::types::Issue;

/// Errors surfaced while loading the issue list.
#[derive(Debug, Error)]
pub enum SourceError {
    #[error("reading issues from {}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("parsing issues from {origin}")]
    Parse {
        origin: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Supplies the ordered, immutable issue list a table is mounted with.
///
/// Implemented by `JsonFileSource`, `BuiltinSource` and `StaticSource`.
/// A source is read exactly once, before the first render.
pub trait IssueSource {
    fn load(&self) -> Result<Vec<Issue>, SourceError>;

    /// Human-readable origin, used in logs and the `check` subcommand.
    fn describe(&self) -> String;
}

use crate::types::Issue;

use super::interface::{IssueSource, SourceError};

/// An in-memory source serving a pre-built issue list.
///
/// Useful for tests and for embedding the table without touching the disk.
#[derive(Debug, Clone, Default)]
pub struct StaticSource(pub Vec<Issue>);

impl IssueSource for StaticSource {
    fn load(&self) -> Result<Vec<Issue>, SourceError> {
        Ok(self.0.clone())
    }

    fn describe(&self) -> String {
        "<static>".to_owned()
    }
}

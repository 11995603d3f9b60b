use std::path::PathBuf;

use crate::types::Issue;

use super::interface::{IssueSource, SourceError};

/// Sample issue list shipped with the binary.
const BUILTIN_ISSUES: &str = include_str!("../../data/issues.json");

/// Loads a JSON array of issues from a file on disk.
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl IssueSource for JsonFileSource {
    fn load(&self) -> Result<Vec<Issue>, SourceError> {
        let contents =
            std::fs::read_to_string(&self.path).map_err(|source| SourceError::Read {
                path: self.path.clone(),
                source,
            })?;
        let issues = parse_issues(&contents, &self.describe())?;
        tracing::info!(path = %self.path.display(), count = issues.len(), "loaded issues");
        Ok(issues)
    }

    fn describe(&self) -> String {
        self.path.display().to_string()
    }
}

/// The embedded sample list, used when no issues file is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct BuiltinSource;

impl IssueSource for BuiltinSource {
    fn load(&self) -> Result<Vec<Issue>, SourceError> {
        let issues = parse_issues(BUILTIN_ISSUES, &self.describe())?;
        tracing::info!(count = issues.len(), "loaded built-in issues");
        Ok(issues)
    }

    fn describe(&self) -> String {
        "<built-in sample>".to_owned()
    }
}

fn parse_issues(json: &str, origin: &str) -> Result<Vec<Issue>, SourceError> {
    serde_json::from_str(json).map_err(|source| SourceError::Parse {
        origin: origin.to_owned(),
        source,
    })
}

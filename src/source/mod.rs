pub mod interface;
pub mod json;
pub mod stub;

pub use interface::{IssueSource, SourceError};
pub use json::{BuiltinSource, JsonFileSource};
pub use stub::StaticSource;

// Shared domain types: used by the issue source, the selection model, and
// the UI layer alike.

pub mod issue;

pub use issue::*;

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize};

// ---------------------------------------------------------------------------
// Issue status
// ---------------------------------------------------------------------------

/// Lifecycle status of an issue. Only open issues are selectable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IssueStatus {
    Open,
    Resolved,
}

impl IssueStatus {
    pub fn label(self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Resolved => "Resolved",
        }
    }
}

impl fmt::Display for IssueStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Issue record
// ---------------------------------------------------------------------------

/// A single issue as supplied by an [`IssueSource`](crate::source::IssueSource).
///
/// Issues are immutable once loaded; the table never writes back.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Issue {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub message: String,
    pub status: IssueStatus,
    #[serde(default)]
    pub num_events: u64,
    #[serde(default)]
    pub num_users: u64,
    /// Weight added to the selection total while the issue is checked.
    #[serde(deserialize_with = "integer_value")]
    pub value: i64,
}

impl Issue {
    pub fn is_open(&self) -> bool {
        self.status == IssueStatus::Open
    }
}

/// Accept only whole numbers for `value`, with an error that says so.
fn integer_value<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    struct IntegerValue;

    impl Visitor<'_> for IntegerValue {
        type Value = i64;

        fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
            f.write_str("an integer value")
        }

        fn visit_i64<E: de::Error>(self, v: i64) -> Result<i64, E> {
            Ok(v)
        }

        fn visit_u64<E: de::Error>(self, v: u64) -> Result<i64, E> {
            i64::try_from(v).map_err(|_| {
                E::custom(format!(
                    "value must be an integer between {} and {}, got {v}",
                    i64::MIN,
                    i64::MAX
                ))
            })
        }

        fn visit_f64<E: de::Error>(self, v: f64) -> Result<i64, E> {
            Err(E::custom(format!("value must be an integer, got {v:?}")))
        }
    }

    deserializer.deserialize_i64(IntegerValue)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_camel_case_fields() {
        let json = r#"{
            "id": "c9613c41-32f0-435e-aef2-b17ce758431b",
            "name": "TypeError",
            "message": "Cannot read properties of undefined (reading 'length')",
            "status": "open",
            "numEvents": 105,
            "numUsers": 56,
            "value": 1
        }"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.name, "TypeError");
        assert_eq!(issue.status, IssueStatus::Open);
        assert_eq!(issue.num_events, 105);
        assert_eq!(issue.num_users, 56);
        assert_eq!(issue.value, 1);
        assert!(issue.is_open());
    }

    #[test]
    fn counts_default_to_zero() {
        let json = r#"{"id":"a","name":"n","status":"resolved","value":3}"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.num_events, 0);
        assert_eq!(issue.num_users, 0);
        assert!(issue.message.is_empty());
        assert!(!issue.is_open());
    }

    #[test]
    fn unknown_status_is_rejected() {
        let json = r#"{"id":"a","name":"n","status":"closed","value":3}"#;
        assert!(serde_json::from_str::<Issue>(json).is_err());
    }

    #[test]
    fn fractional_value_names_the_constraint() {
        let json = r#"{"id":"a","name":"n","status":"open","value":2.5}"#;
        let err = serde_json::from_str::<Issue>(json).unwrap_err();
        assert!(err.to_string().contains("value must be an integer, got 2.5"), "{err}");
    }

    #[test]
    fn value_beyond_i64_is_rejected() {
        let json = r#"{"id":"a","name":"n","status":"open","value":9223372036854775808}"#;
        let err = serde_json::from_str::<Issue>(json).unwrap_err();
        assert!(err.to_string().contains("value must be an integer between"), "{err}");
    }

    #[test]
    fn extreme_values_are_accepted() {
        let json = r#"{"id":"a","name":"n","status":"open","value":-9223372036854775808}"#;
        let issue: Issue = serde_json::from_str(json).unwrap();
        assert_eq!(issue.value, i64::MIN);
    }

    #[test]
    fn status_serializes_lowercase() {
        let s = serde_json::to_string(&IssueStatus::Resolved).unwrap();
        assert_eq!(s, "\"resolved\"");
        assert_eq!(IssueStatus::Open.to_string(), "Open");
    }
}

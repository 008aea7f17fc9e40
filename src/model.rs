//! Todo record projections and request-body decoding.

use serde::{Deserialize, Serialize};

/// List element. `description` is never exposed here.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TodoSummary {
    pub id: i32,
    pub title: String,
    pub is_done: bool,
}

/// Single row as returned by get-by-id.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct TodoDetail {
    pub title: String,
    pub description: String,
    pub is_done: bool,
}

/// Mutable fields as submitted by create and update, echoed back verbatim.
/// Missing fields default; a malformed body decodes as all-zero values
/// rather than being rejected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TodoForm {
    pub title: String,
    pub description: String,
    pub is_done: bool,
}

impl TodoForm {
    /// Lenient body decode: any input that is not a JSON object with the
    /// expected fields yields the zero-valued form.
    pub fn from_body(body: &[u8]) -> Self {
        serde_json::from_slice(body).unwrap_or_default()
    }
}

/// Pre-deletion snapshot returned by delete.
#[derive(Debug, Serialize, sqlx::FromRow)]
pub struct DeletedTodo {
    pub title: String,
    pub description: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn garbage_body_decodes_to_zero_values() {
        assert_eq!(TodoForm::from_body(b"not json at all"), TodoForm::default());
        assert_eq!(TodoForm::from_body(b""), TodoForm::default());
        assert_eq!(TodoForm::from_body(b"[1, 2, 3]"), TodoForm::default());
    }

    #[test]
    fn missing_fields_default() {
        let form = TodoForm::from_body(br#"{"title": "Buy milk"}"#);
        assert_eq!(form.title, "Buy milk");
        assert_eq!(form.description, "");
        assert!(!form.is_done);
    }

    #[test]
    fn full_body_decodes_all_fields() {
        let form = TodoForm::from_body(br#"{"title": "t", "description": "d", "is_done": true}"#);
        assert_eq!(
            form,
            TodoForm {
                title: "t".into(),
                description: "d".into(),
                is_done: true,
            }
        );
    }

    #[test]
    fn summary_never_serializes_description() {
        let summary = TodoSummary {
            id: 1,
            title: "t".into(),
            is_done: false,
        };
        let value = serde_json::to_value(&summary).unwrap();
        let obj = value.as_object().unwrap();
        assert!(!obj.contains_key("description"));
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["id", "is_done", "title"]);
    }

    #[test]
    fn deleted_snapshot_carries_title_and_description_only() {
        let deleted = DeletedTodo {
            title: "t".into(),
            description: "d".into(),
        };
        let value = serde_json::to_value(&deleted).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["description", "title"]);
    }
}

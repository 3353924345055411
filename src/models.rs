//! Frontend Models
//!
//! Data structures matching the remote store's records.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Todo record (matches the store's JSON shape)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Todo {
    /// Server-assigned, unique across the collection
    pub id: u32,
    pub content: String,
    pub completed: bool,
    /// Refreshed whenever the completed flag is toggled; absent on
    /// records that were never completed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_store_records_with_and_without_completed_time() {
        let body = r#"[
            {"id": 1, "content": "buy milk", "completed": false},
            {"id": 2, "content": "call mom", "completed": true, "completed_time": "2024-05-01T12:30:00.000Z"}
        ]"#;

        let todos: Vec<Todo> = serde_json::from_str(body).unwrap();

        assert_eq!(todos.len(), 2);
        assert_eq!(todos[0].id, 1);
        assert_eq!(todos[0].content, "buy milk");
        assert!(!todos[0].completed);
        assert_eq!(todos[0].completed_time, None);
        assert!(todos[1].completed);
        let time = todos[1].completed_time.expect("completed_time parsed");
        assert_eq!(time.to_rfc3339(), "2024-05-01T12:30:00+00:00");
    }

    #[test]
    fn never_completed_records_serialize_without_a_time_field() {
        let todo = Todo {
            id: 7,
            content: "water plants".to_string(),
            completed: false,
            completed_time: None,
        };

        let value = serde_json::to_value(&todo).unwrap();
        let keys: Vec<&String> = value.as_object().unwrap().keys().collect();
        assert_eq!(keys, ["completed", "content", "id"]);
    }

    #[test]
    fn rejects_malformed_timestamps() {
        let body = r#"{"id": 3, "content": "x", "completed": true, "completed_time": "not a date"}"#;
        assert!(serde_json::from_str::<Todo>(body).is_err());
    }
}

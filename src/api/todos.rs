//! Todo Commands
//!
//! One function per backend operation. Every mutation returns the record
//! as the server stored it, so callers update local state from the
//! response rather than from what they sent.

use chrono::{DateTime, Utc};
use gloo_net::http::Request;
use serde::Serialize;

use super::{ApiError, TODOS_PATH};
use crate::models::Todo;

// ========================
// Argument Structs
// ========================

/// Body for creating a todo
#[derive(Debug, Serialize)]
pub struct CreateTodoArgs<'a> {
    pub content: &'a str,
    pub completed: bool,
}

/// Body for partially updating a todo. `None` fields are left out of the
/// JSON entirely, so the server keeps their stored values.
#[derive(Debug, Default, Serialize)]
pub struct UpdateTodoArgs<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub content: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub completed_time: Option<DateTime<Utc>>,
}

// ========================
// Commands
// ========================

/// Fetch every todo in the collection
pub async fn list_todos() -> Result<Vec<Todo>, ApiError> {
    let resp = Request::get(TODOS_PATH)
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Create a todo and return the stored record (with its assigned id)
pub async fn create_todo(args: &CreateTodoArgs<'_>) -> Result<Todo, ApiError> {
    let resp = Request::post(TODOS_PATH)
        .json(args)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Patch the todo with the given id and return the updated record
pub async fn update_todo(id: u32, args: &UpdateTodoArgs<'_>) -> Result<Todo, ApiError> {
    let resp = Request::patch(&format!("{}/{}", TODOS_PATH, id))
        .json(args)
        .map_err(|e| ApiError::Encode(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    resp.json().await.map_err(|e| ApiError::Decode(e.to_string()))
}

/// Delete the todo with the given id
pub async fn delete_todo(id: u32) -> Result<(), ApiError> {
    let resp = Request::delete(&format!("{}/{}", TODOS_PATH, id))
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;
    if !resp.ok() {
        return Err(ApiError::Status(resp.status()));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use serde_json::json;

    #[test]
    fn create_args_serialize_content_and_completed_only() {
        let args = CreateTodoArgs {
            content: "buy milk",
            completed: false,
        };

        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value, json!({ "content": "buy milk", "completed": false }));
    }

    #[test]
    fn update_args_leave_unset_fields_out_of_the_body() {
        let args = UpdateTodoArgs {
            content: Some("buy oat milk"),
            ..Default::default()
        };

        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(value, json!({ "content": "buy oat milk" }));
    }

    #[test]
    fn completion_toggle_carries_flag_and_timestamp_together() {
        let when = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();
        let args = UpdateTodoArgs {
            completed: Some(true),
            completed_time: Some(when),
            ..Default::default()
        };

        let value = serde_json::to_value(&args).unwrap();
        assert_eq!(
            value,
            json!({ "completed": true, "completed_time": "2024-05-01T12:30:00Z" })
        );
    }
}

//! Standard response envelope: `{data, status, message}` on every todo response.

use axum::{http::StatusCode, Json};
use serde::Serialize;

pub const MESSAGE_SUCCESS: &str = "Success";
pub const MESSAGE_FAILED: &str = "Failed";

/// Uniform wrapper for every todo response body. `status` mirrors the HTTP
/// status of the response carrying it.
#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub data: Option<T>,
    pub status: u16,
    pub message: &'static str,
}

pub fn ok<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::OK,
        Json(Envelope {
            data: Some(data),
            status: StatusCode::OK.as_u16(),
            message: MESSAGE_SUCCESS,
        }),
    )
}

pub fn created<T: Serialize>(data: T) -> (StatusCode, Json<Envelope<T>>) {
    (
        StatusCode::CREATED,
        Json(Envelope {
            data: Some(data),
            status: StatusCode::CREATED.as_u16(),
            message: MESSAGE_SUCCESS,
        }),
    )
}

pub fn failed(status: StatusCode) -> (StatusCode, Json<Envelope<()>>) {
    (
        status,
        Json(Envelope {
            data: None,
            status: status.as_u16(),
            message: MESSAGE_FAILED,
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn envelope_serializes_exactly_three_fields() {
        let (_, Json(body)) = ok("payload");
        let value = serde_json::to_value(&body).unwrap();
        let obj = value.as_object().unwrap();
        let mut keys: Vec<_> = obj.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, vec!["data", "message", "status"]);
        assert_eq!(obj["data"], "payload");
        assert_eq!(obj["status"], 200);
        assert_eq!(obj["message"], MESSAGE_SUCCESS);
    }

    #[test]
    fn created_mirrors_201_in_body() {
        let (status, Json(body)) = created(serde_json::json!({"title": "x"}));
        assert_eq!(status, StatusCode::CREATED);
        assert_eq!(body.status, 201);
        assert_eq!(body.message, MESSAGE_SUCCESS);
    }

    #[test]
    fn failed_carries_null_data() {
        let (status, Json(body)) = failed(StatusCode::NOT_FOUND);
        assert_eq!(status, StatusCode::NOT_FOUND);
        let value = serde_json::to_value(&body).unwrap();
        assert_eq!(value["data"], serde_json::Value::Null);
        assert_eq!(value["status"], 404);
        assert_eq!(value["message"], MESSAGE_FAILED);
    }
}

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::Value;

/// JSON body of every API response. Successful replies carry `data`, failures carry `error`.
#[derive(Serialize)]
pub struct Envelope<T: Serialize> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<ErrorBody>,
}

#[derive(Serialize)]
pub struct ErrorBody {
    pub code: &'static str,
    pub message: String,
    /// Field-level messages for rejected user records.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<Value>,
}

impl<T: Serialize> Envelope<T> {
    fn reply(self, status: StatusCode) -> Response {
        (status, Json(self)).into_response()
    }
}

fn with_data<T: Serialize>(status: StatusCode, data: T, message: impl Into<String>) -> Response {
    Envelope {
        success: true,
        data: Some(data),
        message: Some(message.into()),
        error: None,
    }
    .reply(status)
}

pub fn success<T: Serialize>(payload: T, message: impl Into<String>) -> Response {
    with_data(StatusCode::OK, payload, message)
}

pub fn created<T: Serialize>(payload: T, message: impl Into<String>) -> Response {
    with_data(StatusCode::CREATED, payload, message)
}

pub fn error(
    code: &'static str,
    message: impl Into<String>,
    details: Option<Value>,
    status: StatusCode,
) -> Response {
    Envelope::<()> {
        success: false,
        data: None,
        message: None,
        error: Some(ErrorBody {
            code,
            message: message.into(),
            details,
        }),
    }
    .reply(status)
}

//! HTTP responses for replies and errors

use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};

use crate::error::CacheError;
use crate::protocol::{encode_snapshot, Reply};

impl IntoResponse for Reply {
    fn into_response(self) -> Response {
        match self {
            Reply::Done => StatusCode::OK.into_response(),
            Reply::Value(value) => (
                StatusCode::OK,
                [(header::CONTENT_TYPE, "application/octet-stream")],
                value,
            )
                .into_response(),
            Reply::Snapshot(snapshot) => match encode_snapshot(&snapshot) {
                Ok(json) => (
                    StatusCode::OK,
                    [(header::CONTENT_TYPE, "application/json")],
                    json,
                )
                    .into_response(),
                Err(e) => e.into_response(),
            },
        }
    }
}

impl IntoResponse for CacheError {
    fn into_response(self) -> Response {
        let status = StatusCode::from_u16(self.status_code())
            .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

        if self.is_not_found() {
            tracing::debug!("{}", self);
        } else {
            tracing::error!("{}", self);
        }

        (status, self.to_string()).into_response()
    }
}

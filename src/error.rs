use axum::http::HeaderValue;
use axum::response::{IntoResponse, Response};
use axum::Json;
use hyper::{header, StatusCode};
use serde_json::json;
use thiserror::Error;

use crate::response::SingleLine;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("invalid credentials")]
    Unauthorized,
    #[error("user {username} not in group {group}")]
    Forbidden { username: String, group: String },
    #[error("directory failure: {0}")]
    Internal(String),
    #[error("missing or invalid authorization header")]
    InvalidAuthorizationHeader,
    #[error("invalid request body")]
    InvalidRequestBody,
}

impl Error {
    pub fn status_code(&self) -> StatusCode {
        use Error::*;
        match self {
            Unauthorized => StatusCode::UNAUTHORIZED,
            Forbidden { .. } => StatusCode::FORBIDDEN,
            Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
            InvalidAuthorizationHeader => StatusCode::UNAUTHORIZED,
            InvalidRequestBody => StatusCode::BAD_REQUEST,
        }
    }

    // Basic challenge so HTTP clients know how to retry.
    pub(crate) fn challenge(&self, response: &mut Response) {
        if self.status_code() == StatusCode::UNAUTHORIZED {
            response
                .headers_mut()
                .insert(header::WWW_AUTHENTICATE, HeaderValue::from_static("Basic"));
        }
    }
}

impl SingleLine for Error {
    fn single_lined(&self) -> String {
        self.to_string()
    }
}

impl IntoResponse for Error {
    fn into_response(self) -> Response {
        let mut response = (
            self.status_code(),
            Json(json!({
                "success": false,
                "error": self.to_string(),
            })),
        )
            .into_response();
        self.challenge(&mut response);
        response
    }
}

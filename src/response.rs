use std::convert::Infallible;

use async_trait::async_trait;
use axum::extract::{FromRequest, RequestParts};
use axum::response::{IntoResponse, Response};
use axum::Json;
use hyper::{header, StatusCode};
use serde::Serialize;

use crate::Error;

/// Body format requested through the `Accept` header. Anything but `text/plain` gets JSON.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ResponseType {
    Json,
    Text,
}

#[async_trait]
impl<B: Send> FromRequest<B> for ResponseType {
    type Rejection = Infallible;

    async fn from_request(req: &mut RequestParts<B>) -> Result<Self, Self::Rejection> {
        Ok(
            match req.headers().get(header::ACCEPT).map(|h| h.as_bytes()) {
                Some(b"text/plain") => ResponseType::Text,
                _ => ResponseType::Json,
            },
        )
    }
}

impl ResponseType {
    pub fn to_api_response<C: SingleLine + Serialize>(self, content: C) -> Response {
        match self {
            ResponseType::Text => (StatusCode::OK, content.single_lined()).into_response(),
            ResponseType::Json => (
                StatusCode::OK,
                Json(Success {
                    success: true,
                    content,
                }),
            )
                .into_response(),
        }
    }

    pub fn to_api_error(self, err: Error) -> Response {
        match self {
            ResponseType::Text => {
                let mut response = (err.status_code(), err.single_lined()).into_response();
                err.challenge(&mut response);
                response
            }
            ResponseType::Json => err.into_response(),
        }
    }
}

#[derive(Serialize)]
struct Success<C> {
    success: bool,
    #[serde(flatten)]
    content: C,
}

pub trait SingleLine {
    fn single_lined(&self) -> String;
}

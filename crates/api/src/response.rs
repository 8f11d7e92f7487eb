//! Shared response helpers for API handlers.
//!
//! Resources are returned bare (no envelope). Creation responses carry a
//! `Location` header pointing at the new resource.

use axum::http::header::LOCATION;
use axum::http::{HeaderValue, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use noteful_core::types::DbId;
use serde::Serialize;

/// `201 Created` with a `Location` header and the created resource as body.
#[derive(Debug)]
pub struct Created<T: Serialize> {
    /// Absolute path of the new resource, e.g. `/api/notes/1010`.
    pub location: String,
    pub body: T,
}

impl<T: Serialize> Created<T> {
    /// Build a response whose location is `{collection_path}/{id}`.
    ///
    /// `collection_path` is the request path the resource was posted to;
    /// a trailing slash is tolerated.
    pub fn at(collection_path: &str, id: DbId, body: T) -> Self {
        Self {
            location: format!("{}/{id}", collection_path.trim_end_matches('/')),
            body,
        }
    }
}

impl<T: Serialize> IntoResponse for Created<T> {
    fn into_response(self) -> Response {
        let mut response = (StatusCode::CREATED, Json(self.body)).into_response();
        if let Ok(value) = HeaderValue::from_str(&self.location) {
            response.headers_mut().insert(LOCATION, value);
        }
        response
    }
}

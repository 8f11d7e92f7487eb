use axum::extract::OriginalUri;

use crate::error::AppError;

/// Terminal handler for requests that neither an API route nor a static
/// file matched, and for known paths hit with an unsupported method.
pub async fn not_found(OriginalUri(uri): OriginalUri) -> AppError {
    tracing::debug!(path = %uri.path(), "No route matched");
    AppError::RouteNotFound(uri.path().to_string())
}

//! Request extractors.

use axum::extract::{FromRequest, Request};
use axum::Json;

use super::error::ApiError;

/// JSON body extractor whose rejection is an [`ApiError`].
///
/// Behaves like [`axum::Json`], but malformed bodies get the
/// `{"success": false, "error": ...}` shape instead of plain text.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApiJson<T>(pub T);

impl<S, T> FromRequest<S> for ApiJson<T>
where
    Json<T>: FromRequest<S, Rejection = axum::extract::rejection::JsonRejection>,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        Ok(Self(value))
    }
}

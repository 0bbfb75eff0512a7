//! Axum extractors for session authentication

use std::convert::Infallible;
use std::future::Future;

use axum::{extract::FromRequestParts, http::header, http::request::Parts};

/// The bearer session token from the `Authorization` header, when present.
///
/// Absence is not an extractor rejection: the reconciliation procedure maps
/// a missing identity to 403 itself, so handlers receive `None` and decide.
pub struct SessionToken(pub Option<String>);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    #[allow(clippy::manual_async_fn)]
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl Future<Output = Result<Self, Self::Rejection>> + Send {
        async move {
            let token = parts
                .headers
                .get(header::AUTHORIZATION)
                .and_then(|value| value.to_str().ok())
                .and_then(|value| value.strip_prefix("Bearer "))
                .map(str::to_owned);

            Ok(SessionToken(token))
        }
    }
}

//! Request extractors.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

/// Header carrying the acting user's identity, provided by the upstream
/// identity layer.
pub const ACTOR_HEADER: &str = "x-acting-user";

/// Fallback identity when no actor header is present.
pub const ANONYMOUS_ACTOR: &str = "anonymous";

/// The identity performing the current request, used for audit stamping.
///
/// Read from the `x-acting-user` header; authentication itself happens
/// upstream, this service only consumes the resulting identity string.
#[derive(Debug, Clone)]
pub struct Actor(pub String);

impl<S> FromRequestParts<S> for Actor
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let actor = parts
            .headers
            .get(ACTOR_HEADER)
            .and_then(|value| value.to_str().ok())
            .filter(|value| !value.trim().is_empty())
            .unwrap_or(ANONYMOUS_ACTOR)
            .to_string();

        Ok(Actor(actor))
    }
}

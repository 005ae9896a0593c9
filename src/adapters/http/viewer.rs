//! Viewer identity for plan endpoints.
//!
//! Identity comes from an upstream session layer as an `X-User-Id` header.
//! A missing or blank header means an anonymous viewer; plans are still
//! shown, at the free tier.

use async_trait::async_trait;
use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use crate::domain::foundation::UserId;

/// Header carrying the authenticated user's id.
pub const USER_ID_HEADER: &str = "X-User-Id";

/// The viewer of a request, if signed in.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Viewer(pub Option<UserId>);

impl Viewer {
    pub fn into_inner(self) -> Option<UserId> {
        self.0
    }
}

#[async_trait]
impl<S> FromRequestParts<S> for Viewer
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let user_id = parts
            .headers
            .get(USER_ID_HEADER)
            .and_then(|v| v.to_str().ok())
            .and_then(|s| UserId::new(s).ok());

        Ok(Viewer(user_id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::Request;

    async fn extract(header: Option<&str>) -> Viewer {
        let mut builder = Request::builder().uri("/api/plans");
        if let Some(value) = header {
            builder = builder.header(USER_ID_HEADER, value);
        }
        let (mut parts, _) = builder.body(()).unwrap().into_parts();
        Viewer::from_request_parts(&mut parts, &()).await.unwrap()
    }

    #[tokio::test]
    async fn header_present() {
        let viewer = extract(Some("user-42")).await;
        assert_eq!(viewer.into_inner().unwrap().as_str(), "user-42");
    }

    #[tokio::test]
    async fn header_missing_is_anonymous() {
        assert_eq!(extract(None).await, Viewer(None));
    }

    #[tokio::test]
    async fn blank_header_is_anonymous() {
        assert_eq!(extract(Some("   ")).await, Viewer(None));
    }
}

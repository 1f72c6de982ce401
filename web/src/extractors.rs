//! Custom Axum extractors.
//!
//! # Examples
//!
//! ```ignore
//! async fn delete_handler(ajax: Ajax) -> Response {
//!     if ajax.0 {
//!         StatusCode::NO_CONTENT.into_response()
//!     } else {
//!         Redirect::to("/lists").into_response()
//!     }
//! }
//! ```

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

/// Header value browsers send for `XMLHttpRequest`-style calls.
const XHR_HEADER_VALUE: &str = "XMLHttpRequest";

/// Whether the request came from an AJAX call.
///
/// Detected from the `X-Requested-With` header; deletion endpoints return a
/// bare success indicator on this path instead of issuing a redirect.
#[derive(Debug, Clone, Copy)]
pub struct Ajax(pub bool);

#[async_trait]
impl<S> FromRequestParts<S> for Ajax
where
    S: Send + Sync,
{
    type Rejection = std::convert::Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let is_ajax = parts
            .headers
            .get("X-Requested-With")
            .and_then(|v| v.to_str().ok())
            .is_some_and(|v| v == XHR_HEADER_VALUE);

        Ok(Self(is_ajax))
    }
}

#[cfg(test)]
#[allow(clippy::expect_used)] // Test code can use expect
mod tests {
    use super::*;
    use axum::http::Request;

    #[tokio::test]
    async fn detects_xml_http_request() {
        let req = Request::builder()
            .header("X-Requested-With", "XMLHttpRequest")
            .body(())
            .expect("Valid request");

        let (mut parts, ()) = req.into_parts();
        let ajax = Ajax::from_request_parts(&mut parts, &())
            .await
            .expect("Should extract");

        assert!(ajax.0);
    }

    #[tokio::test]
    async fn absent_header_is_not_ajax() {
        let req = Request::builder().body(()).expect("Valid request");

        let (mut parts, ()) = req.into_parts();
        let ajax = Ajax::from_request_parts(&mut parts, &())
            .await
            .expect("Should extract");

        assert!(!ajax.0);
    }

    #[tokio::test]
    async fn other_values_are_not_ajax() {
        let req = Request::builder()
            .header("X-Requested-With", "fetch")
            .body(())
            .expect("Valid request");

        let (mut parts, ()) = req.into_parts();
        let ajax = Ajax::from_request_parts(&mut parts, &())
            .await
            .expect("Should extract");

        assert!(!ajax.0);
    }
}

//! Liveness endpoint for hosting platforms that health-check an HTTP port.

use axum::{routing::get, Router};
use std::net::{Ipv4Addr, SocketAddr};
use tower_http::trace::TraceLayer;
use tracing::info;

/// Body returned by `GET /`.
pub const LIVENESS_BODY: &str = "Hello World";

/// Router answering `GET /` with [`LIVENESS_BODY`]; every other path is 404.
pub fn router() -> Router {
    Router::new()
        .route("/", get(root))
        .layer(TraceLayer::new_for_http())
}

async fn root() -> &'static str {
    LIVENESS_BODY
}

/// Serves the liveness router on all interfaces until the process exits.
pub async fn serve(port: u16) -> std::io::Result<()> {
    let addr = SocketAddr::from((Ipv4Addr::UNSPECIFIED, port));
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Liveness endpoint listening on {}", listener.local_addr()?);

    axum::serve(listener, router()).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{to_bytes, Body};
    use axum::http::{Method, Request, StatusCode};
    use tower::ServiceExt;

    async fn call(method: Method, uri: &str) -> (StatusCode, String) {
        let response = router()
            .oneshot(
                Request::builder()
                    .method(method)
                    .uri(uri)
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, String::from_utf8(body.to_vec()).unwrap())
    }

    #[tokio::test]
    async fn test_root_says_hello() {
        let (status, body) = call(Method::GET, "/").await;
        assert_eq!(status, StatusCode::OK);
        assert_eq!(body, "Hello World");
    }

    #[tokio::test]
    async fn test_unknown_path_is_not_found() {
        let (status, _) = call(Method::GET, "/status").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_root_rejects_post() {
        let (status, _) = call(Method::POST, "/").await;
        assert_eq!(status, StatusCode::METHOD_NOT_ALLOWED);
    }
}

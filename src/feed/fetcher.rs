//! Single fetch attempt against the product feed endpoint.
//!
//! Retry scheduling lives in [`super::controller`]; this module performs
//! exactly one HTTP GET, validates the payload shape, and maps every
//! failure into the display-facing [`FetchError`] taxonomy.

use super::transform::transform_feed;
use super::types::{DisplayPost, FeedPage};
use thiserror::Error;

/// Default feed endpoint.
pub const DEFAULT_FEED_URL: &str = "https://dummyjson.com/products";

/// Errors a fetch attempt can surface.
///
/// All of these are caught at the controller boundary and shown to the
/// user as their `Display` string; none propagate further.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Network-level error (DNS, connection, TLS, body read, etc.)
    #[error("Request failed: {0}")]
    Network(#[from] reqwest::Error),
    /// HTTP response with a non-2xx status code
    #[error("HTTP error! status: {0}")]
    HttpStatus(u16),
    /// Payload decoded but the `products` sequence is missing or malformed
    #[error("Invalid data structure received from API")]
    Shape,
    /// Fallback for anything that fits no other kind
    #[error("An unknown error occurred")]
    Unknown,
}

/// Performs one GET against `url` and returns the transformed posts.
///
/// # Errors
///
/// - [`FetchError::Network`] when the request cannot be sent or the body
///   cannot be read
/// - [`FetchError::HttpStatus`] for non-success status codes
/// - [`FetchError::Shape`] when the payload is not a feed page with a
///   `products` sequence
pub async fn fetch_posts(
    client: &reqwest::Client,
    url: &str,
) -> Result<Vec<DisplayPost>, FetchError> {
    let response = client.get(url).send().await.map_err(FetchError::Network)?;

    let status = response.status();
    if !status.is_success() {
        return Err(FetchError::HttpStatus(status.as_u16()));
    }

    let body = response.bytes().await.map_err(FetchError::Network)?;

    // Decode failures are treated as malformed payloads rather than
    // transport problems: the server answered, but not with a feed page.
    let page: FeedPage = serde_json::from_slice(&body).map_err(|e| {
        tracing::debug!(error = %e, "Feed payload failed to decode");
        FetchError::Shape
    })?;

    let products = page.products.ok_or(FetchError::Shape)?;

    Ok(transform_feed(products))
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::method;
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const VALID_PAGE: &str = r#"{
        "products": [
            {"id": 1, "title": "First", "description": "One", "rating": 4.5, "brand": "X", "category": "Y"},
            {"id": 2, "title": "Second", "description": "Two", "rating": 3.0, "brand": "Z", "category": "Y"}
        ],
        "total": 2, "skip": 0, "limit": 2
    }"#;

    #[tokio::test]
    async fn test_fetch_success_transforms_items() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(VALID_PAGE)
                    .insert_header("Content-Type", "application/json"),
            )
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let posts = fetch_posts(&client, &server.uri()).await.unwrap();
        assert_eq!(posts.len(), 2);
        assert_eq!(posts[0].id, 1);
        assert_eq!(posts[0].title, "First");
        assert_eq!(posts[1].brand, "Z");
    }

    #[tokio::test]
    async fn test_fetch_error_status_includes_code() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(500))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let err = fetch_posts(&client, &server.uri()).await.unwrap_err();
        match err {
            FetchError::HttpStatus(500) => {}
            e => panic!("Expected HttpStatus(500), got {:?}", e),
        }
        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_fetch_missing_products_is_shape_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{}"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let err = fetch_posts(&client, &server.uri()).await.unwrap_err();
        assert_eq!(err.to_string(), "Invalid data structure received from API");
    }

    #[tokio::test]
    async fn test_fetch_invalid_json_is_shape_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let err = fetch_posts(&client, &server.uri()).await.unwrap_err();
        match err {
            FetchError::Shape => {}
            e => panic!("Expected Shape, got {:?}", e),
        }
    }

    #[tokio::test]
    async fn test_fetch_empty_products_is_ok_and_empty() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_string(r#"{"products": [], "total": 0, "skip": 0, "limit": 0}"#),
            )
            .mount(&server)
            .await;

        let client = reqwest::Client::new();
        let posts = fetch_posts(&client, &server.uri()).await.unwrap();
        assert!(posts.is_empty());
    }

    #[tokio::test]
    async fn test_fetch_unreachable_is_network_error() {
        // Port 1 on localhost refuses connections
        let client = reqwest::Client::new();
        let err = fetch_posts(&client, "http://127.0.0.1:1/products")
            .await
            .unwrap_err();
        match err {
            FetchError::Network(_) => {}
            e => panic!("Expected Network, got {:?}", e),
        }
        assert!(err.to_string().starts_with("Request failed:"));
    }
}

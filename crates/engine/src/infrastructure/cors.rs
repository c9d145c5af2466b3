//! CORS policy for the Apps Script add-on and the browser extension

use axum::http::{header, HeaderValue, Method};
use tower_http::cors::{Any, CorsLayer};

use super::AppConfig;

/// Build the CORS layer from configuration.
///
/// Returns `None` when no configured origin is a valid header value.
pub fn build_cors_layer(config: &AppConfig) -> Option<CorsLayer> {
    let cors = CorsLayer::new()
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        // JSON bodies trigger preflights from browsers
        .allow_headers([header::CONTENT_TYPE])
        .expose_headers([header::CONTENT_DISPOSITION]);

    if config.allows_any_origin() {
        return Some(cors.allow_origin(Any));
    }

    let origins: Vec<HeaderValue> = config
        .cors_allowed_origins
        .iter()
        .filter_map(|s| HeaderValue::from_str(s).ok())
        .collect();

    if origins.is_empty() {
        tracing::warn!("No valid CORS origins configured, cross-origin requests will be refused");
        return None;
    }

    Some(cors.allow_origin(origins))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    use axum::body::Body;
    use axum::http::{Request, StatusCode};
    use tower::ServiceExt;

    use crate::{api, App};

    fn router_with(config: AppConfig) -> axum::Router {
        api::router(Arc::new(App::new(config)))
    }

    fn preflight(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::OPTIONS)
            .uri("/export/fdx")
            .header(header::ORIGIN, origin)
            .header(header::ACCESS_CONTROL_REQUEST_METHOD, "POST")
            .header(header::ACCESS_CONTROL_REQUEST_HEADERS, "content-type")
            .body(Body::empty())
            .unwrap()
    }

    fn export_from(origin: &str) -> Request<Body> {
        Request::builder()
            .method(Method::POST)
            .uri("/export/fdx")
            .header(header::ORIGIN, origin)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(
                r#"{"title": "Mon Film", "elements": [{"type": "ACTION", "text": "Rain."}]}"#,
            ))
            .unwrap()
    }

    #[tokio::test]
    async fn test_preflight_allows_any_origin() {
        let response = router_with(AppConfig::default())
            .oneshot(preflight("https://docs.google.com"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        let methods = headers[header::ACCESS_CONTROL_ALLOW_METHODS].to_str().unwrap();
        assert!(methods.contains("POST"));
        let allowed = headers[header::ACCESS_CONTROL_ALLOW_HEADERS].to_str().unwrap();
        assert!(allowed.contains("content-type"));
    }

    #[tokio::test]
    async fn test_export_exposes_content_disposition() {
        let response = router_with(AppConfig::default())
            .oneshot(export_from("chrome-extension://abcdef"))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let headers = response.headers();
        assert_eq!(headers[header::ACCESS_CONTROL_ALLOW_ORIGIN], "*");
        assert_eq!(
            headers[header::ACCESS_CONTROL_EXPOSE_HEADERS],
            "content-disposition"
        );
        assert!(headers.contains_key(header::CONTENT_DISPOSITION));
    }

    #[tokio::test]
    async fn test_origin_list_only_echoes_listed_origins() {
        let config = AppConfig {
            cors_allowed_origins: vec!["https://docs.google.com".to_string()],
            ..AppConfig::default()
        };

        let allowed = router_with(config.clone())
            .oneshot(export_from("https://docs.google.com"))
            .await
            .unwrap();
        assert_eq!(
            allowed.headers()[header::ACCESS_CONTROL_ALLOW_ORIGIN],
            "https://docs.google.com"
        );

        let refused = router_with(config)
            .oneshot(export_from("https://evil.example"))
            .await
            .unwrap();
        assert!(!refused
            .headers()
            .contains_key(header::ACCESS_CONTROL_ALLOW_ORIGIN));
    }

    #[test]
    fn test_any_origin_builds_layer() {
        assert!(build_cors_layer(&AppConfig::default()).is_some());
    }

    #[test]
    fn test_invalid_origins_build_nothing() {
        let config = AppConfig {
            cors_allowed_origins: vec!["bad\norigin".to_string()],
            ..AppConfig::default()
        };
        assert!(build_cors_layer(&config).is_none());
    }

    #[test]
    fn test_origin_list_builds_layer() {
        let config = AppConfig {
            cors_allowed_origins: vec!["https://docs.google.com".to_string()],
            ..AppConfig::default()
        };
        assert!(build_cors_layer(&config).is_some());
    }
}

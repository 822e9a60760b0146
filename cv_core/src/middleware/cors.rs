//! CORS (Cross-Origin Resource Sharing) middleware configuration

use crate::config::CorsConfig;
use axum::http::{HeaderName, HeaderValue, Method};
use std::time::Duration;
use tower_http::cors::CorsLayer;
use tracing::warn;

/// Builds a CORS layer for the configured origins, or `None` when no origin
/// is configured and the site should only be used same-origin.
pub fn cors_layer_from_config(config: &CorsConfig) -> Option<CorsLayer> {
    let origins: Vec<HeaderValue> = config
        .allowed_origins
        .iter()
        .filter_map(|origin| match origin.parse::<HeaderValue>() {
            Ok(value) => Some(value),
            Err(_) => {
                warn!(origin = %origin, "ignoring invalid CORS origin");
                None
            }
        })
        .collect();

    if origins.is_empty() {
        return None;
    }

    Some(
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
            .allow_headers([
                HeaderName::from_static("content-type"),
                HeaderName::from_static("accept"),
            ])
            .max_age(Duration::from_secs(config.max_age_seconds)),
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_origins_disables_cors() {
        assert!(cors_layer_from_config(&CorsConfig::default()).is_none());
    }

    #[test]
    fn test_invalid_origins_are_skipped() {
        let config = CorsConfig {
            allowed_origins: vec!["bad\norigin".to_string()],
            max_age_seconds: 60,
        };
        assert!(cors_layer_from_config(&config).is_none());

        let config = CorsConfig {
            allowed_origins: vec!["bad\norigin".to_string(), "https://example.com".to_string()],
            max_age_seconds: 60,
        };
        assert!(cors_layer_from_config(&config).is_some());
    }
}

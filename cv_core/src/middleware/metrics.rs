//! Feeds finished requests into the metrics collector

use crate::metrics::UNMATCHED_ROUTE;
use crate::site::STATIC_PATH;
use crate::AppState;
use axum::{
    body::Body,
    extract::{MatchedPath, State},
    http::{Method, Request},
    middleware::Next,
    response::Response,
};

pub async fn metrics_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let route = route_label(
        request.extensions().get::<MatchedPath>().map(MatchedPath::as_str),
        request.uri().path(),
    );
    let is_submission = request.method() == Method::POST && route == state.routes.submit_path;

    let response = next.run(request).await;

    state
        .metrics
        .record(&route, response.status().as_u16(), is_submission);

    response
}

/// Static assets share one label so they are not counted with real 404s.
fn route_label(matched: Option<&str>, path: &str) -> String {
    let is_static = path
        .strip_prefix(STATIC_PATH)
        .is_some_and(|rest| rest.is_empty() || rest.starts_with('/'));

    if is_static {
        return STATIC_PATH.to_string();
    }

    matched.unwrap_or(UNMATCHED_ROUTE).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_route_label() {
        assert_eq!(route_label(Some("/about"), "/about"), "/about");
        assert_eq!(route_label(None, "/nope"), UNMATCHED_ROUTE);
        assert_eq!(route_label(None, "/static/css/terminal.css"), "/static");
        assert_eq!(route_label(None, "/static/missing.js"), "/static");
        assert_eq!(route_label(None, "/staticky"), UNMATCHED_ROUTE);
    }
}

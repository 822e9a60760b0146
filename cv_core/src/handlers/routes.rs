//! Router construction from a route table

use crate::{
    handlers::{contact, health, pages},
    site::RouteTable,
    AppState,
};
use axum::{
    extract::State,
    routing::{get, post},
    Router,
};

/// One GET route per page in `table`, the contact endpoint at
/// `table.submit_path`, the operational endpoints and an HTML 404 fallback.
pub fn create_routes(table: &RouteTable) -> Router<AppState> {
    let mut router = Router::new();

    for route in table.pages.iter().copied() {
        router = router.route(
            route.path,
            get(move |State(state): State<AppState>| pages::render_page(state, route)),
        );
    }

    router
        .route(table.submit_path, post(contact::handle_send_email))
        .route("/health", get(health::handle_health))
        .route("/metrics", get(health::handle_metrics))
        .fallback(pages::handle_not_found)
}

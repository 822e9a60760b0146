//! Page handlers

use crate::{error::Result, site::templates, site::PageRoute, AppState};
use axum::{
    extract::State,
    http::{StatusCode, Uri},
    response::{Html, IntoResponse},
};
use tracing::debug;

/// Renders the template behind one entry of the route table.
pub async fn render_page(state: AppState, route: PageRoute) -> Result<Html<String>> {
    let html = templates::render_page(route.page, state.page_context(route.path))?;
    Ok(Html(html))
}

pub async fn handle_not_found(State(state): State<AppState>, uri: Uri) -> Result<impl IntoResponse> {
    debug!(path = %uri.path(), "no page for path");

    let html = templates::render_not_found(state.page_context(uri.path()), uri.path())?;
    Ok((StatusCode::NOT_FOUND, Html(html)))
}

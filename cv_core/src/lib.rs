//! Core library for the terminal résumé site: page routes, the contact
//! endpoint, configuration and server bootstrap.

pub mod config;
pub mod contact;
pub mod error;
pub mod extractors;
pub mod handlers;
pub mod metrics;
pub mod middleware;
pub mod site;

pub use config::AppConfig;
pub use contact::{ContactError, ContactField, ContactPolicy, Submission, SubmissionResponse};
pub use error::{AppError, Result};
pub use handlers::routes::create_routes;
pub use metrics::MetricsCollector;
pub use middleware::cors::cors_layer_from_config;
pub use site::{PageContext, RouteTable, SiteVariant};

use axum::{middleware as axum_middleware, Router};
use std::{net::SocketAddr, sync::Arc};
use tokio::signal;
use tower_http::services::ServeDir;
use tracing::{info, warn};

#[derive(Clone)]
pub struct AppState {
    pub app_name: String,
    pub version: String,
    pub site_title: String,
    pub owner: String,
    pub routes: Arc<RouteTable>,
    pub contact: Arc<ContactPolicy>,
    pub metrics: MetricsCollector,
}

impl Default for AppState {
    fn default() -> Self {
        let config = AppConfig::default();
        Self::new(&config, RouteTable::for_variant(config.site.variant))
    }
}

impl AppState {
    /// State for serving `routes`. The contact policy follows the route
    /// table's variant, with the `contact` config overrides applied.
    pub fn new(config: &AppConfig, routes: RouteTable) -> Self {
        let contact = ContactPolicy::from_config(routes.variant, &config.contact);

        Self {
            app_name: "terminal-cv".to_string(),
            version: env!("CARGO_PKG_VERSION").to_string(),
            site_title: config.site.title.clone(),
            owner: config.site.owner.clone(),
            routes: Arc::new(routes),
            contact: Arc::new(contact),
            metrics: MetricsCollector::new(),
        }
    }

    pub fn page_context(&self, current_path: &str) -> PageContext {
        PageContext {
            site_title: self.site_title.clone(),
            owner: self.owner.clone(),
            variant: self.routes.variant,
            nav: self.routes.nav_for(current_path),
            submit_path: self.routes.submit_path,
            version: self.version.clone(),
        }
    }
}

pub fn create_app(state: AppState) -> Router {
    create_app_with_config(state, &AppConfig::default())
}

pub fn create_app_with_config(state: AppState, config: &AppConfig) -> Router {
    if !config.site.static_dir.is_dir() {
        warn!(
            static_dir = %config.site.static_dir.display(),
            "static directory not found, assets will 404"
        );
    }

    let mut router = create_routes(&state.routes)
        .nest_service(site::STATIC_PATH, ServeDir::new(&config.site.static_dir));

    router = router.layer(axum_middleware::from_fn_with_state(
        state.clone(),
        middleware::metrics::metrics_middleware,
    ));

    router = middleware::logging::with_request_tracing(router);

    if let Some(cors) = cors_layer_from_config(&config.cors) {
        router = router.layer(cors);
    }

    router.with_state(state)
}

pub async fn run_server(app: Router, addr: SocketAddr) -> Result<()> {
    info!("Starting server on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {
            info!("Received Ctrl+C, starting graceful shutdown");
        },
        _ = terminate => {
            info!("Received SIGTERM, starting graceful shutdown");
        },
    }
}

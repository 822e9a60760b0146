//! Main entry point for the terminal résumé server

use anyhow::{Context, Result};
use cv_core::{
    config::CONFIG_FILE_ENV, create_app_with_config, run_server, AppConfig, AppState, RouteTable,
};
use std::{net::SocketAddr, path::PathBuf};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let config_file = std::env::var_os(CONFIG_FILE_ENV).map(PathBuf::from);
    let config =
        AppConfig::load_with(config_file.as_deref()).context("Failed to load configuration")?;

    init_tracing(config.server.debug);

    match &config_file {
        Some(path) => info!("Configuration loaded from {}", path.display()),
        None => info!("Configuration loaded successfully"),
    }
    info!("Server will bind to: {}", config.bind_address());

    let addr: SocketAddr = config
        .bind_address()
        .parse()
        .with_context(|| format!("Invalid bind address: {}", config.bind_address()))?;

    let routes = RouteTable::for_variant(config.site.variant);
    info!(
        "Site variant: {} ({} pages, contact form at {})",
        routes.variant,
        routes.pages.len(),
        routes.submit_path
    );

    let state = AppState::new(&config, routes);
    info!("App: {} v{}", state.app_name, state.version);
    info!("Required contact fields: {:?}", state.contact.required_fields());

    let app = create_app_with_config(state, &config);

    run_server(app, addr).await.context("Server error")?;

    info!("Server shutdown complete");
    Ok(())
}

fn init_tracing(debug: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let default_level = if debug { "debug" } else { "info" };

        format!(
            "{}={},cv_core={},tower_http=debug,axum=info",
            env!("CARGO_CRATE_NAME").replace('-', "_"),
            default_level,
            default_level
        )
        .into()
    });

    let fmt_layer = fmt::layer()
        .with_target(true)
        .with_thread_ids(true)
        .with_file(true)
        .with_line_number(true);

    let is_json = std::env::var("LOG_FORMAT")
        .map(|v| v.to_lowercase() == "json")
        .unwrap_or(false);

    if is_json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer.pretty())
            .init();
    }
}

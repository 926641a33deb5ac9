use std::future::Future;

use axum::Router;
use configs::AppConfig;
use service::catalog::Catalog;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;
use tracing::info;

use crate::errors::StartupError;
use crate::routes;

fn build_cors() -> CorsLayer {
    CorsLayer::very_permissive()
}

/// Build the catalog described by `cfg` and the router serving it.
pub fn build_app(cfg: &AppConfig) -> (Router, Catalog) {
    let catalog = Catalog::new(cfg.catalog.seed, cfg.catalog.notification_capacity);
    let app = routes::build_router(&catalog, build_cors());
    (app, catalog)
}

/// Serve `app` on `listener` until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app).with_graceful_shutdown(shutdown).await?;
    Ok(())
}

/// Public entry: build the app and run the HTTP server until Ctrl+C.
pub async fn run(cfg: AppConfig) -> Result<(), StartupError> {
    let (app, catalog) = build_app(&cfg);
    info!(
        seeded = cfg.catalog.seed,
        courses = catalog.courses.len().await,
        services = catalog.services.len().await,
        "catalog ready"
    );

    let addr = cfg.server.bind_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.clone(), source })?;
    let local = listener.local_addr().map_err(|e| StartupError::Any(e.into()))?;
    info!(addr = %local, "starting admin server");

    serve(listener, app, async {
        let _ = tokio::signal::ctrl_c().await;
        info!("shutdown signal received");
    })
    .await?;
    Ok(())
}

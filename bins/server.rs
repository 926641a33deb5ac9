use configs::{AppConfig, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info};
use uuid::Uuid;

fn init_logging(format: LogFormat) {
    common::utils::logging::init_logging(format == LogFormat::Json);
    info!(service = "college-admin", event = "logger_init", "tracing subscriber initialized");
}

fn main() -> std::process::ExitCode {
    // load .env before reading RUST_LOG / CONFIG_PATH
    dotenv().ok();

    let config = AppConfig::load_or_env();
    let format = config.as_ref().map(|c| c.logging.format).unwrap_or_default();
    init_logging(format);

    let config = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "college-admin", event = "config_invalid", error = %e, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "college-admin",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = config.server.worker_threads {
        builder.worker_threads(w);
    }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "college-admin", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "college-admin",
        event = "start",
        %service_id,
        pid,
        version,
        threads = config.server.worker_threads.unwrap_or_default(),
        "admin service starting"
    );

    // server::run installs its own Ctrl+C handler and drains in-flight requests
    rt.block_on(async move {
        match server::run(config).await {
            Ok(()) => {
                info!(service = "college-admin", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "college-admin", event = "run_failed", error = %e, "server::run returned error");
                std::process::ExitCode::FAILURE
            }
        }
    })
}

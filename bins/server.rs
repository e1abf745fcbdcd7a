use configs::{AppConfig, LogFormat};
use dotenvy::dotenv;
use tracing::{error, info, warn};
use uuid::Uuid;

fn init_logging(format: LogFormat) {
    match format {
        LogFormat::Compact => common::utils::logging::init_logging_default(),
        LogFormat::Json => common::utils::logging::init_logging_json(),
    }
    info!(service = "person-store", event = "logger_init", ?format, "tracing subscriber initialized");
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!(service = "person-store", event = "signal_failed", error = %e, "cannot listen for Ctrl+C");
        std::future::pending::<()>().await;
    }
    info!(service = "person-store", event = "shutdown_signal", "received Ctrl+C, shutting down");
}

fn main() -> std::process::ExitCode {
    // .env first so RUST_LOG / SERVER_* / LOG_FORMAT take effect
    dotenv().ok();

    let config = AppConfig::load_and_validate();
    let format = config.as_ref().map(|c| c.logging.format).unwrap_or_default();
    init_logging(format);

    let config = match config {
        Ok(cfg) => cfg,
        Err(e) => {
            error!(service = "person-store", event = "config_invalid", error = %e, "invalid configuration");
            return std::process::ExitCode::FAILURE;
        }
    };

    let service_id = Uuid::new_v4();
    let pid = std::process::id();
    let version = env!("CARGO_PKG_VERSION");

    std::panic::set_hook(Box::new(move |info| {
        error!(
            service = "person-store",
            event = "panic",
            %service_id,
            pid,
            message = %info,
            "unhandled panic occurred"
        );
    }));

    let worker_threads = config.server.worker_threads;
    let mut builder = tokio::runtime::Builder::new_multi_thread();
    builder.enable_all();
    if let Some(w) = worker_threads { builder.worker_threads(w); }

    let rt = match builder.build() {
        Ok(rt) => rt,
        Err(e) => {
            error!(service = "person-store", event = "runtime_build_failed", error = %e, "failed to build tokio runtime");
            return std::process::ExitCode::FAILURE;
        }
    };

    info!(
        service = "person-store",
        event = "start",
        %service_id,
        pid,
        version,
        addr = %config.server.bind_addr(),
        threads = worker_threads.unwrap_or_default(),
        "person store starting"
    );

    rt.block_on(async move {
        match server::run(&config.server, shutdown_signal()).await {
            Ok(()) => {
                info!(service = "person-store", event = "stop", %service_id, pid, "server stopped normally");
                std::process::ExitCode::SUCCESS
            }
            Err(e) => {
                error!(service = "person-store", event = "run_failed", error = %e, "server::run returned error");
                if matches!(e, server::errors::StartupError::Bind { .. }) {
                    warn!(service = "person-store", "is another process listening on the same port?");
                }
                std::process::ExitCode::FAILURE
            }
        }
    })
}

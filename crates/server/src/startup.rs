use std::{future::Future, net::SocketAddr};

use axum::Router;
use configs::ServerConfig;
use tokio::net::TcpListener;
use tracing::info;

use crate::errors::StartupError;
use crate::routes::{self, ServerState};

/// Router over a fresh in-memory store with permissive CORS.
pub fn app() -> Router {
    routes::build_router(ServerState::in_memory(), routes::build_cors())
}

fn bind_addr(cfg: &ServerConfig) -> Result<SocketAddr, StartupError> {
    let addr = cfg.bind_addr();
    addr.parse()
        .map_err(|e| StartupError::InvalidConfig(format!("server address `{addr}`: {e}")))
}

/// Serve `app` on an already bound listener until `shutdown` resolves.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;
    Ok(())
}

/// Public entry: bind the configured address and run the HTTP server.
pub async fn run<F>(cfg: &ServerConfig, shutdown: F) -> Result<(), StartupError>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = bind_addr(cfg)?;
    let listener = TcpListener::bind(addr)
        .await
        .map_err(|source| StartupError::Bind { addr: addr.to_string(), source })?;
    info!(%addr, "starting person store server");
    serve(listener, app(), shutdown).await
}

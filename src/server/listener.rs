use std::sync::Arc;

use anyhow::Context;
use tokio::net::TcpListener;
use tracing::{debug, error, info};

use crate::analysis::Analyzer;
use crate::config::Config;
use crate::http::connection::Connection;

/// Binds the listening socket. Failure here is fatal to the process.
pub async fn bind(cfg: &Config) -> anyhow::Result<TcpListener> {
    let addr = cfg.listen_addr();
    let listener = TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;

    info!("Listening on {}", addr);
    Ok(listener)
}

/// Accept loop. Each connection is handled on its own detached task;
/// per-connection failures are logged and never stop the loop.
pub async fn serve(listener: TcpListener) -> anyhow::Result<()> {
    let analyzer = Arc::new(Analyzer::new());

    loop {
        let (socket, peer) = match listener.accept().await {
            Ok(accepted) => accepted,
            Err(e) => {
                error!("Accept failed: {}", e);
                continue;
            }
        };

        debug!("Accepted connection from {}", peer);

        let analyzer = Arc::clone(&analyzer);
        tokio::spawn(async move {
            let mut conn = Connection::new(socket, analyzer);
            if let Err(e) = conn.run().await {
                error!("Connection error from {}: {}", peer, e);
            }
        });
    }
}

pub async fn run(cfg: &Config) -> anyhow::Result<()> {
    serve(bind(cfg).await?).await
}

use ferrous_doh_infrastructure::doh::DohServer;
use std::net::SocketAddr;
use tower_http::trace::TraceLayer;
use tracing::info;

pub async fn start_doh_server(
    bind_addr: SocketAddr,
    path: &str,
    server: DohServer,
) -> anyhow::Result<()> {
    info!(
        bind_address = %bind_addr,
        path,
        endpoint_url = format!("http://{}{}", bind_addr, path),
        "Starting DoH server"
    );

    let app = server.router(path).layer(TraceLayer::new_for_http());
    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    info!("DoH server started successfully");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutdown signal received");
    }
}

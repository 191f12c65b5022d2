mod api;
mod query;

/// Fixed port of the helper; the test client page registers
/// `http://localhost:8081/callback` as its redirect URI.
const PORT: u16 = 8081;

#[tokio::main]
async fn main() -> color_eyre::eyre::Result<()> {
    // Initialize color_eyre
    color_eyre::install()?;

    // Initialize tracing subscriber
    let subscriber = tracing_subscriber::FmtSubscriber::builder()
        .with_max_level(tracing::Level::TRACE)
        .finish();

    tracing::subscriber::set_global_default(subscriber).expect("setting default subscriber failed");

    // Start server
    let listener = tokio::net::TcpListener::bind(("127.0.0.1", PORT)).await?;

    println!("Serving the OAuth2 test client");
    println!("URL: http://localhost:{PORT}");
    println!("Press Ctrl+C to stop");

    axum::serve(listener, api::router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    println!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    tokio::signal::ctrl_c()
        .await
        .expect("installing the Ctrl+C handler failed");
}

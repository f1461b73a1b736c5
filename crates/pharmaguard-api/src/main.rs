use std::env;

use tracing_subscriber::EnvFilter;

use pharmaguard_api::state::AppState;

const DEFAULT_BIND: &str = "0.0.0.0:8000";

#[tokio::main]
async fn main() -> eyre::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let app = pharmaguard_api::app(AppState::from_env());

    // Inside a Lambda runtime the router is driven by lambda_http.
    if env::var("AWS_LAMBDA_RUNTIME_API").is_ok() {
        tracing::info!("starting under lambda runtime");
        return lambda_http::run(app).await.map_err(|e| eyre::eyre!(e));
    }

    let bind = env::var("PHARMAGUARD_BIND").unwrap_or_else(|_| DEFAULT_BIND.to_string());
    let listener = tokio::net::TcpListener::bind(&bind).await?;
    tracing::info!(address = %bind, "pharmaguard listening");

    axum::serve(listener, app).await?;
    Ok(())
}

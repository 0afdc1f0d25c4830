use tracing_subscriber::EnvFilter;

use edss_lambda::config::Config;
use edss_lambda::state::AppState;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    // Structured JSON logging for CloudWatch
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let config = Config::from_env()?;
    tracing::info!(
        mapping = %config.mapping_name,
        suffix = config.suffix.as_deref().unwrap_or(""),
        "starting edss-lambda"
    );

    let app = edss_lambda::app(AppState::new(config));

    lambda_http::run(app).await.map_err(|e| eyre::eyre!(e))
}

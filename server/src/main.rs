mod config;
mod render;
mod routes;
mod services;
mod state;

use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            eprintln!("ignoring malformed .env: {e}");
        }
    }

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info,tower_http=info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = config::SiteConfig::from_env().expect("invalid configuration");
    let github = services::github::GithubClient::new(&config).expect("GitHub client init failed");

    let data = match services::catalog::gather(&github, &config.projects_file, &config.about_section).await {
        Ok(data) => data,
        Err(e @ services::catalog::CatalogError::Unavailable { .. }) => {
            tracing::warn!(error = %e, "starting with an empty page; POST /api/refresh once GitHub is reachable");
            services::catalog::PageData { github_user: github.user().to_string(), ..Default::default() }
        }
        Err(e) => panic!("failed to gather page data: {e}"),
    };

    let port = config.port;
    let state = state::AppState::new(config, github, data);

    let app = routes::app(state);
    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}"))
        .await
        .expect("failed to bind");

    tracing::info!(%port, "site listening");
    axum::serve(listener, app).await.expect("server failed");
}

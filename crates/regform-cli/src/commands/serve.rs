use anyhow::Result;
use colored::Colorize;
use regform::Config;

#[cfg(feature = "dev-server")]
pub fn execute(config: &Config, port: Option<u16>) -> Result<()> {
    let mut config = config.clone();
    if let Some(port) = port {
        config.server.port = port;
    }

    tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?
        .block_on(server::start(config))
}

#[cfg(not(feature = "dev-server"))]
pub fn execute(_config: &Config, _port: Option<u16>) -> Result<()> {
    println!("{}", "⚠ Preview server not available".yellow());
    println!();
    println!("The preview server requires the 'dev-server' feature.");
    println!("Rebuild with: cargo build --features dev-server");
    Ok(())
}

#[cfg(feature = "dev-server")]
mod server {
    use super::*;
    use axum::{extract::State, response::Html, routing::get, Router};
    use regform::config::PageConfig;
    use regform::{render_page, FormState};
    use std::path::Path;
    use std::sync::Arc;
    use tower_http::services::ServeDir;

    #[derive(Clone)]
    struct AppState {
        page: Arc<PageConfig>,
    }

    pub async fn start(config: Config) -> Result<()> {
        let pkg_dir = Path::new(&config.server.pkg_dir);

        println!();
        println!("{}", "Starting registration form preview...".green().bold());
        println!();
        if pkg_dir.exists() {
            println!("  {} Serving {} at /pkg", "📦".cyan(), pkg_dir.display());
        } else {
            println!(
                "  {} {} not found - build it with: wasm-pack build crates/regform-wasm --target web --out-dir {}",
                "⚠".yellow(),
                pkg_dir.display(),
                pkg_dir.display()
            );
        }

        let state = AppState {
            page: Arc::new(config.page.clone()),
        };

        let app = Router::new()
            .route("/", get(index_handler))
            .nest_service("/pkg", ServeDir::new(pkg_dir))
            .with_state(state);

        let addr = format!("{}:{}", config.server.host, config.server.port);
        let listener = tokio::net::TcpListener::bind(&addr).await?;

        println!();
        println!("  {} {}", "URL:".cyan(), format!("http://{}", addr).bold());
        println!("  {} Press Ctrl+C to stop", "ℹ".cyan());
        println!();
        tracing::info!("listening on {}", addr);

        axum::serve(listener, app).await?;
        Ok(())
    }

    // Every request gets a fresh, empty form; state lives in the browser.
    async fn index_handler(State(state): State<AppState>) -> Html<String> {
        Html(render_page(&FormState::new(), &state.page).into_string())
    }
}

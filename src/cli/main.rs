/**
 * xfmarkup Command Line
 *
 * `xfmarkup [FILE]` reads a JSON array of generic nodes from FILE (or stdin),
 * transforms it and prints the canonical markup.
 *
 * `xfmarkup serve` runs the HTTP API backed by an in-memory provider,
 * configured from `XFMARKUP_*` environment variables.
 */

use std::io::Read;
use std::process::ExitCode;
use xfmarkup::backend::server::create_app;
use xfmarkup::shared::element::transform_json;
use xfmarkup::shared::{render_all, ServerConfig};

#[tokio::main]
async fn main() -> ExitCode {
    let env_filter = std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new(&env_filter))
        .with_writer(std::io::stderr)
        .init();

    let arg = std::env::args().nth(1);
    let result = match arg.as_deref() {
        Some("serve") => serve().await,
        Some("-h") | Some("--help") => {
            eprintln!("usage: xfmarkup [FILE | serve]");
            Ok(())
        }
        path => render(path),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            eprintln!("xfmarkup: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn render(path: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let input = match path {
        Some(path) => std::fs::read_to_string(path)?,
        None => {
            let mut input = String::new();
            std::io::stdin().read_to_string(&mut input)?;
            input
        }
    };

    let elements = transform_json(&input)?;
    tracing::debug!("Transformed {} top-level elements", elements.len());
    println!("{}", render_all(&elements));
    Ok(())
}

async fn serve() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::from_env()?;
    let (app, _provider) = create_app(&config);

    let listener = tokio::net::TcpListener::bind((config.host.as_str(), config.port)).await?;
    tracing::info!("Listening on {}", config.base_url());
    axum::serve(listener, app).await?;
    Ok(())
}

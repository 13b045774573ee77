use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use std::time::Duration;
use tokio::sync::mpsc;

use glance::app::{App, AppEvent};
use glance::config::Config;
use glance::feed::{FetchConfig, PostsController};
use glance::theme::ThemeVariant;
use glance::ui;

/// Get the config file path (~/.config/glance/config.toml)
fn get_config_path() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME environment variable not set")?;
    Ok(PathBuf::from(home)
        .join(".config")
        .join("glance")
        .join("config.toml"))
}

#[derive(Parser, Debug)]
#[command(name = "glance", about = "Terminal gallery for a blog-post feed")]
struct Args {
    /// Feed endpoint to fetch posts from (overrides config file)
    #[arg(long, value_name = "URL")]
    feed_url: Option<String>,

    /// Theme variant: dark or light (overrides config file)
    #[arg(long, value_name = "NAME")]
    theme: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing for debug logging
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    let config_path = get_config_path()?;
    let mut config = Config::load(&config_path)
        .with_context(|| format!("Failed to load config from {}", config_path.display()))?;

    if let Some(url) = args.feed_url {
        config.feed_url = url;
    }
    if let Some(theme) = args.theme {
        config.theme = theme;
    }

    let theme = ThemeVariant::from_str_name(&config.theme)
        .ok_or_else(|| anyhow::anyhow!("Unknown theme '{}' (expected dark or light)", config.theme))?;

    let client = reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .user_agent(concat!("glance/", env!("CARGO_PKG_VERSION")))
        .build()
        .context("Failed to build HTTP client")?;

    let fetch_config = FetchConfig {
        min_loading: Duration::from_millis(config.min_loading_ms),
        backoff_unit: Duration::from_millis(config.backoff_unit_ms),
    };

    // Channel for background fetch tasks; the controller holds the sender,
    // the UI loop drains the receiver.
    let (event_tx, event_rx) = mpsc::channel::<AppEvent>(32);

    let controller = PostsController::new(client, config.feed_url.clone(), fetch_config, event_tx);
    let mut app = App::new(controller, theme);

    tracing::info!(url = %config.feed_url, "Starting gallery");
    ui::run(&mut app, event_rx).await?;

    Ok(())
}

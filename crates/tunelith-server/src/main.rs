//! tunelith server binary.
//!
//! Reads `config.toml` (or the path specified with `--config`) plus the
//! environment, opens the SQLite message store, and serves the contact form,
//! administration pages and JSON API over HTTP.

use std::{path::PathBuf, sync::Arc};

use anyhow::Context as _;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;
use tunelith_notify::SmtpNotifier;
use tunelith_server::{AppState, load_config};
use tunelith_store_sqlite::SqliteStore;

#[derive(Parser)]
#[command(author, version, about = "Tunelith contact inbox server")]
struct Cli {
  /// Path to the TOML configuration file.
  #[arg(short, long, default_value = "config.toml")]
  config: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
  // Initialise tracing.
  tracing_subscriber::fmt()
    .with_env_filter(
      EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy(),
    )
    .init();

  let cli = Cli::parse();

  let server_cfg = load_config(&cli.config).context("failed to load configuration")?;
  let store_path = server_cfg.database_path();
  let mail = server_cfg.mail_settings();

  tracing::info!(
    environment = server_cfg.environment(),
    database = %store_path.display(),
    port = server_cfg.port,
    email_configured = mail.is_configured(),
    "starting tunelith"
  );

  // Schema creation happens here, once; a failure stops startup.
  let store = SqliteStore::open(&store_path)
    .await
    .with_context(|| format!("failed to open store at {store_path:?}"))?;

  let state = AppState {
    store:    Arc::new(store),
    notifier: Arc::new(SmtpNotifier::new(mail)),
    config:   Arc::new(server_cfg.clone()),
  };

  let app = tunelith_server::router(state);
  let address = format!("{}:{}", server_cfg.listen_host, server_cfg.port);

  tracing::info!("Listening on http://{address}");
  let listener = TcpListener::bind(&address)
    .await
    .with_context(|| format!("failed to bind {address}"))?;

  axum::serve(listener, app).await.context("server error")?;

  Ok(())
}

//! HTTP surface of the Tunelith contact inbox.
//!
//! Exposes an axum [`Router`] serving the contact form, the submission
//! endpoint, the administration listing, health checks and the JSON API,
//! backed by any [`MessageStore`] and [`Notifier`].

pub mod error;
pub mod handlers;

pub use error::Error;

use std::{
  path::{Path, PathBuf},
  sync::Arc,
};

use axum::{
  Router,
  routing::{get, post},
};
use serde::Deserialize;
use tower_http::{catch_panic::CatchPanicLayer, trace::TraceLayer};
use tunelith_core::{MessageStore, Notifier};
use tunelith_notify::{
  MailSettings,
  settings::{DEFAULT_SMTP_HOST, DEFAULT_SMTP_PORT},
};

use handlers::{health, pages, submit};

// ─── Configuration ────────────────────────────────────────────────────────────

/// Database location used when the `render` deployment marker is set.
pub const RENDER_DATABASE_PATH: &str = "/opt/render/project/src/messages.db";
pub const LOCAL_DATABASE_PATH: &str = "messages.db";

/// Runtime server configuration, deserialised from `config.toml` and the
/// environment. See [`load_config`].
#[derive(Deserialize, Clone)]
pub struct ServerConfig {
  #[serde(default = "default_listen_host")]
  pub listen_host:   String,
  #[serde(default = "default_port")]
  pub port:          u16,
  /// Explicit database location; wins over the deployment default.
  #[serde(default)]
  pub database_path: Option<PathBuf>,
  /// Set (to any non-empty value) when running on Render.
  #[serde(default)]
  pub render:        Option<String>,
  #[serde(default = "default_smtp_host")]
  pub smtp_host:     String,
  #[serde(default = "default_smtp_port")]
  pub smtp_port:     u16,
  #[serde(default)]
  pub email_user:    String,
  #[serde(default)]
  pub email_pass:    String,
  #[serde(default)]
  pub admin_email:   String,
}

fn default_listen_host() -> String { "0.0.0.0".to_owned() }

fn default_port() -> u16 { 5000 }

fn default_smtp_host() -> String { DEFAULT_SMTP_HOST.to_owned() }

fn default_smtp_port() -> u16 { DEFAULT_SMTP_PORT }

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      listen_host:   default_listen_host(),
      port:          default_port(),
      database_path: None,
      render:        None,
      smtp_host:     default_smtp_host(),
      smtp_port:     default_smtp_port(),
      email_user:    String::new(),
      email_pass:    String::new(),
      admin_email:   String::new(),
    }
  }
}

impl ServerConfig {
  pub fn on_render(&self) -> bool {
    self.render.as_deref().is_some_and(|v| !v.is_empty())
  }

  /// `"Render"` or `"Local"`, as reported by the health endpoints.
  pub fn environment(&self) -> &'static str {
    if self.on_render() { "Render" } else { "Local" }
  }

  /// Where the SQLite file lives, with a leading `~` expanded.
  pub fn database_path(&self) -> PathBuf {
    match &self.database_path {
      Some(path) => expand_tilde(path),
      None if self.on_render() => PathBuf::from(RENDER_DATABASE_PATH),
      None => PathBuf::from(LOCAL_DATABASE_PATH),
    }
  }

  pub fn mail_settings(&self) -> MailSettings {
    MailSettings {
      smtp_host: self.smtp_host.clone(),
      smtp_port: self.smtp_port,
      username:  self.email_user.clone(),
      password:  self.email_pass.clone(),
      recipient: self.admin_email.clone(),
    }
  }
}

/// Layer the optional TOML file at `path`, the bare environment (`PORT`,
/// `EMAIL_USER`, `EMAIL_PASS`, `ADMIN_EMAIL`, `RENDER`, ...) and finally
/// `TUNELITH_`-prefixed variables.
pub fn load_config(path: &Path) -> Result<ServerConfig, config::ConfigError> {
  load_layered(path, None)
}

/// `env` stands in for the process environment when given.
fn load_layered(
  path: &Path,
  env: Option<config::Map<String, String>>,
) -> Result<ServerConfig, config::ConfigError> {
  config::Config::builder()
    .add_source(config::File::from(path).required(false))
    .add_source(config::Environment::default().source(env.clone()))
    .add_source(config::Environment::with_prefix("TUNELITH").source(env))
    .build()?
    .try_deserialize()
}

/// Expand a leading `~` to the user's home directory.
fn expand_tilde(path: &Path) -> PathBuf {
  let s = path.to_string_lossy();
  if let Some(rest) = s.strip_prefix("~/")
    && let Ok(home) = std::env::var("HOME")
  {
    return PathBuf::from(home).join(rest);
  }
  path.to_path_buf()
}

// ─── Application state ────────────────────────────────────────────────────────

/// Shared state threaded through all axum handlers.
#[derive(Clone)]
pub struct AppState<S: MessageStore, N: Notifier> {
  pub store:    Arc<S>,
  pub notifier: Arc<N>,
  pub config:   Arc<ServerConfig>,
}

// ─── Router ───────────────────────────────────────────────────────────────────

/// Build the application [`Router`].
pub fn router<S, N>(state: AppState<S, N>) -> Router
where
  S: MessageStore + Clone + 'static,
  N: Notifier + Clone + 'static,
{
  let api = tunelith_api::api_router(state.store.clone());

  Router::new()
    .route("/",             get(pages::home))
    .route("/send_message", post(submit::handler::<S, N>))
    .route("/messages",     get(pages::messages::<S, N>))
    .route("/health",       get(health::health::<S, N>))
    .route("/test_db",      get(health::test_db::<S, N>))
    .with_state(state)
    .nest("/api", api)
    .layer(CatchPanicLayer::custom(error::handle_panic))
    .layer(TraceLayer::new_for_http())
}

//! Configuration types for usersearch.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults,
//! a TOML file (an explicit path, else `~/.config/usersearch/config.toml` if
//! it exists), and `USERSEARCH__SECTION__KEY` environment variables.
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem or the environment (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::search::FilterPolicy;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
bind          = "127.0.0.1:8080"
access_token  = "3"
dataset       = "data/dataset.xml"
filter_policy = "always"

[client]
url          = "http://127.0.0.1:8080"
access_token = "3"
timeout_ms   = 1000
"#;

const ENV_PREFIX: &str = "USERSEARCH";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub client: ClientConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind")]
    pub bind: String,
    /// Token every request must present in the `AccessToken` header.
    #[serde(default = "default_access_token")]
    pub access_token: String,
    #[serde(default = "default_dataset")]
    pub dataset: PathBuf,
    #[serde(default)]
    pub filter_policy: FilterPolicy,
}

fn default_bind() -> String { "127.0.0.1:8080".to_string() }
fn default_access_token() -> String { "3".to_string() }
fn default_dataset() -> PathBuf { PathBuf::from("data/dataset.xml") }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: default_bind(),
            access_token: default_access_token(),
            dataset: default_dataset(),
            filter_policy: FilterPolicy::default(),
        }
    }
}

/// `[client]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ClientConfig {
    #[serde(default = "default_url")]
    pub url: String,
    #[serde(default = "default_access_token")]
    pub access_token: String,
    #[serde(default = "default_timeout_ms")]
    pub timeout_ms: u64,
}

fn default_url() -> String { "http://127.0.0.1:8080".to_string() }
fn default_timeout_ms() -> u64 { 1000 }

impl ClientConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.timeout_ms)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            url: default_url(),
            access_token: default_access_token(),
            timeout_ms: default_timeout_ms(),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load the layered configuration. An explicit `path` must exist; the
    /// default location is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(p) => config::File::from(p).required(true),
            None => config::File::from(config_path().as_path()).required(false),
        };

        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(config::Environment::with_prefix(ENV_PREFIX).separator("__"))
            .build()?
            .try_deserialize()
            .map_err(Into::into)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize()
            .expect("built-in default config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("usersearch")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

//! Configuration types for numfind.
//!
//! [`Config::load`] layers, lowest priority first: the embedded defaults, a
//! TOML file (`numfind.toml` in the working directory unless a path is
//! given), `NUMFIND__SECTION__KEY` environment variables, and finally the
//! flat `PORT`, `LOG_LEVEL` and `DATA_PATH` variables. [`Config::defaults`]
//! returns the embedded defaults without touching the filesystem or
//! environment (useful in tests).

use crate::locator::LocatorOptions;
use anyhow::bail;
use serde::Deserialize;
use std::path::{Path, PathBuf};

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[server]
host                 = "0.0.0.0"
port                 = 8080
request_timeout_secs = 30

[logging]
level = "info"

[sequence]
kind  = "file"
path  = "data/input.txt"
start = 0
step  = 1

[search]
"#;

const DEFAULT_CONFIG_FILE: &str = "numfind.toml";

const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level service configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub logging: LoggingConfig,
    #[serde(default)]
    pub sequence: SequenceConfig,
    #[serde(default)]
    pub search: SearchConfig,
}

/// `[server]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
    /// Wall-clock limit for a single HTTP request.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8080 }
fn default_request_timeout_secs() -> u64 { 30 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

/// `[logging]` section.
#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    /// One of `trace`, `debug`, `info`, `warn`, `error`.
    #[serde(default = "default_level")]
    pub level: String,
}

fn default_level() -> String { "info".to_string() }

impl Default for LoggingConfig {
    fn default() -> Self {
        Self { level: default_level() }
    }
}

/// Which generator backs the locator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SequenceKind {
    /// Whitespace-separated integers read from `path`.
    File,
    Fibonacci,
    /// `start + step * index`.
    Arithmetic,
}

/// `[sequence]` section. `path` is only read for `kind = "file"`; `start`
/// and `step` only for `kind = "arithmetic"`.
#[derive(Debug, Clone, Deserialize)]
pub struct SequenceConfig {
    #[serde(default = "default_kind")]
    pub kind: SequenceKind,
    #[serde(default = "default_path")]
    pub path: PathBuf,
    #[serde(default)]
    pub start: i64,
    #[serde(default = "default_step")]
    pub step: i64,
}

fn default_kind() -> SequenceKind { SequenceKind::File }
fn default_path() -> PathBuf { PathBuf::from("data/input.txt") }
fn default_step() -> i64 { 1 }

impl Default for SequenceConfig {
    fn default() -> Self {
        Self {
            kind: default_kind(),
            path: default_path(),
            start: 0,
            step: default_step(),
        }
    }
}

/// `[search]` section.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct SearchConfig {
    /// Largest index exponential probing may read. Unlimited when unset.
    #[serde(default)]
    pub max_index: Option<u64>,
}

impl SearchConfig {
    pub fn locator_options(&self) -> LocatorOptions {
        LocatorOptions {
            max_index: self.max_index.unwrap_or(u64::MAX),
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
    /// implicit `numfind.toml` is optional.
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let file = match path {
            Some(path) => config::File::from(path).required(true),
            None => config::File::from(Path::new(DEFAULT_CONFIG_FILE)).required(false),
        };

        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(file)
            .add_source(
                config::Environment::with_prefix("NUMFIND")
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("server.port", flat_env("PORT"))?
            .set_override_option("logging.level", flat_env("LOG_LEVEL"))?
            .set_override_option("sequence.path", flat_env("DATA_PATH"))?
            .build()?
            .try_deserialize()?;

        cfg.validate()?;
        Ok(cfg)
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

    pub fn validate(&self) -> anyhow::Result<()> {
        if !LOG_LEVELS.contains(&self.logging.level.as_str()) {
            bail!(
                "invalid log level: {} (expected one of {})",
                self.logging.level,
                LOG_LEVELS.join(", ")
            );
        }
        if self.server.port == 0 {
            bail!("server.port must be non-zero");
        }
        if self.server.request_timeout_secs == 0 {
            bail!("server.request_timeout_secs must be non-zero");
        }
        if self.search.max_index == Some(0) {
            bail!("search.max_index must be non-zero when set");
        }
        if self.sequence.kind == SequenceKind::Arithmetic && self.sequence.step < 0 {
            bail!("sequence.step must be non-negative for an arithmetic sequence");
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Environment helpers
// ---------------------------------------------------------------------------

fn flat_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.is_empty())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

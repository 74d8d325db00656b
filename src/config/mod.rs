use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable holding the database target.
pub const ENV_DATABASE_URL: &str = "DATABASE_URL";
pub const ENV_BIND: &str = "PRESSRATE_BIND";
pub const ENV_STATIC_DIR: &str = "PRESSRATE_STATIC_DIR";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub database: String,
    pub bind: String,
    pub static_dir: PathBuf,
}

fn default_database() -> String {
    "presses.sqlite".to_string()
}
fn default_bind() -> String {
    "0.0.0.0:8080".to_string()
}
fn default_static_dir() -> PathBuf {
    PathBuf::from("static")
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: default_database(),
            bind: default_bind(),
            static_dir: default_static_dir(),
        }
    }
}

impl Config {
    /// Defaults, then the YAML file if one is given, then the environment.
    pub fn load(path: Option<&Path>) -> AppResult<Self> {
        let mut cfg = match path {
            Some(p) => {
                let content = fs::read_to_string(p).map_err(|e| {
                    AppError::Config(format!("cannot read {}: {e}", p.display()))
                })?;
                Self::from_yaml(&content)?
            }
            None => Self::default(),
        };

        cfg.apply_overrides(|key| env::var(key).ok());
        Ok(cfg)
    }

    pub fn from_yaml(content: &str) -> AppResult<Self> {
        // An empty file parses as YAML null; treat it as "all defaults".
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content).map_err(|e| AppError::Config(format!("invalid YAML: {e}")))
    }

    /// Apply environment-style overrides read through `lookup`.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(url) = lookup(ENV_DATABASE_URL).filter(|v| !v.is_empty()) {
            info!("{ENV_DATABASE_URL} set, using database {url}");
            self.database = url;
        }
        if let Some(bind) = lookup(ENV_BIND).filter(|v| !v.is_empty()) {
            info!("{ENV_BIND} set, binding to {bind}");
            self.bind = bind;
        }
        if let Some(dir) = lookup(ENV_STATIC_DIR).filter(|v| !v.is_empty()) {
            info!("{ENV_STATIC_DIR} set, serving assets from {dir}");
            self.static_dir = PathBuf::from(dir);
        }
    }

    /// SQLite file path: `database` with any `sqlite://` / `sqlite:` scheme removed.
    pub fn database_path(&self) -> &str {
        let db = self.database.as_str();
        db.strip_prefix("sqlite://")
            .or_else(|| db.strip_prefix("sqlite:"))
            .unwrap_or(db)
    }
}

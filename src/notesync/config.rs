use crate::controller::ReconcilePolicy;
use crate::error::{NotesError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;
use std::path::Path;
use std::str::FromStr;

pub const CONFIG_FILENAME: &str = "config.json";
pub const ENDPOINT_ENV: &str = "NOTESYNC_ENDPOINT";
pub const API_KEY_ENV: &str = "NOTESYNC_API_KEY";

/// Which note service the session talks to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Backend {
    /// Process-local collection, gone when the session ends.
    #[default]
    Memory,
    Graphql,
}

impl FromStr for Backend {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "memory" => Ok(Backend::Memory),
            "graphql" => Ok(Backend::Graphql),
            other => Err(format!(
                "unknown backend '{}' (expected memory or graphql)",
                other
            )),
        }
    }
}

impl fmt::Display for Backend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Backend::Memory => write!(f, "memory"),
            Backend::Graphql => write!(f, "graphql"),
        }
    }
}

/// Configuration for notesync, stored as config.json in the config directory
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct NotesConfig {
    #[serde(default)]
    pub backend: Backend,

    /// GraphQL endpoint URL, required for the graphql backend
    #[serde(default)]
    pub endpoint: Option<String>,

    /// Sent as `x-api-key` with every request
    #[serde(default)]
    pub api_key: Option<String>,

    /// What to do with an optimistic change whose remote call failed
    #[serde(default)]
    pub reconcile: ReconcilePolicy,
}

impl NotesConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        Self::load_file(config_dir.as_ref().join(CONFIG_FILENAME))
    }

    /// Load config from an explicit file, or return defaults if it does not exist
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)?;
        let config: NotesConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// Override endpoint and API key from the process environment.
    pub fn apply_env(self) -> Self {
        self.with_env(|key| std::env::var(key).ok())
    }

    pub fn with_env<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(endpoint) = lookup(ENDPOINT_ENV).filter(|v| !v.is_empty()) {
            self.endpoint = Some(endpoint);
        }
        if let Some(key) = lookup(API_KEY_ENV).filter(|v| !v.is_empty()) {
            self.api_key = Some(key);
        }
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.backend == Backend::Graphql && self.endpoint.is_none() {
            return Err(NotesError::Config(format!(
                "the graphql backend needs an endpoint (--endpoint or {})",
                ENDPOINT_ENV
            )));
        }
        Ok(())
    }
}

//! Server configuration module
//!
//! Provides the settings shared by the route table and the axum router:
//! where the API is mounted, which version prefix it answers, and the
//! optional bearer token required from callers.

use thiserror::Error;

const DEFAULT_HOST: &str = "localhost";
const DEFAULT_PORT: u16 = 5140;
const DEFAULT_VERSION: &str = "v1";

/// Server configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Mount path, empty or starting with `/`
    pub path: String,
    /// API version segment, e.g. `v1`
    pub version: String,
    /// Bearer token callers must present, if any
    pub token: Option<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            path: String::new(),
            version: DEFAULT_VERSION.to_string(),
            token: None,
        }
    }
}

impl ServerConfig {
    /// Create a new ServerConfigBuilder
    pub fn builder() -> ServerConfigBuilder {
        ServerConfigBuilder::default()
    }

    /// Load the configuration from `XFMARKUP_*` environment variables.
    ///
    /// Unset variables keep their defaults. A value that would make the
    /// configuration invalid is logged and ignored, so the default stays.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Like [`from_env`](Self::from_env), reading variables through `lookup`
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();
        if let Some(host) = lookup("XFMARKUP_HOST") {
            config = config.with_var("XFMARKUP_HOST", |c| c.host = host);
        }
        if let Some(port) = lookup("XFMARKUP_PORT") {
            match port.parse::<u16>() {
                Ok(port) => config = config.with_var("XFMARKUP_PORT", |c| c.port = port),
                Err(e) => tracing::warn!("Ignoring invalid XFMARKUP_PORT {:?}: {}", port, e),
            }
        }
        if let Some(path) = lookup("XFMARKUP_PATH") {
            config = config.with_var("XFMARKUP_PATH", |c| c.path = path);
        }
        if let Some(version) = lookup("XFMARKUP_VERSION") {
            config = config.with_var("XFMARKUP_VERSION", |c| c.version = version);
        }
        if let Some(token) = lookup("XFMARKUP_TOKEN") {
            config.token = Some(token).filter(|t| !t.is_empty());
        }
        config.validate()?;
        Ok(config)
    }

    // `self` is valid, so a failure here is down to `name` alone
    fn with_var(self, name: &str, set: impl FnOnce(&mut Self)) -> Self {
        let mut candidate = self.clone();
        set(&mut candidate);
        match candidate.validate() {
            Ok(()) => candidate,
            Err(e) => {
                tracing::warn!("Ignoring {}: {}", name, e);
                self
            }
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.host.is_empty() {
            return Err(ConfigError::MissingValue("host"));
        }
        if self.port == 0 {
            return Err(ConfigError::InvalidPort(self.port));
        }
        if !self.path.is_empty() && (!self.path.starts_with('/') || self.path.ends_with('/')) {
            return Err(ConfigError::InvalidPath(self.path.clone()));
        }
        if self.version.is_empty() {
            return Err(ConfigError::MissingValue("version"));
        }
        if self.version.contains('/') {
            return Err(ConfigError::InvalidVersion(self.version.clone()));
        }
        Ok(())
    }

    /// `{path}/{version}`, the prefix every action is mounted under
    pub fn api_prefix(&self) -> String {
        format!("{}/{}", self.path, self.version)
    }

    /// Base URL clients use to reach the API
    pub fn base_url(&self) -> String {
        format!("http://{}:{}{}", self.host, self.port, self.api_prefix())
    }
}

/// Builder for ServerConfig
#[derive(Debug, Default)]
pub struct ServerConfigBuilder {
    host: Option<String>,
    port: Option<u16>,
    path: Option<String>,
    version: Option<String>,
    token: Option<String>,
}

impl ServerConfigBuilder {
    pub fn host(mut self, host: impl Into<String>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    pub fn path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<ServerConfig, ConfigError> {
        let defaults = ServerConfig::default();
        let config = ServerConfig {
            host: self.host.unwrap_or(defaults.host),
            port: self.port.unwrap_or(defaults.port),
            path: self.path.unwrap_or(defaults.path),
            version: self.version.unwrap_or(defaults.version),
            token: self.token.filter(|t| !t.is_empty()),
        };
        config.validate()?;
        Ok(config)
    }
}

/// Configuration errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid mount path: {0}")]
    InvalidPath(String),
    #[error("invalid port: {0}")]
    InvalidPort(u16),
    #[error("invalid API version: {0}")]
    InvalidVersion(String),
    #[error("missing value: {0}")]
    MissingValue(&'static str),
}

use crate::engine::ObservationDefaults;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Path to config.toml - computed from home, not serialized
    #[serde(skip)]
    pub config_path: PathBuf,

    #[serde(default)]
    pub service: ServiceConfig,

    /// Initial form values, also restored on reset.
    #[serde(default)]
    pub defaults: ObservationDefaults,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_feels_endpoint")]
    pub feels_endpoint: String,
    #[serde(default = "default_clothing_endpoint")]
    pub clothing_endpoint: String,
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
    /// Overall request timeout. Unset means a request may wait indefinitely.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    "http://localhost:8080".into()
}

fn default_feels_endpoint() -> String {
    "/predict-feels".into()
}

fn default_clothing_endpoint() -> String {
    "/predict-clothing".into()
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            feels_endpoint: default_feels_endpoint(),
            clothing_endpoint: default_clothing_endpoint(),
            connect_timeout_secs: default_connect_timeout_secs(),
            request_timeout_secs: None,
        }
    }
}

impl ServiceConfig {
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.base_url)
            .map_err(|e| anyhow::anyhow!("service.base_url is not a valid URL: {e}"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            anyhow::bail!("service.base_url must use http or https");
        }
        if self.feels_endpoint.trim().is_empty() {
            anyhow::bail!("service.feels_endpoint must not be empty");
        }
        if self.clothing_endpoint.trim().is_empty() {
            anyhow::bail!("service.clothing_endpoint must not be empty");
        }
        if self.connect_timeout_secs == 0 {
            anyhow::bail!("service.connect_timeout_secs must be greater than 0");
        }
        if self.request_timeout_secs == Some(0) {
            anyhow::bail!("service.request_timeout_secs must be greater than 0 when set");
        }
        Ok(())
    }
}

impl Config {
    pub fn validate(&self) -> Result<()> {
        self.service.validate()?;
        if !self.defaults.temperature.is_finite() {
            anyhow::bail!("defaults.temperature must be a finite number");
        }
        Ok(())
    }
}

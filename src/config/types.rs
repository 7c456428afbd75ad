use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::phone::state::DEFAULT_BRAND;

/// Root configuration container.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub phone: PhoneConfig,
    #[serde(default)]
    pub host: HostConfig,
}

/// How the device looks and behaves.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PhoneConfig {
    /// Brand the `--demo` opening builds with (default: "CELLTOWA").
    #[serde(default = "default_brand")]
    pub brand: String,
    /// Delay between revealed characters in milliseconds (default: 30).
    #[serde(default = "default_typewriter_interval_ms")]
    pub typewriter_interval_ms: u64,
}

/// Where host messages come from and where notifications go.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HostConfig {
    /// Bind address of the inbound message endpoint (host:port).
    #[serde(default = "default_bind_addr")]
    pub bind_addr: String,
    /// Base URL for outbound notifications. Without one they are only logged.
    #[serde(default)]
    pub callback_url: Option<String>,
}

fn default_brand() -> String {
    DEFAULT_BRAND.to_string()
}

fn default_typewriter_interval_ms() -> u64 {
    30
}

fn default_bind_addr() -> String {
    "127.0.0.1:30125".to_string()
}

impl Default for PhoneConfig {
    fn default() -> Self {
        Self {
            brand: default_brand(),
            typewriter_interval_ms: default_typewriter_interval_ms(),
        }
    }
}

impl Default for HostConfig {
    fn default() -> Self {
        Self {
            bind_addr: default_bind_addr(),
            callback_url: None,
        }
    }
}

impl PhoneConfig {
    pub fn typewriter_interval(&self) -> Duration {
        Duration::from_millis(self.typewriter_interval_ms)
    }
}

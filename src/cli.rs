//! Command-line flags of the `burner-phone` binary.

use std::path::PathBuf;

use clap::Parser;

use crate::config::Config;

#[derive(Debug, Parser)]
#[command(name = "burner-phone", version, about = "Simulated burner phone driven by a host application")]
pub struct Cli {
    /// Config file (default: platform config dir / burner-phone/config.toml)
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Brand used by the --demo opening
    #[arg(long, value_name = "LABEL", requires = "demo")]
    pub brand: Option<String>,

    /// Address of the inbound message endpoint
    #[arg(long, value_name = "ADDR")]
    pub bind: Option<String>,

    /// Base URL for outbound notifications
    #[arg(long, value_name = "URL")]
    pub callback_url: Option<String>,

    /// Start with demo data; F1-F4 inject demo messages
    #[arg(long)]
    pub demo: bool,
}

impl Cli {
    /// Apply flag overrides on top of `config`.
    pub fn apply(&self, mut config: Config) -> Config {
        if let Some(brand) = &self.brand {
            config.phone.brand = brand.clone();
        }
        if let Some(bind) = &self.bind {
            config.host.bind_addr = bind.clone();
        }
        if let Some(url) = &self.callback_url {
            config.host.callback_url = Some(url.clone());
        }
        config
    }
}

use anyhow::Context;
use clap::Parser;

use burner_phone::cli::Cli;
use burner_phone::config::Config;
use burner_phone::logging::init_tracing;
use burner_phone::ui::runtime;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing();

    let config = match &cli.config {
        Some(path) => Config::load_from(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => Config::load().context("loading config")?,
    };
    let config = cli.apply(config);
    config.validate().context("invalid configuration")?;

    tracing::info!(
        bind = %config.host.bind_addr,
        callback = config.host.callback_url.as_deref().unwrap_or("-"),
        demo = cli.demo,
        "starting burner phone"
    );
    runtime::run(&config, cli.demo)
        .with_context(|| format!("running phone on {}", config.host.bind_addr))
}

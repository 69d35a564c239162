use anyhow::Context;
use asset_rebrand::config::env::process_env;
use asset_rebrand::utils::logger;
use asset_rebrand::{CliConfig, PatchConfig, PatchEngine, PatchError};
use clap::Parser;
use std::process::ExitCode;

fn main() -> ExitCode {
    let cli = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(cli.verbose);

    tracing::info!("🚀 Starting asset-rebrand");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            tracing::error!("❌ Configuration failed: {:#}", e);
            eprintln!("❌ {:#}", e);
            let code = e
                .downcast_ref::<PatchError>()
                .map(PatchError::exit_code)
                .unwrap_or(3);
            return ExitCode::from(code);
        }
    };

    tracing::info!(
        "Base path {} | accent {} | web root {}",
        config.base_path(),
        config.accent(),
        config.web_root.display()
    );

    match PatchEngine::new(config).run() {
        Ok(summary) => {
            let soft = summary.soft_failures();
            if soft > 0 {
                tracing::warn!("⚠️ Finished with {} soft failure(s)", soft);
            } else {
                tracing::info!("✅ Asset patching completed");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn load_config(cli: &CliConfig) -> anyhow::Result<PatchConfig> {
    cli.resolve(&process_env)
        .context("failed to resolve configuration")
}

use anyhow::Context;
use clap::Parser;
use plan_tree::config::toml_config::TomlConfig;
use plan_tree::core::ConfigProvider;
use plan_tree::domain::vocab::TRACKED_MODEL;
use plan_tree::utils::error::ErrorSeverity;
use plan_tree::utils::{logger, validation::Validate};
use plan_tree::{CliConfig, LocalStorage, PlanEngine, RunSummary, SchedulePipeline};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting plan-tree CLI");
    if cli.verbose {
        tracing::debug!("CLI config: {:?}", cli);
    }

    if let Err(e) = cli.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Some(path) = cli.config.clone() {
        tracing::info!("📁 Loading configuration from: {}", path);
        let config = TomlConfig::from_file(&path)
            .with_context(|| format!("Failed to load config file '{}'", path))?;

        if let Err(e) = config.validate() {
            tracing::error!("❌ Configuration validation failed: {}", e);
            tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(1);
        }
        tracing::info!("✅ Configuration loaded and validated successfully");

        let monitor_enabled = cli.monitor || config.monitoring_enabled();
        run(config, monitor_enabled).await;
    } else {
        let monitor_enabled = cli.monitor;
        run(cli, monitor_enabled).await;
    }

    Ok(())
}

async fn run<C: ConfigProvider + 'static>(config: C, monitor_enabled: bool) {
    if monitor_enabled {
        tracing::info!("🔍 System monitoring enabled");
    }

    let storage = LocalStorage::new(config.root().to_string());
    let pipeline = SchedulePipeline::new(storage, config);
    let engine = PlanEngine::new_with_monitoring(pipeline, monitor_enabled);

    match engine.run().await {
        Ok(RunSummary::Created {
            files_written,
            files_skipped,
        }) => {
            tracing::info!("✅ Schedule tree created successfully!");
            println!("✅ Schedule tree created successfully!");
            println!(
                "📁 {} file(s) written, {} skipped",
                files_written, files_skipped
            );
        }
        Ok(RunSummary::Aggregated {
            total_secs,
            files_counted,
        }) => {
            tracing::info!(
                "✅ Summed {} record(s) for model {}",
                files_counted,
                TRACKED_MODEL
            );
            // Bare total on stdout so the number is easy to consume from
            // scripts.
            println!("{}", total_secs);
        }
        Err(e) => {
            tracing::error!(
                "❌ Run failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

            eprintln!("❌ {}", e.user_friendly_message());
            eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

            let exit_code = match e.severity() {
                ErrorSeverity::Low => 0,
                ErrorSeverity::Medium => 2,
                ErrorSeverity::High => 1,
                ErrorSeverity::Critical => 3,
            };

            if exit_code > 0 {
                std::process::exit(exit_code);
            }
        }
    }
}

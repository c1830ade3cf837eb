use clap::Parser;
use revpar::app::runner;
use revpar::config::CliConfig;
use revpar::utils::logger::{self, LogFormat};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    let format = if config.log_json {
        LogFormat::Json
    } else {
        LogFormat::Compact
    };
    logger::init_logger(format, config.verbose);

    tracing::debug!("CLI config: {:?}", config);

    match runner::run(&config) {
        Ok(output) => {
            println!("{}", output);
            Ok(())
        }
        Err(e) => {
            tracing::error!(
                "❌ Calculation failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(runner::exit_code(&e));
        }
    }
}

use clap::Parser;
use cpf_check::app::http;
use cpf_check::config::Command;
use cpf_check::utils::error::{CheckError, ErrorSeverity};
use cpf_check::utils::logger;
use cpf_check::utils::validation::{self, Validate};
use cpf_check::{CheckConfig, CliConfig};
use std::sync::Arc;

fn exit_with(e: &CheckError) -> ! {
    tracing::error!(
        "❌ {} (Category: {:?}, Severity: {:?})",
        e,
        e.category(),
        e.severity()
    );
    tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());

    eprintln!("❌ {}", e.user_friendly_message());
    eprintln!("💡 {}", e.recovery_suggestion());

    let exit_code = match e.severity() {
        ErrorSeverity::Low | ErrorSeverity::High => 1,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::Critical => 3,
    };
    std::process::exit(exit_code);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = CliConfig::parse();

    logger::init_cli_logger(cli.verbose);

    tracing::info!("Starting cpf-check");
    tracing::debug!("CLI config: {:?}", cli);

    let config = match &cli.config {
        Some(path) => CheckConfig::from_file(path).unwrap_or_else(|e| exit_with(&e)),
        None => CheckConfig::default(),
    };

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        exit_with(&e);
    }

    let checker = Arc::new(config.build_checker().unwrap_or_else(|e| exit_with(&e)));

    match cli.command {
        Command::Check { cpfs, text } => {
            for cpf in cpfs {
                let result = checker.check(&cpf).await;
                if text {
                    println!("{}", result.summary());
                } else {
                    println!("{}", serde_json::to_string(&result)?);
                }
            }
        }
        Command::Serve { bind } => {
            let addr = match bind {
                Some(bind) => validation::validate_socket_addr("--bind", &bind),
                None => config.bind_address(),
            }
            .unwrap_or_else(|e| exit_with(&e));

            http::serve(checker, addr).await?;
        }
    }

    Ok(())
}

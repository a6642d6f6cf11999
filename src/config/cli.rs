use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "cpf-check")]
#[command(about = "Validates Brazilian CPF numbers and checks them against fraud and debt registries")]
pub struct CliConfig {
    #[arg(long, global = true, help = "Path to a TOML configuration file")]
    pub config: Option<PathBuf>,

    #[arg(long, global = true, help = "Enable verbose output")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Evaluate identifiers locally and print one result per line
    Check {
        #[arg(required = true)]
        cpfs: Vec<String>,

        #[arg(long, help = "Print a readable line per identifier instead of JSON")]
        text: bool,
    },
    /// Serve the validation endpoint over HTTP
    Serve {
        #[arg(long, help = "Override server.bind_address from the configuration")]
        bind: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_check_with_multiple_identifiers() {
        let config =
            CliConfig::try_parse_from(["cpf-check", "check", "123.456.789-09", "52998224725"])
                .unwrap();
        assert!(config.config.is_none());
        assert!(matches!(
            config.command,
            Command::Check { ref cpfs, text: false } if cpfs.len() == 2
        ));
    }

    #[test]
    fn parses_serve_with_global_flags() {
        let config = CliConfig::try_parse_from([
            "cpf-check",
            "serve",
            "--bind",
            "0.0.0.0:8080",
            "--config",
            "cpf-check.toml",
            "--verbose",
        ])
        .unwrap();
        assert!(config.verbose);
        assert_eq!(config.config, Some(PathBuf::from("cpf-check.toml")));
        assert!(
            matches!(config.command, Command::Serve { bind: Some(ref b) } if b == "0.0.0.0:8080")
        );
    }

    #[test]
    fn parses_check_text_output() {
        let config =
            CliConfig::try_parse_from(["cpf-check", "check", "--text", "52998224725"]).unwrap();
        assert!(matches!(config.command, Command::Check { text: true, .. }));
    }

    #[test]
    fn check_requires_an_identifier() {
        assert!(CliConfig::try_parse_from(["cpf-check", "check"]).is_err());
    }
}

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Output shape of log lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogFormat {
    /// Single-line human output for terminals.
    Compact,
    /// One JSON object per line; CloudWatch indexes the fields.
    Json,
}

/// Filter used when `RUST_LOG` is unset. Verbose mode also surfaces the
/// per-request spans emitted by the HTTP trace layer.
pub fn default_directives(verbose: bool) -> &'static str {
    if verbose {
        "cpf_check=debug,tower_http=debug,info"
    } else {
        "cpf_check=info"
    }
}

fn env_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives(verbose)))
}

pub fn init(format: LogFormat, verbose: bool) {
    let registry = tracing_subscriber::registry().with(env_filter(verbose));
    let layer = fmt::layer()
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        // Lambda stamps every line itself.
        LogFormat::Json => registry.with(layer.without_time().json()).init(),
    }
}

pub fn init_cli_logger(verbose: bool) {
    init(LogFormat::Compact, verbose);
}

pub fn init_lambda_logger() {
    init(LogFormat::Json, false);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_directives_parse() {
        for verbose in [false, true] {
            assert!(EnvFilter::try_new(default_directives(verbose)).is_ok());
        }
    }

    #[test]
    fn verbose_adds_request_tracing() {
        assert!(default_directives(true).contains("tower_http=debug"));
        assert!(!default_directives(false).contains("tower_http"));
    }
}

use crate::config::toml_config::CheckConfig;
use crate::utils::error::{CheckError, Result};
use std::env;

pub const CONFIG_PATH_VAR: &str = "CPF_CHECK_CONFIG";
pub const LOOKUP_TIMEOUT_VAR: &str = "LOOKUP_TIMEOUT_MS";

#[derive(Debug, Clone)]
pub struct LambdaConfig {
    pub check: CheckConfig,
}

impl LambdaConfig {
    /// Loads the TOML file named by `CPF_CHECK_CONFIG` when set, otherwise the
    /// built-in defaults. `LOOKUP_TIMEOUT_MS` overrides `lookup.timeout_ms`.
    pub fn from_env() -> Result<Self> {
        let mut check = match env::var(CONFIG_PATH_VAR) {
            Ok(path) => CheckConfig::from_file(&path)?,
            Err(_) => CheckConfig::default(),
        };

        if let Ok(raw) = env::var(LOOKUP_TIMEOUT_VAR) {
            let timeout = raw
                .parse()
                .map_err(|_| CheckError::InvalidConfigValueError {
                    field: LOOKUP_TIMEOUT_VAR.to_string(),
                    value: raw.clone(),
                    reason: "Expected a number of milliseconds".to_string(),
                })?;
            check.lookup.timeout_ms = Some(timeout);
        }

        Ok(Self { check })
    }
}

impl crate::utils::validation::Validate for LambdaConfig {
    fn validate(&self) -> Result<()> {
        self.check.validate()?;
        tracing::info!("Lambda configuration validation passed");
        Ok(())
    }
}

use crate::adapters::{HttpGateway, StaticListGateway};
use crate::core::checker::{CpfChecker, DEFAULT_LOOKUP_TIMEOUT};
use crate::core::validator::{self, CPF_LENGTH};
use crate::core::{MembershipGateway, Registry};
use crate::utils::error::{CheckError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_BIND_ADDRESS: &str = "127.0.0.1:7071";
const MAX_TIMEOUT_MS: u64 = 60_000;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CheckConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub lookup: LookupConfig,
    #[serde(default)]
    pub registries: RegistriesConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_bind_address")]
    pub bind_address: String,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: default_bind_address(),
        }
    }
}

fn default_bind_address() -> String {
    DEFAULT_BIND_ADDRESS.to_string()
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LookupConfig {
    /// Upper bound for a single registry lookup, in milliseconds.
    pub timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RegistriesConfig {
    pub fraud: Option<RegistryConfig>,
    pub debt: Option<RegistryConfig>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RegistryConfig {
    Static {
        #[serde(default)]
        entries: Vec<String>,
    },
    Http {
        endpoint: Option<String>,
        timeout_ms: Option<u64>,
    },
}

impl CheckConfig {
    /// Loads and parses a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CheckError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses TOML text after `${VAR}` substitution.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| CheckError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Replaces `${VAR}` with the variable's value; unset variables are left as written.
    fn substitute_env_vars(content: &str) -> Result<String> {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| CheckError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        validation::validate_socket_addr("server.bind_address", &self.server.bind_address)
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup
            .timeout_ms
            .map(Duration::from_millis)
            .unwrap_or(DEFAULT_LOOKUP_TIMEOUT)
    }

    pub fn registry(&self, registry: Registry) -> Option<&RegistryConfig> {
        match registry {
            Registry::Fraud => self.registries.fraud.as_ref(),
            Registry::Debt => self.registries.debt.as_ref(),
        }
    }

    /// Builds the gateway for one registry. Registries left out of the file
    /// fall back to the built-in static lists.
    pub fn build_gateway(&self, registry: Registry) -> Result<Arc<dyn MembershipGateway>> {
        let gateway: Arc<dyn MembershipGateway> = match self.registry(registry) {
            None => Arc::new(StaticListGateway::default_for(registry)),
            Some(RegistryConfig::Static { entries }) => {
                Arc::new(StaticListGateway::new(registry, entries))
            }
            Some(RegistryConfig::Http {
                endpoint,
                timeout_ms,
            }) => {
                let endpoint = validation::validate_required_field(
                    &format!("registries.{}.endpoint", registry),
                    endpoint,
                )?;
                let timeout = timeout_ms
                    .map(Duration::from_millis)
                    .unwrap_or_else(|| self.lookup_timeout());
                Arc::new(HttpGateway::new(registry, endpoint.as_str(), timeout)?)
            }
        };
        Ok(gateway)
    }

    pub fn build_checker(&self) -> Result<CpfChecker> {
        let fraud = self.build_gateway(Registry::Fraud)?;
        let debt = self.build_gateway(Registry::Debt)?;
        Ok(CpfChecker::new(fraud, debt).with_lookup_timeout(self.lookup_timeout()))
    }
}

fn validate_registry(registry: Registry, config: &RegistryConfig) -> Result<()> {
    match config {
        RegistryConfig::Static { entries } => {
            for entry in entries {
                let field = format!("registries.{}.entries", registry);
                let normalized = validator::normalize(entry);
                if normalized.len() != CPF_LENGTH || !normalized.bytes().all(|b| b.is_ascii_digit())
                {
                    return Err(CheckError::InvalidConfigValueError {
                        field,
                        value: entry.clone(),
                        reason: "Entries must be 11-digit CPFs".to_string(),
                    });
                }
                if !validator::validate(entry) {
                    tracing::warn!(
                        "{} entry {} can never match: it fails CPF validation",
                        field,
                        entry
                    );
                }
            }
        }
        RegistryConfig::Http {
            endpoint,
            timeout_ms,
        } => {
            let field = format!("registries.{}.endpoint", registry);
            let endpoint = validation::validate_required_field(&field, endpoint)?;
            validation::validate_url(&field, endpoint)?;
            if let Some(timeout) = timeout_ms {
                validation::validate_range(
                    &format!("registries.{}.timeout_ms", registry),
                    *timeout,
                    1,
                    MAX_TIMEOUT_MS,
                )?;
            }
        }
    }
    Ok(())
}

impl Validate for CheckConfig {
    fn validate(&self) -> Result<()> {
        validation::validate_non_empty_string("server.bind_address", &self.server.bind_address)?;
        self.bind_address()?;

        if let Some(timeout) = self.lookup.timeout_ms {
            validation::validate_positive_number("lookup.timeout_ms", timeout, 1)?;
            validation::validate_range("lookup.timeout_ms", timeout, 1, MAX_TIMEOUT_MS)?;
        }

        for registry in [Registry::Fraud, Registry::Debt] {
            if let Some(config) = self.registry(registry) {
                validate_registry(registry, config)?;
            }
        }

        tracing::debug!("Configuration validation passed");
        Ok(())
    }
}

use crate::core::validator::Cpf;
use crate::core::{MembershipGateway, Registry, ValidationResult};
use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

pub const DEFAULT_LOOKUP_TIMEOUT: Duration = Duration::from_secs(3);

/// Runs validation and, for valid identifiers, both registry lookups.
pub struct CpfChecker {
    fraud: Arc<dyn MembershipGateway>,
    debt: Arc<dyn MembershipGateway>,
    lookup_timeout: Duration,
}

enum Lookup {
    Member,
    NotMember,
    Unavailable,
}

impl CpfChecker {
    pub fn new(fraud: Arc<dyn MembershipGateway>, debt: Arc<dyn MembershipGateway>) -> Self {
        Self {
            fraud,
            debt,
            lookup_timeout: DEFAULT_LOOKUP_TIMEOUT,
        }
    }

    pub fn with_lookup_timeout(mut self, timeout: Duration) -> Self {
        self.lookup_timeout = timeout;
        self
    }

    pub fn lookup_timeout(&self) -> Duration {
        self.lookup_timeout
    }

    pub async fn check(&self, raw: &str) -> ValidationResult {
        let Some(cpf) = Cpf::parse(raw) else {
            tracing::info!("CPF rejected by validation");
            return ValidationResult::invalid(raw);
        };

        let mut flags = BTreeSet::new();
        let mut unverified = BTreeSet::new();

        // Both lists are always consulted; a fraud hit does not skip the debt lookup.
        for gateway in [&self.fraud, &self.debt] {
            let registry = gateway.registry();
            match self.lookup(&**gateway, &cpf).await {
                Lookup::Member => {
                    flags.insert(registry);
                }
                Lookup::NotMember => {}
                Lookup::Unavailable => {
                    unverified.insert(registry);
                }
            }
        }

        tracing::info!(
            flags = ?flags,
            unverified = ?unverified,
            "CPF validated"
        );
        ValidationResult::valid(raw, flags, unverified)
    }

    async fn lookup(&self, gateway: &dyn MembershipGateway, cpf: &Cpf) -> Lookup {
        let registry: Registry = gateway.registry();
        tracing::debug!(%registry, "Querying registry");

        match tokio::time::timeout(self.lookup_timeout, gateway.is_member(cpf)).await {
            Ok(Ok(true)) => Lookup::Member,
            Ok(Ok(false)) => Lookup::NotMember,
            Ok(Err(e)) => {
                tracing::warn!(%registry, "Registry lookup failed: {}", e);
                Lookup::Unavailable
            }
            Err(_) => {
                tracing::warn!(
                    %registry,
                    "Registry lookup timed out after {:?}",
                    self.lookup_timeout
                );
                Lookup::Unavailable
            }
        }
    }
}

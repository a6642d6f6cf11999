use crate::core::validator::{normalize, Cpf};
use crate::core::{MembershipGateway, Registry, Result};
use async_trait::async_trait;
use std::collections::HashSet;

pub const DEFAULT_FRAUD_LIST: &[&str] = &["11111111111", "22222222222", "12345678909"];
pub const DEFAULT_DEBT_LIST: &[&str] = &["33333333333", "44444444444", "12345678909"];

/// Read-only in-memory registry.
#[derive(Debug, Clone)]
pub struct StaticListGateway {
    registry: Registry,
    entries: HashSet<String>,
}

impl StaticListGateway {
    /// Entries are stored normalized, so `123.456.789-09` and `12345678909`
    /// name the same member.
    pub fn new<I, S>(registry: Registry, entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            registry,
            entries: entries.into_iter().map(|e| normalize(e.as_ref())).collect(),
        }
    }

    pub fn default_for(registry: Registry) -> Self {
        match registry {
            Registry::Fraud => Self::new(registry, DEFAULT_FRAUD_LIST),
            Registry::Debt => Self::new(registry, DEFAULT_DEBT_LIST),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[async_trait]
impl MembershipGateway for StaticListGateway {
    fn registry(&self) -> Registry {
        self.registry
    }

    async fn is_member(&self, cpf: &Cpf) -> Result<bool> {
        Ok(self.entries.contains(cpf.as_str()))
    }
}

use crate::core::validator::Cpf;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// External list an identifier can be registered in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Registry {
    Fraud,
    Debt,
}

impl Registry {
    pub fn as_str(&self) -> &'static str {
        match self {
            Registry::Fraud => "fraud",
            Registry::Debt => "debt",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Registry::Fraud => "base de dados de fraudes",
            Registry::Debt => "base de dados de débitos",
        }
    }
}

impl fmt::Display for Registry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of evaluating one identifier. Built once per request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResult {
    cpf: String,
    is_valid: bool,
    #[serde(default)]
    flags: BTreeSet<Registry>,
    #[serde(default, skip_serializing_if = "BTreeSet::is_empty")]
    unverified: BTreeSet<Registry>,
    message: String,
}

impl ValidationResult {
    pub fn invalid(cpf: impl Into<String>) -> Self {
        Self {
            cpf: cpf.into(),
            is_valid: false,
            flags: BTreeSet::new(),
            unverified: BTreeSet::new(),
            message: "CPF inválido.".to_string(),
        }
    }

    pub fn valid(
        cpf: impl Into<String>,
        flags: BTreeSet<Registry>,
        unverified: BTreeSet<Registry>,
    ) -> Self {
        let message = compose_message(&flags, &unverified);
        Self {
            cpf: cpf.into(),
            is_valid: true,
            flags,
            unverified,
            message,
        }
    }

    /// The identifier exactly as the caller supplied it.
    pub fn cpf(&self) -> &str {
        &self.cpf
    }

    pub fn is_valid(&self) -> bool {
        self.is_valid
    }

    pub fn flags(&self) -> &BTreeSet<Registry> {
        &self.flags
    }

    pub fn is_flagged(&self, registry: Registry) -> bool {
        self.flags.contains(&registry)
    }

    pub fn unverified(&self) -> &BTreeSet<Registry> {
        &self.unverified
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// One-line report for terminals: valid identifiers are shown in
    /// `ddd.ddd.ddd-dd` form, anything else exactly as supplied.
    pub fn summary(&self) -> String {
        let shown = Cpf::parse(&self.cpf)
            .filter(|_| self.is_valid)
            .map(|cpf| cpf.formatted())
            .unwrap_or_else(|| self.cpf.clone());
        format!("{}: {}", shown, self.message)
    }
}

fn compose_message(flags: &BTreeSet<Registry>, unverified: &BTreeSet<Registry>) -> String {
    let mut message = match (
        flags.contains(&Registry::Fraud),
        flags.contains(&Registry::Debt),
    ) {
        (true, true) => {
            "CPF válido, mas consta na base de dados de fraudes e na base de dados de débitos."
                .to_string()
        }
        (true, false) => "CPF válido, mas consta na base de dados de fraudes.".to_string(),
        (false, true) => "CPF válido, mas consta na base de dados de débitos.".to_string(),
        (false, false) if unverified.is_empty() => {
            "CPF válido, não consta na base de dados de fraudes e não consta na base de débitos."
                .to_string()
        }
        (false, false) => "CPF válido.".to_string(),
    };

    if !unverified.is_empty() {
        let labels: Vec<&str> = unverified.iter().map(Registry::label).collect();
        message.push_str(&format!(
            " Não foi possível consultar: {}.",
            labels.join(", ")
        ));
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_serialize_as_lowercase_names() {
        let flags = BTreeSet::from([Registry::Debt, Registry::Fraud]);
        let result = ValidationResult::valid("123.456.789-09", flags, BTreeSet::new());
        let json = serde_json::to_value(&result).unwrap();

        assert_eq!(json["cpf"], "123.456.789-09");
        assert_eq!(json["isValid"], true);
        assert_eq!(json["flags"], serde_json::json!(["fraud", "debt"]));
        assert!(json.get("unverified").is_none());
    }

    #[test]
    fn message_covers_each_outcome() {
        let none = BTreeSet::new();
        assert_eq!(ValidationResult::invalid("1").message(), "CPF inválido.");
        assert_eq!(
            ValidationResult::valid("x", BTreeSet::from([Registry::Fraud]), none.clone())
                .message(),
            "CPF válido, mas consta na base de dados de fraudes."
        );
        assert_eq!(
            ValidationResult::valid("x", BTreeSet::from([Registry::Debt]), none.clone())
                .message(),
            "CPF válido, mas consta na base de dados de débitos."
        );
        assert_eq!(
            ValidationResult::valid("x", none.clone(), none).message(),
            "CPF válido, não consta na base de dados de fraudes e não consta na base de débitos."
        );
    }

    #[test]
    fn summary_shows_valid_identifiers_formatted() {
        let valid = ValidationResult::valid("52998224725", BTreeSet::new(), BTreeSet::new());
        assert_eq!(
            valid.summary(),
            "529.982.247-25: CPF válido, não consta na base de dados de fraudes e não consta na base de débitos."
        );

        let invalid = ValidationResult::invalid("99999999999");
        assert_eq!(invalid.summary(), "99999999999: CPF inválido.");
    }

    #[test]
    fn unverified_lookups_are_reported() {
        let result = ValidationResult::valid(
            "x",
            BTreeSet::from([Registry::Fraud]),
            BTreeSet::from([Registry::Debt]),
        );
        assert_eq!(
            result.message(),
            "CPF válido, mas consta na base de dados de fraudes. Não foi possível consultar: base de dados de débitos."
        );
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["unverified"], serde_json::json!(["debt"]));
    }
}

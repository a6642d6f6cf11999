pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{HttpGateway, StaticListGateway};
pub use config::{lambda::LambdaConfig, CheckConfig};
pub use crate::core::{
    checker::CpfChecker,
    validator::{normalize, validate, CheckDigits, Cpf},
};
pub use domain::{
    model::{Registry, ValidationResult},
    ports::MembershipGateway,
};
pub use utils::error::{CheckError, Result};

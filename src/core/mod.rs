pub mod checker;
pub mod validator;

pub use crate::domain::model::{Registry, ValidationResult};
pub use crate::domain::ports::MembershipGateway;
pub use crate::utils::error::Result;

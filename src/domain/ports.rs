use crate::core::validator::Cpf;
use crate::domain::model::Registry;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Membership check against one external list.
///
/// Implementations only ever see identifiers that already passed validation,
/// which is why the argument is a [`Cpf`] rather than a raw string.
#[async_trait]
pub trait MembershipGateway: Send + Sync {
    fn registry(&self) -> Registry;

    async fn is_member(&self, cpf: &Cpf) -> Result<bool>;
}

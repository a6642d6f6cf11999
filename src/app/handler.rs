use crate::app::request::extract_cpf;
use crate::core::checker::CpfChecker;
use crate::core::ValidationResult;
use crate::utils::error::{CheckError, Result};

/// Host-independent response: the axum router and the Lambda binary both
/// translate this into their own types.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionResponse {
    pub status: u16,
    pub body: ResponseBody,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResponseBody {
    Json(ValidationResult),
    Text(String),
}

impl FunctionResponse {
    pub fn ok(result: ValidationResult) -> Self {
        Self {
            status: 200,
            body: ResponseBody::Json(result),
        }
    }

    pub fn from_error(error: &CheckError) -> Self {
        let status = if error.is_client_error() { 400 } else { 500 };
        Self {
            status,
            body: ResponseBody::Text(error.user_friendly_message()),
        }
    }

    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Parse the body, evaluate the identifier, and shape the response.
pub async fn handle(checker: &CpfChecker, body: &[u8]) -> FunctionResponse {
    tracing::info!("Starting CPF validation");

    match evaluate(checker, body).await {
        Ok(result) => FunctionResponse::ok(result),
        Err(e) => {
            tracing::warn!("Rejected request: {} ({:?})", e, e.category());
            FunctionResponse::from_error(&e)
        }
    }
}

/// Like [`handle`], but keeps the error typed for hosts that report failures
/// their own way.
pub async fn evaluate(checker: &CpfChecker, body: &[u8]) -> Result<ValidationResult> {
    let cpf = extract_cpf(body)?;
    Ok(checker.check(&cpf).await)
}

use crate::core::validator::Cpf;
use crate::core::{MembershipGateway, Registry, Result};
use crate::utils::error::CheckError;
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use std::time::Duration;

#[derive(Debug, Deserialize)]
struct MembershipResponse {
    member: bool,
}

/// Registry backed by a remote service.
///
/// Issues `GET {endpoint}/{cpf}`. A `200` carries `{"member": bool}`, a `404`
/// means the identifier is not listed; anything else is reported as
/// [`CheckError::LookupUnavailable`].
#[derive(Debug, Clone)]
pub struct HttpGateway {
    registry: Registry,
    endpoint: String,
    client: Client,
}

impl HttpGateway {
    pub fn new(registry: Registry, endpoint: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self {
            registry,
            endpoint: endpoint.into().trim_end_matches('/').to_string(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn unavailable(&self, reason: impl Into<String>) -> CheckError {
        CheckError::LookupUnavailable {
            registry: self.registry,
            reason: reason.into(),
        }
    }
}

#[async_trait]
impl MembershipGateway for HttpGateway {
    fn registry(&self) -> Registry {
        self.registry
    }

    async fn is_member(&self, cpf: &Cpf) -> Result<bool> {
        let url = format!("{}/{}", self.endpoint, cpf.as_str());
        tracing::debug!("Making registry request to: {}", self.endpoint);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(|e| self.unavailable(e.to_string()))?;

        tracing::debug!("Registry response status: {}", response.status());

        match response.status() {
            StatusCode::OK => {
                let body: MembershipResponse = response
                    .json()
                    .await
                    .map_err(|e| self.unavailable(format!("unreadable response: {}", e)))?;
                Ok(body.member)
            }
            StatusCode::NOT_FOUND => Ok(false),
            status => Err(self.unavailable(format!("unexpected status {}", status))),
        }
    }
}

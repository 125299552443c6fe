//! HTTP client for the platform's membership API

use crate::error::{CliError, CliResult};
use async_trait::async_trait;
use membership_runtime::DomainStore;
use membership_types::{ApplyReport, ChangeEntry, DomainId, MembershipSet};
use reqwest::{Client, RequestBuilder, StatusCode, Url};
use serde::{de::DeserializeOwned, Serialize};
use std::time::Duration;
use tracing::debug;

/// Default request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// HTTP client for domain membership endpoints
pub struct MembersClient {
    client: Client,
    base_url: Url,
    token: Option<String>,
}

/// Body of a member update request
#[derive(Debug, Serialize)]
struct UpdateMembersRequest<'a> {
    changes: &'a [ChangeEntry],
}

impl MembersClient {
    /// Create a new client
    pub fn new(endpoint: &str, token: Option<String>, timeout: Duration) -> CliResult<Self> {
        let base_url = Url::parse(endpoint.trim_end_matches('/'))
            .map_err(|e| CliError::Config(format!("Invalid endpoint '{}': {}", endpoint, e)))?;
        if base_url.cannot_be_a_base() {
            return Err(CliError::Config(format!("Invalid endpoint '{}'", endpoint)));
        }

        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            base_url,
            token,
        })
    }

    /// URL of a domain's member collection, with the domain percent-encoded
    fn members_url(&self, domain: &DomainId) -> Url {
        let mut url = self.base_url.clone();
        if let Ok(mut segments) = url.path_segments_mut() {
            segments
                .pop_if_empty()
                .extend(["api", "v1", "domains", domain.as_str(), "members"]);
        }
        url
    }

    async fn send<T: DeserializeOwned>(&self, request: RequestBuilder) -> CliResult<T> {
        let request = match &self.token {
            Some(token) => request.bearer_auth(token),
            None => request,
        };
        let response = request.send().await?;
        self.handle_response(response).await
    }

    async fn handle_response<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
    ) -> CliResult<T> {
        let status = response.status();
        debug!(status = status.as_u16(), url = %response.url(), "API response");

        if status.is_success() {
            Ok(response.json().await?)
        } else if status == StatusCode::NOT_FOUND {
            Err(CliError::NotFound(response.url().path().to_string()))
        } else {
            let message = response.text().await.unwrap_or_default();
            Err(CliError::Api {
                status: status.as_u16(),
                message,
            })
        }
    }
}

#[async_trait]
impl DomainStore for MembersClient {
    type Error = CliError;

    async fn members(&self, domain: &DomainId) -> CliResult<MembershipSet> {
        let url = self.members_url(domain);
        self.send(self.client.get(url)).await
    }

    async fn update_members(
        &self,
        domain: &DomainId,
        entries: &[ChangeEntry],
    ) -> CliResult<ApplyReport> {
        let url = self.members_url(domain);
        let body = UpdateMembersRequest { changes: entries };
        self.send(self.client.patch(url).json(&body)).await
    }

    async fn delete_members(&self, domain: &DomainId) -> CliResult<ApplyReport> {
        let url = self.members_url(domain);
        self.send(self.client.delete(url)).await
    }
}

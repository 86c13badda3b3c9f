//! HTTP gateway for listing the commits on a pull request.

use async_trait::async_trait;
use http::header::{ACCEPT, AUTHORIZATION, HeaderValue};
use reqwest::Client;

use crate::github::error::ResolveError;
use crate::github::locator::PullRequestLocator;
use crate::github::models::{ApiCommit, CommitRecord};

use super::CommitGateway;
use super::client::{GitHubSettings, build_http_client};
use super::error_mapping::{map_decode_error, map_http_error, map_transport_error};
use super::http_utils::{authorization_value, decode_commit_page, extract_github_message};

/// Largest page GitHub serves; only the first page is requested.
pub const COMMIT_PAGE_SIZE: u32 = 100;

const OPERATION: &str = "pull request commits";

/// Gateway that lists pull request commits through the GitHub REST API.
///
/// See <https://docs.github.com/en/rest/pulls/pulls#list-commits-on-a-pull-request>.
#[derive(Debug, Clone)]
pub struct HttpCommitGateway {
    client: Client,
    api_uri: String,
    authorization: HeaderValue,
}

impl HttpCommitGateway {
    /// Creates a gateway from connection settings.
    ///
    /// # Errors
    ///
    /// Returns `ResolveError::Configuration` when the access key cannot be
    /// sent as a header or the HTTP client cannot be built.
    pub fn new(settings: &GitHubSettings) -> Result<Self, ResolveError> {
        let authorization = authorization_value(&settings.access_key)?;
        let client = build_http_client(settings)?;
        Ok(Self {
            client,
            api_uri: settings.api_uri.trim_end_matches('/').to_owned(),
            authorization,
        })
    }

    fn endpoint(&self, locator: &PullRequestLocator) -> String {
        format!("{}{}", self.api_uri, locator.commits_path())
    }
}

#[async_trait]
impl CommitGateway for HttpCommitGateway {
    async fn pull_request_commits(
        &self,
        locator: &PullRequestLocator,
    ) -> Result<Vec<CommitRecord>, ResolveError> {
        let endpoint = self.endpoint(locator);
        tracing::debug!("listing commits from {endpoint}");

        let response = self
            .client
            .get(&endpoint)
            .query(&[("per_page", COMMIT_PAGE_SIZE)])
            .header(ACCEPT, HeaderValue::from_static("application/json"))
            .header(AUTHORIZATION, self.authorization.clone())
            .send()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|error| map_transport_error(OPERATION, &error))?;

        if !status.is_success() {
            return Err(map_http_error(
                OPERATION,
                status,
                extract_github_message(&body),
            ));
        }

        let page = decode_commit_page(&body).map_err(|error| map_decode_error(OPERATION, &error))?;
        tracing::debug!("GitHub returned {} commits", page.len());

        Ok(page.into_iter().filter_map(ApiCommit::into_record).collect())
    }
}

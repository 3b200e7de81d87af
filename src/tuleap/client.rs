use std::time::Duration;

use serde::de::DeserializeOwned;
use tracing::{debug, info};

use super::errors::TrackerError;
use super::pagination::PageCursor;
use super::types::{Artifact, Project, Tracker};
use crate::config::ApiConfig;

/// Header carrying the user's personal access key on every request.
const AUTH_HEADER: &str = "X-Auth-AccessKey";

/// Client for a Tuleap-style tracker REST API.
///
/// Owns one `reqwest::Client` for the whole run. Requests are issued one at a
/// time and awaited to completion; there is no retry, caching, or concurrent
/// fetching anywhere in here.
#[derive(Debug)]
pub struct TrackerClient {
    http: reqwest::Client,
    base_url: String,
    access_key: String,
}

impl TrackerClient {
    pub fn new(config: &ApiConfig) -> Result<Self, TrackerError> {
        let http = reqwest::Client::builder()
            .user_agent(concat!("tracker-stats/", env!("CARGO_PKG_VERSION")))
            .timeout(Duration::from_secs(config.timeout_seconds))
            .danger_accept_invalid_certs(config.danger_accept_invalid_certs)
            .build()
            .map_err(TrackerError::ClientBuild)?;

        Ok(Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            access_key: config.access_key.clone(),
        })
    }

    /// List the projects visible to the access key's owner.
    pub async fn projects(&self) -> Result<Vec<Project>, TrackerError> {
        let url = format!("{}/projects", self.base_url);
        self.get_json(&url, &[]).await
    }

    /// List the trackers of one project, addressed by the project's URI.
    pub async fn project_trackers(&self, project: &Project) -> Result<Vec<Tracker>, TrackerError> {
        let url = format!(
            "{}/{}/trackers",
            self.base_url,
            project.uri.trim_start_matches('/')
        );
        self.get_json(&url, &[]).await
    }

    /// Cheap existence probe: one page request, answered from the
    /// total-count header without decoding the body.
    pub async fn has_artifacts(&self, tracker_id: u64) -> Result<bool, TrackerError> {
        let url = self.artifacts_url(tracker_id);
        let response = self.get(&url, &[("offset", "0".to_string())]).await?;
        let cursor = PageCursor::from_headers(response.headers())?;
        Ok(cursor.total > 0)
    }

    /// Fetch every artifact of a tracker, stitching paginated responses back
    /// into one order-preserving list.
    ///
    /// The loop condition is `offset + size <= total` with an all-zero
    /// starting cursor, so at least one request is always issued. Even a
    /// zero-item tracker costs one round trip, which is how the server's
    /// reported total gets observed at all.
    pub async fn tracker_artifacts(&self, tracker_id: u64) -> Result<Vec<Artifact>, TrackerError> {
        let url = self.artifacts_url(tracker_id);
        let mut artifacts: Vec<Artifact> = Vec::new();
        let mut cursor = PageCursor::default();

        while !cursor.exhausted() {
            let response = self
                .get(&url, &[("offset", cursor.next_offset().to_string())])
                .await?;
            cursor = PageCursor::from_headers(response.headers())?;

            let page: Vec<Artifact> = response
                .json()
                .await
                .map_err(|source| TrackerError::Decode {
                    url: url.clone(),
                    source,
                })?;
            debug!(
                offset = cursor.offset,
                total = cursor.total,
                page_items = page.len(),
                "fetched artifact page"
            );
            artifacts.extend(page);
        }

        info!(tracker_id, count = artifacts.len(), "artifact fetch complete");
        Ok(artifacts)
    }

    fn artifacts_url(&self, tracker_id: u64) -> String {
        format!("{}/trackers/{}/artifacts", self.base_url, tracker_id)
    }

    async fn get(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<reqwest::Response, TrackerError> {
        let response = self
            .http
            .get(url)
            .header(AUTH_HEADER, &self.access_key)
            .query(query)
            .send()
            .await
            .map_err(|source| TrackerError::Request {
                url: url.to_string(),
                source,
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(TrackerError::Status {
                url: url.to_string(),
                status,
            });
        }
        Ok(response)
    }

    async fn get_json<T: DeserializeOwned>(
        &self,
        url: &str,
        query: &[(&str, String)],
    ) -> Result<T, TrackerError> {
        let response = self.get(url, query).await?;
        response.json().await.map_err(|source| TrackerError::Decode {
            url: url.to_string(),
            source,
        })
    }
}

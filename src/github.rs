//! GitHub API client for fetching the latest Floorp release.
//!
//! Only one endpoint is used: `GET /repos/{owner}/{repo}/releases/latest`.
//! The download page needs the tag (to build artifact URLs), the display
//! name and the publish timestamp. There is no retry: a failed request is
//! reported once and the page degrades.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::config::SiteConfig;

/// User agent for API requests
const USER_AGENT: &str = concat!("Floorp-Portal/", env!("CARGO_PKG_VERSION"));

/// The subset of a GitHub release the page renders
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Release {
    pub tag_name: String,
    pub name: String,
    /// ISO-8601 timestamp
    pub published_at: String,
}

/// Why the latest release could not be fetched
#[derive(Debug, Error)]
pub enum FetchError {
    #[error("GitHub API responded with status: {status}")]
    Status { status: u16 },

    #[error("network error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("unexpected response body: {0}")]
    Decode(String),
}

/// GitHub API client
#[derive(Clone)]
pub struct GitHubClient {
    client: reqwest::Client,
    latest_url: String,
}

impl GitHubClient {
    /// Create a client for the repository named in `site`
    pub fn new(site: &SiteConfig) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .build()?;

        let latest_url = format!(
            "{}/repos/{}/{}/releases/latest",
            site.api_base.trim_end_matches('/'),
            site.owner,
            site.repo
        );

        Ok(Self { client, latest_url })
    }

    /// Endpoint queried by [`GitHubClient::get_latest_release`]
    pub fn latest_url(&self) -> &str {
        &self.latest_url
    }

    /// Fetch the latest published release
    pub async fn get_latest_release(&self) -> Result<Release, FetchError> {
        let start = std::time::Instant::now();

        let response = self
            .client
            .get(&self.latest_url)
            .header("Accept", "application/vnd.github.v3+json")
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(FetchError::Status {
                status: response.status().as_u16(),
            });
        }

        let body = response.text().await?;
        let release: Release =
            serde_json::from_str(&body).map_err(|e| FetchError::Decode(e.to_string()))?;

        tracing::info!(
            "Fetched release {} in {:.1}s",
            release.tag_name,
            start.elapsed().as_secs_f32()
        );
        Ok(release)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn site_for(server: &MockServer) -> SiteConfig {
        SiteConfig {
            api_base: server.uri(),
            ..SiteConfig::default()
        }
    }

    #[test]
    fn test_latest_url() {
        let client = GitHubClient::new(&SiteConfig::default()).unwrap();
        assert_eq!(
            client.latest_url(),
            "https://api.github.com/repos/Floorp-Projects/Floorp/releases/latest"
        );
    }

    #[tokio::test]
    async fn test_fetch_latest_release() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/repos/Floorp-Projects/Floorp/releases/latest"))
            .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
                "tag_name": "v11.0",
                "name": "Floorp 11.0",
                "published_at": "2024-05-01T12:00:00Z",
                "assets": [],
                "draft": false
            })))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubClient::new(&site_for(&server)).unwrap();
        let release = client.get_latest_release().await.unwrap();

        assert_eq!(release.tag_name, "v11.0");
        assert_eq!(release.name, "Floorp 11.0");
        assert_eq!(release.published_at, "2024-05-01T12:00:00Z");
    }

    #[tokio::test]
    async fn test_non_success_status_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(403))
            .expect(1)
            .mount(&server)
            .await;

        let client = GitHubClient::new(&site_for(&server)).unwrap();
        let err = client.get_latest_release().await.unwrap_err();

        assert!(matches!(err, FetchError::Status { status: 403 }));
        assert_eq!(err.to_string(), "GitHub API responded with status: 403");
    }

    #[tokio::test]
    async fn test_malformed_body_is_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("{\"tag_name\": 5}"))
            .mount(&server)
            .await;

        let client = GitHubClient::new(&site_for(&server)).unwrap();
        let err = client.get_latest_release().await.unwrap_err();
        assert!(matches!(err, FetchError::Decode(_)));
    }
}

// GitHub API HTTP client.
// Handles authentication headers and response status classification.

use async_trait::async_trait;
use reqwest::{Client, Response, StatusCode, header::LINK};
use serde_json::Value;

use crate::auth;
use crate::error::{Error, Result};

use super::pages::{Page, PageSource, next_link};

const GITHUB_API_BASE: &str = "https://api.github.com";

/// GitHub API client carrying the default headers for every request.
pub struct GitHubClient {
    client: Client,
    base_url: String,
}

impl GitHubClient {
    /// Create a client with an optional personal access token.
    pub fn new(credential: Option<&str>) -> Result<Self> {
        let client = Client::builder()
            .default_headers(auth::headers(credential))
            .build()
            .map_err(Error::Http)?;

        Ok(Self {
            client,
            base_url: GITHUB_API_BASE.to_string(),
        })
    }

    /// Create a client from the GITHUB_TOKEN environment variable, if set.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("GITHUB_TOKEN").ok();
        Self::new(token.as_deref())
    }

    /// Point the client at a different API base (GitHub Enterprise, tests).
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }

    /// Build an absolute URL from an API path.
    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Make a GET request to an API path.
    pub(crate) async fn get(&self, path: &str) -> Result<Response> {
        self.get_url(&self.url(path)).await
    }

    /// Make a GET request to an absolute URL (pagination follows links
    /// outside the base path).
    pub(crate) async fn get_url(&self, url: &str) -> Result<Response> {
        let response = self.client.get(url).send().await.map_err(Error::Http)?;
        check_response(response)
    }
}

/// Check response status and convert errors.
fn check_response(response: Response) -> Result<Response> {
    match response.status() {
        status if status.is_success() => Ok(response),
        StatusCode::NOT_FOUND => Err(Error::NotFound),
        // The API answers 403 both for rate limiting and for genuinely
        // forbidden resources; an unauthenticated gallery hits the former.
        StatusCode::FORBIDDEN => Err(Error::RateLimited),
        status => Err(Error::Upstream(
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| status.to_string()),
        )),
    }
}

#[async_trait]
impl PageSource for GitHubClient {
    async fn get_page(&self, url: &str) -> Result<Page> {
        let response = self.get_url(url).await?;

        let next = response
            .headers()
            .get(LINK)
            .and_then(|v| v.to_str().ok())
            .and_then(next_link);

        let items: Vec<Value> = response.json().await?;
        Ok(Page { items, next })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_base_and_path() {
        let client = GitHubClient::new(None).unwrap();
        assert_eq!(
            client.url("/users/octocat"),
            "https://api.github.com/users/octocat"
        );
    }

    #[test]
    fn test_base_url_override() {
        let client = GitHubClient::new(None)
            .unwrap()
            .with_base_url("http://localhost:9999");
        assert_eq!(client.url("/users/octocat"), "http://localhost:9999/users/octocat");
    }
}

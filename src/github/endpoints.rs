// GitHub API endpoint functions.
// Thin retrieval operations for profiles, repository listings, and READMEs.

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::{Error, Result};

use super::client::GitHubClient;
use super::pages::fetch_all_pages;

impl GitHubClient {
    /// Get a user's profile.
    pub async fn get_user(&self, subject: &str) -> Result<Value> {
        let response = self.get(&format!("/users/{}", subject)).await?;
        let profile: Value = response.json().await?;
        Ok(profile)
    }

    /// Get a user's complete repository listing, most recently pushed
    /// first, following pagination to the end.
    pub async fn get_user_repos(&self, subject: &str) -> Result<Vec<Value>> {
        let url = self.url(&format!("/users/{}/repos?per_page=100&sort=pushed", subject));
        fetch_all_pages(self, &url).await
    }

    /// Get a user's profile README: the README of the repository named
    /// after the user.
    ///
    /// A 404 means no profile README exists. That and every other failure
    /// degrade to `None`; this call never raises.
    pub async fn get_profile_readme(&self, subject: &str) -> Option<Value> {
        match self.get_repo_readme(subject, subject).await {
            Ok(readme) => Some(readme),
            Err(Error::NotFound) => {
                debug!(subject, "no profile README found");
                None
            }
            Err(err) => {
                warn!(subject, %err, "could not fetch profile README");
                None
            }
        }
    }

    /// Get the README metadata for a repository, `content` field included.
    pub async fn get_repo_readme(&self, owner: &str, repo: &str) -> Result<Value> {
        let response = self.get(&format!("/repos/{}/{}/readme", owner, repo)).await?;
        let readme: Value = response.json().await?;
        Ok(readme)
    }
}

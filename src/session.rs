// Acquisition orchestration.
// Decides cache-vs-network per subject and owns the currently loaded data.

use async_trait::async_trait;
use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheStore, Kind};
use crate::error::{Error, Result};
use crate::github::GitHubClient;

/// The validated triple handed to the presentation layer.
#[derive(Debug, Clone, PartialEq)]
pub struct UserData {
    pub profile: Value,
    pub repos: Vec<Value>,
    pub profile_readme: Option<Value>,
}

/// Upstream acquisition operations, one per data kind.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserSource: Send + Sync {
    async fn fetch_profile(&self, subject: &str) -> Result<Value>;
    async fn fetch_repos(&self, subject: &str) -> Result<Vec<Value>>;
    /// Never fails; absence and failure both surface as `None`.
    async fn fetch_profile_readme(&self, subject: &str) -> Option<Value>;
}

#[async_trait]
impl UserSource for GitHubClient {
    async fn fetch_profile(&self, subject: &str) -> Result<Value> {
        self.get_user(subject).await
    }

    async fn fetch_repos(&self, subject: &str) -> Result<Vec<Value>> {
        self.get_user_repos(subject).await
    }

    async fn fetch_profile_readme(&self, subject: &str) -> Option<Value> {
        self.get_profile_readme(subject).await
    }
}

/// One browsing session: an API handle, the cache, and the data currently
/// on display.
pub struct Session<S> {
    source: S,
    cache: CacheStore,
    current_subject: Option<String>,
    current: Option<UserData>,
}

impl Session<GitHubClient> {
    /// Create a session against the real GitHub API.
    pub fn connect(credential: Option<&str>) -> Result<Self> {
        Ok(Self::new(GitHubClient::new(credential)?, CacheStore::open()?))
    }
}

impl<S: UserSource> Session<S> {
    pub fn new(source: S, cache: CacheStore) -> Self {
        Self {
            source,
            cache,
            current_subject: None,
            current: None,
        }
    }

    /// Subject whose data is currently loaded.
    pub fn current_subject(&self) -> Option<&str> {
        self.current_subject.as_deref()
    }

    /// Data currently loaded, if any.
    pub fn current(&self) -> Option<&UserData> {
        self.current.as_ref()
    }

    /// Load a subject's data, preferring fresh cache entries.
    pub async fn load(&mut self, subject: &str) -> Result<&UserData> {
        self.acquire(subject, false).await
    }

    /// Load a subject's data, bypassing the cache and re-fetching.
    pub async fn refresh(&mut self, subject: &str) -> Result<&UserData> {
        self.acquire(subject, true).await
    }

    async fn acquire(&mut self, subject: &str, force: bool) -> Result<&UserData> {
        let subject = subject.trim();
        if subject.is_empty() {
            return Err(Error::InvalidInput);
        }

        if !force {
            if let Some(data) = self.read_cached(subject)? {
                debug!(subject, "loading from cache");
                self.current_subject = Some(subject.to_string());
                return Ok(self.current.insert(data));
            }
        }

        debug!(subject, "fetching from API");
        let (profile, repos, readme) = tokio::join!(
            self.source.fetch_profile(subject),
            self.source.fetch_repos(subject),
            self.source.fetch_profile_readme(subject),
        );
        // Profile and repos are required; the README was already absorbed
        // to None on failure and never fails the acquisition.
        let profile = profile?;
        let repos = repos?;

        self.cache.set(subject, Kind::Profile, &profile)?;
        self.cache.set(subject, Kind::Repos, &Value::Array(repos.clone()))?;
        self.cache
            .set(subject, Kind::ProfileReadme, readme.as_ref().unwrap_or(&Value::Null))?;

        self.current_subject = Some(subject.to_string());
        Ok(self.current.insert(UserData {
            profile,
            repos,
            profile_readme: readme,
        }))
    }

    /// Read the cached triple, requiring fresh non-null profile and repos.
    ///
    /// The README entry does not gate the hit: a cached `null` README, or
    /// no README entry at all, still short-circuits the network.
    fn read_cached(&self, subject: &str) -> Result<Option<UserData>> {
        let profile = self.cache.get(subject, Kind::Profile)?;
        let repos = self.cache.get(subject, Kind::Repos)?;
        let readme = self.cache.get(subject, Kind::ProfileReadme)?;

        let (Some(profile), Some(repos)) = (profile, repos) else {
            return Ok(None);
        };
        if profile.is_null() {
            return Ok(None);
        }
        let Value::Array(repos) = repos else {
            return Ok(None);
        };

        let profile_readme = match readme {
            Some(Value::Null) | None => None,
            Some(value) => Some(value),
        };

        Ok(Some(UserData {
            profile,
            repos,
            profile_readme,
        }))
    }
}

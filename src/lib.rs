// gitfolio: cached data-acquisition layer for a GitHub repository gallery.
// Fetches a user's profile, complete repository listing, and optional
// profile README, caches the results under a 30-minute TTL, and hands a
// validated triple to whatever presentation layer sits on top.

pub mod auth;
pub mod cache;
pub mod error;
pub mod github;
pub mod readme;
pub mod session;

pub use cache::{CacheStore, Kind};
pub use error::{Error, Result};
pub use github::GitHubClient;
pub use session::{Session, UserData, UserSource};

// GitHub API module.
// Provides the client, endpoint operations, and Link-header pagination.

pub mod client;
pub mod endpoints;
pub mod pages;

pub use client::GitHubClient;
pub use pages::{Page, PageSource, fetch_all_pages, next_link};

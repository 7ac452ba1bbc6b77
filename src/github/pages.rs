// Link-header pagination.
// Walks rel="next" links to collect a complete listing across pages.

use async_trait::async_trait;
use serde_json::Value;

use crate::error::Result;

/// One page of a listing: its items plus the URL of the next page, if any.
#[derive(Debug, Clone)]
pub struct Page {
    pub items: Vec<Value>,
    pub next: Option<String>,
}

/// Source of listing pages, one request per page.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageSource: Send + Sync {
    /// Fetch a single page at `url`.
    async fn get_page(&self, url: &str) -> Result<Page>;
}

/// Collect the full result set behind a paginated listing endpoint.
///
/// Pages are fetched sequentially, each request driven by the previous
/// response's `next` link, and items keep page and intra-page order. A
/// failure at any page aborts the whole fetch with no partial result, and
/// no page is ever retried.
pub async fn fetch_all_pages<S: PageSource + ?Sized>(
    source: &S,
    initial_url: &str,
) -> Result<Vec<Value>> {
    let mut results = Vec::new();
    let mut next_url = Some(initial_url.to_string());

    while let Some(url) = next_url {
        let page = source.get_page(&url).await?;
        results.extend(page.items);
        next_url = page.next;
    }

    Ok(results)
}

/// Extract the rel="next" target from a `Link` response header.
///
/// The header is a comma-separated list of `<url>; rel="relation"` entries,
/// possibly with extra parameters and stray whitespace.
pub fn next_link(header: &str) -> Option<String> {
    for segment in header.split(',') {
        let mut parts = segment.split(';');
        let target = parts.next().unwrap_or("").trim();
        if !(target.starts_with('<') && target.ends_with('>')) {
            continue;
        }

        let is_next = parts.any(|param| match param.trim().split_once('=') {
            Some((key, value)) => {
                key.trim() == "rel" && value.trim().trim_matches('"') == "next"
            }
            None => false,
        });

        if is_next {
            return Some(target[1..target.len() - 1].to_string());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use mockall::predicate::eq;
    use serde_json::json;

    fn items(range: std::ops::Range<usize>) -> Vec<Value> {
        range.map(|i| json!({"id": i})).collect()
    }

    #[test]
    fn test_next_link_basic() {
        let header = r#"<https://api.github.com/user/1/repos?page=2>; rel="next", <https://api.github.com/user/1/repos?page=5>; rel="last""#;
        assert_eq!(
            next_link(header),
            Some("https://api.github.com/user/1/repos?page=2".to_string())
        );
    }

    #[test]
    fn test_next_link_absent() {
        let header = r#"<https://api.github.com/user/1/repos?page=4>; rel="prev", <https://api.github.com/user/1/repos?page=1>; rel="first""#;
        assert_eq!(next_link(header), None);
    }

    #[test]
    fn test_next_link_tolerates_whitespace() {
        let header = r#"  <https://x/p2> ;  rel = "next"  ,  <https://x/p9>; rel="last""#;
        assert_eq!(next_link(header), Some("https://x/p2".to_string()));
    }

    #[test]
    fn test_next_link_with_extra_params() {
        let header = r#"<https://x/p3>; per_page=100; rel="next""#;
        assert_eq!(next_link(header), Some("https://x/p3".to_string()));
    }

    #[test]
    fn test_next_link_malformed_segment_is_skipped() {
        let header = r#"garbage; rel="next", <https://x/p2>; rel="next""#;
        assert_eq!(next_link(header), Some("https://x/p2".to_string()));
    }

    #[tokio::test]
    async fn test_fetch_all_pages_preserves_order_across_pages() {
        let mut source = MockPageSource::new();
        source
            .expect_get_page()
            .with(eq("https://api.test/repos?page=1"))
            .times(1)
            .returning(|_| {
                Ok(Page {
                    items: items(0..100),
                    next: Some("https://api.test/repos?page=2".to_string()),
                })
            });
        source
            .expect_get_page()
            .with(eq("https://api.test/repos?page=2"))
            .times(1)
            .returning(|_| {
                Ok(Page {
                    items: items(100..200),
                    next: Some("https://api.test/repos?page=3".to_string()),
                })
            });
        source
            .expect_get_page()
            .with(eq("https://api.test/repos?page=3"))
            .times(1)
            .returning(|_| {
                Ok(Page {
                    items: items(200..237),
                    next: None,
                })
            });

        let all = fetch_all_pages(&source, "https://api.test/repos?page=1")
            .await
            .unwrap();

        assert_eq!(all.len(), 237);
        assert_eq!(all[0], json!({"id": 0}));
        assert_eq!(all[99], json!({"id": 99}));
        assert_eq!(all[100], json!({"id": 100}));
        assert_eq!(all[236], json!({"id": 236}));
    }

    #[tokio::test]
    async fn test_fetch_all_pages_single_page() {
        let mut source = MockPageSource::new();
        source.expect_get_page().times(1).returning(|_| {
            Ok(Page {
                items: items(0..3),
                next: None,
            })
        });

        let all = fetch_all_pages(&source, "https://api.test/repos").await.unwrap();
        assert_eq!(all.len(), 3);
    }

    #[tokio::test]
    async fn test_fetch_all_pages_aborts_on_failure_without_partial_result() {
        let mut source = MockPageSource::new();
        source
            .expect_get_page()
            .with(eq("https://api.test/p1"))
            .times(1)
            .returning(|_| {
                Ok(Page {
                    items: items(0..100),
                    next: Some("https://api.test/p2".to_string()),
                })
            });
        source
            .expect_get_page()
            .with(eq("https://api.test/p2"))
            .times(1)
            .returning(|_| Err(Error::RateLimited));

        let result = fetch_all_pages(&source, "https://api.test/p1").await;
        assert!(matches!(result, Err(Error::RateLimited)));
    }
}

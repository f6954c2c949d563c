// file: src/pipeline/paginator.rs
// description: follows "next" links until every declared search hit is collected

use crate::api::MediaApiClient;
use crate::error::{PipelineError, Result};
use crate::models::{Item, SearchResult};
use tracing::{debug, info, warn};

pub struct Paginator<'a> {
    client: &'a MediaApiClient,
    max_pages: usize,
}

impl<'a> Paginator<'a> {
    pub fn new(client: &'a MediaApiClient, max_pages: usize) -> Self {
        Self {
            client,
            max_pages: max_pages.max(1),
        }
    }

    /// Collects the items of `initial` and every following page until the
    /// accumulated count reaches the declared total.
    ///
    /// Fails with [`PipelineError::PaginationStalled`] when a page is short of
    /// the total but offers no `next` link or adds no items, and with
    /// [`PipelineError::PageLimitExceeded`] once `max_pages` pages (the
    /// initial one included) have been read.
    pub async fn collect_all_items(&self, initial: SearchResult) -> Result<Vec<Item>> {
        let total = initial.total_hits();
        let mut current = initial;
        let mut items = std::mem::take(&mut current.items);
        let mut pages = 1;

        while items.len() < total {
            let next = current
                .next_link()
                .map(str::to_owned)
                .ok_or_else(|| PipelineError::PaginationStalled {
                    collected: items.len(),
                    total,
                })?;

            if pages >= self.max_pages {
                return Err(PipelineError::PageLimitExceeded {
                    limit: self.max_pages,
                    collected: items.len(),
                    total,
                });
            }

            current = self.client.fetch_page(&next).await?;
            pages += 1;

            let page_items = std::mem::take(&mut current.items);
            if page_items.is_empty() {
                return Err(PipelineError::PaginationStalled {
                    collected: items.len(),
                    total,
                });
            }

            items.extend(page_items);
            debug!("Page {}: {}/{} items collected", pages, items.len(), total);
        }

        if items.len() > total {
            warn!(
                "Collected {} items but search declared {} hits",
                items.len(),
                total
            );
        }

        info!("Collected {} items across {} pages", items.len(), pages);
        Ok(items)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use serde_json::{Value, json};
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> MediaApiClient {
        let mut api = Config::default_config().api;
        api.base_url = server.uri();
        MediaApiClient::new(api).unwrap()
    }

    fn item(id: &str) -> Value {
        json!({
            "href": format!("http://assets.example/{}/collection.json", id),
            "data": [{"media_type": "image", "nasa_id": id}]
        })
    }

    fn page(total: usize, ids: &[&str], next: Option<String>) -> Value {
        let links: Vec<Value> = next
            .into_iter()
            .map(|href| json!({"rel": "next", "prompt": "Next", "href": href}))
            .collect();
        json!({
            "collection": {
                "items": ids.iter().map(|id| item(id)).collect::<Vec<_>>(),
                "metadata": {"total_hits": total},
                "links": links
            }
        })
    }

    fn initial(body: Value) -> SearchResult {
        serde_json::from_value::<crate::models::SearchEnvelope>(body)
            .unwrap()
            .collection
    }

    async fn mount_page(server: &MockServer, number: &str, body: Value) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("page", number))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(server)
            .await;
    }

    #[tokio::test]
    async fn test_single_page_needs_no_requests() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let first = initial(page(2, &["A", "B"], None));
        let items = Paginator::new(&client, 10)
            .collect_all_items(first)
            .await
            .unwrap();

        assert_eq!(items.len(), 2);
        assert!(server.received_requests().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_follows_next_links_until_total() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let base = server.uri();

        mount_page(
            &server,
            "2",
            page(5, &["C", "D"], Some(format!("{}/search?q=x&page=3", base))),
        )
        .await;
        mount_page(&server, "3", page(5, &["E"], None)).await;

        let first = initial(page(
            5,
            &["A", "B"],
            Some(format!("{}/search?q=x&page=2", base)),
        ));
        let items = Paginator::new(&client, 10)
            .collect_all_items(first)
            .await
            .unwrap();

        let ids: Vec<&str> = items
            .iter()
            .map(|item| item.assets[0].nasa_id.as_str())
            .collect();
        assert_eq!(ids, vec!["A", "B", "C", "D", "E"]);
    }

    #[tokio::test]
    async fn test_missing_next_link_stalls() {
        let server = MockServer::start().await;
        let client = client_for(&server);

        let first = initial(page(3, &["A"], None));
        let err = Paginator::new(&client, 10)
            .collect_all_items(first)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::PaginationStalled {
                collected: 1,
                total: 3
            }
        ));
    }

    #[tokio::test]
    async fn test_empty_page_stalls() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let base = server.uri();

        mount_page(
            &server,
            "2",
            page(3, &[], Some(format!("{}/search?q=x&page=3", base))),
        )
        .await;

        let first = initial(page(
            3,
            &["A"],
            Some(format!("{}/search?q=x&page=2", base)),
        ));
        let err = Paginator::new(&client, 10)
            .collect_all_items(first)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::PaginationStalled { .. }));
    }

    #[tokio::test]
    async fn test_page_limit() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let base = server.uri();

        mount_page(
            &server,
            "2",
            page(10, &["B"], Some(format!("{}/search?q=x&page=3", base))),
        )
        .await;

        let first = initial(page(
            10,
            &["A"],
            Some(format!("{}/search?q=x&page=2", base)),
        ));
        let err = Paginator::new(&client, 2)
            .collect_all_items(first)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            PipelineError::PageLimitExceeded {
                limit: 2,
                collected: 2,
                total: 10
            }
        ));
    }

    #[tokio::test]
    async fn test_failed_page_fetch_is_fatal() {
        let server = MockServer::start().await;
        let client = client_for(&server);
        let base = server.uri();

        Mock::given(method("GET"))
            .and(path("/search"))
            .respond_with(ResponseTemplate::new(502))
            .mount(&server)
            .await;

        let first = initial(page(
            2,
            &["A"],
            Some(format!("{}/search?q=x&page=2", base)),
        ));
        let err = Paginator::new(&client, 10)
            .collect_all_items(first)
            .await
            .unwrap_err();

        assert!(matches!(err, PipelineError::HttpStatus { status: 502, .. }));
    }
}

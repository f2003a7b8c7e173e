//! The fetch contract every resource operation is written against.

use async_trait::async_trait;
use reqwest::StatusCode;
use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::error::{PagerDutyError, Result};
use crate::pagination::{paged_path, Page, PAGE_LIMIT};
use crate::session::PaginationLimits;

/// A decoded JSON response object.
pub type JsonObject = serde_json::Map<String, Value>;

/// HTTP exchanges with JSON decoding and offset pagination.
///
/// Implementors provide the four primitives; pagination and the
/// single/object decoders are built on [`fetch_json`](Self::fetch_json).
/// Paths are relative to the API origin.
#[async_trait]
pub trait Fetcher: Send + Sync {
    /// GET `path`, expecting 200, and return the response object.
    async fn fetch_json(&self, path: &str) -> Result<JsonObject>;

    /// POST `body` to `path`, expecting 201, and return the response object.
    async fn post_json(&self, path: &str, body: &Value) -> Result<JsonObject>;

    /// PUT `body` to `path`, expecting 200, and return the response object.
    async fn put_json(&self, path: &str, body: &Value) -> Result<JsonObject>;

    /// DELETE `path`, expecting `expected`.
    async fn delete(&self, path: &str, expected: StatusCode) -> Result<()>;

    /// Safeguards applied by [`fetch_all`](Self::fetch_all).
    fn pagination_limits(&self) -> PaginationLimits {
        PaginationLimits::default()
    }

    /// Fetch one page of a collection.
    async fn fetch_page<T>(
        &self,
        path: &str,
        items_field: &str,
        offset: usize,
        limit: u32,
    ) -> Result<Page<T>>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.fetch_json(&paged_path(path, offset, limit)).await?;
        let page = Page::from_response(response, items_field, offset, limit)?;
        tracing::debug!(path, offset, count = page.len(), more = page.more, "fetched page");
        Ok(page)
    }

    /// Fetch every item of a collection, page by page.
    ///
    /// Pages are requested sequentially with `limit = 100`; each offset is
    /// the number of items received so far. Any failure discards the items
    /// already collected.
    ///
    /// # Errors
    ///
    /// Besides exchange and decode errors, fails with
    /// `PaginationLimitExceeded` when the server keeps reporting more items
    /// past the configured limits.
    async fn fetch_all<T>(&self, path: &str, items_field: &str) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let limits = self.pagination_limits();
        let mut items = Vec::new();
        let mut offset = 0;
        let mut pages = 0;

        loop {
            if pages >= limits.max_pages {
                tracing::warn!(path, pages, items = items.len(), "pagination page limit reached");
                return Err(PagerDutyError::PaginationLimitExceeded {
                    pages,
                    items: items.len(),
                });
            }

            let page = self
                .fetch_page::<T>(path, items_field, offset, PAGE_LIMIT)
                .await?;
            pages += 1;
            offset = page.next_offset();
            let more = page.more;
            items.extend(page.items);

            if limits.max_items.is_some_and(|max| items.len() > max) {
                tracing::warn!(path, pages, items = items.len(), "pagination item limit reached");
                return Err(PagerDutyError::PaginationLimitExceeded {
                    pages,
                    items: items.len(),
                });
            }

            if !more {
                break;
            }
        }

        Ok(items)
    }

    /// GET `path` and decode the object under `item_field`.
    async fn fetch_single<T>(&self, path: &str, item_field: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.fetch_json(path).await?;
        super::take_field(response, item_field)
    }

    /// GET `path` and decode the whole response object.
    async fn fetch_object<T>(&self, path: &str) -> Result<T>
    where
        T: DeserializeOwned + Send,
    {
        let response = self.fetch_json(path).await?;
        Ok(serde_json::from_value(Value::Object(response))?)
    }
}

//! List trait for fetching collections of entities.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::Fetcher;
use crate::error::Result;
use crate::pagination::Page;

/// List entities with offset pagination.
///
/// # Example
///
/// ```ignore
/// use pdapi::{PagerDutyClient, Service, List};
///
/// let client = PagerDutyClient::from_env()?;
///
/// // Fetch a single page
/// let page = Service::list_page(&client, &(), 0, 25).await?;
///
/// // Fetch all pages
/// let all_services = Service::list_all(&client, &()).await?;
/// ```
#[async_trait]
pub trait List: DeserializeOwned + Send {
    /// What the collection is scoped by (`()` for top-level collections).
    type Scope: ?Sized + Sync;

    /// Key of the items array in each page response.
    const ITEMS_FIELD: &'static str;

    /// Collection path relative to the API origin, without paging parameters.
    fn collection_path(scope: &Self::Scope) -> String;

    /// Fetch one page starting at `offset`.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails.
    async fn list_page<F: Fetcher>(
        fetcher: &F,
        scope: &Self::Scope,
        offset: usize,
        limit: u32,
    ) -> Result<Page<Self>> {
        let path = Self::collection_path(scope);
        fetcher
            .fetch_page(&path, Self::ITEMS_FIELD, offset, limit)
            .await
    }

    /// Fetch every entity in the collection.
    ///
    /// # Errors
    ///
    /// Returns an error if any page request fails.
    async fn list_all<F: Fetcher>(fetcher: &F, scope: &Self::Scope) -> Result<Vec<Self>> {
        let path = Self::collection_path(scope);
        fetcher.fetch_all(&path, Self::ITEMS_FIELD).await
    }
}

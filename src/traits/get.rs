//! Get trait for fetching single entities.

use async_trait::async_trait;
use serde::de::DeserializeOwned;

use super::Fetcher;
use crate::error::Result;

/// Fetch a single entity by ID.
///
/// Implementors name the resource path and the envelope key the API wraps
/// the entity in.
///
/// # Example
///
/// ```ignore
/// use pdapi::{PagerDutyClient, Service, Get};
///
/// let client = PagerDutyClient::from_env()?;
/// let service = Service::get(&client, "PSERVICE").await?;
/// ```
#[async_trait]
pub trait Get: DeserializeOwned + Send {
    /// The ID type for this entity.
    type Id: ?Sized + Sync;

    /// Key wrapping the entity in the response, `None` when it is returned bare.
    const ITEM_FIELD: Option<&'static str>;

    /// Path of the entity relative to the API origin.
    fn resource_path(id: &Self::Id) -> String;

    /// Fetch the entity by ID.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn get<F: Fetcher>(fetcher: &F, id: &Self::Id) -> Result<Self> {
        let path = Self::resource_path(id);
        match Self::ITEM_FIELD {
            Some(field) => fetcher.fetch_single(&path, field).await,
            None => fetcher.fetch_object(&path).await,
        }
    }
}

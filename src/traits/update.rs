//! Update trait for modifying entities.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{request_body, response_item, Fetcher};
use crate::error::Result;

/// Update an existing entity.
///
/// # Example
///
/// ```ignore
/// use pdapi::{PagerDutyClient, User, Update, Get};
///
/// let client = PagerDutyClient::from_env()?;
/// let user = User::get(&client, "PUSER01").await?;
/// let mut info = user.info();
/// info.job_title = Some("SRE".to_string());
/// let updated = User::update(&client, &user.reference.id, &info).await?;
/// ```
#[async_trait]
pub trait Update: DeserializeOwned + Send {
    /// The ID type for this entity.
    type Id: ?Sized + Sync;

    /// Parameters for the update.
    type Params: Serialize + Sync;

    /// Envelope key for request and response, `None` when both are bare.
    const ITEM_FIELD: Option<&'static str>;

    /// Path of the entity relative to the API origin.
    fn resource_path(id: &Self::Id) -> String;

    /// Update the entity and return the updated version.
    ///
    /// # Errors
    ///
    /// Returns an error if the entity is not found or the request fails.
    async fn update<F: Fetcher>(fetcher: &F, id: &Self::Id, params: &Self::Params) -> Result<Self> {
        let path = Self::resource_path(id);
        let body = request_body(Self::ITEM_FIELD, params)?;
        let response = fetcher.put_json(&path, &body).await?;
        response_item(response, Self::ITEM_FIELD)
    }
}

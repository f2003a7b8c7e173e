//! Create trait for adding entities.

use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;

use super::{request_body, take_field, Fetcher};
use crate::error::Result;

/// Create a new entity.
///
/// The request body is `{ITEM_FIELD: params}` and the created entity is
/// decoded from the same key of the 201 response.
#[async_trait]
pub trait Create: DeserializeOwned + Send {
    /// What the new entity is created under (`()` for top-level collections).
    type Scope: ?Sized + Sync;

    /// Parameters describing the new entity.
    type Params: Serialize + Sync;

    /// Envelope key for request and response.
    const ITEM_FIELD: &'static str;

    /// Collection path the entity is posted to.
    fn collection_path(scope: &Self::Scope) -> String;

    /// Create the entity and return it as stored by the server.
    ///
    /// # Errors
    ///
    /// Returns an error if the server does not answer 201 or the response
    /// does not decode.
    async fn create<F: Fetcher>(
        fetcher: &F,
        scope: &Self::Scope,
        params: &Self::Params,
    ) -> Result<Self> {
        let path = Self::collection_path(scope);
        let body = request_body(Some(Self::ITEM_FIELD), params)?;
        let response = fetcher.post_json(&path, &body).await?;
        take_field(response, Self::ITEM_FIELD)
    }
}

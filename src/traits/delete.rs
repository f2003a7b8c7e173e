//! Delete trait for removing entities.

use async_trait::async_trait;
use reqwest::StatusCode;

use super::Fetcher;
use crate::error::Result;

/// Delete an entity by ID.
#[async_trait]
pub trait Delete {
    /// The ID type for this entity.
    type Id: ?Sized + Sync;

    /// Status the API answers a successful delete with.
    const EXPECTED_STATUS: StatusCode = StatusCode::NO_CONTENT;

    /// Path of the entity relative to the API origin.
    fn resource_path(id: &Self::Id) -> String;

    /// Delete the entity.
    ///
    /// # Errors
    ///
    /// Returns an error if the server answers anything but
    /// [`EXPECTED_STATUS`](Self::EXPECTED_STATUS).
    async fn delete<F: Fetcher>(fetcher: &F, id: &Self::Id) -> Result<()> {
        let path = Self::resource_path(id);
        fetcher.delete(&path, Self::EXPECTED_STATUS).await
    }
}

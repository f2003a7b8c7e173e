//! Pagination utilities for PagerDuty list responses.
//!
//! PagerDuty collections use offset pagination: a request carries `offset`
//! and `limit`, and the response object carries a `more` flag next to an
//! array of items under a resource-specific key.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::{PagerDutyError, Result};
use crate::traits::JsonObject;

/// Page size used for every collection request.
pub const PAGE_LIMIT: u32 = 100;

/// A page of results from the PagerDuty API.
#[derive(Debug, Clone, Serialize)]
#[serde(bound = "T: Serialize")]
pub struct Page<T> {
    /// The items on this page, in server order.
    pub items: Vec<T>,
    /// Offset this page was requested at.
    pub offset: usize,
    /// Requested page size.
    pub limit: u32,
    /// Whether the server reports more items after this page.
    pub more: bool,
}

impl<T> Page<T> {
    /// Create a new page from items and pagination info.
    #[must_use]
    pub fn new(items: Vec<T>, offset: usize, limit: u32, more: bool) -> Self {
        Self {
            items,
            offset,
            limit,
            more,
        }
    }

    /// Offset of the page that follows this one.
    ///
    /// Advances by the number of items actually received, which may be
    /// fewer than `limit`.
    #[must_use]
    pub fn next_offset(&self) -> usize {
        self.offset + self.items.len()
    }

    /// Map the items to a different type.
    #[must_use]
    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            limit: self.limit,
            more: self.more,
        }
    }

    /// Returns true if this page has no items.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the number of items on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns an iterator over the items in this page.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T: DeserializeOwned> Page<T> {
    /// Decode one page response object.
    ///
    /// # Errors
    ///
    /// Fails with `MissingField` when `more` or the items array is absent,
    /// and with `Decode` when either has the wrong shape or an item does not
    /// decode into `T`.
    pub fn from_response(
        mut response: JsonObject,
        items_field: &str,
        offset: usize,
        limit: u32,
    ) -> Result<Self> {
        let more = response
            .remove("more")
            .ok_or_else(|| PagerDutyError::missing_field("more"))?;
        let more: bool = serde_json::from_value(more)?;

        let items = response
            .remove(items_field)
            .ok_or_else(|| PagerDutyError::missing_field(items_field))?;
        let items: Vec<T> = serde_json::from_value(items)?;

        Ok(Self::new(items, offset, limit, more))
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a Page<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Append offset/limit query parameters to a collection path.
pub(crate) fn paged_path(path: &str, offset: usize, limit: u32) -> String {
    let separator = if path.contains('?') { '&' } else { '?' };
    format!("{path}{separator}offset={offset}&limit={limit}")
}

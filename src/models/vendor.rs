//! Vendor model.
//!
//! Vendors describe the third-party tools an integration can receive
//! events from. The account-wide list is large (several hundred entries).

use serde::{Deserialize, Serialize};

use super::ObjectRef;
use crate::traits::{Get, List};

/// An integration vendor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Vendor {
    /// Reference fields (id, type, summary, URLs).
    #[serde(flatten)]
    pub reference: ObjectRef,

    pub name: String,

    #[serde(default)]
    pub website_url: Option<String>,

    #[serde(default)]
    pub logo_url: Option<String>,

    #[serde(default)]
    pub thumbnail_url: Option<String>,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub integration_guide_url: Option<String>,
}

impl Vendor {
    /// A reference to this vendor suitable for request payloads.
    pub fn to_ref(&self) -> ObjectRef {
        ObjectRef::new(&self.reference.id, &self.reference.ref_type)
    }
}

/// The single-vendor endpoint returns the vendor unwrapped.
impl Get for Vendor {
    type Id = str;

    const ITEM_FIELD: Option<&'static str> = None;

    fn resource_path(id: &str) -> String {
        format!("vendors/{}", urlencoding::encode(id))
    }
}

impl List for Vendor {
    type Scope = ();

    const ITEMS_FIELD: &'static str = "vendors";

    fn collection_path(_scope: &()) -> String {
        "vendors".to_string()
    }
}

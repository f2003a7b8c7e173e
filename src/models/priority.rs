//! Incident priority model.

use serde::{Deserialize, Serialize};

use super::ObjectRef;
use crate::traits::List;

/// An incident priority defined for the account (e.g., P1).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Priority {
    #[serde(flatten)]
    pub reference: ObjectRef,
    pub name: String,
    #[serde(default)]
    pub description: String,
}

impl List for Priority {
    type Scope = ();

    const ITEMS_FIELD: &'static str = "priorities";

    fn collection_path(_scope: &()) -> String {
        "priorities".to_string()
    }
}

use serde::{Deserialize, Serialize};

/// A linked institution credential. Items are created by the external
/// linking flow and are read-only to this crate.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Item {
    pub item_id: String,
    pub institution_name: Option<String>,
}

impl Item {
    pub fn new(item_id: impl Into<String>) -> Self {
        Self {
            item_id: item_id.into(),
            institution_name: None,
        }
    }
}

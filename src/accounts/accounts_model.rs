use serde::{Deserialize, Serialize};

/// Domain model representing a financial account under one linked item.
///
/// `account_id` is globally unique across all items and is the merge/dedup
/// key everywhere in the engine. Accounts are fetched fresh on each load and
/// never mutated.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Account {
    pub account_id: String,
    pub name: String,
    pub item_id: String,
    pub account_type: Option<String>,
}

impl Account {
    pub fn new(
        account_id: impl Into<String>,
        name: impl Into<String>,
        item_id: impl Into<String>,
    ) -> Self {
        Self {
            account_id: account_id.into(),
            name: name.into(),
            item_id: item_id.into(),
            account_type: None,
        }
    }
}

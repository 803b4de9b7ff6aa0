use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use validator::Validate;

use super::error::RemoteError;

/// Body of a Stack Exchange `/search/advanced` response. Only the fields we
/// read are modelled; `items` must be present for the body to count as valid.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct SearchResponse {
    pub items: Vec<SearchItem>,
    #[serde(default)]
    pub quota_remaining: Option<u32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Validate)]
pub struct SearchItem {
    #[validate(length(min = 1, message = "Title cannot be empty"))]
    pub title: String,
    #[validate(length(min = 1, message = "Link cannot be empty"))]
    pub link: String,
}

impl SearchResponse {
    /// The most relevant hit. Only that item is checked; later hits are never shown.
    pub fn into_top_item(self) -> Result<Option<SearchItem>, RemoteError> {
        let top = match self.items.into_iter().next() {
            Some(item) => item,
            None => return Ok(None),
        };

        top.validate().map_err(|e| {
            RemoteError::ValidationError(format!("Top search item is invalid: {}", e))
        })?;
        Ok(Some(top))
    }
}

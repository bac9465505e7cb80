use serde::{Deserialize, Serialize};

use crate::search::{SearchCategory, SearchFilter, SortDirection, SortOrder};

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct SearchConfig {
    #[serde(default = "default_per_page")]
    pub per_page: u32,
    #[serde(default)]
    pub filter: SearchFilter,
    #[serde(default)]
    pub order: SortOrder,
    #[serde(default)]
    pub direction: SortDirection,
    /// `None` searches every category.
    #[serde(default)]
    pub category: Option<SearchCategory>,
}

fn default_per_page() -> u32 {
    18
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            per_page: default_per_page(),
            filter: SearchFilter::default(),
            order: SortOrder::default(),
            direction: SortDirection::default(),
            category: None,
        }
    }
}

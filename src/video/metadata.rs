use serde::{Deserialize, Serialize};
use time::{PrimitiveDateTime, macros::format_description};

use crate::common::{Result, VimeoError};

/// Public video details from the v2 simple API.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Metadata {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub url: String,
    /// `YYYY-MM-DD HH:MM:SS`, see [`Metadata::upload_date`].
    pub upload_date: String,
    pub thumbnail_small: String,
    pub thumbnail_medium: String,
    pub thumbnail_large: String,
    pub user_id: u64,
    pub user_name: String,
    pub user_url: String,
    pub user_portrait_small: String,
    pub user_portrait_medium: String,
    pub user_portrait_large: String,
    pub user_portrait_huge: String,
    #[serde(rename = "stats_number_of_likes")]
    pub likes: u64,
    #[serde(rename = "stats_number_of_plays")]
    pub plays: u64,
    #[serde(rename = "stats_number_of_comments")]
    pub comments: u64,
    /// Seconds.
    pub duration: u64,
    pub width: u32,
    pub height: u32,
    /// Comma separated.
    pub tags: String,
    pub embed_privacy: String,
}

impl Metadata {
    pub fn upload_date(&self) -> Result<PrimitiveDateTime> {
        let format = format_description!("[year]-[month]-[day] [hour]:[minute]:[second]");
        PrimitiveDateTime::parse(&self.upload_date, format)
            .map_err(|e| VimeoError::Decoding(format!("upload_date {:?}: {}", self.upload_date, e)))
    }

    pub fn tag_list(&self) -> Vec<&str> {
        self.tags
            .split(',')
            .map(str::trim)
            .filter(|tag| !tag.is_empty())
            .collect()
    }
}

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct SearchResult {
    pub total: u64,
    pub page: u32,
    pub per_page: u32,
    pub data: SearchData,
}

/// Result items in API order, mixed kinds possible.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct SearchData(pub Vec<SearchItem>);

/// One result. The payload sits under a key named after its `type`.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum SearchItem {
    #[serde(rename = "clip")]
    Video { clip: Box<VideoItem> },
    People { people: PeopleItem },
    Channel { channel: ChannelItem },
    Group { group: GroupItem },
    /// Kinds this client does not model.
    #[serde(other)]
    Unknown,
}

impl SearchData {
    pub fn videos(&self) -> Vec<&VideoItem> {
        self.0
            .iter()
            .filter_map(|item| match item {
                SearchItem::Video { clip } => Some(clip.as_ref()),
                _ => None,
            })
            .collect()
    }

    pub fn people(&self) -> Vec<&PeopleItem> {
        self.0
            .iter()
            .filter_map(|item| match item {
                SearchItem::People { people } => Some(people),
                _ => None,
            })
            .collect()
    }

    pub fn channels(&self) -> Vec<&ChannelItem> {
        self.0
            .iter()
            .filter_map(|item| match item {
                SearchItem::Channel { channel } => Some(channel),
                _ => None,
            })
            .collect()
    }

    pub fn groups(&self) -> Vec<&GroupItem> {
        self.0
            .iter()
            .filter_map(|item| match item {
                SearchItem::Group { group } => Some(group),
                _ => None,
            })
            .collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct PictureSize {
    pub width: u32,
    pub height: u32,
    pub link: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Pictures {
    pub active: bool,
    #[serde(rename = "type")]
    pub kind: String,
    pub sizes: Vec<PictureSize>,
    pub default_picture: bool,
}

/// Channel and group thumbnails also carry a play-button variant.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ThumbnailSize {
    pub width: u32,
    pub height: u32,
    pub link: String,
    pub link_with_play_button: String,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Thumbnails {
    pub sizes: Vec<ThumbnailSize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct Total {
    pub total: u64,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Connections {
    pub albums: Total,
    pub channels: Total,
    pub comments: Total,
    pub followers: Total,
    pub following: Total,
    pub likes: Total,
    pub users: Total,
    pub videos: Total,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ConnectionsMetadata {
    pub connections: Connections,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Tag {
    pub name: String,
    pub tag: String,
    pub canonical: String,
    pub metadata: ConnectionsMetadata,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Uploader {
    pub pictures: Pictures,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct User {
    pub name: String,
    pub link: String,
    pub location: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_time: Option<OffsetDateTime>,
    pub pictures: Pictures,
    pub metadata: ConnectionsMetadata,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct VideoItem {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: String,
    pub link: String,
    /// Seconds.
    pub duration: u64,
    pub width: u32,
    pub height: u32,
    pub language: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub modified_time: Option<OffsetDateTime>,
    #[serde(with = "time::serde::rfc3339::option")]
    pub release_time: Option<OffsetDateTime>,
    pub content_rating: Vec<String>,
    pub pictures: Pictures,
    pub tags: Vec<Tag>,
    pub uploader: Uploader,
    pub metadata: ConnectionsMetadata,
    pub user: User,
    pub files: VideoFiles,
    pub status: String,
    pub is_playable: bool,
    pub has_audio: bool,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct VideoFile {
    /// Quality label, `hls` for the adaptive playlist.
    pub quality: String,
    #[serde(rename = "type")]
    pub mime: String,
    pub width: u32,
    pub height: u32,
    #[serde(with = "time::serde::rfc3339::option")]
    pub expires: Option<OffsetDateTime>,
    pub link: String,
    #[serde(with = "time::serde::rfc3339::option")]
    pub created_time: Option<OffsetDateTime>,
    pub fps: f64,
    pub video_file_id: u64,
    /// Bytes.
    pub size: u64,
    pub md5: String,
    pub public_name: String,
    pub size_short: String,
    pub link_secure: String,
}

impl VideoFile {
    pub fn is_hls(&self) -> bool {
        self.quality == "hls"
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(transparent)]
pub struct VideoFiles(pub Vec<VideoFile>);

impl VideoFiles {
    /// Largest file by size; the first one wins a tie.
    pub fn best(&self) -> Option<&VideoFile> {
        self.0
            .iter()
            .reduce(|best, file| if file.size > best.size { file } else { best })
    }

    /// Smallest file by size; the first one wins a tie.
    pub fn worst(&self) -> Option<&VideoFile> {
        self.0
            .iter()
            .reduce(|worst, file| if file.size < worst.size { file } else { worst })
    }

    /// Files with a direct URL.
    pub fn progressive(&self) -> VideoFiles {
        VideoFiles(self.0.iter().filter(|f| !f.is_hls()).cloned().collect())
    }

    /// The `.m3u8` playlist entry.
    pub fn hls(&self) -> Option<&VideoFile> {
        self.0.iter().find(|f| f.is_hls())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, VideoFile> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct PeopleItem {
    pub name: String,
    pub link: String,
    pub location: String,
    pub pictures: Pictures,
    /// Follower and video counts.
    pub metadata: ConnectionsMetadata,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct ChannelItem {
    pub name: String,
    pub link: String,
    pub pictures: Thumbnails,
    /// Subscriber (`users`) and video counts.
    pub metadata: ConnectionsMetadata,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct GroupItem {
    pub name: String,
    pub link: String,
    pub pictures: Thumbnails,
    /// Member (`users`) and video counts.
    pub metadata: ConnectionsMetadata,
}

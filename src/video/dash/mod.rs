//! JSON DASH manifests as served behind a [`DashFormat`](crate::video::DashFormat) URL.
//!
//! A manifest lists video and audio renditions. Each rendition carries a
//! base64 init segment and the relative URLs of its media segments; the
//! absolute location of a rendition is found by resolving its `base_url`
//! against the manifest `base_url`, itself resolved against the URL the
//! manifest was fetched from.

pub mod reader;

use reqwest::Url;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use super::ranked::{Ranked, RankedList};
use crate::common::{Result, VimeoError};

pub use reader::DashStreamReader;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct DashManifest {
    #[serde(default)]
    pub clip_id: String,
    #[serde(default)]
    pub base_url: String,
    /// Sorted by bitrate.
    #[serde(default)]
    pub video: RankedList<DashVideoStream>,
    /// Sorted by bitrate.
    #[serde(default)]
    pub audio: RankedList<DashAudioStream>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashSegment {
    /// Offset in seconds from the start of the stream.
    pub start: f64,
    pub end: f64,
    /// Relative to the owning stream's absolute URL.
    pub url: String,
    /// Declared size in bytes.
    pub size: u64,
}

/// Fields shared by video and audio renditions.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct DashStream {
    pub id: String,
    /// Absolute URL, filled in after the manifest is fetched.
    #[serde(skip_deserializing)]
    pub url: String,
    pub base_url: String,
    pub format: String,
    pub mime_type: String,
    pub codecs: String,
    pub bitrate: u64,
    pub avg_bitrate: u64,
    pub duration: f64,
    pub max_segment_duration: f64,
    /// Base64 encoded initialization segment.
    pub init_segment: String,
    pub segments: Vec<DashSegment>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DashVideoStream {
    #[serde(flatten)]
    pub stream: DashStream,
    #[serde(default)]
    pub framerate: f64,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct DashAudioStream {
    #[serde(flatten)]
    pub stream: DashStream,
    #[serde(default)]
    pub channels: u32,
    #[serde(default)]
    pub sample_rate: u32,
}

impl AsRef<DashStream> for DashVideoStream {
    fn as_ref(&self) -> &DashStream {
        &self.stream
    }
}

impl AsRef<DashStream> for DashAudioStream {
    fn as_ref(&self) -> &DashStream {
        &self.stream
    }
}

impl Ranked for DashVideoStream {
    fn rank(&self) -> u64 {
        self.stream.bitrate
    }
}

impl Ranked for DashAudioStream {
    fn rank(&self) -> u64 {
        self.stream.bitrate
    }
}

impl DashManifest {
    /// Every rendition, video first, through the shared shape.
    pub fn streams(&self) -> impl Iterator<Item = &DashStream> {
        self.video
            .iter()
            .map(|v| &v.stream)
            .chain(self.audio.iter().map(|a| &a.stream))
    }

    /// Fills in every stream's absolute `url`.
    ///
    /// `fetch_url` is the URL the manifest itself was retrieved from.
    pub fn resolve_urls(&mut self, fetch_url: &Url) -> Result<()> {
        let base = fetch_url.join(&self.base_url).map_err(|e| {
            VimeoError::parsing(format!("manifest base_url {:?}: {}", self.base_url, e))
        })?;
        trace!("DASH: manifest base resolved to {}", base);

        let resolve = |stream: &mut DashStream| -> Result<()> {
            let url = base.join(&stream.base_url).map_err(|e| {
                VimeoError::parsing(format!(
                    "stream {} base_url {:?}: {}",
                    stream.id, stream.base_url, e
                ))
            })?;
            stream.url = url.into();
            Ok(())
        };

        self.video.try_for_each_mut(|v| resolve(&mut v.stream))?;
        self.audio.try_for_each_mut(|a| resolve(&mut a.stream))?;

        Ok(())
    }
}

/// Fetches and decodes the manifest at `manifest_url`, resolving stream URLs.
pub async fn fetch_manifest(client: &reqwest::Client, manifest_url: &str) -> Result<DashManifest> {
    let fetch_url = Url::parse(manifest_url)
        .map_err(|e| VimeoError::InvalidUrl(format!("{}: {}", manifest_url, e)))?;

    debug!("DASH: fetching manifest {}", fetch_url);
    let resp = client.get(fetch_url.clone()).send().await?;
    if !resp.status().is_success() {
        return Err(VimeoError::UnexpectedStatus(resp.status().as_u16()));
    }

    let body = resp.bytes().await?;
    let mut manifest: DashManifest = serde_json::from_slice(&body)
        .map_err(|e| VimeoError::Decoding(format!("couldn't decode dash JSON: {}", e)))?;
    manifest.resolve_urls(&fetch_url)?;

    debug!(
        "DASH: clip {} has {} video and {} audio streams",
        manifest.clip_id,
        manifest.video.len(),
        manifest.audio.len()
    );
    Ok(manifest)
}

pub mod dash;
pub mod formats;
pub mod metadata;
pub mod ranked;
pub mod resolver;
pub mod validation;

pub use dash::{
  DashAudioStream, DashManifest, DashSegment, DashStream, DashStreamReader, DashVideoStream,
};
pub use formats::*;
pub use metadata::Metadata;
pub use ranked::{Ranked, RankedList};
pub use validation::parse_video_id;

use tracing::debug;

use crate::common::{HttpClient, Result, VimeoError};
use crate::configs::{Config, EndpointsConfig};

/// A single video, identified by its page URL and numeric id.
///
/// Every call issues fresh requests; nothing is cached between calls.
#[derive(Clone, Debug)]
pub struct Video {
  url: String,
  id: u64,
  client: reqwest::Client,
  endpoints: EndpointsConfig,
}

impl Video {
  /// Validates `url` and builds an HTTP client from `config`.
  pub fn new(url: &str, config: &Config) -> Result<Self> {
    let id = parse_video_id(url)?;
    Ok(Self::with_client(
      url,
      id,
      HttpClient::new(&config.http)?,
      config.endpoints.clone(),
    ))
  }

  /// Builds a handle for a bare id, using `<site>/<id>` as the page URL.
  pub fn from_id(id: u64, config: &Config) -> Result<Self> {
    if id == 0 {
      return Err(VimeoError::InvalidUrl("video id must be positive".to_string()));
    }
    Ok(Self::with_client(
      &config.endpoints.page_url(id),
      id,
      HttpClient::new(&config.http)?,
      config.endpoints.clone(),
    ))
  }

  pub fn with_client(
    url: &str,
    id: u64,
    client: reqwest::Client,
    endpoints: EndpointsConfig,
  ) -> Self {
    Self {
      url: url.to_string(),
      id,
      client,
      endpoints,
    }
  }

  pub fn id(&self) -> u64 {
    self.id
  }

  pub fn url(&self) -> &str {
    &self.url
  }

  pub fn client(&self) -> &reqwest::Client {
    &self.client
  }

  pub async fn metadata(&self) -> Result<Metadata> {
    let url = self.endpoints.metadata_url(self.id);
    debug!("Video: fetching metadata {}", url);

    let resp = self.client.get(&url).send().await?;
    if resp.status().as_u16() >= 400 {
      return Err(VimeoError::UnexpectedStatus(resp.status().as_u16()));
    }

    let body = resp.bytes().await?;
    let records: Vec<Metadata> = serde_json::from_slice(&body)
      .map_err(|e| VimeoError::Decoding(format!("couldn't decode metadata JSON: {}", e)))?;

    records
      .into_iter()
      .next()
      .ok_or_else(|| VimeoError::parsing(format!("no metadata returned for {}", self.id)))
  }

  pub async fn formats(&self) -> Result<StreamFormats> {
    resolver::resolve_formats(&self.client, &self.endpoints, self.id, &self.url).await
  }

  pub async fn dash_manifest(&self, manifest_url: &str) -> Result<DashManifest> {
    dash::fetch_manifest(&self.client, manifest_url).await
  }

  /// Fetches the manifest behind the DASH entry of `formats`.
  pub async fn dash_manifest_for(&self, formats: &StreamFormats) -> Result<DashManifest> {
    let url = formats
      .dash
      .as_ref()
      .map(DashFormat::url)
      .filter(|url| !url.is_empty())
      .ok_or_else(|| VimeoError::parsing(format!("video {} has no DASH format", self.id)))?;

    self.dash_manifest(url).await
  }
}

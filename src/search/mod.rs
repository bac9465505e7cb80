pub mod options;
pub mod token;
pub mod types;

pub use options::*;
pub use token::JwtTokenTracker;
pub use types::*;

use std::sync::Arc;

use tracing::debug;

use crate::common::{HttpClient, Result, VimeoError};
use crate::configs::{Config, EndpointsConfig, SearchConfig};

/// Public search over videos, people, channels and groups.
///
/// Clones share one token cache.
#[derive(Clone)]
pub struct SearchClient {
  client: reqwest::Client,
  search_url: String,
  options: SearchConfig,
  token: Arc<JwtTokenTracker>,
}

impl SearchClient {
  pub fn new(config: &Config) -> Result<Self> {
    Ok(Self::with_client(
      HttpClient::new(&config.http)?,
      &config.endpoints,
      config.search.clone(),
    ))
  }

  pub fn with_client(
    client: reqwest::Client,
    endpoints: &EndpointsConfig,
    options: SearchConfig,
  ) -> Self {
    Self {
      token: Arc::new(JwtTokenTracker::new(client.clone(), endpoints.token_url())),
      search_url: endpoints.search_url(),
      client,
      options,
    }
  }

  pub fn with_per_page(mut self, per_page: u32) -> Self {
    self.options.per_page = per_page;
    self
  }

  pub fn with_filter(mut self, filter: SearchFilter) -> Self {
    self.options.filter = filter;
    self
  }

  pub fn with_order(mut self, order: SortOrder) -> Self {
    self.options.order = order;
    self
  }

  pub fn with_direction(mut self, direction: SortDirection) -> Self {
    self.options.direction = direction;
    self
  }

  pub fn with_category(mut self, category: Option<SearchCategory>) -> Self {
    self.options.category = category;
    self
  }

  pub fn options(&self) -> &SearchConfig {
    &self.options
  }

  /// Returns one page of results. Pages start at 1.
  ///
  /// A token the API rejects with `401` is replaced once and the request
  /// retried; a second rejection is returned as an error.
  pub async fn search(&self, query: &str, page: u32) -> Result<SearchResult> {
    let url = self.build_url(query, page);
    debug!("Search: {:?} page {}", query, page);

    let token = self.token.get_token().await?;
    let resp = self.send(&url, &token).await?;

    let resp = match resp.status().as_u16() {
      200 => resp,
      401 => {
        let token = self.token.refresh_after_rejection(&token).await?;
        let retry = self.send(&url, &token).await?;
        if retry.status().as_u16() != 200 {
          return Err(VimeoError::UnexpectedStatus(retry.status().as_u16()));
        }
        retry
      }
      status => return Err(VimeoError::UnexpectedStatus(status)),
    };

    let body = resp.bytes().await?;
    let result: SearchResult = serde_json::from_slice(&body)
      .map_err(|e| VimeoError::Decoding(format!("couldn't decode search JSON: {}", e)))?;

    debug!(
      "Search: {:?} page {} returned {} of {} results",
      query,
      page,
      result.data.len(),
      result.total
    );
    Ok(result)
  }

  async fn send(&self, url: &str, token: &str) -> Result<reqwest::Response> {
    Ok(
      self
        .client
        .get(url)
        .header("Authorization", format!("jwt {}", token))
        .send()
        .await?,
    )
  }

  fn build_url(&self, query: &str, page: u32) -> String {
    let mut url = format!(
      "{}?fields=search_web&query={}&filter_type={}&sort={}&direction={}",
      self.search_url,
      urlencoding::encode(query),
      self.options.filter.as_str(),
      self.options.order.as_str(),
      self.options.direction.as_str()
    );
    if let Some(category) = &self.options.category {
      url.push_str("&filter_category=");
      url.push_str(category.as_str());
    }
    url.push_str(&format!("&page={}&per_page={}", page, self.options.per_page));
    url
  }
}

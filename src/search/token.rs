use std::sync::Arc;

use serde::Deserialize;
use tokio::sync::Mutex;
use tracing::{debug, trace};

use crate::common::{Result, Shared, VimeoError};

#[derive(Deserialize)]
struct JwtResponse {
  token: String,
}

/// Caches the anonymous JWT the search API expects.
///
/// The lock is held across the fetch, so concurrent callers without a token
/// wait for a single request instead of racing.
pub struct JwtTokenTracker {
  client: reqwest::Client,
  token_url: String,
  token: Shared<Option<String>>,
}

impl JwtTokenTracker {
  pub fn new(client: reqwest::Client, token_url: String) -> Self {
    Self {
      client,
      token_url,
      token: Arc::new(Mutex::new(None)),
    }
  }

  /// Cached token, fetching one first when none is held.
  pub async fn get_token(&self) -> Result<String> {
    let mut guard = self.token.lock().await;
    if let Some(token) = &*guard {
      return Ok(token.clone());
    }

    let token = self.fetch_token().await?;
    *guard = Some(token.clone());
    Ok(token)
  }

  /// Replaces `rejected` after the API refused it.
  ///
  /// If another caller already replaced it, the newer token is returned
  /// without another request.
  pub async fn refresh_after_rejection(&self, rejected: &str) -> Result<String> {
    let mut guard = self.token.lock().await;
    if let Some(token) = &*guard {
      if token != rejected {
        trace!("Search: token already refreshed by another request");
        return Ok(token.clone());
      }
    }

    debug!("Search: token rejected, fetching a new one");
    *guard = None;
    let token = self.fetch_token().await?;
    *guard = Some(token.clone());
    Ok(token)
  }

  async fn fetch_token(&self) -> Result<String> {
    debug!("Search: fetching JWT from {}", self.token_url);
    let resp = self
      .client
      .get(&self.token_url)
      .header("X-Requested-With", "XMLHttpRequest")
      .send()
      .await?;

    if !resp.status().is_success() {
      return Err(VimeoError::UnexpectedStatus(resp.status().as_u16()));
    }

    let body = resp.bytes().await?;
    let parsed: JwtResponse = serde_json::from_slice(&body)
      .map_err(|e| VimeoError::Decoding(format!("couldn't decode JWT response: {}", e)))?;
    Ok(parsed.token)
  }
}

use std::time::Duration;

use reqwest::{Client, Error};
use tracing::debug;

use crate::configs::HttpConfig;

pub struct HttpClient;

impl HttpClient {
  pub fn new(config: &HttpConfig) -> Result<Client, Error> {
    let mut builder = Client::builder()
      .user_agent(config.user_agent.as_str())
      .timeout(Duration::from_secs(config.timeout_secs));

    if let Some(proxy_cfg) = &config.proxy {
      if let Some(url) = &proxy_cfg.url {
        debug!("Configuring proxy for HttpClient: {}", url);
        let mut proxy = reqwest::Proxy::all(url)?;
        if let (Some(u), Some(p)) = (&proxy_cfg.username, &proxy_cfg.password) {
          proxy = proxy.basic_auth(u, p);
        }
        builder = builder.proxy(proxy);
      }
    }

    builder.build()
  }
}

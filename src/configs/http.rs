use serde::{Deserialize, Serialize};

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (X11; Ubuntu; Linux x86_64; rv:84.0) Gecko/20100101 Firefox/84.0";

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct HttpConfig {
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default)]
    pub proxy: Option<HttpProxyConfig>,
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

fn default_timeout_secs() -> u64 {
    10
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout_secs: default_timeout_secs(),
            proxy: None,
        }
    }
}

#[derive(Debug, Deserialize, Serialize, Clone, Default)]
pub struct HttpProxyConfig {
    pub url: Option<String>,
    pub username: Option<String>,
    pub password: Option<String>,
}

/// Base URLs every request is built from. Trailing slashes are ignored.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct EndpointsConfig {
    /// Public site: video pages, the v2 metadata API and the search JWT.
    #[serde(default = "default_site")]
    pub site: String,
    /// Embedded player: per-video config documents.
    #[serde(default = "default_player")]
    pub player: String,
    /// Private API: search.
    #[serde(default = "default_api")]
    pub api: String,
}

fn default_site() -> String {
    "https://vimeo.com".to_string()
}

fn default_player() -> String {
    "https://player.vimeo.com".to_string()
}

fn default_api() -> String {
    "https://api.vimeo.com".to_string()
}

impl Default for EndpointsConfig {
    fn default() -> Self {
        Self {
            site: default_site(),
            player: default_player(),
            api: default_api(),
        }
    }
}

impl EndpointsConfig {
    /// Points every endpoint at one host, e.g. a local mock server.
    pub fn single_host(base: &str) -> Self {
        Self {
            site: base.to_string(),
            player: base.to_string(),
            api: base.to_string(),
        }
    }

    pub fn page_url(&self, video_id: u64) -> String {
        format!("{}/{}", self.site.trim_end_matches('/'), video_id)
    }

    pub fn metadata_url(&self, video_id: u64) -> String {
        format!(
            "{}/api/v2/video/{}.json",
            self.site.trim_end_matches('/'),
            video_id
        )
    }

    pub fn config_url(&self, video_id: u64) -> String {
        format!(
            "{}/video/{}/config",
            self.player.trim_end_matches('/'),
            video_id
        )
    }

    pub fn token_url(&self) -> String {
        format!("{}/_rv/jwt", self.site.trim_end_matches('/'))
    }

    pub fn search_url(&self) -> String {
        format!("{}/search", self.api.trim_end_matches('/'))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_follow_platform_layout() {
        let endpoints = EndpointsConfig::default();
        assert_eq!(endpoints.page_url(76979871), "https://vimeo.com/76979871");
        assert_eq!(
            endpoints.config_url(76979871),
            "https://player.vimeo.com/video/76979871/config"
        );
        assert_eq!(
            endpoints.metadata_url(1),
            "https://vimeo.com/api/v2/video/1.json"
        );
        assert_eq!(endpoints.token_url(), "https://vimeo.com/_rv/jwt");
        assert_eq!(endpoints.search_url(), "https://api.vimeo.com/search");
    }

    #[test]
    fn trailing_slash_is_ignored() {
        let endpoints = EndpointsConfig::single_host("http://127.0.0.1:4000/");
        assert_eq!(
            endpoints.config_url(5),
            "http://127.0.0.1:4000/video/5/config"
        );
    }
}

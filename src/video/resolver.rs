use regex::Regex;
use serde::Deserialize;
use tracing::{debug, trace, warn};

use super::formats::StreamFormats;
use crate::common::{Result, VimeoError};
use crate::configs::EndpointsConfig;

#[derive(Deserialize, Default)]
struct PlayerConfig {
    #[serde(default)]
    request: PlayerRequest,
}

#[derive(Deserialize, Default)]
struct PlayerRequest {
    #[serde(default)]
    files: Option<StreamFormats>,
}

/// Fetches the player config for `video_id` and returns its stream formats.
///
/// A `403` on the config endpoint (private or embed-restricted videos) is
/// retried once through the video page at `source_url`, which embeds a signed
/// copy of the config URL.
pub async fn resolve_formats(
    client: &reqwest::Client,
    endpoints: &EndpointsConfig,
    video_id: u64,
    source_url: &str,
) -> Result<StreamFormats> {
    let config_url = endpoints.config_url(video_id);
    debug!("Formats: fetching player config {}", config_url);

    let resp = client.get(&config_url).send().await?;
    let status = resp.status().as_u16();

    let config = if status < 400 {
        decode_player_config(&resp.bytes().await?)?
    } else if status == 403 {
        warn!(
            "Formats: config for {} is forbidden, falling back to {}",
            video_id, source_url
        );
        let signed_url = find_embedded_config_url(client, &config_url, source_url).await?;
        trace!("Formats: found embedded config url {}", signed_url);

        let resp = client.get(&signed_url).send().await?;
        if resp.status().as_u16() >= 400 {
            return Err(VimeoError::UnexpectedStatus(resp.status().as_u16()));
        }
        decode_player_config(&resp.bytes().await?)?
    } else {
        return Err(VimeoError::parsing(format!(
            "player config for {} answered {}",
            video_id, status
        )));
    };

    let formats = config
        .request
        .files
        .ok_or_else(|| VimeoError::parsing("player config has no files"))?;

    debug!(
        "Formats: {} progressive, dash={}, hls={}",
        formats.progressive.len(),
        formats.dash.is_some(),
        formats.hls.is_some()
    );
    Ok(formats)
}

fn decode_player_config(body: &[u8]) -> Result<PlayerConfig> {
    serde_json::from_slice(body)
        .map_err(|e| VimeoError::Decoding(format!("couldn't decode config JSON: {}", e)))
}

async fn find_embedded_config_url(
    client: &reqwest::Client,
    config_url: &str,
    source_url: &str,
) -> Result<String> {
    let resp = client.get(source_url).send().await?;
    if resp.status().as_u16() >= 400 {
        return Err(VimeoError::parsing(format!(
            "video page answered {}",
            resp.status().as_u16()
        )));
    }

    let html = resp
        .text()
        .await
        .map_err(|_| VimeoError::parsing("couldn't read video page"))?;

    extract_config_url(&html, config_url)
        .ok_or_else(|| VimeoError::parsing("couldn't find config url"))
}

/// Finds the first quoted, slash-escaped copy of `config_url` (plus its
/// signature query) in `html` and returns it unescaped.
pub(crate) fn extract_config_url(html: &str, config_url: &str) -> Option<String> {
    let escaped = config_url.replace('/', r"\/");
    let re = Regex::new(&format!(r#""({}.+?)""#, regex::escape(&escaped))).ok()?;

    re.captures(html)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().replace(r"\/", "/"))
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG_URL: &str = "https://player.vimeo.com/video/42/config";

    #[test]
    fn extracts_and_unescapes_first_match() {
        let html = r#"<script>window.playerConfig = {"config_url":"https:\/\/player.vimeo.com\/video\/42\/config?h=abc&s=1","other":"https:\/\/player.vimeo.com\/video\/42\/config?h=zzz"};</script>"#;
        assert_eq!(
            extract_config_url(html, CONFIG_URL).as_deref(),
            Some("https://player.vimeo.com/video/42/config?h=abc&s=1")
        );
    }

    #[test]
    fn ignores_unescaped_and_other_videos() {
        let html = r#"{"a":"https://player.vimeo.com/video/42/config?h=1","b":"https:\/\/player.vimeo.com\/video\/421\/config"}"#;
        assert_eq!(extract_config_url(html, CONFIG_URL), None);
    }

    #[test]
    fn bare_config_url_needs_a_suffix() {
        let html = r#"{"config_url":"https:\/\/player.vimeo.com\/video\/42\/config"}"#;
        assert_eq!(extract_config_url(html, CONFIG_URL), None);
    }

    #[test]
    fn dots_in_host_are_literal() {
        let html = r#""https:\/\/playerXvimeo.com\/video\/42\/config?h=1""#;
        assert_eq!(extract_config_url(html, CONFIG_URL), None);
    }

    #[test]
    fn missing_files_block_decodes_as_none() {
        let config = decode_player_config(br#"{"request":{"signature":"x"}}"#).unwrap();
        assert!(config.request.files.is_none());
        let config = decode_player_config(b"{}").unwrap();
        assert!(config.request.files.is_none());
    }
}

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::ranked::{Ranked, RankedList};

/// CDNs tried, in order, when the default one has no URL.
const CDN_FALLBACK_ORDER: [&str; 2] = ["akfire_interconnect_quic", "fastly_skyfire"];

/// Every delivery format the player config advertises for a video.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct StreamFormats {
    /// Direct MP4 files, sorted by width.
    #[serde(default)]
    pub progressive: RankedList<ProgressiveFormat>,
    #[serde(default)]
    pub dash: Option<DashFormat>,
    #[serde(default)]
    pub hls: Option<HlsFormat>,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct ProgressiveFormat {
    pub profile: Option<serde_json::Value>,
    pub width: u32,
    pub height: u32,
    pub mime: String,
    pub fps: f64,
    pub url: String,
    pub cdn: String,
    pub quality: String,
    pub origin: String,
}

impl Ranked for ProgressiveFormat {
    fn rank(&self) -> u64 {
        u64::from(self.width)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CdnEntry {
    pub url: String,
    pub origin: String,
    pub avc_url: String,
}

/// A segmented format served through one or more named CDNs.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default)]
pub struct CdnFormat {
    pub separate_av: bool,
    pub default_cdn: String,
    pub cdns: BTreeMap<String, CdnEntry>,
}

/// Points at the `.m3u8` master playlist.
pub type HlsFormat = CdnFormat;

/// Points at the JSON DASH manifest, see [`crate::video::Video::dash_manifest`].
pub type DashFormat = CdnFormat;

impl CdnFormat {
    /// URL on the default CDN, falling back to the first CDN that has one.
    ///
    /// Empty when no CDN carries a URL; the format is then unavailable.
    pub fn url(&self) -> &str {
        let non_empty = |name: &str| {
            self.cdns
                .get(name)
                .map(|entry| entry.url.as_str())
                .filter(|url| !url.is_empty())
        };

        non_empty(self.default_cdn.as_str())
            .or_else(|| CDN_FALLBACK_ORDER.into_iter().find_map(|name| non_empty(name)))
            .or_else(|| {
                self.cdns
                    .values()
                    .map(|entry| entry.url.as_str())
                    .find(|url| !url.is_empty())
            })
            .unwrap_or("")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cdn_format(default_cdn: &str, cdns: &[(&str, &str)]) -> CdnFormat {
        CdnFormat {
            separate_av: true,
            default_cdn: default_cdn.to_string(),
            cdns: cdns
                .iter()
                .map(|(name, url)| {
                    (
                        name.to_string(),
                        CdnEntry {
                            url: url.to_string(),
                            ..CdnEntry::default()
                        },
                    )
                })
                .collect(),
        }
    }

    #[test]
    fn default_cdn_wins() {
        let format = cdn_format(
            "fastly_skyfire",
            &[
                ("akfire_interconnect_quic", "https://akfire/master.json"),
                ("fastly_skyfire", "https://fastly/master.json"),
            ],
        );
        assert_eq!(format.url(), "https://fastly/master.json");
    }

    #[test]
    fn empty_default_falls_back_to_populated_cdn() {
        let format = cdn_format(
            "akfire_interconnect_quic",
            &[
                ("akfire_interconnect_quic", ""),
                ("fastly_skyfire", "https://fastly/playlist.m3u8"),
            ],
        );
        assert_eq!(format.url(), "https://fastly/playlist.m3u8");
    }

    #[test]
    fn unknown_default_uses_fixed_order() {
        let format = cdn_format(
            "some_new_cdn",
            &[
                ("fastly_skyfire", "https://fastly/a"),
                ("akfire_interconnect_quic", "https://akfire/a"),
            ],
        );
        assert_eq!(format.url(), "https://akfire/a");
    }

    #[test]
    fn unlisted_cdn_is_last_resort() {
        let format = cdn_format("", &[("zeta_cdn", "https://zeta/a")]);
        assert_eq!(format.url(), "https://zeta/a");
    }

    #[test]
    fn no_urls_yields_empty() {
        let format = cdn_format("fastly_skyfire", &[("fastly_skyfire", "")]);
        assert_eq!(format.url(), "");
        assert_eq!(CdnFormat::default().url(), "");
    }

    #[test]
    fn decodes_player_files_block() {
        let formats: StreamFormats = serde_json::from_str(
            r#"{
                "progressive": [
                    {"profile": 175, "width": 1920, "height": 1080, "mime": "video/mp4",
                     "fps": 25, "url": "https://cdn/1080.mp4", "cdn": "akamai_interconnect",
                     "quality": "1080p", "origin": "gcs"},
                    {"profile": "165", "width": 640, "height": 360, "mime": "video/mp4",
                     "fps": 29.97, "url": "https://cdn/360.mp4", "cdn": "akamai_interconnect",
                     "quality": "360p", "origin": "gcs"}
                ],
                "hls": {
                    "separate_av": true,
                    "default_cdn": "fastly_skyfire",
                    "cdns": {"fastly_skyfire": {"url": "https://fastly/master.m3u8", "origin": "gcs",
                             "avc_url": "https://fastly/avc.m3u8"}}
                }
            }"#,
        )
        .unwrap();

        assert_eq!(formats.progressive.worst().unwrap().quality, "360p");
        assert_eq!(formats.progressive.best().unwrap().height, 1080);
        assert!(formats.dash.is_none());
        let hls = formats.hls.unwrap();
        assert_eq!(hls.url(), "https://fastly/master.m3u8");
        assert_eq!(hls.cdns["fastly_skyfire"].avc_url, "https://fastly/avc.m3u8");
    }
}

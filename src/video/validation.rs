use std::sync::LazyLock;

use regex::Regex;

use crate::common::{Result, VimeoError};

static VIDEO_URL_PATTERNS: LazyLock<Vec<Regex>> = LazyLock::new(|| {
    [
        r"^https://player\.vimeo\.com/video/(\d+)$",
        r"^https://vimeo\.com/(\d+)$",
        r"^https://vimeo\.com/groups/[^/]+/videos/(\d+)$",
        r"^https://vimeo\.com/manage/videos/(\d+)$",
    ]
    .into_iter()
    .map(|pattern| Regex::new(pattern).expect("static video URL pattern"))
    .collect()
});

/// Extracts the numeric video id from one of the supported page URL shapes.
pub fn parse_video_id(url: &str) -> Result<u64> {
    let id = VIDEO_URL_PATTERNS
        .iter()
        .find_map(|re| re.captures(url))
        .and_then(|caps| caps.get(1))
        .ok_or_else(|| VimeoError::InvalidUrl(url.to_string()))?;

    match id.as_str().parse::<u64>() {
        Ok(id) if id > 0 => Ok(id),
        _ => Err(VimeoError::InvalidUrl(url.to_string())),
    }
}

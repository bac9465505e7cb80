//! Client for the Vimeo video platform.
//!
//! [`Video`] resolves metadata and stream formats for a single video and turns
//! a DASH manifest into a continuous byte stream, while [`SearchClient`] queries
//! the public search API.

pub mod common;
pub mod configs;
pub mod search;
pub mod video;

pub use common::{HttpClient, Result, VimeoError};
pub use configs::Config;
pub use search::SearchClient;
pub use video::{Video, parse_video_id};

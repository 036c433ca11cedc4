//! APOD entry as published by the upstream catalog.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Media kind of an APOD entry.
///
/// The catalog occasionally publishes entries that are neither images nor
/// videos; those deserialize as [`MediaType::Other`] instead of failing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    Image,
    Video,
    #[serde(other)]
    Other,
}

/// A single Astronomy Picture of the Day entry.
///
/// Sourced verbatim from upstream and never mutated. `url` and `hdurl` are
/// optional: video entries have no HD variant and some entries carry no
/// media link at all.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApodRecord {
    pub date: NaiveDate,
    pub title: String,
    pub explanation: String,
    pub media_type: MediaType,
    pub url: Option<String>,
    pub hdurl: Option<String>,
    pub copyright: Option<String>,
}

impl ApodRecord {
    /// True for entries rendered as an inline image.
    pub fn is_image(&self) -> bool {
        self.media_type == MediaType::Image
    }

    /// True for entries rendered as an embedded video.
    pub fn is_video(&self) -> bool {
        self.media_type == MediaType::Video
    }

    /// Media URL for display, empty when the entry carries none.
    pub fn display_url(&self) -> &str {
        self.url.as_deref().unwrap_or("")
    }

    /// HD media URL, falling back to the standard one.
    pub fn hd_or_display_url(&self) -> &str {
        self.hdurl.as_deref().or(self.url.as_deref()).unwrap_or("")
    }
}

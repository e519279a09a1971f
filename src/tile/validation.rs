use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^https?://\S+$").expect("valid URL regex"));

/// Whether a string looks like an http(s) URL.
#[must_use]
pub fn is_http_url(value: &str) -> bool {
    URL_RE.is_match(value)
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum TileDraftError {
    #[error("A title is required")]
    TitleTooShort,

    #[error("Title is too long (max 80 characters)")]
    TitleTooLong,

    #[error("Add a short teaser")]
    ShortTextTooShort,

    #[error("Keep this intro snappy")]
    ShortTextTooLong,

    #[error("Give guests a bit more to savor")]
    LongTextTooShort,

    #[error("Enter a valid image URL")]
    InvalidImageUrl,
}

/// Admin-submitted hero tile fields, before validation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TileDraft {
    pub title: String,
    pub short_text: String,
    pub long_text: String,
    pub image_url: String,
}

impl TileDraft {
    /// Validate field lengths and the image URL.
    ///
    /// # Errors
    ///
    /// Returns the first failing [`TileDraftError`].
    pub fn validate(&self) -> Result<(), TileDraftError> {
        let title_len = self.title.chars().count();
        if title_len < 2 {
            return Err(TileDraftError::TitleTooShort);
        }
        if title_len > 80 {
            return Err(TileDraftError::TitleTooLong);
        }

        let short_len = self.short_text.chars().count();
        if short_len < 4 {
            return Err(TileDraftError::ShortTextTooShort);
        }
        if short_len > 160 {
            return Err(TileDraftError::ShortTextTooLong);
        }

        if self.long_text.chars().count() < 10 {
            return Err(TileDraftError::LongTextTooShort);
        }

        if !is_http_url(&self.image_url) {
            return Err(TileDraftError::InvalidImageUrl);
        }

        Ok(())
    }
}

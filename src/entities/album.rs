//! Album record served by the catalog API

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A single album in the catalog
///
/// Field names follow the catalog API's camelCase JSON (`releaseDate`,
/// `coverImage`). Only `id`, `title` and `artist` are required.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Album {
    pub id: u64,
    pub title: String,
    pub artist: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub release_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<String>,
}

crate::impl_record!(Album, id: u64, name: title);

impl Album {
    /// Create an album with only the required fields set
    pub fn new(id: u64, title: impl Into<String>, artist: impl Into<String>) -> Self {
        Self {
            id,
            title: title.into(),
            artist: artist.into(),
            release_date: None,
            genre: None,
            cover_image: None,
        }
    }

    pub fn with_release_date(mut self, date: NaiveDate) -> Self {
        self.release_date = Some(date);
        self
    }

    pub fn with_genre(mut self, genre: impl Into<String>) -> Self {
        self.genre = Some(genre.into());
        self
    }

    pub fn with_cover_image(mut self, url: impl Into<String>) -> Self {
        self.cover_image = Some(url.into());
        self
    }
}

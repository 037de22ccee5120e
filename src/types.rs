use std::{fmt, str::FromStr};

use serde::Deserialize;

use crate::error::CollageError;

/// Time range over which Last.fm aggregates a user's top albums.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Period {
    #[default]
    Overall,
    SevenDays,
    OneMonth,
    ThreeMonths,
    SixMonths,
    TwelveMonths,
}

impl Period {
    pub const ALL: [Period; 6] = [
        Period::Overall,
        Period::SevenDays,
        Period::OneMonth,
        Period::ThreeMonths,
        Period::SixMonths,
        Period::TwelveMonths,
    ];

    /// Value of the `period` query parameter.
    pub fn as_str(&self) -> &'static str {
        match self {
            Period::Overall => "overall",
            Period::SevenDays => "7day",
            Period::OneMonth => "1month",
            Period::ThreeMonths => "3month",
            Period::SixMonths => "6month",
            Period::TwelveMonths => "12month",
        }
    }
}

impl fmt::Display for Period {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Period {
    type Err = CollageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Period::ALL
            .into_iter()
            .find(|p| p.as_str() == s.trim())
            .ok_or_else(|| {
                CollageError::InvalidArgument(format!(
                    "invalid time period '{}', expected one of: {}",
                    s,
                    Period::ALL.map(|p| p.as_str()).join(", ")
                ))
            })
    }
}

/// A single entry of a user's top albums, validated at the API boundary.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlbumRecord {
    pub name: String,
    pub artist: String,
    pub playcount: u64,
    /// Cover art URLs ordered by increasing resolution. Entries may be empty.
    pub images: Vec<String>,
}

impl AlbumRecord {
    /// URL of the largest cover variant, if the API listed any.
    pub fn largest_image(&self) -> Option<&str> {
        self.images.last().map(String::as_str)
    }

    /// `true` when at least one resolution variant has no URL.
    pub fn has_missing_art(&self) -> bool {
        self.images.iter().any(|url| url.is_empty())
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopAlbumsResponse {
    pub topalbums: TopAlbums,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopAlbums {
    #[serde(default)]
    pub album: Vec<TopAlbum>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopAlbum {
    pub name: String,
    pub artist: TopAlbumArtist,
    pub playcount: String,
    #[serde(default)]
    pub image: Vec<TopAlbumImage>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopAlbumArtist {
    pub name: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct TopAlbumImage {
    #[serde(rename = "#text", default)]
    pub url: String,
    #[serde(default)]
    pub size: String,
}

/// Error body Last.fm returns alongside non-success statuses.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiErrorResponse {
    pub error: u32,
    pub message: String,
}

impl TryFrom<TopAlbum> for AlbumRecord {
    type Error = CollageError;

    fn try_from(album: TopAlbum) -> Result<Self, Self::Error> {
        let playcount = album.playcount.trim().parse::<u64>().map_err(|_| {
            CollageError::MalformedResponse(format!(
                "play count '{}' of album '{}' is not a number",
                album.playcount, album.name
            ))
        })?;

        Ok(AlbumRecord {
            name: album.name,
            artist: album.artist.name,
            playcount,
            images: album.image.into_iter().map(|i| i.url).collect(),
        })
    }
}

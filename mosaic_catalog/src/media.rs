// Copyright 2026 the Mosaic Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Media references and extension-based kind classification.

use alloc::string::String;

/// Filename extensions accepted as still images.
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif"];

/// Filename extensions accepted as videos.
const VIDEO_EXTENSIONS: &[&str] = &["mp4", "mov", "webm"];

/// The kind of a media file, decided by its filename extension.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// A still image (`jpg`, `jpeg`, `png`, `gif`).
    Image,
    /// A video clip (`mp4`, `mov`, `webm`).
    Video,
}

impl MediaKind {
    /// Classifies a listing filename by its extension, case-insensitively.
    ///
    /// Returns `None` for names without an extension or with an extension
    /// outside the accepted set; such entries are dropped from catalog
    /// snapshots rather than rendered as broken tiles.
    ///
    /// ```rust
    /// use mosaic_catalog::MediaKind;
    ///
    /// assert_eq!(MediaKind::classify("sunset.JPG"), Some(MediaKind::Image));
    /// assert_eq!(MediaKind::classify("clip.webm"), Some(MediaKind::Video));
    /// assert_eq!(MediaKind::classify("README"), None);
    /// ```
    #[must_use]
    pub fn classify(name: &str) -> Option<Self> {
        let (_, extension) = name.rsplit_once('.')?;
        if IMAGE_EXTENSIONS
            .iter()
            .any(|e| extension.eq_ignore_ascii_case(e))
        {
            Some(Self::Image)
        } else if VIDEO_EXTENSIONS
            .iter()
            .any(|e| extension.eq_ignore_ascii_case(e))
        {
            Some(Self::Video)
        } else {
            None
        }
    }
}

/// One usable media reference in a catalog snapshot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaRef {
    /// Retrievable location of the media file.
    pub url: String,
    /// Classified kind, derived from the listing filename.
    pub kind: MediaKind,
}

impl MediaRef {
    /// Builds a reference from a listing's filename and URL, or `None` if
    /// the filename does not classify as a known media kind.
    #[must_use]
    pub fn from_listing(name: &str, url: impl Into<String>) -> Option<Self> {
        MediaKind::classify(name).map(|kind| Self {
            url: url.into(),
            kind,
        })
    }
}

/// A raw entry from the external listing endpoint: a filename used for
/// classification and a retrievable URL.
///
/// The listing fetch itself (and its transport format) belongs to the host;
/// this type is the narrow waist it hands snapshots through.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListingEntry {
    /// Filename, including extension.
    pub name: String,
    /// Retrievable location of the file.
    pub url: String,
}

impl ListingEntry {
    /// Creates a listing entry.
    #[must_use]
    pub fn new(name: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Media Path: URL builders for media assets.
//!
//! Media lives under three roots, all supplied by the caller through
//! [`MediaUrls`]:
//!
//! - `base`: the media root, used for legacy example content;
//! - `ui`: bundled UI assets and mock media;
//! - `uploads`: user and library uploads.
//!
//! Images are addressed by a [`MediaLibrary`], a [`MediaSize`] and an id.
//! Mock images live with the UI assets; every other library lives in uploads.
//!
//! ```rust
//! use understory_media_path::{MediaLibrary, MediaSize, MediaUrls};
//!
//! let urls = MediaUrls::new(
//!     "https://media.example.com",
//!     "https://media.example.com/ui",
//!     "https://uploads.example.com",
//! );
//!
//! assert_eq!(
//!     urls.image(MediaLibrary::Global, MediaSize::Thumb, "abc"),
//!     "https://uploads.example.com/media/global/abc/thumbnail.png",
//! );
//! assert_eq!(
//!     urls.image(MediaLibrary::Mock, MediaSize::Full, "cat.jpg"),
//!     "https://media.example.com/ui/mock/resized/cat.jpg",
//! );
//! ```
//!
//! Base URLs are joined verbatim with a single `/`; pass them without a
//! trailing slash.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod kind;

use alloc::format;
use alloc::string::String;

pub use kind::{MediaLibrary, MediaSize, ParseMediaError};

/// Base URLs for the three media roots.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MediaUrls {
    base: String,
    ui: String,
    uploads: String,
}

impl MediaUrls {
    /// Creates a set of media roots.
    #[must_use]
    pub fn new(base: impl Into<String>, ui: impl Into<String>, uploads: impl Into<String>) -> Self {
        Self {
            base: base.into(),
            ui: ui.into(),
            uploads: uploads.into(),
        }
    }

    /// The media root.
    #[must_use]
    pub fn base(&self) -> &str {
        &self.base
    }

    /// URL of a bundled UI asset.
    #[must_use]
    pub fn ui(&self, path: &str) -> String {
        format!("{}/{path}", self.ui)
    }

    /// URL of an uploaded file.
    #[must_use]
    pub fn uploads(&self, path: &str) -> String {
        format!("{}/{path}", self.uploads)
    }

    /// URL of an image in `lib` at `size`.
    #[must_use]
    pub fn image(&self, lib: MediaLibrary, size: MediaSize, id: &str) -> String {
        let prefix = lib.image_prefix();
        let variant = size.variant();
        match lib {
            MediaLibrary::Mock => self.ui(&format!("{prefix}/{variant}/{id}")),
            _ => self.uploads(&format!("{prefix}/{id}/{variant}.png")),
        }
    }

    /// URL of an uploaded audio file in `lib`.
    ///
    /// Returns `None` for [`MediaLibrary::Mock`], which has no audio.
    #[must_use]
    pub fn audio(&self, lib: MediaLibrary, id: &str) -> Option<String> {
        lib.audio_prefix()
            .map(|prefix| self.uploads(&format!("{prefix}/{id}")))
    }

    /// URL of a file in a legacy example module.
    #[must_use]
    pub fn legacy_mock(&self, jig_id: &str, module_id: &str, path: &str) -> String {
        format!(
            "{}/legacy/examples/{jig_id}/slides/{module_id}/{path}",
            self.base
        )
    }
}

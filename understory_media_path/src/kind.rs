// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;
use core::str::FromStr;

/// Which media library an asset belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaLibrary {
    /// Shared library available to everyone.
    Global,
    /// The current user's uploads.
    User,
    /// Assets imported from the web.
    Web,
    /// Bundled placeholder media.
    Mock,
}

impl MediaLibrary {
    /// Path prefix for images in this library.
    #[must_use]
    pub fn image_prefix(self) -> &'static str {
        match self {
            Self::Global => "media/global",
            Self::User => "media/user",
            Self::Web => "media/web",
            Self::Mock => "mock",
        }
    }

    /// Path prefix for audio in this library, if it has any.
    #[must_use]
    pub fn audio_prefix(self) -> Option<&'static str> {
        match self {
            Self::Global => Some("audio/global"),
            Self::User => Some("audio/user"),
            Self::Web => Some("audio/web"),
            Self::Mock => None,
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Global => "global",
            Self::User => "user",
            Self::Web => "web",
            Self::Mock => "mock",
        }
    }
}

impl fmt::Display for MediaLibrary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MediaLibrary {
    type Err = ParseMediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "global" => Ok(Self::Global),
            "user" => Ok(Self::User),
            "web" => Ok(Self::Web),
            "mock" => Ok(Self::Mock),
            _ => Err(ParseMediaError::UnknownLibrary(s.into())),
        }
    }
}

/// Which rendition of an image to address.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MediaSize {
    /// The file as uploaded.
    Original,
    /// Resized for full-stage display.
    Full,
    /// Thumbnail.
    Thumb,
}

impl MediaSize {
    /// Variant segment used in paths.
    #[must_use]
    pub fn variant(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Full => "resized",
            Self::Thumb => "thumbnail",
        }
    }

    fn name(self) -> &'static str {
        match self {
            Self::Original => "original",
            Self::Full => "full",
            Self::Thumb => "thumb",
        }
    }
}

impl fmt::Display for MediaSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for MediaSize {
    type Err = ParseMediaError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "original" => Ok(Self::Original),
            "full" => Ok(Self::Full),
            "thumb" => Ok(Self::Thumb),
            _ => Err(ParseMediaError::UnknownSize(s.into())),
        }
    }
}

/// Error returned when parsing a [`MediaLibrary`] or [`MediaSize`] name.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum ParseMediaError {
    /// Not one of `global`, `user`, `web`, `mock`.
    UnknownLibrary(String),
    /// Not one of `original`, `full`, `thumb`.
    UnknownSize(String),
}

impl fmt::Display for ParseMediaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownLibrary(name) => write!(f, "unknown media library {name:?}"),
            Self::UnknownSize(name) => write!(f, "unknown media size {name:?}"),
        }
    }
}

impl core::error::Error for ParseMediaError {}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use core::cmp::Ordering;
use core::fmt;

use kurbo::{Rect, Size};

use crate::info::ResizeInfo;

/// Logical design resolution plus content padding.
///
/// Content is authored against a fixed `width` × `height` stage. When the
/// stage is fitted into a host region the aspect ratio is preserved and the
/// padding fractions carve a content rectangle out of the fitted box,
/// half of each padding on either side.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Stage {
    width: f64,
    height: f64,
    padding_x: f64,
    padding_y: f64,
}

impl Stage {
    /// The standard stage: 1920 × 1080 with 10% padding on each axis.
    pub const STANDARD: Self = Self {
        width: 1920.0,
        height: 1080.0,
        padding_x: 0.1,
        padding_y: 0.1,
    };

    /// The legacy stage: 1024 × 768 with no padding.
    pub const LEGACY: Self = Self {
        width: 1024.0,
        height: 768.0,
        padding_x: 0.0,
        padding_y: 0.0,
    };

    /// Creates a custom stage.
    ///
    /// `width` and `height` must be finite and positive. Padding fractions
    /// must be finite and lie in `[0, 1]`.
    pub fn new(width: f64, height: f64, padding_x: f64, padding_y: f64) -> Result<Self, StageError> {
        if !width.is_finite() || !height.is_finite() {
            return Err(StageError::NonFiniteSize { width, height });
        }
        if width <= 0.0 || height <= 0.0 {
            return Err(StageError::NonPositiveSize { width, height });
        }
        for padding in [padding_x, padding_y] {
            if !(0.0..=1.0).contains(&padding) {
                return Err(StageError::PaddingOutOfRange { padding });
            }
        }
        Ok(Self {
            width,
            height,
            padding_x,
            padding_y,
        })
    }

    /// Returns the stage selected by the legacy flag.
    #[must_use]
    pub fn select(is_legacy: bool) -> Self {
        if is_legacy { Self::LEGACY } else { Self::STANDARD }
    }

    /// Logical stage width.
    #[must_use]
    pub fn width(&self) -> f64 {
        self.width
    }

    /// Logical stage height.
    #[must_use]
    pub fn height(&self) -> f64 {
        self.height
    }

    /// Horizontal padding as a fraction of the fitted width.
    #[must_use]
    pub fn padding_x(&self) -> f64 {
        self.padding_x
    }

    /// Vertical padding as a fraction of the fitted height.
    #[must_use]
    pub fn padding_y(&self) -> f64 {
        self.padding_y
    }

    /// Logical stage size.
    #[must_use]
    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// `width / height`.
    #[must_use]
    pub fn aspect_ratio(&self) -> f64 {
        self.width / self.height
    }

    /// Fits the stage into `bounds`.
    ///
    /// The result is the largest box with the stage's aspect ratio that fits
    /// inside `bounds`, centered on both axes. A region wider than the stage
    /// is pillarboxed (width clamped); anything else is letterboxed (height
    /// clamped). When the ratios match exactly the box is `bounds` itself.
    ///
    /// ```rust
    /// use kurbo::Rect;
    /// use understory_stage::Stage;
    ///
    /// let stage = Stage::new(1600.0, 900.0, 0.1, 0.1).unwrap();
    /// let info = stage.fit(Rect::new(0.0, 0.0, 1920.0, 900.0));
    ///
    /// // Pillarboxed: full height, centered horizontally.
    /// assert!((info.width - 1600.0).abs() < 1e-9);
    /// assert_eq!(info.height, 900.0);
    /// assert!((info.x - 160.0).abs() < 1e-9);
    /// assert!((info.scale - 1.0).abs() < 1e-12);
    /// ```
    #[must_use]
    pub fn fit(&self, bounds: Rect) -> ResizeInfo {
        let target_ratio = self.aspect_ratio();
        let bounds_width = bounds.width();
        let bounds_height = bounds.height();

        let mut width = bounds_width;
        let mut height = bounds_height;
        match (width / height).partial_cmp(&target_ratio) {
            Some(Ordering::Greater) => width = height * target_ratio,
            Some(Ordering::Less) => height = width / target_ratio,
            // Equal ratios keep the bounds as-is; a NaN ratio only arises for a
            // 0 × 0 region, where both branches would produce zeros anyway.
            Some(Ordering::Equal) | None => {}
        }

        let x = bounds.x0 + (bounds_width - width) / 2.0;
        let y = bounds.y0 + (bounds_height - height) / 2.0;

        ResizeInfo {
            scale: width / self.width,
            x,
            y,
            width,
            height,
            content_x: (self.padding_x / 2.0) * width,
            content_y: (self.padding_y / 2.0) * height,
            content_width: width - self.padding_x * width,
            content_height: height - self.padding_y * height,
        }
    }
}

impl Default for Stage {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// Error returned by [`Stage::new`] for an unusable stage description.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum StageError {
    /// Width or height is zero or negative.
    NonPositiveSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// Width or height is NaN or infinite.
    NonFiniteSize {
        /// Requested width.
        width: f64,
        /// Requested height.
        height: f64,
    },
    /// A padding fraction is outside `[0, 1]` or NaN.
    PaddingOutOfRange {
        /// The offending padding fraction.
        padding: f64,
    },
}

impl fmt::Display for StageError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NonPositiveSize { width, height } => {
                write!(f, "stage size {width} x {height} must be positive")
            }
            Self::NonFiniteSize { width, height } => {
                write!(f, "stage size {width} x {height} must be finite")
            }
            Self::PaddingOutOfRange { padding } => {
                write!(f, "stage padding {padding} is outside [0, 1]")
            }
        }
    }
}

impl core::error::Error for StageError {}

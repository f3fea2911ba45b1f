// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::{Point, Rect, Size, Vec2};

/// Result of fitting a [`Stage`](crate::Stage) into a host region.
///
/// `x`, `y`, `width` and `height` describe the fitted box in the same
/// coordinate space as the measured bounds. The `content_*` fields describe
/// the padded content box relative to the fitted box's origin.
///
/// Equality is exact, field by field. Sessions use it to decide whether a
/// recomputation is worth reporting, so two results that differ only by
/// floating-point noise still count as a change.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ResizeInfo {
    /// Uniform scale from stage units to bounds units.
    pub scale: f64,
    /// Left edge of the fitted box.
    pub x: f64,
    /// Top edge of the fitted box.
    pub y: f64,
    /// Width of the fitted box.
    pub width: f64,
    /// Height of the fitted box.
    pub height: f64,
    /// Left inset of the content box within the fitted box.
    pub content_x: f64,
    /// Top inset of the content box within the fitted box.
    pub content_y: f64,
    /// Width of the content box.
    pub content_width: f64,
    /// Height of the content box.
    pub content_height: f64,
}

impl ResizeInfo {
    /// The fitted box in bounds coordinates.
    #[must_use]
    pub fn outer_rect(&self) -> Rect {
        Rect::from_origin_size(Point::new(self.x, self.y), Size::new(self.width, self.height))
    }

    /// The content box relative to the fitted box's origin.
    #[must_use]
    pub fn content_rect(&self) -> Rect {
        Rect::from_origin_size(
            Point::new(self.content_x, self.content_y),
            Size::new(self.content_width, self.content_height),
        )
    }

    /// The content box in bounds coordinates.
    #[must_use]
    pub fn content_rect_absolute(&self) -> Rect {
        self.content_rect() + Vec2::new(self.x, self.y)
    }

    /// Maps a point in stage units into bounds coordinates.
    #[must_use]
    pub fn stage_to_bounds(&self, pt: Point) -> Point {
        Point::new(self.x + pt.x * self.scale, self.y + pt.y * self.scale)
    }

    /// Maps a point in bounds coordinates back into stage units.
    ///
    /// Returns `None` when the scale is zero.
    #[must_use]
    pub fn bounds_to_stage(&self, pt: Point) -> Option<Point> {
        if self.scale == 0.0 {
            return None;
        }
        Some(Point::new(
            (pt.x - self.x) / self.scale,
            (pt.y - self.y) / self.scale,
        ))
    }
}

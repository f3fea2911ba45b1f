// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! CSS custom properties for a fitted stage.
//!
//! Stylesheets position content with `var(--x)`, `var(--content-width)` and
//! friends, and size text in `rem`-like units through the root `font-size`.
//! [`apply_resize_info`] writes all of them onto a [`StyleTarget`]; call it
//! from the session callback.
//!
//! ```rust
//! use std::collections::BTreeMap;
//!
//! use kurbo::Rect;
//! use understory_stage::Stage;
//! use understory_stage::css::apply_resize_info;
//!
//! let info = Stage::new(1600.0, 900.0, 0.0, 0.0)
//!     .unwrap()
//!     .fit(Rect::new(0.0, 0.0, 800.0, 450.0));
//!
//! let mut style = BTreeMap::new();
//! apply_resize_info(&mut style, &info);
//! assert_eq!(style["--scale"], "0.5");
//! assert_eq!(style["--width"], "800px");
//! assert_eq!(style["font-size"], "5px");
//! ```

use alloc::collections::BTreeMap;
use alloc::string::{String, ToString};
use core::fmt;

use crate::info::ResizeInfo;

/// Font size at scale `1.0`, in pixels.
pub const BASE_FONT_SIZE_PX: f64 = 10.0;

/// Something style properties can be written to.
pub trait StyleTarget {
    /// Sets `name` to `value`, replacing any previous value.
    fn set_property(&mut self, name: &str, value: &str);
}

impl StyleTarget for BTreeMap<String, String> {
    fn set_property(&mut self, name: &str, value: &str) {
        self.insert(name.into(), value.into());
    }
}

/// A CSS value as written by [`apply_resize_info`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CssValue {
    /// A unitless number.
    Number(f64),
    /// A length in pixels.
    Px(f64),
}

impl fmt::Display for CssValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Px(n) => write!(f, "{n}px"),
        }
    }
}

/// The properties [`apply_resize_info`] writes, in write order.
#[must_use]
pub fn css_properties(info: &ResizeInfo) -> [(&'static str, CssValue); 10] {
    [
        ("font-size", CssValue::Px(BASE_FONT_SIZE_PX * info.scale)),
        ("--scale", CssValue::Number(info.scale)),
        ("--x", CssValue::Px(info.x)),
        ("--y", CssValue::Px(info.y)),
        ("--width", CssValue::Px(info.width)),
        ("--height", CssValue::Px(info.height)),
        ("--content-x", CssValue::Px(info.content_x)),
        ("--content-y", CssValue::Px(info.content_y)),
        ("--content-width", CssValue::Px(info.content_width)),
        ("--content-height", CssValue::Px(info.content_height)),
    ]
}

/// Writes the font size and the nine stage custom properties onto `target`.
pub fn apply_resize_info(target: &mut impl StyleTarget, info: &ResizeInfo) {
    for (name, value) in css_properties(info) {
        target.set_property(name, &value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use alloc::collections::BTreeMap;
    use alloc::string::String;
    use alloc::vec::Vec;

    use super::{CssValue, StyleTarget, apply_resize_info, css_properties};
    use crate::ResizeInfo;

    #[derive(Default)]
    struct Recorder(Vec<(String, String)>);

    impl StyleTarget for Recorder {
        fn set_property(&mut self, name: &str, value: &str) {
            self.0.push((name.into(), value.into()));
        }
    }

    fn sample() -> ResizeInfo {
        ResizeInfo {
            scale: 1.0,
            x: 160.0,
            y: 0.0,
            width: 1600.0,
            height: 900.0,
            content_x: 80.0,
            content_y: 45.0,
            content_width: 1440.0,
            content_height: 810.0,
        }
    }

    #[test]
    fn writes_every_property_once() {
        let mut recorder = Recorder::default();
        apply_resize_info(&mut recorder, &sample());

        let written: Vec<(&str, &str)> = recorder
            .0
            .iter()
            .map(|(n, v)| (n.as_str(), v.as_str()))
            .collect();
        assert_eq!(
            written,
            [
                ("font-size", "10px"),
                ("--scale", "1"),
                ("--x", "160px"),
                ("--y", "0px"),
                ("--width", "1600px"),
                ("--height", "900px"),
                ("--content-x", "80px"),
                ("--content-y", "45px"),
                ("--content-width", "1440px"),
                ("--content-height", "810px"),
            ]
        );
    }

    #[test]
    fn font_size_follows_scale() {
        let info = ResizeInfo {
            scale: 0.25,
            ..sample()
        };
        let props = css_properties(&info);
        assert_eq!(props[0], ("font-size", CssValue::Px(2.5)));
        assert_eq!(props[1], ("--scale", CssValue::Number(0.25)));
    }

    #[test]
    fn map_target_overwrites() {
        let mut map = BTreeMap::new();
        apply_resize_info(&mut map, &sample());
        apply_resize_info(
            &mut map,
            &ResizeInfo {
                x: 12.5,
                ..sample()
            },
        );
        assert_eq!(map.len(), 10);
        assert_eq!(map["--x"], "12.5px");
    }
}

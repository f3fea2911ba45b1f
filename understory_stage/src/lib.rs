// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Stage: fit a fixed-aspect design stage into a resizing region.
//!
//! Content authored against a logical stage (for example 1920 × 1080) has to
//! be shown in windows and containers of arbitrary size. This crate computes
//! the largest centered box with the stage's aspect ratio that fits the
//! available region, a padded content box inside it, and the uniform scale
//! between the two, and keeps that result current as the region resizes.
//!
//! The pieces are:
//!
//! - [`Stage`]: logical width/height plus padding fractions, with the
//!   [`Stage::STANDARD`] and [`Stage::LEGACY`] presets.
//! - [`Stage::fit`]: the pure geometry, producing a [`ResizeInfo`].
//! - [`start_resizer`]: a [`ResizeSession`] that measures a container (or the
//!   viewport), recomputes on every trigger, and calls back only when the
//!   result changes.
//! - [`ResizeHost`] / [`SizeObserver`]: the platform services a session
//!   needs, injected by the caller. [`PollingObserver`] covers hosts without
//!   a native observer.
//! - [`css`]: writes a [`ResizeInfo`] as CSS custom properties.
//!
//! This crate does **not** own a window, a DOM, or an event loop. Hosts call
//! [`ResizeTrigger::fire`] from their own resize notifications.
//!
//! ## Pure fitting
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_stage::Stage;
//!
//! let stage = Stage::new(1600.0, 900.0, 0.1, 0.1).unwrap();
//!
//! // A square region is letterboxed: full width, centered vertically.
//! let info = stage.fit(Rect::new(0.0, 0.0, 800.0, 800.0));
//! assert_eq!(info.width, 800.0);
//! assert!((info.height - 450.0).abs() < 1e-9);
//! assert!((info.y - 175.0).abs() < 1e-9);
//! assert!((info.scale - 0.5).abs() < 1e-12);
//! ```
//!
//! ## Sessions
//!
//! A host wires measurement and notifications; the session does the rest.
//!
//! ```rust
//! use std::cell::{Cell, RefCell};
//! use std::rc::Rc;
//!
//! use kurbo::Rect;
//! use understory_stage::{
//!     PollingObserver, ResizeHost, ResizeInfo, ResizeOptions, ResizeTrigger, start_resizer,
//! };
//!
//! #[derive(Clone, Default)]
//! struct Window {
//!     size: Rc<Cell<(f64, f64)>>,
//!     listeners: Rc<RefCell<Vec<ResizeTrigger>>>,
//! }
//!
//! impl Window {
//!     fn resize(&self, width: f64, height: f64) {
//!         self.size.set((width, height));
//!         let listeners = self.listeners.borrow().clone();
//!         for trigger in listeners {
//!             trigger.fire();
//!         }
//!     }
//! }
//!
//! impl ResizeHost for Window {
//!     type Element = u32;
//!     type Observer = PollingObserver<u32>;
//!     type Listener = usize;
//!
//!     fn viewport_rect(&self) -> Rect {
//!         let (w, h) = self.size.get();
//!         Rect::new(0.0, 0.0, w, h)
//!     }
//!     fn measure(&self, _element: &u32) -> Rect {
//!         Rect::ZERO
//!     }
//!     fn size_observer(&self, trigger: ResizeTrigger) -> PollingObserver<u32> {
//!         PollingObserver::new(trigger)
//!     }
//!     fn add_window_resize_listener(&self, trigger: ResizeTrigger) -> usize {
//!         let mut listeners = self.listeners.borrow_mut();
//!         listeners.push(trigger);
//!         listeners.len() - 1
//!     }
//!     fn remove_window_resize_listener(&self, _listener: usize) {
//!         self.listeners.borrow_mut().clear();
//!     }
//! }
//!
//! let window = Window::default();
//! window.size.set((1920.0, 1080.0));
//!
//! let seen: Rc<RefCell<Vec<ResizeInfo>>> = Rc::default();
//! let sink = seen.clone();
//! let session = start_resizer(window.clone(), ResizeOptions::new(), move |info| {
//!     sink.borrow_mut().push(*info);
//! });
//!
//! // The initial measurement is reported synchronously.
//! assert_eq!(seen.borrow().len(), 1);
//! assert_eq!(seen.borrow()[0].scale, 1.0);
//!
//! window.resize(960.0, 540.0);
//! assert_eq!(seen.borrow().len(), 2);
//!
//! // Same size again: no change, no callback.
//! window.resize(960.0, 540.0);
//! assert_eq!(seen.borrow().len(), 2);
//!
//! session.cancel();
//! window.resize(100.0, 100.0);
//! assert_eq!(seen.borrow().len(), 2);
//! ```
//!
//! ## Change detection
//!
//! Results are compared with exact floating-point equality. A host whose
//! measurements jitter in the last bits will see a callback per jitter.
//!
//! ## Features
//!
//! - `std` (default) / `libm`: forwarded to `kurbo`.
//! - `tracing`: emit `tracing` events for session lifecycle and notifications.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

pub mod css;
mod host;
mod info;
mod polling;
mod session;
mod stage;

pub use host::{ResizeHost, ResizeTrigger, SizeObserver};
pub use info::ResizeInfo;
pub use polling::PollingObserver;
pub use session::{CancelHandle, ObserverRef, ResizeOptions, ResizeSession, start_resizer};
pub use stage::{Stage, StageError};

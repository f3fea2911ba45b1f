// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Host capabilities a resize session depends on.
//!
//! A session never talks to a windowing system or DOM directly. The host
//! supplies three services:
//!
//! - measuring an element's current rectangle, or the whole viewport;
//! - a size observer that fires a [`ResizeTrigger`] when an observed
//!   element's box changes;
//! - window-level resize notifications that fire a [`ResizeTrigger`].
//!
//! Browser bindings would back these with `getBoundingClientRect`,
//! `ResizeObserver` and the window `resize` event. Hosts without a native
//! observer can use [`PollingObserver`](crate::PollingObserver).

use alloc::rc::Weak;
use core::fmt;

use kurbo::Rect;

/// Platform services consumed by [`start_resizer`](crate::start_resizer).
///
/// Methods take `&self`; hosts are expected to be cheap handles with interior
/// mutability, in the same way a browser window or document is.
pub trait ResizeHost {
    /// Element type that can be measured and observed.
    type Element;
    /// Size observer created for each session.
    type Observer: SizeObserver<Self::Element>;
    /// Token identifying a registered window resize listener.
    type Listener;

    /// Returns the full viewport rectangle, typically `(0, 0, inner_width, inner_height)`.
    fn viewport_rect(&self) -> Rect;

    /// Returns the element's current bounding rectangle.
    ///
    /// Elements that are detached or not laid out yet should report a zero
    /// size; the session skips such measurements.
    fn measure(&self, element: &Self::Element) -> Rect;

    /// Creates a size observer that fires `trigger` whenever an observed
    /// element's box changes.
    fn size_observer(&self, trigger: ResizeTrigger) -> Self::Observer;

    /// Registers `trigger` to fire on every window resize.
    fn add_window_resize_listener(&self, trigger: ResizeTrigger) -> Self::Listener;

    /// Unregisters a listener returned by [`ResizeHost::add_window_resize_listener`].
    fn remove_window_resize_listener(&self, listener: Self::Listener);
}

/// Observation primitive: watch elements, report size changes.
pub trait SizeObserver<E> {
    /// Starts observing `target`.
    fn observe(&mut self, target: &E);

    /// Stops observing every target. The observer must not fire afterwards.
    fn disconnect(&mut self);
}

pub(crate) trait SessionControl {
    fn recompute(&self);
    fn cancel(&self);
    fn is_cancelled(&self) -> bool;
}

/// Handle a host invokes to make a session recompute.
///
/// Triggers hold a weak link to their session. Firing a trigger whose
/// session is gone, or has been cancelled, does nothing.
#[derive(Clone)]
pub struct ResizeTrigger {
    session: Weak<dyn SessionControl>,
}

impl ResizeTrigger {
    pub(crate) fn new(session: Weak<dyn SessionControl>) -> Self {
        Self { session }
    }

    /// Asks the session to remeasure and notify if the fit changed.
    pub fn fire(&self) {
        if let Some(session) = self.session.upgrade() {
            session.recompute();
        }
    }

    /// Returns `true` while the session exists and has not been cancelled.
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.session
            .upgrade()
            .is_some_and(|session| !session.is_cancelled())
    }
}

impl fmt::Debug for ResizeTrigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeTrigger")
            .field("live", &self.is_live())
            .finish_non_exhaustive()
    }
}

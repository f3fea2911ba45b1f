// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Resize sessions: keep a fitted stage in sync with a host region.
//!
//! ## Usage
//!
//! 1) Describe what to measure and observe with [`ResizeOptions`].
//! 2) Call [`start_resizer`] with a [`ResizeHost`] and a callback. The region
//!    is measured immediately and the callback fires if it is measurable.
//! 3) The host fires [`ResizeTrigger`]s on window resizes and observed size
//!    changes; the callback fires only when the fitted result changes.
//! 4) Call [`ResizeSession::cancel`] (or a [`CancelHandle`]) to detach.

use alloc::boxed::Box;
use alloc::rc::{Rc, Weak};
use core::cell::{Cell, Ref, RefCell};
use core::fmt;
use core::ops::Deref;

use kurbo::Rect;
use smallvec::SmallVec;

use crate::host::{ResizeHost, ResizeTrigger, SessionControl, SizeObserver};
use crate::info::ResizeInfo;
use crate::stage::Stage;

type AdjustBounds = Box<dyn Fn(Rect) -> Rect>;
type OnResize = Box<dyn FnMut(&ResizeInfo)>;

/// What a resize session measures, observes and fits.
///
/// ```rust
/// use kurbo::Rect;
/// use understory_stage::{ResizeOptions, Stage};
///
/// // Fit the legacy stage into element 7, leaving room for a 64px toolbar.
/// let options = ResizeOptions::new()
///     .container(7_u32)
///     .observe(7)
///     .ignore_window(true)
///     .legacy(true)
///     .adjust_bounds(|r: Rect| Rect::new(r.x0, r.y0 + 64.0, r.x1, r.y1));
///
/// assert_eq!(options.resolved_stage(), Stage::LEGACY);
/// ```
pub struct ResizeOptions<E> {
    container: Option<E>,
    observe_targets: SmallVec<[E; 2]>,
    ignore_window: bool,
    is_legacy: bool,
    stage: Option<Stage>,
    adjust_bounds: Option<AdjustBounds>,
}

impl<E> ResizeOptions<E> {
    /// Options that fit the standard stage into the window viewport.
    #[must_use]
    pub fn new() -> Self {
        Self {
            container: None,
            observe_targets: SmallVec::new(),
            ignore_window: false,
            is_legacy: false,
            stage: None,
            adjust_bounds: None,
        }
    }

    /// Measures `container` instead of the window viewport.
    #[must_use]
    pub fn container(mut self, container: E) -> Self {
        self.container = Some(container);
        self
    }

    /// Recomputes whenever `target` changes size.
    ///
    /// Observed targets are independent of the container: observing the
    /// container itself must be requested explicitly.
    #[must_use]
    pub fn observe(mut self, target: E) -> Self {
        self.observe_targets.push(target);
        self
    }

    /// Adds several observed targets at once; see [`ResizeOptions::observe`].
    #[must_use]
    pub fn observe_targets(mut self, targets: impl IntoIterator<Item = E>) -> Self {
        self.observe_targets.extend(targets);
        self
    }

    /// When `true`, window resizes do not trigger recomputation.
    #[must_use]
    pub fn ignore_window(mut self, ignore: bool) -> Self {
        self.ignore_window = ignore;
        self
    }

    /// Selects [`Stage::LEGACY`] instead of [`Stage::STANDARD`].
    #[must_use]
    pub fn legacy(mut self, is_legacy: bool) -> Self {
        self.is_legacy = is_legacy;
        self
    }

    /// Uses a custom stage. Takes precedence over [`ResizeOptions::legacy`].
    #[must_use]
    pub fn stage(mut self, stage: Stage) -> Self {
        self.stage = Some(stage);
        self
    }

    /// Transforms each measured rectangle before fitting, e.g. to subtract chrome.
    #[must_use]
    pub fn adjust_bounds(mut self, adjust: impl Fn(Rect) -> Rect + 'static) -> Self {
        self.adjust_bounds = Some(Box::new(adjust));
        self
    }

    /// The stage a session started with these options will fit.
    #[must_use]
    pub fn resolved_stage(&self) -> Stage {
        self.stage.unwrap_or_else(|| Stage::select(self.is_legacy))
    }
}

impl<E> Default for ResizeOptions<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E: fmt::Debug> fmt::Debug for ResizeOptions<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeOptions")
            .field("container", &self.container)
            .field("observe_targets", &self.observe_targets)
            .field("ignore_window", &self.ignore_window)
            .field("is_legacy", &self.is_legacy)
            .field("stage", &self.stage)
            .field("adjust_bounds", &self.adjust_bounds.is_some())
            .finish()
    }
}

/// Starts a resize session.
///
/// A size observer is created through `host` and attached to every observed
/// target, and unless the options ignore the window a window resize listener
/// is registered. The region is then measured once, synchronously; if it has
/// a nonzero size `on_resize` fires before this function returns.
///
/// Afterwards `on_resize` fires whenever a trigger produces a [`ResizeInfo`]
/// that differs from the last one delivered. Triggers fired from inside
/// `on_resize` are handled once it returns, so it never runs nested.
pub fn start_resizer<H>(
    host: H,
    options: ResizeOptions<H::Element>,
    on_resize: impl FnMut(&ResizeInfo) + 'static,
) -> ResizeSession<H>
where
    H: ResizeHost + 'static,
{
    let stage = options.resolved_stage();
    let ResizeOptions {
        container,
        observe_targets,
        ignore_window,
        adjust_bounds,
        ..
    } = options;

    let inner = Rc::new_cyclic(|weak: &Weak<Session<H>>| {
        let weak: Weak<dyn SessionControl> = weak.clone();
        let trigger = ResizeTrigger::new(weak);

        let mut observer = host.size_observer(trigger.clone());
        for target in &observe_targets {
            observer.observe(target);
        }
        let listener = (!ignore_window).then(|| host.add_window_resize_listener(trigger));

        Session {
            host,
            container,
            adjust_bounds,
            stage,
            ignore_window,
            observer: RefCell::new(observer),
            listener: RefCell::new(listener),
            last: Cell::new(None),
            cancelled: Cell::new(false),
            rerun: Cell::new(false),
            disconnect_pending: Cell::new(false),
            on_resize: RefCell::new(Box::new(on_resize)),
        }
    });

    #[cfg(feature = "tracing")]
    tracing::debug!(
        stage_width = stage.width(),
        stage_height = stage.height(),
        observed = observe_targets.len(),
        ignore_window,
        "resize session started"
    );

    inner.recompute();
    ResizeSession { inner }
}

struct Session<H: ResizeHost> {
    host: H,
    container: Option<H::Element>,
    adjust_bounds: Option<AdjustBounds>,
    stage: Stage,
    ignore_window: bool,
    observer: RefCell<H::Observer>,
    listener: RefCell<Option<H::Listener>>,
    last: Cell<Option<ResizeInfo>>,
    cancelled: Cell<bool>,
    /// A trigger fired while the callback was running.
    rerun: Cell<bool>,
    /// Cancelled while the observer was borrowed through [`ObserverRef`].
    disconnect_pending: Cell<bool>,
    on_resize: RefCell<OnResize>,
}

impl<H: ResizeHost> Session<H> {
    fn measure(&self) -> Rect {
        match &self.container {
            Some(container) => self.host.measure(container),
            None => self.host.viewport_rect(),
        }
    }

    /// Measures and fits, returning the result only if it differs from the
    /// last delivered one.
    fn changed_info(&self) -> Option<ResizeInfo> {
        let measured = self.measure();
        if !is_measurable(measured) {
            #[cfg(feature = "tracing")]
            tracing::trace!(
                width = measured.width(),
                height = measured.height(),
                "unmeasurable region, skipping"
            );
            return None;
        }

        let bounds = match &self.adjust_bounds {
            Some(adjust) => adjust(measured),
            None => measured,
        };
        let info = self.stage.fit(bounds);
        (self.last.get() != Some(info)).then_some(info)
    }

    fn disconnect_observer(&self) {
        match self.observer.try_borrow_mut() {
            Ok(mut observer) => {
                self.disconnect_pending.set(false);
                observer.disconnect();
            }
            Err(_) => self.disconnect_pending.set(true),
        }
    }

    fn finish_pending_disconnect(&self) {
        if self.disconnect_pending.get() {
            self.disconnect_observer();
        }
    }
}

fn is_measurable(rect: Rect) -> bool {
    let (width, height) = (rect.width(), rect.height());
    width.is_finite() && height.is_finite() && width != 0.0 && height != 0.0
}

impl<H: ResizeHost> SessionControl for Session<H> {
    fn recompute(&self) {
        let Ok(mut on_resize) = self.on_resize.try_borrow_mut() else {
            // The callback is running; the outer call remeasures once it returns.
            self.rerun.set(true);
            #[cfg(feature = "tracing")]
            tracing::trace!("trigger fired from inside the resize callback, deferring");
            return;
        };

        loop {
            if self.cancelled.get() {
                self.rerun.set(false);
                return;
            }
            if let Some(info) = self.changed_info() {
                self.last.set(Some(info));

                #[cfg(feature = "tracing")]
                tracing::debug!(
                    scale = info.scale,
                    x = info.x,
                    y = info.y,
                    width = info.width,
                    height = info.height,
                    "stage fit changed"
                );

                let callback: &mut dyn FnMut(&ResizeInfo) = &mut **on_resize;
                callback(&info);
            }
            if !self.rerun.replace(false) {
                return;
            }
        }
    }

    fn cancel(&self) {
        if self.cancelled.replace(true) {
            return;
        }
        self.disconnect_observer();
        // Only present when the window was not ignored.
        let listener = self.listener.borrow_mut().take();
        if let Some(listener) = listener {
            self.host.remove_window_resize_listener(listener);
        }

        #[cfg(feature = "tracing")]
        tracing::debug!("resize session cancelled");
    }

    fn is_cancelled(&self) -> bool {
        self.cancelled.get()
    }
}

/// A running resize session returned by [`start_resizer`].
///
/// The session owns the memory of the last delivered [`ResizeInfo`]; sessions
/// never share state. Dropping the session without cancelling leaves the
/// host's registrations in place, but the triggers they hold become inert
/// once the session and all of its [`CancelHandle`]s are gone.
pub struct ResizeSession<H: ResizeHost> {
    inner: Rc<Session<H>>,
}

impl<H: ResizeHost + 'static> ResizeSession<H> {
    /// The size observer created for this session.
    ///
    /// Cancelling while the returned guard is alive is allowed: the observer
    /// is disconnected when the last guard is dropped.
    #[must_use]
    pub fn observer(&self) -> ObserverRef<'_, H> {
        self.inner.finish_pending_disconnect();
        ObserverRef {
            observer: self.inner.observer.borrow(),
            _finish: FinishDisconnect(&self.inner),
        }
    }

    /// The stage this session fits.
    #[must_use]
    pub fn stage(&self) -> Stage {
        self.inner.stage
    }

    /// The last [`ResizeInfo`] delivered to the callback, if any.
    #[must_use]
    pub fn last_info(&self) -> Option<ResizeInfo> {
        self.inner.last.get()
    }

    /// Remeasures now, exactly as if a trigger had fired.
    pub fn recompute(&self) {
        self.inner.recompute();
    }

    /// Stops observing and removes the window listener. Idempotent.
    ///
    /// No callback fires after this returns.
    pub fn cancel(&self) {
        self.inner.cancel();
    }

    /// Returns `true` once the session has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// A detachable cancellation handle for this session.
    #[must_use]
    pub fn cancel_handle(&self) -> CancelHandle {
        let session: Rc<dyn SessionControl> = self.inner.clone();
        CancelHandle { session }
    }
}

impl<H: ResizeHost> fmt::Debug for ResizeSession<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResizeSession")
            .field("stage", &self.inner.stage)
            .field("ignore_window", &self.inner.ignore_window)
            .field("last", &self.inner.last.get())
            .field("cancelled", &self.inner.cancelled.get())
            .finish_non_exhaustive()
    }
}

/// Shared access to a session's size observer; see [`ResizeSession::observer`].
pub struct ObserverRef<'a, H: ResizeHost> {
    // Dropped before `_finish`, which needs the borrow released.
    observer: Ref<'a, H::Observer>,
    _finish: FinishDisconnect<'a, H>,
}

impl<H: ResizeHost> Deref for ObserverRef<'_, H> {
    type Target = H::Observer;

    fn deref(&self) -> &H::Observer {
        &self.observer
    }
}

impl<H: ResizeHost> fmt::Debug for ObserverRef<'_, H>
where
    H::Observer: fmt::Debug,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&*self.observer, f)
    }
}

struct FinishDisconnect<'a, H: ResizeHost>(&'a Session<H>);

impl<H: ResizeHost> Drop for FinishDisconnect<'_, H> {
    fn drop(&mut self) {
        self.0.finish_pending_disconnect();
    }
}

/// Cancels a resize session; see [`ResizeSession::cancel`].
///
/// A handle keeps its session alive, so it can be stored wherever teardown
/// happens, independently of the [`ResizeSession`] itself.
#[derive(Clone)]
pub struct CancelHandle {
    session: Rc<dyn SessionControl>,
}

impl CancelHandle {
    /// Cancels the session. Idempotent.
    pub fn cancel(&self) {
        self.session.cancel();
    }

    /// Returns `true` once the session has been cancelled.
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.session.is_cancelled()
    }
}

impl fmt::Debug for CancelHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelHandle")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

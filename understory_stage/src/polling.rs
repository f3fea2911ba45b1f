// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! A [`SizeObserver`] for hosts without a native observation primitive.
//!
//! The host keeps a clone of the observer and calls [`PollingObserver::poll`]
//! from its own loop (a frame callback, a timer, after layout). When any
//! observed target's rectangle differs from the previous poll, the session's
//! trigger fires once.
//!
//! ```rust
//! use kurbo::Rect;
//! use understory_stage::{PollingObserver, SizeObserver};
//!
//! # fn demo(trigger: understory_stage::ResizeTrigger) {
//! let mut observer = PollingObserver::new(trigger);
//! observer.observe(&1_u32);
//!
//! // The first poll establishes a baseline and reports it.
//! assert!(observer.poll(|_| Rect::new(0.0, 0.0, 100.0, 100.0)));
//! // Nothing moved.
//! assert!(!observer.poll(|_| Rect::new(0.0, 0.0, 100.0, 100.0)));
//! # }
//! ```

use alloc::rc::Rc;
use alloc::vec::Vec;
use core::cell::RefCell;
use core::fmt;

use kurbo::Rect;

use crate::host::{ResizeTrigger, SizeObserver};

/// Polling implementation of [`SizeObserver`].
///
/// Clones share state: observing or disconnecting through one clone is
/// visible through all of them.
pub struct PollingObserver<E> {
    trigger: ResizeTrigger,
    state: Rc<RefCell<PollState<E>>>,
}

struct PollState<E> {
    targets: Vec<(E, Option<Rect>)>,
    connected: bool,
}

impl<E> PollingObserver<E> {
    /// Creates an observer with no targets that fires `trigger` on change.
    #[must_use]
    pub fn new(trigger: ResizeTrigger) -> Self {
        Self {
            trigger,
            state: Rc::new(RefCell::new(PollState {
                targets: Vec::new(),
                connected: true,
            })),
        }
    }

    /// Number of observed targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.state.borrow().targets.len()
    }

    /// Returns `true` if nothing is observed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.borrow().targets.is_empty()
    }

    /// Returns `false` after [`SizeObserver::disconnect`] until the next
    /// [`SizeObserver::observe`].
    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.state.borrow().connected
    }
}

impl<E: PartialEq + Clone> PollingObserver<E> {
    /// Measures every target and fires the trigger once if any changed.
    ///
    /// A target's first measurement always counts as a change. Returns
    /// whether the trigger fired. `measure` runs with no borrow of the
    /// observer held, so it may inspect or modify the observer.
    pub fn poll(&self, mut measure: impl FnMut(&E) -> Rect) -> bool {
        let targets: Vec<E> = {
            let state = self.state.borrow();
            if !state.connected {
                return false;
            }
            state.targets.iter().map(|(t, _)| t.clone()).collect()
        };
        let rects: Vec<(E, Rect)> = targets
            .into_iter()
            .map(|target| {
                let rect = measure(&target);
                (target, rect)
            })
            .collect();

        let changed = {
            let mut state = self.state.borrow_mut();
            if !state.connected {
                return false;
            }
            let mut changed = false;
            for (target, rect) in rects {
                // Targets dropped by `measure` are skipped.
                let entry = state.targets.iter_mut().find(|(t, _)| *t == target);
                if let Some((_, last)) = entry
                    && *last != Some(rect)
                {
                    *last = Some(rect);
                    changed = true;
                }
            }
            changed
        };
        // Fire with the state released: the callback may disconnect us.
        if changed {
            self.trigger.fire();
        }
        changed
    }
}

impl<E: PartialEq + Clone> SizeObserver<E> for PollingObserver<E> {
    fn observe(&mut self, target: &E) {
        let mut state = self.state.borrow_mut();
        state.connected = true;
        if !state.targets.iter().any(|(t, _)| t == target) {
            state.targets.push((target.clone(), None));
        }
    }

    fn disconnect(&mut self) {
        let mut state = self.state.borrow_mut();
        state.targets.clear();
        state.connected = false;
    }
}

impl<E> Clone for PollingObserver<E> {
    fn clone(&self) -> Self {
        Self {
            trigger: self.trigger.clone(),
            state: self.state.clone(),
        }
    }
}

impl<E: fmt::Debug> fmt::Debug for PollingObserver<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.borrow();
        f.debug_struct("PollingObserver")
            .field("targets", &state.targets)
            .field("connected", &state.connected)
            .finish_non_exhaustive()
    }
}

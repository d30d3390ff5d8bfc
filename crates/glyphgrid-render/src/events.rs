//! Viewport change notifications.
//!
//! A [`ViewportSource`] tells the grid when the host viewport may have
//! changed size; the listener reads the fresh dimensions at
//! notification time rather than trusting any payload. Subscriptions
//! unhook themselves when dropped, so a torn-down grid never leaves a
//! listener behind in the host.

#![forbid(unsafe_code)]

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

/// Host viewport: current dimensions plus change notifications.
pub trait ViewportSource {
    /// Current viewport size in pixels.
    fn dimensions(&self) -> (f64, f64);

    /// Register `listener` to run on every possible size change. The
    /// registration lives as long as the returned subscription.
    fn subscribe(&self, listener: Box<dyn Fn()>) -> ViewportSubscription;
}

/// Handle for an active viewport listener. Dropping it (or calling
/// [`unsubscribe`](Self::unsubscribe)) removes the listener.
pub struct ViewportSubscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl ViewportSubscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self { cancel: Some(Box::new(cancel)) }
    }

    /// Remove the listener now instead of at drop time.
    pub fn unsubscribe(mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for ViewportSubscription {
    fn drop(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl fmt::Debug for ViewportSubscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ViewportSubscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

type ListenerSlot = (u64, Rc<dyn Fn()>);

/// In-memory viewport for tests: set dimensions, then `fire` to notify
/// subscribers the way a host resize event would.
pub struct SyntheticViewport {
    dims: Cell<(f64, f64)>,
    listeners: Rc<RefCell<Vec<ListenerSlot>>>,
    next_id: Cell<u64>,
}

impl SyntheticViewport {
    pub fn new(width: f64, height: f64) -> Self {
        Self {
            dims: Cell::new((width, height)),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_id: Cell::new(0),
        }
    }

    pub fn set_dimensions(&self, width: f64, height: f64) {
        self.dims.set((width, height));
    }

    /// Notify every live listener. Listeners are snapshotted first so
    /// one may drop its own subscription mid-notification.
    pub fn fire(&self) {
        let snapshot: Vec<Rc<dyn Fn()>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();
        for listener in snapshot {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl fmt::Debug for SyntheticViewport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyntheticViewport")
            .field("dims", &self.dims.get())
            .field("listeners", &self.listeners.borrow().len())
            .finish()
    }
}

impl ViewportSource for SyntheticViewport {
    fn dimensions(&self) -> (f64, f64) {
        self.dims.get()
    }

    fn subscribe(&self, listener: Box<dyn Fn()>) -> ViewportSubscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));

        let listeners = Rc::clone(&self.listeners);
        ViewportSubscription::new(move || {
            listeners.borrow_mut().retain(|(slot_id, _)| *slot_id != id);
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_invokes_listener_with_fresh_dimensions() {
        let viewport = Rc::new(SyntheticViewport::new(100.0, 50.0));
        let seen = Rc::new(Cell::new((0.0, 0.0)));

        let source = Rc::clone(&viewport);
        let sink = Rc::clone(&seen);
        let _sub = viewport.subscribe(Box::new(move || {
            sink.set(source.dimensions());
        }));

        viewport.set_dimensions(300.0, 200.0);
        viewport.fire();
        assert_eq!(seen.get(), (300.0, 200.0));
    }

    #[test]
    fn dropping_subscription_removes_listener() {
        let viewport = SyntheticViewport::new(1.0, 1.0);
        let sub = viewport.subscribe(Box::new(|| {}));
        assert_eq!(viewport.listener_count(), 1);
        drop(sub);
        assert_eq!(viewport.listener_count(), 0);
    }

    #[test]
    fn explicit_unsubscribe_removes_listener_once() {
        let viewport = SyntheticViewport::new(1.0, 1.0);
        let first = viewport.subscribe(Box::new(|| {}));
        let _second = viewport.subscribe(Box::new(|| {}));
        first.unsubscribe();
        assert_eq!(viewport.listener_count(), 1);
    }

    #[test]
    fn fire_with_no_listeners_is_a_no_op() {
        SyntheticViewport::new(1.0, 1.0).fire();
    }
}

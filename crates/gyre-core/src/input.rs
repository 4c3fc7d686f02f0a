use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

pub type Listener = Box<dyn Fn()>;

/// Source of pointer-movement notifications.
pub trait InputSource {
    fn subscribe(&self, listener: Listener) -> Subscription;
}

/// Owned registration with an input source. Dropping it unsubscribes.
#[must_use = "dropping a subscription unsubscribes its listener"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    pub fn cancel(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// In-process input source: `emit` notifies every live listener.
#[derive(Clone, Default)]
pub struct PointerFeed {
    listeners: Rc<RefCell<Vec<(u64, Rc<dyn Fn()>)>>>,
    next_id: Rc<Cell<u64>>,
}

impl PointerFeed {
    pub fn emit(&self) {
        let listeners: Vec<_> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| l.clone())
            .collect();
        for listener in listeners {
            listener();
        }
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl InputSource for PointerFeed {
    fn subscribe(&self, listener: Listener) -> Subscription {
        let id = self.next_id.get();
        self.next_id.set(id + 1);
        self.listeners.borrow_mut().push((id, Rc::from(listener)));

        let listeners = Rc::downgrade(&self.listeners);
        Subscription::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(i, _)| *i != id);
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_emit_reaches_subscribers() {
        let feed = PointerFeed::default();
        let hits = Rc::new(Cell::new(0));

        let counter = hits.clone();
        let _sub = feed.subscribe(Box::new(move || counter.set(counter.get() + 1)));

        feed.emit();
        feed.emit();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let feed = PointerFeed::default();
        let hits = Rc::new(Cell::new(0));

        let first = hits.clone();
        let sub = feed.subscribe(Box::new(move || first.set(first.get() + 1)));
        let second = hits.clone();
        let kept = feed.subscribe(Box::new(move || second.set(second.get() + 10)));
        assert_eq!(feed.listener_count(), 2);

        sub.cancel();
        feed.emit();
        assert_eq!(hits.get(), 10);

        drop(kept);
        feed.emit();
        assert_eq!(hits.get(), 10);
        assert_eq!(feed.listener_count(), 0);
    }
}

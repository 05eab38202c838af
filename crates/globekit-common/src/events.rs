//! Listener registry for host-side notifications.
//!
//! Handlers are stored as `Rc<dyn Fn>` so `emit` can snapshot the list and
//! release its borrow before calling out. A handler is therefore free to
//! register, unregister, or trigger another emit on the same registry.

use std::cell::RefCell;
use std::rc::Rc;

use tracing::trace;

use crate::id::SubscriptionId;

pub struct Listeners<A> {
    handlers: RefCell<Vec<(SubscriptionId, Rc<dyn Fn(A)>)>>,
}

impl<A: Copy> Listeners<A> {
    pub fn new() -> Self {
        Self {
            handlers: RefCell::new(Vec::new()),
        }
    }

    /// Register a handler and return the token that removes it.
    pub fn add(&self, handler: Box<dyn Fn(A)>) -> SubscriptionId {
        let id = SubscriptionId::new();
        self.handlers.borrow_mut().push((id, Rc::from(handler)));
        trace!(%id, "listener added");
        id
    }

    /// Remove a handler. Returns `false` if the token was unknown.
    pub fn remove(&self, id: SubscriptionId) -> bool {
        let mut handlers = self.handlers.borrow_mut();
        let before = handlers.len();
        handlers.retain(|(sid, _)| *sid != id);
        let removed = handlers.len() != before;
        if removed {
            trace!(%id, "listener removed");
        }
        removed
    }

    /// Call every registered handler with `arg`. Returns how many ran.
    pub fn emit(&self, arg: A) -> usize {
        let snapshot: Vec<Rc<dyn Fn(A)>> = self
            .handlers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        for handler in &snapshot {
            handler(arg);
        }
        snapshot.len()
    }

    pub fn len(&self) -> usize {
        self.handlers.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.handlers.borrow().is_empty()
    }

    pub fn clear(&self) {
        self.handlers.borrow_mut().clear();
    }
}

impl<A: Copy> Default for Listeners<A> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn emit_reaches_every_handler() {
        let listeners: Listeners<u32> = Listeners::new();
        let total = Rc::new(Cell::new(0));

        let t1 = Rc::clone(&total);
        listeners.add(Box::new(move |n| t1.set(t1.get() + n)));
        let t2 = Rc::clone(&total);
        listeners.add(Box::new(move |n| t2.set(t2.get() + n * 10)));

        assert_eq!(listeners.emit(2), 2);
        assert_eq!(total.get(), 22);
    }

    #[test]
    fn remove_stops_delivery() {
        let listeners: Listeners<()> = Listeners::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let id = listeners.add(Box::new(move |_| h.set(h.get() + 1)));

        listeners.emit(());
        assert!(listeners.remove(id));
        listeners.emit(());

        assert_eq!(hits.get(), 1);
        assert!(listeners.is_empty());
    }

    #[test]
    fn remove_unknown_returns_false() {
        let listeners: Listeners<()> = Listeners::new();
        assert!(!listeners.remove(SubscriptionId(u64::MAX)));
    }

    #[test]
    fn handler_may_remove_itself_during_emit() {
        let listeners: Rc<Listeners<()>> = Rc::new(Listeners::new());
        let own_id: Rc<Cell<Option<SubscriptionId>>> = Rc::new(Cell::new(None));

        let l = Rc::clone(&listeners);
        let slot = Rc::clone(&own_id);
        let id = listeners.add(Box::new(move |_| {
            if let Some(id) = slot.get() {
                l.remove(id);
            }
        }));
        own_id.set(Some(id));

        assert_eq!(listeners.emit(()), 1);
        assert_eq!(listeners.len(), 0);
    }

    #[test]
    fn emit_with_no_handlers_returns_zero() {
        let listeners: Listeners<()> = Listeners::default();
        assert_eq!(listeners.emit(()), 0);
    }
}

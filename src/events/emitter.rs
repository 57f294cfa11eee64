// Synchronous event emitter - the subscribe/unsubscribe/emit capability

use super::gesture::GestureEvent;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Handle identifying a single subscription on an [`EventEmitter`]
///
/// Returned by [`EventEmitter::subscribe`] and consumed by
/// [`EventEmitter::unsubscribe`]. Ids are unique per emitter and never reused.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ListenerId(u64);

type Listener = Rc<dyn Fn(&GestureEvent)>;

/// Synchronous, single-threaded event emitter
///
/// Listeners are invoked in subscription order, and every listener runs to
/// completion before `emit` returns. Methods take `&self` so an emitter can be
/// shared through `Rc` between an aggregator and its sources.
pub struct EventEmitter {
    /// Subscribed listeners, in subscription order
    listeners: RefCell<Vec<(ListenerId, Listener)>>,

    /// Next id to hand out
    next_id: Cell<u64>,
}

impl EventEmitter {
    /// Create an emitter with no listeners
    pub fn new() -> Self {
        Self {
            listeners: RefCell::new(Vec::new()),
            next_id: Cell::new(0),
        }
    }

    /// Subscribe a listener, returning the handle needed to unsubscribe it
    pub fn subscribe<F>(&self, listener: F) -> ListenerId
    where
        F: Fn(&GestureEvent) + 'static,
    {
        let id = ListenerId(self.next_id.get());
        self.next_id.set(id.0 + 1);
        self.listeners.borrow_mut().push((id, Rc::new(listener)));
        id
    }

    /// Remove a listener by id
    ///
    /// Returns `true` if the id was subscribed. Unsubscribing an unknown or
    /// already-removed id is a no-op.
    pub fn unsubscribe(&self, id: ListenerId) -> bool {
        let mut listeners = self.listeners.borrow_mut();
        let before = listeners.len();
        listeners.retain(|(listener_id, _)| *listener_id != id);
        listeners.len() != before
    }

    /// Deliver an event to every current listener, in subscription order
    ///
    /// The listener list is snapshotted before dispatch, so listeners added
    /// or removed from inside a callback take effect on the next emission.
    pub fn emit(&self, event: &GestureEvent) {
        let snapshot: Vec<Listener> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| Rc::clone(listener))
            .collect();

        for listener in snapshot {
            listener(event);
        }
    }

    /// Number of currently subscribed listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl Default for EventEmitter {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for EventEmitter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventEmitter")
            .field("listeners", &self.listener_count())
            .finish()
    }
}

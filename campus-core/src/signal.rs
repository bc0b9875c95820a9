//! Single-threaded change notification.
//!
//! [`EventBus`] fans events out to registered handlers. Each registration
//! returns a [`Subscription`] guard and dropping the guard deregisters the
//! handler, so a component's listeners live exactly as long as it does.
//! [`Signal`] pairs a value with a bus that fires on change, and
//! [`Environment`] bundles the signals the page layout reacts to.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::scroll::ScrollState;
use crate::theme::ThemeContext;

struct Slot<E> {
    id: u64,
    live: Cell<bool>,
    handler: RefCell<Box<dyn FnMut(&E)>>,
}

struct Registry<E> {
    next_id: u64,
    slots: Vec<Rc<Slot<E>>>,
}

/// Fan-out of `&E` to every live handler, in subscription order.
pub struct EventBus<E> {
    inner: Rc<RefCell<Registry<E>>>,
}

impl<E> Clone for EventBus<E> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<E> Default for EventBus<E> {
    fn default() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Registry {
                next_id: 0,
                slots: Vec::new(),
            })),
        }
    }
}

impl<E: 'static> fmt::Debug for EventBus<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventBus")
            .field("handlers", &self.handler_count())
            .finish()
    }
}

impl<E: 'static> EventBus<E> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self, handler: impl FnMut(&E) + 'static) -> Subscription {
        let slot = {
            let mut reg = self.inner.borrow_mut();
            let id = reg.next_id;
            reg.next_id += 1;
            let slot = Rc::new(Slot {
                id,
                live: Cell::new(true),
                handler: RefCell::new(Box::new(handler)),
            });
            reg.slots.push(Rc::clone(&slot));
            slot
        };

        let registry: Weak<RefCell<Registry<E>>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            slot.live.set(false);
            if let Some(registry) = registry.upgrade() {
                registry.borrow_mut().slots.retain(|s| s.id != slot.id);
            }
        })
    }

    /// Deliver `event` to every handler that is live when its turn comes.
    ///
    /// Handlers may subscribe or drop subscriptions while being called;
    /// new handlers first see the next event. A handler that re-emits on
    /// the same bus is not re-entered.
    pub fn emit(&self, event: &E) {
        let slots: Vec<Rc<Slot<E>>> = self.inner.borrow().slots.clone();
        for slot in slots {
            if !slot.live.get() {
                continue;
            }
            if let Ok(mut handler) = slot.handler.try_borrow_mut() {
                handler(event);
            }
        }
    }

    pub fn handler_count(&self) -> usize {
        self.inner.borrow().slots.len()
    }
}

/// Registration guard. Dropping it removes the handler.
#[must_use = "dropping a Subscription immediately unsubscribes"]
pub struct Subscription {
    cancel: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    fn new(cancel: impl FnOnce() + 'static) -> Self {
        Self {
            cancel: Some(Box::new(cancel)),
        }
    }

    /// Explicit form of dropping the guard.
    pub fn unsubscribe(mut self) {
        self.cancel_now();
    }

    fn cancel_now(&mut self) {
        if let Some(cancel) = self.cancel.take() {
            cancel();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.cancel_now();
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.cancel.is_some())
            .finish()
    }
}

/// Observable value. Clones share the same value and subscribers.
pub struct Signal<T> {
    value: Rc<RefCell<T>>,
    changed: EventBus<T>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            value: Rc::clone(&self.value),
            changed: self.changed.clone(),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal").field(&self.value.borrow()).finish()
    }
}

impl<T: Clone + PartialEq + 'static> Signal<T> {
    pub fn new(value: T) -> Self {
        Self {
            value: Rc::new(RefCell::new(value)),
            changed: EventBus::new(),
        }
    }

    pub fn get(&self) -> T {
        self.value.borrow().clone()
    }

    /// Store `value`; subscribers run only when it differs from the old one.
    /// Returns whether it changed.
    pub fn set(&self, value: T) -> bool {
        {
            let mut current = self.value.borrow_mut();
            if *current == value {
                return false;
            }
            *current = value.clone();
        }
        self.changed.emit(&value);
        true
    }

    pub fn update(&self, f: impl FnOnce(&T) -> T) -> bool {
        let next = f(&self.value.borrow());
        self.set(next)
    }

    pub fn subscribe(&self, handler: impl FnMut(&T) + 'static) -> Subscription {
        self.changed.subscribe(handler)
    }

    pub fn subscriber_count(&self) -> usize {
        self.changed.handler_count()
    }
}

/// Application-wide context created once at start and passed down.
#[derive(Debug)]
pub struct Environment {
    /// Viewport width in px.
    pub viewport: Signal<u32>,
    pub scroll: Signal<ScrollState>,
    pub theme: ThemeContext,
}

impl Environment {
    pub fn new(viewport_width: u32, theme: ThemeContext) -> Self {
        Self {
            viewport: Signal::new(viewport_width),
            scroll: Signal::new(ScrollState::default()),
            theme,
        }
    }
}

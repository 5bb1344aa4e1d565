//! A small typed callback registry shared through Yew context.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

use crate::motion::pointer::PointerSample;

type Listener<T> = Rc<dyn Fn(&T)>;

struct Registry<T> {
    next_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
}

pub struct Broadcast<T> {
    registry: Rc<Registry<T>>,
}

/// "Scroll the services carousel to this index."
pub type ServiceSelector = Broadcast<usize>;
/// Window-level pointer moves, shared by the cursor and the hero canvas.
pub type PointerFeed = Broadcast<PointerSample>;

impl<T: 'static> Broadcast<T> {
    pub fn new() -> Self {
        Self {
            registry: Rc::new(Registry {
                next_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    pub fn subscribe<F>(&self, callback: F) -> Subscription
    where
        F: Fn(&T) + 'static,
    {
        let id = self.registry.next_id.get();
        self.registry.next_id.set(id + 1);
        self.registry
            .listeners
            .borrow_mut()
            .push((id, Rc::new(callback)));

        let registry: Weak<Registry<T>> = Rc::downgrade(&self.registry);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(registry) = registry.upgrade() {
                    registry.listeners.borrow_mut().retain(|(other, _)| *other != id);
                }
            })),
        }
    }

    /// Calls every current subscriber. Callbacks may subscribe or drop
    /// subscriptions while this runs.
    pub fn emit(&self, value: &T) {
        let listeners: Vec<Listener<T>> = self
            .registry
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();
        for listener in listeners {
            listener(value);
        }
    }

    pub fn subscriber_count(&self) -> usize {
        self.registry.listeners.borrow().len()
    }
}

impl<T: 'static> Default for Broadcast<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Broadcast<T> {
    fn clone(&self) -> Self {
        Self {
            registry: self.registry.clone(),
        }
    }
}

impl<T> PartialEq for Broadcast<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.registry, &other.registry)
    }
}

impl<T> fmt::Debug for Broadcast<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Broadcast")
            .field("subscribers", &self.registry.listeners.borrow().len())
            .finish()
    }
}

/// Unsubscribes when dropped.
#[must_use = "dropping a Subscription unsubscribes immediately"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn emit_without_subscribers_is_a_no_op() {
        let selector = ServiceSelector::new();
        selector.emit(&2);
        assert_eq!(selector.subscriber_count(), 0);
    }

    #[test]
    fn subscribers_receive_values_until_dropped() {
        let selector = ServiceSelector::new();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let subscription = selector.subscribe(move |index| sink.borrow_mut().push(*index));
        selector.emit(&1);
        selector.clone().emit(&3);
        assert_eq!(selector.subscriber_count(), 1);

        drop(subscription);
        selector.emit(&0);
        assert_eq!(*seen.borrow(), vec![1, 3]);
        assert_eq!(selector.subscriber_count(), 0);
    }

    #[test]
    fn dropping_one_subscription_keeps_the_others() {
        let feed = PointerFeed::new();
        let count = Rc::new(Cell::new(0));
        let a = {
            let count = count.clone();
            feed.subscribe(move |_| count.set(count.get() + 1))
        };
        let _b = {
            let count = count.clone();
            feed.subscribe(move |_| count.set(count.get() + 10))
        };
        drop(a);
        feed.emit(&PointerSample::new(1.0, 1.0));
        assert_eq!(count.get(), 10);
    }

    #[test]
    fn subscription_outliving_the_broadcast_is_harmless() {
        let selector = ServiceSelector::new();
        let subscription = selector.subscribe(|_| {});
        drop(selector);
        drop(subscription);
    }

    #[test]
    fn equality_is_handle_identity() {
        let a = ServiceSelector::new();
        let b = ServiceSelector::new();
        assert!(a == a.clone());
        assert!(a != b);
    }
}

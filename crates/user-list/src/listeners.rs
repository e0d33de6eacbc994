//! Snapshot listener registry.
//!
//! Listeners are keyed by an opaque [`SubscriptionId`] handed out at
//! registration. Removal goes through the handle, so closures never need to be
//! compared with each other.

use std::collections::BTreeMap;
use std::fmt;

use crate::user::User;

/// Callback receiving the full ordered snapshot.
pub type Listener = Box<dyn FnMut(&[User])>;

/// Handle returned when a listener is registered.
///
/// Handles are never reused within one store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription-{}", self.0)
    }
}

/// Registered listeners, notified in registration order.
#[derive(Default)]
pub(crate) struct Listeners {
    next_id: u64,
    entries: BTreeMap<SubscriptionId, Listener>,
}

impl Listeners {
    pub(crate) fn insert(&mut self, listener: Listener) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.entries.insert(id, listener);
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> bool {
        self.entries.remove(&id).is_some()
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Invokes the listener registered under `id`, if any.
    pub(crate) fn notify_one(&mut self, id: SubscriptionId, snapshot: &[User]) {
        if let Some(listener) = self.entries.get_mut(&id) {
            listener(snapshot);
        }
    }

    pub(crate) fn notify_all(&mut self, snapshot: &[User]) {
        for listener in self.entries.values_mut() {
            listener(snapshot);
        }
    }
}

impl fmt::Debug for Listeners {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Listeners")
            .field("next_id", &self.next_id)
            .field("registered", &self.entries.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::user::UserId;

    fn recorder(log: &Rc<RefCell<Vec<&'static str>>>, tag: &'static str) -> Listener {
        let log = Rc::clone(log);
        Box::new(move |_snapshot: &[User]| log.borrow_mut().push(tag))
    }

    #[test]
    fn handles_are_not_reused_after_removal() {
        let mut listeners = Listeners::default();
        let first = listeners.insert(Box::new(|_: &[User]| {}));
        assert!(listeners.remove(first));

        let second = listeners.insert(Box::new(|_: &[User]| {}));
        assert_ne!(first, second);
    }

    #[test]
    fn notify_all_follows_registration_order() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();
        listeners.insert(recorder(&log, "first"));
        listeners.insert(recorder(&log, "second"));
        listeners.insert(recorder(&log, "third"));

        listeners.notify_all(&[User::new(UserId::new(1), "Ada", "Engines", "")]);

        assert_eq!(*log.borrow(), ["first", "second", "third"]);
    }

    #[test]
    fn notify_one_targets_a_single_listener() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut listeners = Listeners::default();
        listeners.insert(recorder(&log, "first"));
        let second = listeners.insert(recorder(&log, "second"));

        listeners.notify_one(second, &[]);

        assert_eq!(*log.borrow(), ["second"]);
    }

    #[test]
    fn removing_an_unknown_handle_reports_false() {
        let mut listeners = Listeners::default();
        let id = listeners.insert(Box::new(|_: &[User]| {}));
        assert!(listeners.remove(id));
        assert!(!listeners.remove(id));
        assert_eq!(listeners.len(), 0);
    }
}

//! The observable user list.
//!
//! [`UserListStore`] owns the canonical ordered list and pushes the whole
//! snapshot to every registered listener after each change. Lookups go by
//! [`UserId`] with a linear scan; moves swap a single pair of rows.

use std::collections::HashSet;

use tracing::debug;

use crate::error::StoreError;
use crate::listeners::{Listeners, SubscriptionId};
use crate::source::UserDataSource;
use crate::user::{User, UserId};

/// Number of users generated by a default seeding.
pub const DEFAULT_USER_COUNT: usize = 100;

/// Ordered, observable collection of users.
///
/// The store is single-threaded and owned by whoever constructs it; hand it
/// to consumers explicitly rather than reaching for a global. Listeners run
/// synchronously inside the mutating call and receive a shared borrow of the
/// snapshot, so they cannot touch the store while it is notifying.
///
/// # Example
///
/// ```
/// use std::cell::RefCell;
/// use std::rc::Rc;
///
/// use user_list::{User, UserId, UserListStore};
///
/// let users = (1..=3)
///     .map(|id| User::new(UserId::new(id), format!("User {id}"), "Acme", ""))
///     .collect();
/// let mut store = UserListStore::from_users(users).expect("unique ids");
///
/// let seen = Rc::new(RefCell::new(Vec::new()));
/// let sink = Rc::clone(&seen);
/// let subscription = store.add_listener(move |snapshot| {
///     sink.borrow_mut()
///         .push(snapshot.iter().map(|u| u.id().get()).collect::<Vec<_>>());
/// });
///
/// let second = store.users()[1].clone();
/// store.move_user(&second, -1);
/// assert!(store.remove_listener(subscription));
///
/// assert_eq!(*seen.borrow(), [vec![1, 2, 3], vec![2, 1, 3]]);
/// ```
#[derive(Debug, Default)]
pub struct UserListStore {
    users: Vec<User>,
    listeners: Listeners,
}

impl UserListStore {
    /// Generates `count` users with ids `1..=count`.
    ///
    /// Names and companies come from `source`. The photo pool is shuffled once
    /// through `source`, then user `id` receives entry `id % pool.len()`. An
    /// empty pool leaves every photo blank.
    ///
    /// # Example
    ///
    /// ```
    /// use user_list::{SequentialSource, UserListStore, DEFAULT_USER_COUNT};
    ///
    /// let pool = vec!["https://a.example/1.jpg".to_owned()];
    /// let store = UserListStore::seeded(&mut SequentialSource::default(), pool, DEFAULT_USER_COUNT);
    ///
    /// assert_eq!(store.len(), 100);
    /// assert_eq!(store.users().first().map(|u| u.name()), Some("User 1"));
    /// ```
    #[must_use]
    pub fn seeded<S>(source: &mut S, mut photos: Vec<String>, count: usize) -> Self
    where
        S: UserDataSource + ?Sized,
    {
        source.shuffle(&mut photos);

        let users: Vec<User> = (1_u64..)
            .take(count)
            .map(|raw| {
                let photo = usize::try_from(raw)
                    .ok()
                    .and_then(|slot| slot.checked_rem(photos.len()))
                    .and_then(|slot| photos.get(slot))
                    .cloned()
                    .unwrap_or_default();
                let name = source.display_name();
                let company = source.company_name();
                User::new(UserId::new(raw), name, company, photo)
            })
            .collect();

        debug!(
            user_count = users.len(),
            photo_count = photos.len(),
            "user list seeded"
        );

        Self {
            users,
            listeners: Listeners::default(),
        }
    }

    /// Builds a store from explicit records, keeping their order.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::DuplicateUserId`] if two records share an id.
    pub fn from_users(users: Vec<User>) -> Result<Self, StoreError> {
        let mut seen = HashSet::with_capacity(users.len());
        for (position, user) in users.iter().enumerate() {
            if !seen.insert(user.id()) {
                return Err(StoreError::DuplicateUserId {
                    id: user.id(),
                    position,
                });
            }
        }

        Ok(Self {
            users,
            listeners: Listeners::default(),
        })
    }

    /// Returns the current snapshot in display order.
    #[must_use]
    pub fn users(&self) -> &[User] {
        &self.users
    }

    /// Returns the number of users.
    #[must_use]
    pub fn len(&self) -> usize {
        self.users.len()
    }

    /// Returns `true` when the list is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }

    /// Returns the current position of the user with `id`.
    #[must_use]
    pub fn position_of(&self, id: UserId) -> Option<usize> {
        self.users.iter().position(|user| user.id() == id)
    }

    /// Returns the user with `id`, if present.
    #[must_use]
    pub fn find(&self, id: UserId) -> Option<&User> {
        self.users.iter().find(|user| user.id() == id)
    }

    /// Returns the number of registered listeners.
    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Swaps `user` with the row `move_by` positions away.
    ///
    /// Unknown users and targets outside the list are ignored, as is a zero
    /// offset. Listeners are notified only when two rows actually swap.
    pub fn move_user(&mut self, user: &User, move_by: isize) {
        let id = user.id();
        let Some(index) = self.position_of(id) else {
            debug!(user_id = %id, "move ignored: unknown user");
            return;
        };
        let len = self.users.len();
        let Some(target) = index
            .checked_add_signed(move_by)
            .filter(|target| *target < len)
        else {
            debug!(user_id = %id, index, move_by, len, "move ignored: out of range");
            return;
        };
        if target == index {
            return;
        }

        self.users.swap(index, target);
        debug!(user_id = %id, from = index, to = target, "user moved");
        self.notify();
    }

    /// Removes `user`, shifting later rows up by one.
    ///
    /// Unknown users are ignored.
    pub fn delete_user(&mut self, user: &User) {
        let id = user.id();
        let Some(index) = self.position_of(id) else {
            debug!(user_id = %id, "delete ignored: unknown user");
            return;
        };

        self.users.remove(index);
        debug!(user_id = %id, index, remaining = self.users.len(), "user deleted");
        self.notify();
    }

    /// Registers `listener` and immediately calls it with the current
    /// snapshot.
    ///
    /// Keep the returned handle to unsubscribe later.
    pub fn add_listener<F>(&mut self, listener: F) -> SubscriptionId
    where
        F: FnMut(&[User]) + 'static,
    {
        let id = self.listeners.insert(Box::new(listener));
        debug!(subscription = %id, "listener added");
        self.listeners.notify_one(id, &self.users);
        id
    }

    /// Unregisters the listener behind `id`.
    ///
    /// Returns `false` when no listener was registered under that handle.
    pub fn remove_listener(&mut self, id: SubscriptionId) -> bool {
        let removed = self.listeners.remove(id);
        debug!(subscription = %id, removed, "listener removed");
        removed
    }

    fn notify(&mut self) {
        self.listeners.notify_all(&self.users);
    }
}

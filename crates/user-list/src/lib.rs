//! Observable in-memory user list.
//!
//! This crate holds the state behind a screen that lists users and lets them
//! be reordered or removed. It has no UI, persistence or threading concerns:
//! a rendering layer subscribes to snapshots and forwards gestures.
//!
//! # Overview
//!
//! - [`UserListStore`] owns the ordered list and notifies listeners
//!   synchronously after every change.
//! - [`UserDataSource`] abstracts the fake-data generator used for seeding.
//! - [`MenuOption`] and [`UserAction`] describe the per-row popup menu.
//!
//! # Example
//!
//! ```
//! use user_list::{SequentialSource, UserListStore};
//!
//! let mut store = UserListStore::seeded(&mut SequentialSource::default(), Vec::new(), 3);
//! let first = store.users()[0].clone();
//!
//! store.move_user(&first, 1);
//! let ids: Vec<u64> = store.users().iter().map(|u| u.id().get()).collect();
//! assert_eq!(ids, [2, 1, 3]);
//!
//! store.delete_user(&first);
//! assert_eq!(store.len(), 2);
//! ```

mod action;
mod error;
mod listeners;
mod source;
mod store;
mod user;

pub use action::{ActionOutcome, MenuEntry, MenuOption, UserAction};
pub use error::StoreError;
pub use listeners::SubscriptionId;
pub use source::{SequentialSource, UserDataSource};
pub use store::{DEFAULT_USER_COUNT, UserListStore};
pub use user::{User, UserId};

//! Fake-data seeding and a command-line demo for the user list.
//!
//! This crate supplies the pieces around the `user_list` core that a real
//! front end would provide: a reproducible fake-data source, the avatar URL
//! pool, configuration loading, and a scripted stand-in for the list screen.
//!
//! # Overview
//!
//! - [`FakeUserData`] implements the store's data-generation capability on
//!   top of the `fake` crate with a seeded `ChaCha8` generator.
//! - [`PhotoPool`] validates avatar URLs and loads them from JSON.
//! - [`DemoSettings`] reads the seed, user count and pool location.
//! - [`demo_cli`] parses and runs a gesture script against a store.
//!
//! # Example
//!
//! ```
//! use example_users::{FakeUserData, PhotoPool, seeded_store};
//!
//! let first = seeded_store(&mut FakeUserData::from_seed(2026), &PhotoPool::default(), 100);
//! let second = seeded_store(&mut FakeUserData::from_seed(2026), &PhotoPool::default(), 100);
//!
//! assert_eq!(first.len(), 100);
//! assert_eq!(first.users(), second.users());
//! ```

pub mod demo_cli;
mod error;
mod fake_source;
mod photo_pool;
mod settings;

pub use error::{PhotoPoolError, SettingsError};
pub use fake_source::{FakeUserData, seeded_store};
pub use photo_pool::PhotoPool;
pub use settings::DemoSettings;

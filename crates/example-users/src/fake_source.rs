//! Fake-data backed user source.
//!
//! [`FakeUserData`] plugs the `fake` crate into the store's seeding
//! capability. Every value is drawn from a seeded `ChaCha8` generator, so the
//! same seed always yields the same list.

use fake::Fake;
use fake::faker::company::raw::CompanyName;
use fake::faker::name::raw::{FirstName, LastName};
use fake::locales::EN;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use user_list::{UserDataSource, UserListStore};

use crate::photo_pool::PhotoPool;

/// Deterministic fake names, companies and pool shuffling.
///
/// # Example
///
/// ```
/// use example_users::FakeUserData;
/// use user_list::UserDataSource;
///
/// let mut first = FakeUserData::from_seed(2026);
/// let mut second = FakeUserData::from_seed(2026);
/// assert_eq!(first.display_name(), second.display_name());
/// assert_eq!(first.seed(), 2026);
/// ```
#[derive(Debug, Clone)]
pub struct FakeUserData {
    seed: u64,
    rng: ChaCha8Rng,
}

impl FakeUserData {
    /// Creates a source seeded with `seed`.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            seed,
            rng: ChaCha8Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source from a freshly drawn seed.
    ///
    /// Read the seed back with [`FakeUserData::seed`] to reproduce the run.
    #[must_use]
    pub fn from_random_seed() -> Self {
        Self::from_seed(rand::rng().random())
    }

    /// Returns the seed this source started from.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }
}

impl UserDataSource for FakeUserData {
    fn display_name(&mut self) -> String {
        let first: String = FirstName(EN).fake_with_rng(&mut self.rng);
        let last: String = LastName(EN).fake_with_rng(&mut self.rng);
        format!("{first} {last}")
    }

    fn company_name(&mut self) -> String {
        CompanyName(EN).fake_with_rng(&mut self.rng)
    }

    fn shuffle(&mut self, pool: &mut [String]) {
        pool.shuffle(&mut self.rng);
    }
}

/// Seeds a store with `count` fake users drawing avatars from `photos`.
///
/// # Example
///
/// ```
/// use example_users::{FakeUserData, PhotoPool, seeded_store};
///
/// let mut source = FakeUserData::from_seed(42);
/// let store = seeded_store(&mut source, &PhotoPool::default(), 5);
///
/// assert_eq!(store.len(), 5);
/// assert!(store.users().iter().all(|user| user.has_photo()));
/// ```
#[must_use]
pub fn seeded_store(source: &mut FakeUserData, photos: &PhotoPool, count: usize) -> UserListStore {
    UserListStore::seeded(source, photos.urls().to_vec(), count)
}

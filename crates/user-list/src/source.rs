//! Data-generation capability used to seed a store.
//!
//! The store never reaches for a random number generator or a fake-data
//! library directly. Callers inject a [`UserDataSource`] instead, which keeps
//! seeding reproducible under test.

/// Produces the synthetic values used when seeding a store.
#[cfg_attr(test, mockall::automock)]
pub trait UserDataSource {
    /// Produces a display name for the next user.
    fn display_name(&mut self) -> String;

    /// Produces a company name for the next user.
    fn company_name(&mut self) -> String;

    /// Shuffles the avatar pool in place.
    fn shuffle(&mut self, pool: &mut [String]);
}

/// Deterministic source numbering names and companies in call order.
///
/// The avatar pool is left in its original order.
///
/// # Example
///
/// ```
/// use user_list::{SequentialSource, UserDataSource};
///
/// let mut source = SequentialSource::default();
/// assert_eq!(source.display_name(), "User 1");
/// assert_eq!(source.display_name(), "User 2");
/// assert_eq!(source.company_name(), "Company 1");
/// ```
#[derive(Debug, Default, Clone)]
pub struct SequentialSource {
    names: u64,
    companies: u64,
}

impl UserDataSource for SequentialSource {
    fn display_name(&mut self) -> String {
        self.names += 1;
        format!("User {}", self.names)
    }

    fn company_name(&mut self) -> String {
        self.companies += 1;
        format!("Company {}", self.companies)
    }

    fn shuffle(&mut self, _pool: &mut [String]) {}
}

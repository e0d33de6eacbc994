//! User records held by the list store.
//!
//! A [`User`] is an immutable value. Identity is carried entirely by
//! [`UserId`]; the store never compares records by position or by their
//! display fields.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a user record.
///
/// # Example
///
/// ```
/// use user_list::UserId;
///
/// let id = UserId::new(7);
/// assert_eq!(id.get(), 7);
/// assert_eq!(id.to_string(), "7");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    /// Wraps a raw identifier.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw identifier.
    #[must_use]
    pub const fn get(self) -> u64 {
        self.0
    }
}

impl From<u64> for UserId {
    fn from(raw: u64) -> Self {
        Self(raw)
    }
}

impl fmt::Display for UserId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A user shown as one row of the list.
///
/// # Example
///
/// ```
/// use user_list::{User, UserId};
///
/// let user = User::new(UserId::new(1), "Ada Lovelace", "Analytical Engines", "");
/// assert_eq!(user.name(), "Ada Lovelace");
/// assert!(!user.has_photo());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    company: String,
    photo: String,
}

impl User {
    /// Builds a user record.
    #[must_use]
    pub fn new(
        id: UserId,
        name: impl Into<String>,
        company: impl Into<String>,
        photo: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            company: company.into(),
            photo: photo.into(),
        }
    }

    /// Returns the identifier.
    #[must_use]
    pub const fn id(&self) -> UserId {
        self.id
    }

    /// Returns the display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the company name.
    #[must_use]
    pub fn company(&self) -> &str {
        &self.company
    }

    /// Returns the avatar URL, which may be empty.
    #[must_use]
    pub fn photo(&self) -> &str {
        &self.photo
    }

    /// Returns `true` when an avatar URL is present.
    ///
    /// Blank URLs mean the renderer should fall back to a placeholder image.
    #[must_use]
    pub fn has_photo(&self) -> bool {
        !self.photo.trim().is_empty()
    }
}

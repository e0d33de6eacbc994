//! Error types for the user-list crate.
//!
//! Store mutations never fail: unknown users and out-of-range moves are
//! ignored. Only building a store from caller-supplied records can be
//! rejected.

use thiserror::Error;

use crate::user::UserId;

/// Errors raised while constructing a store from explicit records.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// Two records share the same identifier.
    #[error("duplicate user id {id} at position {position}")]
    DuplicateUserId {
        /// Identifier that appeared more than once.
        id: UserId,
        /// Position of the second occurrence.
        position: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_user_id_formats_correctly() {
        let err = StoreError::DuplicateUserId {
            id: UserId::new(4),
            position: 9,
        };
        assert_eq!(err.to_string(), "duplicate user id 4 at position 9");
    }
}

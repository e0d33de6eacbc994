//! Row actions and the per-row popup menu.
//!
//! A rendering layer shows a menu for each row and turns the chosen entry
//! into a [`UserAction`]. Keeping that mapping here means the enablement
//! rules and the move offsets are shared by every front end.

use crate::store::UserListStore;
use crate::user::User;

/// Entries offered in a row's popup menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MenuOption {
    /// Move the row one step towards the top.
    MoveUp,
    /// Move the row one step towards the bottom.
    MoveDown,
    /// Delete the row.
    Remove,
}

impl MenuOption {
    /// All options in display order.
    pub const ALL: [Self; 3] = [Self::MoveUp, Self::MoveDown, Self::Remove];

    /// Human-readable label.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::MoveUp => "Move up",
            Self::MoveDown => "Move down",
            Self::Remove => "Remove",
        }
    }

    /// Returns whether the option applies to the row at `position` in a list
    /// of `len` rows.
    #[must_use]
    pub const fn is_enabled(self, position: usize, len: usize) -> bool {
        match self {
            Self::MoveUp => position > 0,
            Self::MoveDown => position + 1 < len,
            Self::Remove => true,
        }
    }

    /// Converts the option into the action it triggers for `user`.
    #[must_use]
    pub fn action(self, user: User) -> UserAction {
        match self {
            Self::MoveUp => UserAction::Move { user, move_by: -1 },
            Self::MoveDown => UserAction::Move { user, move_by: 1 },
            Self::Remove => UserAction::Delete(user),
        }
    }
}

/// One rendered menu entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuEntry {
    /// The option shown.
    pub option: MenuOption,
    /// Whether the option can be selected.
    pub enabled: bool,
}

/// Gestures a rendering layer forwards to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UserAction {
    /// Shift the user by a signed offset.
    Move {
        /// User to move.
        user: User,
        /// Signed offset; negative values move towards the top.
        move_by: isize,
    },
    /// Remove the user.
    Delete(User),
    /// Show the user's details without changing the list.
    Details(User),
}

/// Result of dispatching a [`UserAction`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// The action was forwarded to the store.
    Dispatched,
    /// A message to show the user.
    Message(String),
}

impl UserListStore {
    /// Builds the popup menu for `user`.
    ///
    /// Returns `None` when the user is no longer in the list.
    ///
    /// # Example
    ///
    /// ```
    /// use user_list::{MenuOption, User, UserId, UserListStore};
    ///
    /// let users = vec![
    ///     User::new(UserId::new(1), "Ada", "Engines", ""),
    ///     User::new(UserId::new(2), "Grace", "Navy", ""),
    /// ];
    /// let store = UserListStore::from_users(users).expect("unique ids");
    /// let first = store.users()[0].clone();
    ///
    /// let menu = store.menu_for(&first).expect("present");
    /// let enabled: Vec<MenuOption> = menu
    ///     .iter()
    ///     .filter(|entry| entry.enabled)
    ///     .map(|entry| entry.option)
    ///     .collect();
    /// assert_eq!(enabled, [MenuOption::MoveDown, MenuOption::Remove]);
    /// ```
    #[must_use]
    pub fn menu_for(&self, user: &User) -> Option<Vec<MenuEntry>> {
        let position = self.position_of(user.id())?;
        let len = self.len();
        Some(
            MenuOption::ALL
                .into_iter()
                .map(|option| MenuEntry {
                    option,
                    enabled: option.is_enabled(position, len),
                })
                .collect(),
        )
    }

    /// Applies `action` to the store.
    ///
    /// Moves and deletions follow the usual tolerant rules. Details requests
    /// leave the list untouched and return the text to display.
    pub fn dispatch(&mut self, action: UserAction) -> ActionOutcome {
        match action {
            UserAction::Move { user, move_by } => {
                self.move_user(&user, move_by);
                ActionOutcome::Dispatched
            }
            UserAction::Delete(user) => {
                self.delete_user(&user);
                ActionOutcome::Dispatched
            }
            UserAction::Details(user) => ActionOutcome::Message(format!("User: {}", user.name())),
        }
    }
}

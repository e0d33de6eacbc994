//! Script-driven demo of the user list.
//!
//! The demo plays the part of the list screen: it resolves each command's id
//! against the rows currently shown, then forwards the gesture to the store.
//! The binary delegates to these functions so they can be exercised in tests
//! without spawning a subprocess.

mod error;

use std::fmt;
use std::io::Write;

use user_list::{ActionOutcome, MenuEntry, MenuOption, User, UserAction, UserId, UserListStore};

pub use error::CliError;

/// One scripted gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move a user by an explicit signed offset.
    Move {
        /// User to move.
        id: UserId,
        /// Signed offset.
        move_by: isize,
    },
    /// Pick "Move up" from the user's menu.
    Up(UserId),
    /// Pick "Move down" from the user's menu.
    Down(UserId),
    /// Pick "Remove" from the user's menu.
    Delete(UserId),
    /// Tap the row to show details.
    Details(UserId),
    /// Print the user's menu with enablement.
    Menu(UserId),
}

impl Command {
    const fn id(self) -> UserId {
        match self {
            Self::Move { id, .. }
            | Self::Up(id)
            | Self::Down(id)
            | Self::Delete(id)
            | Self::Details(id)
            | Self::Menu(id) => id,
        }
    }
}

/// Outcome of parsing CLI arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseOutcome {
    /// Show help output and exit successfully.
    Help,
    /// Run the parsed commands in order.
    Script(Vec<Command>),
}

/// Parses CLI arguments into a script.
///
/// # Errors
///
/// Returns [`CliError`] when a command is unknown or its arguments are
/// missing or not numeric.
///
/// # Example
///
/// ```
/// use example_users::demo_cli::{Command, ParseOutcome, parse_args};
/// use user_list::UserId;
///
/// let args = ["move", "2", "-1", "delete", "1"].map(str::to_owned);
/// let outcome = parse_args(args.into_iter()).expect("parse args");
///
/// assert_eq!(
///     outcome,
///     ParseOutcome::Script(vec![
///         Command::Move { id: UserId::new(2), move_by: -1 },
///         Command::Delete(UserId::new(1)),
///     ])
/// );
/// ```
pub fn parse_args<I>(mut args: I) -> Result<ParseOutcome, CliError>
where
    I: Iterator<Item = String>,
{
    let mut script = Vec::new();

    while let Some(arg) = args.next() {
        let command = match arg.as_str() {
            "-h" | "--help" => return Ok(ParseOutcome::Help),
            "move" => {
                let id = next_id(&mut args, "move")?;
                let value = next_value(&mut args, "move")?;
                let move_by = parse_number(&value, "move")?;
                Command::Move { id, move_by }
            }
            "up" => Command::Up(next_id(&mut args, "up")?),
            "down" => Command::Down(next_id(&mut args, "down")?),
            "delete" => Command::Delete(next_id(&mut args, "delete")?),
            "details" => Command::Details(next_id(&mut args, "details")?),
            "menu" => Command::Menu(next_id(&mut args, "menu")?),
            _ => return Err(CliError::UnknownCommand { value: arg }),
        };
        script.push(command);
    }

    Ok(ParseOutcome::Script(script))
}

/// Runs `script` against `store`, writing details and menus to `out`.
///
/// # Errors
///
/// Returns [`CliError::UnknownUser`] when a command names a user missing from
/// the current list, and [`CliError::Output`] when writing fails.
///
/// # Example
///
/// ```
/// use example_users::demo_cli::{Command, run_script};
/// use user_list::{SequentialSource, UserId, UserListStore};
///
/// let mut store = UserListStore::seeded(&mut SequentialSource::default(), Vec::new(), 3);
/// let mut out = Vec::new();
/// run_script(&mut store, &[Command::Up(UserId::new(2))], &mut out).expect("script runs");
///
/// let ids: Vec<u64> = store.users().iter().map(|u| u.id().get()).collect();
/// assert_eq!(ids, [2, 1, 3]);
/// ```
pub fn run_script<W>(
    store: &mut UserListStore,
    script: &[Command],
    out: &mut W,
) -> Result<(), CliError>
where
    W: Write,
{
    for command in script {
        let id = command.id();
        let user = store
            .find(id)
            .cloned()
            .ok_or(CliError::UnknownUser { id })?;

        let action = match *command {
            Command::Move { move_by, .. } => UserAction::Move { user, move_by },
            Command::Up(_) => MenuOption::MoveUp.action(user),
            Command::Down(_) => MenuOption::MoveDown.action(user),
            Command::Delete(_) => MenuOption::Remove.action(user),
            Command::Details(_) => UserAction::Details(user),
            Command::Menu(_) => {
                let entries = store.menu_for(&user).unwrap_or_default();
                write_line(out, &MenuLine { user: &user, entries: &entries })?;
                continue;
            }
        };

        if let ActionOutcome::Message(message) = store.dispatch(action) {
            write_line(out, &message)?;
        }
    }
    Ok(())
}

/// Serialises the snapshot as pretty-printed JSON.
///
/// # Errors
///
/// Returns [`CliError::Output`] if serialisation fails.
pub fn snapshot_json(users: &[User]) -> Result<String, CliError> {
    serde_json::to_string_pretty(users).map_err(|e| CliError::Output {
        message: e.to_string(),
    })
}

/// Usage text printed for `--help`.
pub const USAGE: &str = concat!(
    "Usage: user-list-demo [command...]\n",
    "\n",
    "Commands:\n",
    "  move <id> <by>     Move a user by a signed offset\n",
    "  up <id>            Move a user one row up\n",
    "  down <id>          Move a user one row down\n",
    "  delete <id>        Remove a user\n",
    "  details <id>       Print the user's details\n",
    "  menu <id>          Print the user's menu\n",
    "  -h, --help         Print this help output\n",
    "\n",
    "Environment:\n",
    "  USER_LIST_SEED, USER_LIST_USER_COUNT, USER_LIST_PHOTO_POOL_PATH,\n",
    "  USER_LIST_JSON_LOGS\n",
);

struct MenuLine<'a> {
    user: &'a User,
    entries: &'a [MenuEntry],
}

impl fmt::Display for MenuLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Menu for {}:", self.user.name())?;
        for entry in self.entries {
            let state = if entry.enabled { "" } else { " (disabled)" };
            write!(f, " [{}{state}]", entry.option.label())?;
        }
        Ok(())
    }
}

fn write_line<W, D>(out: &mut W, line: &D) -> Result<(), CliError>
where
    W: Write,
    D: fmt::Display + ?Sized,
{
    writeln!(out, "{line}").map_err(|e| CliError::Output {
        message: e.to_string(),
    })
}

fn next_value<I>(args: &mut I, command: &'static str) -> Result<String, CliError>
where
    I: Iterator<Item = String>,
{
    args.next().ok_or(CliError::MissingValue { command })
}

fn next_id<I>(args: &mut I, command: &'static str) -> Result<UserId, CliError>
where
    I: Iterator<Item = String>,
{
    let value = next_value(args, command)?;
    parse_number::<u64>(&value, command).map(UserId::new)
}

fn parse_number<T>(value: &str, command: &'static str) -> Result<T, CliError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    value.parse::<T>().map_err(|err| CliError::InvalidNumber {
        command,
        value: value.to_owned(),
        message: err.to_string(),
    })
}

#[cfg(test)]
mod tests;

//! Error types for the user list demo CLI.

use thiserror::Error;
use user_list::UserId;

use crate::error::SettingsError;

/// Errors surfaced by the demo CLI parsing and script execution.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CliError {
    /// A command expected an argument but none was provided.
    #[error("missing value for {command}")]
    MissingValue {
        /// Command that was missing its argument.
        command: &'static str,
    },
    /// An unsupported command was supplied.
    #[error("unknown command: {value}")]
    UnknownCommand {
        /// Command word that was not recognised.
        value: String,
    },
    /// A numeric argument failed to parse.
    #[error("invalid number for {command}: '{value}' ({message})")]
    InvalidNumber {
        /// Command associated with the invalid number.
        command: &'static str,
        /// Raw value supplied.
        value: String,
        /// Parser error message.
        message: String,
    },
    /// The script referenced a user that is not in the current list.
    #[error("no user with id {id} in the current list")]
    UnknownUser {
        /// Identifier that could not be resolved.
        id: UserId,
    },
    /// Writing script output failed.
    #[error("failed to write output: {message}")]
    Output {
        /// Description of the write failure.
        message: String,
    },
    /// Settings could not be loaded.
    #[error("settings error: {source}")]
    Settings {
        /// Underlying settings error.
        #[from]
        #[source]
        source: SettingsError,
    },
}

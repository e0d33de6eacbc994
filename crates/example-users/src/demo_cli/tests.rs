//! Unit tests for the demo CLI helpers.

use rstest::{fixture, rstest};
use user_list::SequentialSource;

use super::*;
use crate::error::SettingsError;

fn args(words: &[&str]) -> std::vec::IntoIter<String> {
    words
        .iter()
        .map(|word| (*word).to_owned())
        .collect::<Vec<_>>()
        .into_iter()
}

fn ids(store: &UserListStore) -> Vec<u64> {
    store.users().iter().map(|u| u.id().get()).collect()
}

fn run(store: &mut UserListStore, script: &[Command]) -> Result<String, CliError> {
    let mut out = Vec::new();
    run_script(store, script, &mut out)?;
    Ok(String::from_utf8(out).expect("utf-8 output"))
}

#[fixture]
fn store() -> UserListStore {
    UserListStore::seeded(&mut SequentialSource::default(), Vec::new(), 3)
}

#[test]
fn parse_args_returns_help_for_help_flag() {
    let outcome = parse_args(args(&["up", "1", "--help"])).expect("parse args");

    assert_eq!(outcome, ParseOutcome::Help);
}

#[test]
fn parse_args_accepts_empty_script() {
    let outcome = parse_args(args(&[])).expect("parse args");

    assert_eq!(outcome, ParseOutcome::Script(Vec::new()));
}

#[test]
fn parse_args_parses_every_command() {
    let outcome = parse_args(args(&[
        "move", "4", "2", "up", "1", "down", "2", "delete", "3", "details", "5", "menu", "6",
    ]))
    .expect("parse args");

    assert_eq!(
        outcome,
        ParseOutcome::Script(vec![
            Command::Move {
                id: UserId::new(4),
                move_by: 2,
            },
            Command::Up(UserId::new(1)),
            Command::Down(UserId::new(2)),
            Command::Delete(UserId::new(3)),
            Command::Details(UserId::new(5)),
            Command::Menu(UserId::new(6)),
        ])
    );
}

#[rstest]
#[case(&["move"], "move")]
#[case(&["move", "1"], "move")]
#[case(&["up"], "up")]
#[case(&["down"], "down")]
#[case(&["delete"], "delete")]
#[case(&["details"], "details")]
#[case(&["menu"], "menu")]
fn parse_args_reports_missing_value(#[case] words: &[&str], #[case] command: &'static str) {
    let err = parse_args(args(words)).expect_err("expected error");

    assert_eq!(err, CliError::MissingValue { command });
}

#[test]
fn parse_args_reports_unknown_commands() {
    let err = parse_args(args(&["shuffle"])).expect_err("expected error");

    assert_eq!(
        err,
        CliError::UnknownCommand {
            value: "shuffle".to_owned(),
        }
    );
}

#[rstest]
#[case(&["up", "first"], "first")]
#[case(&["delete", "-3"], "-3")]
#[case(&["move", "1", "down"], "down")]
fn parse_args_reports_invalid_numbers(#[case] words: &[&str], #[case] bad: &str) {
    let err = parse_args(args(words)).expect_err("expected error");

    let CliError::InvalidNumber { value, .. } = err else {
        panic!("expected invalid number error");
    };
    assert_eq!(value, bad);
}

#[rstest]
fn script_applies_moves_and_deletes_in_order(mut store: UserListStore) {
    let output = run(
        &mut store,
        &[
            Command::Down(UserId::new(1)),
            Command::Move {
                id: UserId::new(3),
                move_by: -2,
            },
            Command::Delete(UserId::new(2)),
        ],
    )
    .expect("script runs");

    assert!(output.is_empty());
    assert_eq!(ids(&store), [3, 1]);
}

#[rstest]
fn boundary_moves_are_silently_ignored(mut store: UserListStore) {
    run(
        &mut store,
        &[Command::Up(UserId::new(1)), Command::Down(UserId::new(3))],
    )
    .expect("script runs");

    assert_eq!(ids(&store), [1, 2, 3]);
}

#[rstest]
fn details_prints_the_user_name(mut store: UserListStore) {
    let output = run(&mut store, &[Command::Details(UserId::new(2))]).expect("script runs");

    assert_eq!(output, "User: User 2\n");
}

#[rstest]
fn menu_marks_disabled_entries(mut store: UserListStore) {
    let output = run(&mut store, &[Command::Menu(UserId::new(1))]).expect("script runs");

    assert_eq!(
        output,
        "Menu for User 1: [Move up (disabled)] [Move down] [Remove]\n"
    );
}

#[rstest]
fn unknown_user_stops_the_script(mut store: UserListStore) {
    let err = run(
        &mut store,
        &[Command::Delete(UserId::new(1)), Command::Delete(UserId::new(1))],
    )
    .expect_err("second delete refers to a removed row");

    assert_eq!(err, CliError::UnknownUser { id: UserId::new(1) });
    assert_eq!(ids(&store), [2, 3]);
}

#[rstest]
fn snapshot_json_uses_camel_case_fields(store: UserListStore) {
    let json = snapshot_json(store.users()).expect("serialize");

    assert!(json.contains("\"id\": 1"));
    assert!(json.contains("\"company\": \"Company 1\""));
    assert!(json.contains("\"photo\": \"\""));
}

#[test]
fn settings_errors_convert_into_cli_errors() {
    let err = CliError::from(SettingsError::Load {
        message: "bad value".to_owned(),
    });

    assert_eq!(
        err.to_string(),
        "settings error: failed to load settings: bad value"
    );
}

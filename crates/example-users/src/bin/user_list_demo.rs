//! Scripted demo of the observable user list.
//!
//! This binary seeds a store from `USER_LIST_*` settings, logs every snapshot
//! through a listener, runs the command script given on the command line and
//! prints the final list as JSON. Parsing and execution live in
//! `example_users::demo_cli` so they stay testable without a subprocess.

use std::env;
use std::io::{self, Write};
use std::process::ExitCode;

use example_users::DemoSettings;
use example_users::demo_cli::{CliError, ParseOutcome, USAGE, parse_args, run_script, snapshot_json};
use example_users::seeded_store;
use tracing::{debug, info, warn};
use tracing_subscriber::{EnvFilter, fmt};

const PROGRAM: &str = "user-list-demo";

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            if let Err(write_err) = writeln!(io::stderr().lock(), "{err}") {
                drop(write_err);
            }
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), CliError> {
    let settings = DemoSettings::load_for(PROGRAM)?;
    init_tracing(settings.json_logs);

    let script = match parse_args(env::args().skip(1))? {
        ParseOutcome::Help => {
            write_out(USAGE);
            return Ok(());
        }
        ParseOutcome::Script(script) => script,
    };

    let photos = settings.photo_pool()?;
    let mut source = settings.source();
    let mut store = seeded_store(&mut source, &photos, settings.user_count());
    info!(
        seed = source.seed(),
        user_count = store.len(),
        photo_count = photos.len(),
        "user list ready"
    );

    let subscription = store.add_listener(|snapshot| {
        let head: Vec<u64> = snapshot.iter().take(5).map(|u| u.id().get()).collect();
        debug!(user_count = snapshot.len(), ?head, "snapshot received");
    });

    let outcome = {
        let mut out = io::stdout().lock();
        run_script(&mut store, &script, &mut out)
    };
    store.remove_listener(subscription);
    outcome?;

    let json = snapshot_json(store.users())?;
    write_out(&format!("{json}\n"));
    Ok(())
}

fn init_tracing(json_logs: bool) {
    let builder = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr);
    let result = if json_logs {
        builder.json().try_init()
    } else {
        builder.try_init()
    };
    if let Err(e) = result {
        warn!(error = %e, "tracing init failed");
    }
}

fn write_out(text: &str) {
    if let Err(err) = io::stdout().lock().write_all(text.as_bytes()) {
        drop(err);
    }
}

//! Shared capability-based filesystem helpers for example-users tests.

use camino::{Utf8Path, Utf8PathBuf};
use cap_std::ambient_authority;
use cap_std::fs::Dir;
use std::io;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Write `contents` to a fresh file under `target/example-users-tests`.
///
/// # Errors
///
/// Returns any filesystem errors encountered while creating the directory or
/// writing the file.
pub fn write_temp_file(prefix: &str, file_name: &str, contents: &str) -> io::Result<Utf8PathBuf> {
    static TEMP_COUNTER: AtomicUsize = AtomicUsize::new(0);
    let counter = TEMP_COUNTER.fetch_add(1, Ordering::Relaxed);
    let process_id = std::process::id();
    let dir = Utf8PathBuf::from("target")
        .join("example-users-tests")
        .join(format!("{prefix}-{process_id}-{counter}"));
    let root = Dir::open_ambient_dir(".", ambient_authority())?;
    root.create_dir_all(&dir)?;
    let path = dir.join(file_name);
    root.write(&path, contents)?;
    Ok(path)
}

/// Open the parent directory of `path` with a capability-based handle.
///
/// # Errors
///
/// Returns any filesystem errors encountered while opening the directory.
pub fn open_parent_dir(path: &Utf8Path) -> io::Result<Dir> {
    let parent = path.parent().unwrap_or_else(|| Utf8Path::new("."));
    Dir::open_ambient_dir(parent, ambient_authority())
}

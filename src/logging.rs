use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing::Level;

use crate::error::Result;

/// Initialize the global tracing subscriber writing to `gm-desk.log` inside
/// the data directory. The TUI owns stdout/stderr, so file output is the only
/// sane sink. Safe to call multiple times; later calls are no-ops.
pub fn init_file_logging(dir: &Path) -> Result<()> {
    let path = dir.join("gm-desk.log");
    let file = OpenOptions::new().create(true).append(true).open(&path)?;
    let _ = tracing_subscriber::fmt()
        .with_max_level(Level::DEBUG)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(false)
        .with_thread_names(false)
        .try_init();
    tracing::debug!(path = %path.display(), "file logging initialized");
    Ok(())
}

use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use env_logger::{Builder, Env, Target};

/// Send log output to `path`. The terminal belongs to the UI while the app
/// runs, so nothing is written to stdout or stderr.
///
/// Honors `RUST_LOG`; defaults to `info`.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;

    Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .format_timestamp_millis()
        .try_init()
        .map_err(io::Error::other)?;

    log::info!("logging to {}", path.display());
    Ok(())
}

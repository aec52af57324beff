use std::fs::OpenOptions;
use std::io;
use std::path::Path;

use env_logger::{Env, Target};

/// Send log output to `path` instead of stderr, which the alternate screen
/// would swallow. `RUST_LOG` still picks the filter.
pub fn init(path: &Path) -> io::Result<()> {
    let file = OpenOptions::new().create(true).append(true).open(path)?;
    env_logger::Builder::from_env(Env::default().default_filter_or("info"))
        .target(Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}

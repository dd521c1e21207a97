//! Logger setup for the command line tool
//!
//! Installs `env_logger` as the `log` backend. Output goes to the console and,
//! when a log file is given, to that file as well.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use env_logger::{Builder, Env, Target};
use log::LevelFilter;

/// Writer duplicating every record to stderr and a file
struct TeeWriter {
    file: File,
}

impl Write for TeeWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        io::stderr().write_all(buf)?;
        self.file.write_all(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()?;
        self.file.flush()
    }
}

/// Level used when `RUST_LOG` is not set
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

/// Initialize the global logger
///
/// # Arguments
///
/// * `verbose` - Log at debug level instead of info
/// * `log_file` - Optional file that receives a copy of every record
///
/// # Returns
///
/// An error if the log file cannot be created
pub fn init_logging(verbose: bool, log_file: Option<&str>) -> io::Result<()> {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level(verbose).as_str()));
    builder.format_timestamp_millis();

    if let Some(path) = log_file {
        let file = File::create(Path::new(path))?;
        builder.target(Target::Pipe(Box::new(TeeWriter { file })));
    }

    // Only the first call installs a logger; tests may call this repeatedly
    if builder.try_init().is_err() {
        eprintln!("Warning: Global logger was already initialized");
    }
    Ok(())
}

//! Logging init.
//!
//! Everything the filter admits goes to `~/.local/state/linkpreview/linkpreview.log`;
//! warnings and errors (e.g. a missing cache directory) are echoed to stderr as
//! well. When the log file cannot be opened, [`init_logging_stderr`] sends all
//! output to stderr instead.

use anyhow::Result;
use std::fs;
use std::io;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::fmt::writer::{BoxMakeWriter, EitherWriter, MakeWriterExt};
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,linkpreview=debug,linkpreview_core=debug";

/// Hands out clones of the open log file; stderr if a clone fails.
struct LogFile(fs::File);

impl<'a> MakeWriter<'a> for LogFile {
    type Writer = EitherWriter<fs::File, io::Stderr>;

    fn make_writer(&'a self) -> Self::Writer {
        match self.0.try_clone() {
            Ok(f) => EitherWriter::A(f),
            Err(_) => EitherWriter::B(io::stderr()),
        }
    }
}

fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER))
}

/// Writes every event to `file` and warnings/errors also to `console`.
pub(crate) fn file_with_console_warnings<F, C>(file: F, console: C) -> BoxMakeWriter
where
    F: for<'a> MakeWriter<'a> + Send + Sync + 'static,
    C: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    BoxMakeWriter::new(file.and(console.with_max_level(Level::WARN)))
}

/// Path of the log file: `~/.local/state/linkpreview/linkpreview.log`.
pub fn log_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("linkpreview")?;
    Ok(xdg_dirs
        .get_state_home()
        .join("linkpreview")
        .join("linkpreview.log"))
}

/// Initialize logging to the XDG state log file, echoing warnings to stderr.
/// Returns Err if the file cannot be opened so the caller can fall back to stderr.
pub fn init_logging() -> Result<()> {
    let log_file_path = log_path()?;
    if let Some(log_dir) = log_file_path.parent() {
        fs::create_dir_all(log_dir)?;
    }

    let file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_file_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(file_with_console_warnings(LogFile(file), io::stderr))
        .with_ansi(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("install subscriber: {}", e))?;

    tracing::debug!("linkpreview logging initialized at {}", log_file_path.display());

    Ok(())
}

/// Initialize logging to stderr only (no file). Used for `-v` and when
/// init_logging() fails so the CLI doesn't crash.
pub fn init_logging_stderr() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(env_filter())
        .with_writer(io::stderr)
        .with_ansi(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[derive(Clone, Default)]
    struct Sink(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Sink {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl<'a> MakeWriter<'a> for Sink {
        type Writer = Sink;

        fn make_writer(&'a self) -> Self::Writer {
            self.clone()
        }
    }

    impl Sink {
        fn text(&self) -> String {
            String::from_utf8(self.0.lock().unwrap().clone()).unwrap()
        }
    }

    #[test]
    fn warnings_reach_console_and_file_info_only_file() {
        let file = Sink::default();
        let console = Sink::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(file_with_console_warnings(file.clone(), console.clone()))
            .with_ansi(false)
            .with_max_level(Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            tracing::info!("stored preview");
            tracing::warn!("'_cache' directory does not exist. Create it for caching.");
        });

        let file = file.text();
        let console = console.text();
        assert!(file.contains("stored preview"));
        assert!(file.contains("'_cache' directory does not exist"));
        assert!(console.contains("'_cache' directory does not exist"));
        assert!(!console.contains("stored preview"));
        assert_eq!(console.lines().count(), 1);
    }

    #[test]
    fn log_file_writer_appends_to_the_file() {
        use std::io::Write;

        let f = tempfile::NamedTempFile::new().unwrap();
        let log = LogFile(f.reopen().unwrap());
        log.make_writer().write_all(b"one\n").unwrap();
        log.make_writer().write_all(b"two\n").unwrap();
        assert_eq!(fs::read_to_string(f.path()).unwrap(), "one\ntwo\n");
    }
}

use once_cell::sync::OnceCell;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

// Keeps the file writer's worker alive for the rest of the process.
static FILE_GUARD: OnceCell<WorkerGuard> = OnceCell::new();

/// Initialise logging. The default level is `info`; `debug` raises it to
/// `debug` and lets `RUST_LOG` override the level.
/// When `log_file` is given, output is also written to that file.
/// Only the first call has any effect; later calls leave `log_file`
/// untouched.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    if tracing::dispatcher::has_been_set() {
        if let Some(path) = log_file {
            tracing::warn!("logging already initialised; not writing to {}", path.display());
        }
        return;
    }

    // When debug logging is disabled we force `info` level regardless of the
    // `RUST_LOG` environment variable. This prevents accidental verbose output
    // if the variable happens to be set in the user's environment.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let file_layer = log_file.and_then(|path| {
        let dir = path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .map(Path::to_path_buf)
            .unwrap_or_else(|| PathBuf::from("."));
        let name = path.file_name()?.to_owned();
        let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, name));
        if FILE_GUARD.set(guard).is_err() {
            tracing::warn!("log file writer already running; not writing to {}", path.display());
            return None;
        }
        Some(fmt::layer().with_writer(writer).with_ansi(false))
    });

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init();
}

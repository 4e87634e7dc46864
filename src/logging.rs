//! Tracing subscriber setup
//!
//! Filter precedence: `RUST_LOG`, then `-v` flags, then `[logging] level`.
//! Output goes to stderr, or appends to `[logging] file` when set.
//! While the terminal player owns the screen, stderr output is held back
//! (see [`suspend_stderr`]) and written once the screen is restored.

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::str::FromStr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

use anyhow::{Context, Result};
use tracing_subscriber::{filter::EnvFilter, layer::SubscriberExt, util::SubscriberInitExt, Layer};

use crate::config::LoggingConfig;

const FALLBACK_LEVEL: &str = "warn";

static STDERR_SUSPENDED: AtomicBool = AtomicBool::new(false);
static HELD_OUTPUT: Mutex<Vec<u8>> = Mutex::new(Vec::new());

/// Stderr writer that buffers while suspended.
#[derive(Debug, Default, Clone, Copy)]
pub struct GatedStderr;

impl Write for GatedStderr {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        if STDERR_SUSPENDED.load(Ordering::Acquire) {
            held_output().extend_from_slice(buf);
            Ok(buf.len())
        } else {
            io::stderr().write(buf)
        }
    }

    fn flush(&mut self) -> io::Result<()> {
        io::stderr().flush()
    }
}

fn held_output() -> std::sync::MutexGuard<'static, Vec<u8>> {
    HELD_OUTPUT.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Holds stderr log output back until dropped.
#[must_use = "stderr logs resume as soon as the guard is dropped"]
#[derive(Debug)]
pub struct StderrSuspension {
    _private: (),
}

/// Hold back stderr logging, e.g. while the alternate screen is active.
pub fn suspend_stderr() -> StderrSuspension {
    STDERR_SUSPENDED.store(true, Ordering::Release);
    StderrSuspension { _private: () }
}

impl Drop for StderrSuspension {
    fn drop(&mut self) {
        STDERR_SUSPENDED.store(false, Ordering::Release);
        let held = std::mem::take(&mut *held_output());
        if !held.is_empty() {
            let mut stderr = io::stderr().lock();
            let _ = stderr.write_all(&held);
            let _ = stderr.flush();
        }
    }
}

/// Pick the filter directive from the three sources.
pub fn filter_directive(config_level: &str, verbosity: u8, rust_log: Option<&str>) -> String {
    if let Some(directive) = rust_log.map(str::trim).filter(|d| !d.is_empty()) {
        return directive.to_string();
    }
    match verbosity {
        0 => {
            let level = config_level.trim();
            if level.is_empty() {
                FALLBACK_LEVEL.to_string()
            } else {
                level.to_string()
            }
        }
        1 => "info".to_string(),
        2 => "debug".to_string(),
        _ => "trace".to_string(),
    }
}

/// Whether `directive` parses as a filter.
pub fn is_valid_directive(directive: &str) -> bool {
    EnvFilter::from_str(directive).is_ok()
}

/// Parse a directive, falling back to `warn` when it is malformed.
fn build_filter(directive: &str) -> EnvFilter {
    EnvFilter::from_str(directive).unwrap_or_else(|_| EnvFilter::new(FALLBACK_LEVEL))
}

/// Install the global subscriber.
pub fn init_logging(config: &LoggingConfig, verbosity: u8) -> Result<()> {
    let rust_log = std::env::var("RUST_LOG").ok();
    let directive = filter_directive(&config.level, verbosity, rust_log.as_deref());
    let filter = build_filter(&directive);

    let layer = if config.file.trim().is_empty() {
        tracing_subscriber::fmt::layer()
            .with_writer(|| GatedStderr)
            .with_target(false)
            .with_filter(filter)
            .boxed()
    } else {
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&config.file)
            .with_context(|| format!("Failed to open log file: {}", config.file))?;
        tracing_subscriber::fmt::layer()
            .with_writer(Mutex::new(file))
            .with_ansi(false)
            .with_filter(filter)
            .boxed()
    };

    tracing_subscriber::registry()
        .with(layer)
        .try_init()
        .context("Failed to install tracing subscriber")?;
    tracing::debug!(directive = %directive, "logging initialized");
    Ok(())
}

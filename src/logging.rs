//! Tracing setup.
//! Builds an explicit `Dispatch` (never a global default) that writes
//! `<timestamp> - <LEVEL> - <message>` lines to stderr and, optionally, a log file.
//!
//! Behavior:
//! - Log level is driven by LogLevel (no RUST_LOG override here).
//! - The file layer appends through tracing_appender::non_blocking; keep the returned
//!   WorkerGuard alive until the run is over or trailing lines are lost.
//! - Failing to open the log file is an error for the caller, not a silent downgrade.

use anyhow::{Context, Result};
use chrono::Local;
use std::fmt as stdfmt;
use std::fs::{self, File, OpenOptions};
use std::io;
use std::path::Path;
use tracing::{Dispatch, Event, Subscriber};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::filter::{EnvFilter, LevelFilter};
use tracing_subscriber::fmt as tsfmt;
use tracing_subscriber::fmt::format::{DefaultFields, Writer};
use tracing_subscriber::fmt::time::FormatTime;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields, MakeWriter};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::registry;
use tracing_subscriber::registry::LookupSpan;

use crate::config::LogLevel;

/// Local wall-clock timestamp, e.g. `2024-03-09 14:02:11,517`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocalTimestamp;

impl FormatTime for LocalTimestamp {
    fn format_time(&self, w: &mut Writer<'_>) -> stdfmt::Result {
        write!(w, "{}", Local::now().format("%Y-%m-%d %H:%M:%S,%3f"))
    }
}

/// Event formatter producing one `<timestamp> - <LEVEL> - <message>` line per event.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineFormat<T = LocalTimestamp> {
    timer: T,
}

impl<S, N, T> FormatEvent<S, N> for LineFormat<T>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
    T: FormatTime,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> stdfmt::Result {
        self.timer.format_time(&mut writer)?;
        write!(writer, " - {} - ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

#[inline]
fn to_level_filter(lvl: &LogLevel) -> LevelFilter {
    match lvl {
        LogLevel::Quiet => LevelFilter::ERROR,
        LogLevel::Normal => LevelFilter::INFO,
        LogLevel::Info => LevelFilter::DEBUG,
        LogLevel::Debug => LevelFilter::TRACE,
    }
}

#[inline]
fn env_filter_from_level(level_filter: LevelFilter) -> EnvFilter {
    let level_str = match level_filter {
        LevelFilter::ERROR => "error",
        LevelFilter::WARN => "warn",
        LevelFilter::INFO => "info",
        LevelFilter::DEBUG => "debug",
        LevelFilter::TRACE => "trace",
        _ => "info",
    };
    EnvFilter::new(level_str)
}

fn line_layer<S, W>(writer: W) -> tsfmt::Layer<S, DefaultFields, LineFormat, W>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    W: for<'w> MakeWriter<'w> + 'static,
{
    tsfmt::layer()
        .event_format(LineFormat::default())
        .with_writer(writer)
}

/// Open the log file for appending, creating it (and its parent directory) if needed.
fn open_log_file_append(path: &Path) -> io::Result<File> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    OpenOptions::new().create(true).append(true).open(path)
}

/// Build the dispatch used for a run: console (stderr) always, plus the log file when given.
///
/// Returns the WorkerGuard of the file writer when one was created.
pub fn build_dispatch(
    lvl: &LogLevel,
    log_file: Option<&Path>,
) -> Result<(Dispatch, Option<WorkerGuard>)> {
    let env_filter = env_filter_from_level(to_level_filter(lvl));

    let (file_layer, guard) = match log_file {
        Some(path) => {
            let file = open_log_file_append(path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            let (writer, guard) = tracing_appender::non_blocking(file);
            (Some(line_layer(writer)), Some(guard))
        }
        None => (None, None),
    };

    let subscriber = registry()
        .with(env_filter)
        .with(line_layer(io::stderr))
        .with(file_layer);
    Ok((Dispatch::new(subscriber), guard))
}

/// Dispatch writing formatted lines to an arbitrary writer only (used for captured output).
pub fn dispatch_with_writer<W>(lvl: &LogLevel, writer: W) -> Dispatch
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let subscriber = registry()
        .with(env_filter_from_level(to_level_filter(lvl)))
        .with(line_layer(writer));
    Dispatch::new(subscriber)
}

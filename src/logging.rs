//! Console logging for the binary

use anyhow::Result;
use flexi_logger::{DeferredNow, Logger, LoggerHandle, Record};

/// Start logging to stderr. Adjust the level with RUST_LOG, default is info.
///
/// The returned handle must be kept alive for as long as logging is needed.
pub fn setup() -> Result<LoggerHandle> {
    let handle = Logger::try_with_env_or_str("info")?
        .format(compact_format)
        .start()?;
    Ok(handle)
}

/// `LEVEL [HH:MM:SS.ffffff] [file:line] message`
pub fn compact_format(
    w: &mut dyn std::io::Write,
    now: &mut DeferredNow,
    record: &Record,
) -> Result<(), std::io::Error> {
    write!(
        w,
        "{} [{}] [{}:{}] {}",
        record.level(),
        now.now().format("%H:%M:%S%.6f"),
        record.file().unwrap_or("<unnamed>"),
        record.line().unwrap_or(0),
        record.args()
    )
}

//! Process-wide logger for the `wanderplan` binary.
//!
//! Library crates log through the `log` facade; this module routes those
//! records into an asynchronous `slog` drain writing compact lines to stderr,
//! leaving stdout for JSON output. `RUST_LOG` overrides the `info` default.

use slog::{Drain, o};
use slog_async::OverflowStrategy;

use crate::CliError;

/// Install the global logger.
///
/// Records are flushed when the returned guard is dropped, so hold it for the
/// lifetime of the command.
pub(crate) fn init() -> Result<slog_scope::GlobalLoggerGuard, CliError> {
    let decorator = slog_term::TermDecorator::new().stderr().build();
    let drain = slog_term::CompactFormat::new(decorator).build().fuse();
    let mut builder =
        slog_envlogger::LogBuilder::new(drain).filter(None, slog::FilterLevel::Info);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder = builder.parse(&filters);
    }
    let drain = slog_async::Async::new(builder.build())
        .chan_size(256)
        .overflow_strategy(OverflowStrategy::Block)
        .build()
        .fuse();
    let logger = slog::Logger::root(drain, o!());

    let guard = slog_scope::set_global_logger(logger);
    slog_stdlog::init_with_level(log::Level::Trace).map_err(CliError::InstallLogger)?;
    Ok(guard)
}

//! Log output for the binary. Progress goes to stdout next to the report; errors and
//! skipped segments go to stderr.

use crate::engine::SEGMENT_TARGET;
use tracing::{Level, Metadata};
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

pub fn is_stderr_event(meta: &Metadata<'_>) -> bool {
    *meta.level() == Level::ERROR || meta.target() == SEGMENT_TARGET
}

pub fn split_writer<O, E>(out: O, err: E) -> impl for<'a> MakeWriter<'a> + 'static
where
    O: for<'a> MakeWriter<'a> + 'static,
    E: for<'a> MakeWriter<'a> + 'static,
{
    err.with_filter(is_stderr_event).or_else(out)
}

/// Install the global subscriber. `RUST_LOG` overrides the default filter.
pub fn init(debug: bool) {
    let default = if debug { "debug" } else { "info,whisper_rs=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(split_writer(std::io::stdout, std::io::stderr))
        .init();
}

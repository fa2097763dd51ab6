//! Console log format.
//!
//! Every event is rendered as a single `LEVEL: message` line, e.g.
//! `INFO: Loading configuration: config.yaml` or `ERROR: failed to parse ...`.
//! No timestamps, targets or spans. Structured fields follow the message the
//! way the default `fmt` formatter renders them.

use std::fmt;

use tracing::{Event, Subscriber};
use tracing_subscriber::fmt::format::Writer;
use tracing_subscriber::fmt::{FmtContext, FormatEvent, FormatFields};
use tracing_subscriber::registry::LookupSpan;

/// `FormatEvent` implementation producing `INFO:` / `WARN:` / `ERROR:` prefixed lines.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixedFormat;

impl<S, N> FormatEvent<S, N> for PrefixedFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{}: ", event.metadata().level())?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

//! OpenTelemetry-based observability with file-based trace export.
//!
//! ```text
//! tracing macros → tracing-opentelemetry → OpenTelemetry SDK → FileSpanExporter → JSON Lines file
//! ```
//!
//! Traces are written to `~/.local/share/zellij/zcountry/zcountry-otlp.json`
//! (seen as `/host/...` from inside the sandbox). The file rotates at 10 MB and
//! keeps three backups.
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup from the plugin configuration
//! - [`tracer`]: Tracer provider with the file exporter
//! - [`span_formatter`]: OTLP JSON encoding
//! - [`file_writer`]: Rotating line writer

mod file_writer;
mod init;
mod span_formatter;
mod tracer;

pub use init::{init_tracing, SERVICE_NAME, TRACE_FILE_NAME};

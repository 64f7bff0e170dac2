//! Telemetry for frameforge runs.
//!
//! Two side channels, both created per run and passed explicitly:
//! - a stream of [`PerformanceSample`]s delivered to a [`PerformanceSink`]
//! - a [`SessionLog`] kept by a [`SessionRecorder`], exportable as JSON under
//!   a fixed size ceiling

pub mod error;
pub mod perf;
pub mod session;

pub use error::{Result, TelemetryError};
pub use perf::{MemorySink, NullSink, PerformanceSample, PerformanceSink, TracingSink};
pub use session::{SessionLog, SessionRecorder, MAX_EXPORT_BYTES, MAX_FUNNEL_WARNINGS};

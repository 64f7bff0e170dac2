//! Performance sample stream.

use std::sync::{Mutex, PoisonError};
use std::time::Duration;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// One timed operation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PerformanceSample {
    pub operation: String,
    pub duration_ms: f64,
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub metadata: IndexMap<String, Value>,
}

impl PerformanceSample {
    pub fn new(operation: impl Into<String>, duration: Duration) -> Self {
        Self {
            operation: operation.into(),
            duration_ms: duration.as_secs_f64() * 1000.0,
            metadata: IndexMap::new(),
        }
    }

    pub fn with_metadata(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.metadata.insert(key.into(), value.into());
        self
    }
}

/// Receives samples. Recording is fire-and-forget and must not block for
/// long; implementations are shared across runs, hence `Send + Sync`.
pub trait PerformanceSink: Send + Sync {
    fn record(&self, sample: PerformanceSample);
}

/// Logs samples at debug level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl PerformanceSink for TracingSink {
    fn record(&self, sample: PerformanceSample) {
        tracing::debug!(
            operation = %sample.operation,
            duration_ms = sample.duration_ms,
            metadata = ?sample.metadata,
            "performance sample"
        );
    }
}

/// Discards samples.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl PerformanceSink for NullSink {
    fn record(&self, _sample: PerformanceSample) {}
}

/// Keeps samples in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    samples: Mutex<Vec<PerformanceSample>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of the samples recorded so far.
    pub fn snapshot(&self) -> Vec<PerformanceSample> {
        self.samples
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn len(&self) -> usize {
        self.samples
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn clear(&self) {
        self.samples
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

impl PerformanceSink for MemorySink {
    fn record(&self, sample: PerformanceSample) {
        self.samples
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(sample);
    }
}

//! Session log: aggregate metrics of one generation run plus a warning
//! funnel.

use std::collections::{HashSet, VecDeque};
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TelemetryError};

/// Export ceiling in bytes of serialized JSON.
pub const MAX_EXPORT_BYTES: usize = 50 * 1024;

/// Warnings kept in the funnel before a log is recorded.
pub const MAX_FUNNEL_WARNINGS: usize = 500;

/// Version reported when nothing has been recorded yet.
const UNRECORDED_VERSION: &str = "0.0.0";

/// Aggregate metrics of one run.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionLog {
    pub node_count: usize,
    pub duration_ms: f64,
    pub skipped_count: usize,
    pub unsupported_count: usize,
    #[serde(default)]
    pub warnings: Vec<String>,
    pub version: String,
}

impl SessionLog {
    fn unrecorded(warnings: Vec<String>) -> Self {
        Self {
            warnings,
            version: UNRECORDED_VERSION.to_string(),
            ..Default::default()
        }
    }
}

/// Collects warnings and the recorded log of one run.
///
/// Warnings may be pushed before or after [`SessionRecorder::record`]; they
/// end up merged into the log without duplicates, in first-seen order.
#[derive(Debug, Default)]
pub struct SessionRecorder {
    funnel: VecDeque<String>,
    recorded: Option<SessionLog>,
}

impl SessionRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a warning. Empty messages are ignored; the funnel keeps the most
    /// recent [`MAX_FUNNEL_WARNINGS`].
    pub fn push_warning(&mut self, message: impl Into<String>) {
        let message = message.into();
        if message.is_empty() {
            return;
        }
        if let Some(log) = &mut self.recorded {
            if !log.warnings.contains(&message) {
                log.warnings.push(message.clone());
            }
        }
        self.funnel.push_back(message);
        while self.funnel.len() > MAX_FUNNEL_WARNINGS {
            self.funnel.pop_front();
        }
    }

    /// Record the run's metrics, merging funnel warnings after the given ones.
    pub fn record(&mut self, mut log: SessionLog) {
        let mut seen = HashSet::new();
        let merged = log
            .warnings
            .drain(..)
            .chain(self.funnel.iter().cloned())
            .filter(|w| seen.insert(w.clone()))
            .collect();
        log.warnings = merged;
        tracing::debug!(
            nodes = log.node_count,
            warnings = log.warnings.len(),
            "recorded session log"
        );
        self.recorded = Some(log);
    }

    /// The recorded log, or an empty one carrying the funnel warnings.
    pub fn current(&self) -> SessionLog {
        match &self.recorded {
            Some(log) => log.clone(),
            None => SessionLog::unrecorded(self.funnel.iter().cloned().collect()),
        }
    }

    /// Serialize the log, dropping the oldest warnings until it fits in
    /// [`MAX_EXPORT_BYTES`]. Metrics and version are never cut.
    ///
    /// The trimmed warning list replaces the recorded one.
    pub fn export_json(&mut self) -> Result<String> {
        let log = fit_to_ceiling(self.current())?;
        let json = serde_json::to_string(&log)?;
        if let Some(recorded) = &mut self.recorded {
            recorded.warnings = log.warnings;
        }
        Ok(json)
    }

    pub fn clear(&mut self) {
        self.funnel.clear();
        self.recorded = None;
    }

    /// Write the size-capped export to `path`.
    pub fn save(&mut self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let json = self.export_json()?;
        fs::write(path, json).map_err(|source| TelemetryError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Restore a recorder from a saved log.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| TelemetryError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let log: SessionLog = serde_json::from_str(&json)?;
        Ok(Self {
            funnel: VecDeque::new(),
            recorded: Some(log),
        })
    }
}

/// Keep the newest warnings that fit next to the fixed fields.
fn fit_to_ceiling(mut log: SessionLog) -> Result<SessionLog> {
    if serde_json::to_string(&log)?.len() <= MAX_EXPORT_BYTES {
        return Ok(log);
    }

    let warnings = std::mem::take(&mut log.warnings);
    let mut budget = MAX_EXPORT_BYTES.saturating_sub(serde_json::to_string(&log)?.len());
    let mut keep = 0;
    for warning in warnings.iter().rev() {
        // Every element after the first also costs a comma.
        let cost = serde_json::to_string(warning)?.len() + usize::from(keep > 0);
        if cost > budget {
            break;
        }
        budget -= cost;
        keep += 1;
    }

    tracing::debug!(
        dropped = warnings.len() - keep,
        "trimmed session log warnings to fit export ceiling"
    );
    log.warnings = warnings[warnings.len() - keep..].to_vec();
    Ok(log)
}

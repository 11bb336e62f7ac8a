//! Configuration for layout policies.
//!
//! [`LayoutConfig`] carries the opt-in diagnostics a policy reports to.
//! [`GridSpec`] is the serialisable description of a staggered grid that a
//! host can load from JSON and validate before any layout pass runs.

use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{LayoutError, Result};
use crate::layout::{Constraints, StaggeredGrid};
use crate::logging::{LogLevel, Logger, event_with_fields, json_kv};
use crate::metrics::LayoutMetrics;

pub const DEFAULT_LOG_TARGET: &str = "stagger::layout";

/// Diagnostics knobs shared by every layout policy.
#[derive(Clone)]
pub struct LayoutConfig {
    /// Optional structured logger; a debug event is emitted per pass.
    pub logger: Option<Logger>,
    /// Metrics accumulator updated after every pass.
    pub metrics: Option<Arc<Mutex<LayoutMetrics>>>,
    /// Prefix for event targets; the policy name is appended.
    pub log_target: String,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            logger: None,
            metrics: None,
            log_target: DEFAULT_LOG_TARGET.to_string(),
        }
    }
}

impl std::fmt::Debug for LayoutConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LayoutConfig")
            .field("logger", &self.logger.is_some())
            .field("metrics", &self.metrics.is_some())
            .field("log_target", &self.log_target)
            .finish()
    }
}

impl LayoutConfig {
    pub fn with_logger(mut self, logger: Logger) -> Self {
        self.logger = Some(logger);
        self
    }

    /// Enable metrics collection if it has not already been configured.
    pub fn enable_metrics(&mut self) {
        if self.metrics.is_none() {
            self.metrics = Some(Arc::new(Mutex::new(LayoutMetrics::new())));
        }
    }

    pub fn disable_metrics(&mut self) {
        self.metrics = None;
    }

    pub fn metrics_handle(&self) -> Option<Arc<Mutex<LayoutMetrics>>> {
        self.metrics.as_ref().map(Arc::clone)
    }

    /// Report a finished pass to whichever diagnostics are configured.
    pub(crate) fn report_pass(
        &self,
        policy: &str,
        children: usize,
        placements: usize,
        clamped: bool,
        extra: impl IntoIterator<Item = (String, Value)>,
    ) {
        if let Some(metrics) = self.metrics.as_ref() {
            if let Ok(mut guard) = metrics.lock() {
                guard.record_pass(children, placements, clamped);
            }
        }

        if let Some(logger) = self.logger.as_ref() {
            if !logger.enabled(LogLevel::Debug) {
                return;
            }
            let target = format!("{}.{}", self.log_target, policy);
            let mut fields = vec![
                json_kv("policy", policy),
                json_kv("children", children),
                json_kv("clamped", clamped),
            ];
            fields.extend(extra);
            let event = event_with_fields(LogLevel::Debug, &target, "layout_pass", fields);
            let _ = logger.log_event(event);
        }
    }
}

fn default_rows() -> i64 {
    3
}

/// Serialisable staggered-grid description.
///
/// `rows` is signed so that zero and negative counts both surface as
/// `InvalidArgument` from [`GridSpec::build`] rather than as parse errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridSpec {
    #[serde(default = "default_rows")]
    pub rows: i64,
    /// Missing constraints mean unbounded.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub constraints: Option<Constraints>,
    /// Minimum level applied to the logger handed to [`GridSpec::build_with`].
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<LogLevel>,
}

impl Default for GridSpec {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            constraints: None,
            log_level: None,
        }
    }
}

impl GridSpec {
    pub fn from_json(raw: &str) -> Result<Self> {
        Ok(serde_json::from_str(raw)?)
    }

    /// Constraints for the grid's passes; bounds were checked on parse.
    pub fn constraints(&self) -> Result<Constraints> {
        Ok(self.constraints.unwrap_or_default())
    }

    /// Row count as a validated `usize`.
    pub fn row_count(&self) -> Result<usize> {
        if self.rows < 1 {
            return Err(LayoutError::invalid(format!(
                "row count must be at least 1, got {}",
                self.rows
            )));
        }
        usize::try_from(self.rows)
            .map_err(|_| LayoutError::invalid(format!("row count {} is too large", self.rows)))
    }

    /// Validate every field and build the grid.
    pub fn build(&self) -> Result<StaggeredGrid> {
        self.constraints()?;
        StaggeredGrid::new(self.row_count()?)
    }

    pub fn build_with(&self, mut config: LayoutConfig) -> Result<StaggeredGrid> {
        if let Some(level) = self.log_level {
            config.logger = config.logger.map(|logger| logger.with_min_level(level));
        }
        Ok(self.build()?.with_config(config))
    }
}

impl TryFrom<GridSpec> for StaggeredGrid {
    type Error = LayoutError;

    fn try_from(spec: GridSpec) -> Result<Self> {
        spec.build()
    }
}

use crate::logging::{LogEvent, LogFields, LogLevel};
use serde_json::json;

/// Running counters across layout passes.
#[derive(Debug, Default, Clone)]
pub struct LayoutMetrics {
    passes: u64,
    children_measured: u64,
    placements: u64,
    clamped_passes: u64,
}

impl LayoutMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a completed pass. `clamped` is set when the constraints forced
    /// the container away from its natural content size.
    pub fn record_pass(&mut self, children: usize, placements: usize, clamped: bool) {
        self.passes = self.passes.saturating_add(1);
        self.children_measured = self.children_measured.saturating_add(children as u64);
        self.placements = self.placements.saturating_add(placements as u64);
        if clamped {
            self.clamped_passes = self.clamped_passes.saturating_add(1);
        }
    }

    pub fn snapshot(&self) -> MetricSnapshot {
        MetricSnapshot {
            passes: self.passes,
            children_measured: self.children_measured,
            placements: self.placements,
            clamped_passes: self.clamped_passes,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MetricSnapshot {
    pub passes: u64,
    pub children_measured: u64,
    pub placements: u64,
    pub clamped_passes: u64,
}

impl MetricSnapshot {
    pub fn to_log_event(&self, target: &str) -> LogEvent {
        LogEvent::with_fields(LogLevel::Info, target, "layout_metrics", self.as_fields())
    }

    pub fn as_fields(&self) -> LogFields {
        let mut map = LogFields::new();
        map.insert("passes".to_string(), json!(self.passes));
        map.insert("children_measured".to_string(), json!(self.children_measured));
        map.insert("placements".to_string(), json!(self.placements));
        map.insert("clamped_passes".to_string(), json!(self.clamped_passes));
        map
    }
}

//! Measure/place layout policies over cell-sized children.
//!
//! The centrepiece is [`StaggeredGrid`]: children dealt round-robin into a
//! fixed number of rows, the container sized to the widest row and the summed
//! row heights. [`Column`] and [`Padded`] cover the simpler single-column and
//! padding cases; [`TextChip`] is a ready-made measurable label.
//!
//! Policies are pure functions of their inputs. Logging and metrics are
//! opt-in through [`LayoutConfig`] and never change a result.

pub mod config;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod logging;
pub mod metrics;
pub mod width;

pub use config::{GridSpec, LayoutConfig};
pub use error::{LayoutError, Result};
pub use geometry::{Point, Size};
pub use layout::{
    Column, Constraints, EdgeInsets, MeasureResult, Measurable, Padded, Placement, StaggeredGrid,
    TextChip, layout,
};
pub use logging::{
    FileSink, LogEvent, LogFields, LogLevel, LogSink, Logger, LoggingError, LoggingResult,
    MemorySink,
};
pub use metrics::{LayoutMetrics, MetricSnapshot};
pub use width::display_width;

//! hoverscroll host abstraction
//!
//! Platform-agnostic types a host toolkit supplies to the overscroll widget.
//!
//! - [`TouchEvent`] / [`InputSource`] - touch samples delivered by the dispatch loop
//! - [`DisplayMetrics`] / [`ViewConfiguration`] - density-scaled gesture thresholds
//! - [`ScrollHost`] - the view services a controller drives (offset, intercept, redraw)

mod error;
mod host;
mod input;
mod metrics;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use host::{over_scroll_by, OverScrollRequest, OverScrollResult, ScrollHost};
pub use input::{InputSource, ScriptedInput, TouchAction, TouchEvent, TouchStream};
pub use metrics::{DisplayMetrics, DpConfiguration, ViewConfiguration};


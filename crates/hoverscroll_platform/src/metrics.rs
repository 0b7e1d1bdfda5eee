//! Display metrics and density-scaled gesture thresholds
//!
//! Thresholds are specified in density-independent pixels (dp) and converted
//! once, at construction, into physical pixels for the current display.

use crate::error::{PlatformError, Result};

/// Host display metrics
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DisplayMetrics {
    /// Physical pixels per density-independent pixel
    pub density: f32,
}

impl Default for DisplayMetrics {
    fn default() -> Self {
        Self { density: 1.0 }
    }
}

impl DisplayMetrics {
    /// Create metrics for the given density, rejecting non-positive values
    pub fn new(density: f32) -> Result<Self> {
        if !density.is_finite() || density <= 0.0 {
            return Err(PlatformError::InvalidDensity(density));
        }
        Ok(Self { density })
    }

    /// Convert dp to whole pixels, rounding half up
    pub fn dp_to_px(&self, dp: f32) -> i32 {
        (dp * self.density + 0.5) as i32
    }
}

// ============================================================================
// Unscaled (dp) configuration
// ============================================================================

/// Gesture thresholds in dp, before density scaling
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DpConfiguration {
    /// Distance a touch can wander before it is a drag
    pub touch_slop: f32,
    /// Slowest release speed that starts a fling (dp/s)
    pub min_fling_speed: f32,
    /// Cap applied to the release speed (dp/s)
    pub max_fling_speed: f32,
    /// Elastic allowance past either edge while dragging
    pub over_scroll_distance: f32,
    /// Elastic allowance past either edge while settling
    pub over_fling_distance: f32,
    /// Total scrollable width of the content
    pub content_width: f32,
}

impl Default for DpConfiguration {
    fn default() -> Self {
        Self {
            touch_slop: 8.0,
            min_fling_speed: 50.0,
            max_fling_speed: 8_000.0,
            over_scroll_distance: 0.0,
            over_fling_distance: 6.0,
            content_width: 4_800.0,
        }
    }
}

impl DpConfiguration {
    /// Scale every threshold for the given display
    pub fn scale(&self, metrics: &DisplayMetrics) -> Result<ViewConfiguration> {
        let fields = [
            ("touch_slop", self.touch_slop),
            ("min_fling_speed", self.min_fling_speed),
            ("max_fling_speed", self.max_fling_speed),
            ("over_scroll_distance", self.over_scroll_distance),
            ("over_fling_distance", self.over_fling_distance),
            ("content_width", self.content_width),
        ];
        for (name, value) in fields {
            if !value.is_finite() || value < 0.0 {
                return Err(PlatformError::InvalidThreshold { name, value });
            }
        }

        let config = ViewConfiguration {
            touch_slop: metrics.dp_to_px(self.touch_slop),
            min_fling_speed: metrics.dp_to_px(self.min_fling_speed),
            max_fling_speed: metrics.dp_to_px(self.max_fling_speed),
            over_scroll_distance: metrics.dp_to_px(self.over_scroll_distance),
            over_fling_distance: metrics.dp_to_px(self.over_fling_distance),
            scroll_range: metrics.dp_to_px(self.content_width),
        };

        if config.min_fling_speed > config.max_fling_speed {
            return Err(PlatformError::FlingRange {
                min: config.min_fling_speed,
                max: config.max_fling_speed,
            });
        }

        Ok(config)
    }
}

// ============================================================================
// Scaled configuration
// ============================================================================

/// Gesture thresholds in physical pixels; immutable once built
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ViewConfiguration {
    pub touch_slop: i32,
    /// px/s
    pub min_fling_speed: i32,
    /// px/s
    pub max_fling_speed: i32,
    pub over_scroll_distance: i32,
    pub over_fling_distance: i32,
    /// Largest legal scroll offset; the legal range is `[0, scroll_range]`
    pub scroll_range: i32,
}

impl Default for ViewConfiguration {
    fn default() -> Self {
        Self::scaled(&DisplayMetrics::default())
    }
}

impl ViewConfiguration {
    /// Platform default thresholds scaled for `metrics`
    pub fn scaled(metrics: &DisplayMetrics) -> Self {
        let dp = DpConfiguration::default();
        Self {
            touch_slop: metrics.dp_to_px(dp.touch_slop),
            min_fling_speed: metrics.dp_to_px(dp.min_fling_speed),
            max_fling_speed: metrics.dp_to_px(dp.max_fling_speed),
            over_scroll_distance: metrics.dp_to_px(dp.over_scroll_distance),
            over_fling_distance: metrics.dp_to_px(dp.over_fling_distance),
            scroll_range: metrics.dp_to_px(dp.content_width),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dp_to_px_rounds_half_up() {
        let metrics = DisplayMetrics::new(2.75).unwrap();
        assert_eq!(metrics.dp_to_px(8.0), 22);
        assert_eq!(metrics.dp_to_px(6.0), 17); // 16.5 -> 17
        assert_eq!(metrics.dp_to_px(0.0), 0);
    }

    #[test]
    fn test_invalid_density_rejected() {
        assert_eq!(
            DisplayMetrics::new(0.0),
            Err(PlatformError::InvalidDensity(0.0))
        );
        assert!(DisplayMetrics::new(f32::NAN).is_err());
    }

    #[test]
    fn test_scaled_defaults() {
        let config = ViewConfiguration::scaled(&DisplayMetrics::new(2.0).unwrap());
        assert_eq!(config.touch_slop, 16);
        assert_eq!(config.min_fling_speed, 100);
        assert_eq!(config.max_fling_speed, 16_000);
        assert_eq!(config.over_scroll_distance, 0);
        assert_eq!(config.over_fling_distance, 12);
        assert_eq!(config.scroll_range, 9_600);
    }

    #[test]
    fn test_negative_threshold_rejected() {
        let dp = DpConfiguration {
            over_fling_distance: -1.0,
            ..Default::default()
        };
        let err = dp.scale(&DisplayMetrics::default()).unwrap_err();
        assert_eq!(
            err,
            PlatformError::InvalidThreshold {
                name: "over_fling_distance",
                value: -1.0
            }
        );
    }

    #[test]
    fn test_inverted_fling_range_rejected() {
        let dp = DpConfiguration {
            min_fling_speed: 9_000.0,
            ..Default::default()
        };
        assert!(matches!(
            dp.scale(&DisplayMetrics::default()),
            Err(PlatformError::FlingRange { .. })
        ));
    }
}

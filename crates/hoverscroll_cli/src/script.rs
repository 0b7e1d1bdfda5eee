//! Gesture replay scripts
//!
//! A script is a TOML file with optional `[view]` threshold overrides (in dp)
//! and an ordered list of `[[events]]`:
//!
//! ```toml
//! [view]
//! touch_slop = 8.0
//! over_fling_distance = 6.0
//!
//! [[events]]
//! action = "down"
//! x = 300.0
//! time_ms = 0
//!
//! [[events]]
//! action = "frame"
//! frames = 30
//! ```

use anyhow::{Context, Result};
use hoverscroll_platform::{DisplayMetrics, DpConfiguration, TouchAction, TouchEvent};
use hoverscroll_view::ViewConfiguration;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// A whole replay script
#[derive(Debug, Deserialize)]
pub struct Script {
    #[serde(default)]
    pub view: ViewOverrides,
    #[serde(default)]
    pub events: Vec<ScriptEvent>,
}

/// Threshold overrides in dp; missing fields keep platform defaults
#[derive(Debug, Default, Deserialize)]
pub struct ViewOverrides {
    pub touch_slop: Option<f32>,
    pub min_fling_speed: Option<f32>,
    pub max_fling_speed: Option<f32>,
    pub over_scroll_distance: Option<f32>,
    pub over_fling_distance: Option<f32>,
    pub content_width: Option<f32>,
}

impl ViewOverrides {
    /// Apply the overrides on top of the defaults and scale for `metrics`
    pub fn resolve(&self, metrics: &DisplayMetrics) -> Result<ViewConfiguration> {
        let defaults = DpConfiguration::default();
        let dp = DpConfiguration {
            touch_slop: self.touch_slop.unwrap_or(defaults.touch_slop),
            min_fling_speed: self.min_fling_speed.unwrap_or(defaults.min_fling_speed),
            max_fling_speed: self.max_fling_speed.unwrap_or(defaults.max_fling_speed),
            over_scroll_distance: self
                .over_scroll_distance
                .unwrap_or(defaults.over_scroll_distance),
            over_fling_distance: self
                .over_fling_distance
                .unwrap_or(defaults.over_fling_distance),
            content_width: self.content_width.unwrap_or(defaults.content_width),
        };
        dp.scale(metrics).context("Invalid [view] configuration")
    }
}

/// Script step kinds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StepKind {
    Down,
    Move,
    Up,
    Cancel,
    /// Advance the animation by `frames` display frames
    Frame,
}

/// One entry of `[[events]]`
#[derive(Debug, Clone, Copy, Deserialize)]
pub struct ScriptEvent {
    pub action: StepKind,
    #[serde(default)]
    pub x: f32,
    #[serde(default)]
    pub time_ms: u64,
    #[serde(default = "default_frames")]
    pub frames: u32,
}

fn default_frames() -> u32 {
    1
}

/// What the replay loop should do for one script entry
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    Touch(TouchEvent),
    Frames(u32),
}

impl ScriptEvent {
    pub fn step(&self) -> Step {
        let action = match self.action {
            StepKind::Down => TouchAction::Down,
            StepKind::Move => TouchAction::Move,
            StepKind::Up => TouchAction::Up,
            StepKind::Cancel => TouchAction::Cancel,
            StepKind::Frame => return Step::Frames(self.frames),
        };
        Step::Touch(TouchEvent::new(action, self.x, 0.0, self.time_ms))
    }
}

impl Script {
    /// Load and parse a script file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display()))?;
        Self::parse(&content).with_context(|| format!("Failed to parse {}", path.display()))
    }

    pub fn parse(content: &str) -> Result<Self> {
        let script: Script = toml::from_str(content)?;
        Ok(script)
    }
}

//! hoverscroll CLI
//!
//! Replay scripted touch gestures against an in-memory overscroll view.

use anyhow::Result;
use clap::{Parser, Subcommand};
use hoverscroll_platform::DisplayMetrics;
use hoverscroll_view::{HOverScrollView, ViewConfiguration};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

mod script;

use script::{Script, Step};

/// Upper bound on frames spent settling after the script ends
const MAX_SETTLE_FRAMES: u32 = 3_600;

#[derive(Parser)]
#[command(name = "hoverscroll")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Horizontal overscroll gesture replay", long_about = None)]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Display density (physical pixels per dp)
    #[arg(short, long, global = true, default_value = "1.0")]
    density: f32,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Replay a gesture script and report the resulting scroll offset
    Replay {
        /// Script file (TOML)
        script: PathBuf,

        /// Display refresh rate used for animation frames
        #[arg(short, long, default_value = "60")]
        fps: u32,

        /// Stop at the end of the script instead of letting animations settle
        #[arg(long)]
        no_settle: bool,
    },

    /// Print the scaled view configuration for the display density
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::new("info")
    };

    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(filter)
        .init();

    let metrics = DisplayMetrics::new(cli.density)?;

    match cli.command {
        Commands::Replay {
            script,
            fps,
            no_settle,
        } => cmd_replay(&script, &metrics, fps, !no_settle),
        Commands::Config => cmd_config(&metrics),
    }
}

fn cmd_replay(path: &Path, metrics: &DisplayMetrics, fps: u32, settle: bool) -> Result<()> {
    if fps == 0 {
        anyhow::bail!("Frame rate must be positive");
    }

    let script = Script::load(path)?;
    let config = script.view.resolve(metrics)?;
    let dt = 1.0 / fps as f32;

    info!(
        "Replaying {} events from {} (range {}px)",
        script.events.len(),
        path.display(),
        config.scroll_range
    );

    let mut view = HOverScrollView::with_config(config);
    let frames_run = replay(&mut view, &script, dt, settle);

    println!("Final scroll_x: {}", view.scroll_x());
    println!("State:          {:?}", view.state());
    println!("Frames:         {}", frames_run);

    Ok(())
}

/// Feed the script through `view`; returns the number of frames run
fn replay(view: &mut HOverScrollView, script: &Script, dt: f32, settle: bool) -> u32 {
    let mut frames_run = 0u32;

    for event in &script.events {
        match event.step() {
            Step::Touch(touch) => {
                if !view.on_touch_event(&touch) {
                    warn!("{:?} at x={} was not consumed", touch.action, touch.x);
                }
                info!(
                    "{:?} x={} t={}ms -> scroll_x={} ({:?})",
                    touch.action,
                    touch.x,
                    touch.time_ms,
                    view.scroll_x(),
                    view.state()
                );
            }
            Step::Frames(count) => {
                for _ in 0..count {
                    frames_run += 1;
                    let running = view.compute_scroll(dt);
                    debug!("frame {} -> scroll_x={}", frames_run, view.scroll_x());
                    if !running {
                        break;
                    }
                }
                info!(
                    "after frames: scroll_x={} ({:?})",
                    view.scroll_x(),
                    view.state()
                );
            }
        }
    }

    if settle {
        let mut remaining = MAX_SETTLE_FRAMES;
        while remaining > 0 && view.compute_scroll(dt) {
            frames_run += 1;
            remaining -= 1;
            debug!("frame {} -> scroll_x={}", frames_run, view.scroll_x());
        }
        if remaining == 0 {
            warn!("animation still running after {} frames", MAX_SETTLE_FRAMES);
        }
    }

    frames_run
}

fn cmd_config(metrics: &DisplayMetrics) -> Result<()> {
    let config = ViewConfiguration::scaled(metrics);

    println!("View configuration (density {})", metrics.density);
    println!("==================================");
    println!("  touch_slop:           {}px", config.touch_slop);
    println!("  min_fling_speed:      {}px/s", config.min_fling_speed);
    println!("  max_fling_speed:      {}px/s", config.max_fling_speed);
    println!("  over_scroll_distance: {}px", config.over_scroll_distance);
    println!("  over_fling_distance:  {}px", config.over_fling_distance);
    println!("  scroll_range:         {}px", config.scroll_range);

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hoverscroll_view::GestureState;

    const FLING_INTO_EDGE: &str = include_str!("../../../demos/fling_into_edge.toml");
    const SLOW_DRAG: &str = include_str!("../../../demos/slow_drag.toml");

    fn view_for(script: &Script) -> HOverScrollView {
        let config = script
            .view
            .resolve(&DisplayMetrics::new(1.0).unwrap())
            .unwrap();
        HOverScrollView::with_config(config)
    }

    #[test]
    fn test_fling_into_edge_settles_at_start() {
        let script = Script::parse(FLING_INTO_EDGE).unwrap();
        let mut view = view_for(&script);

        let frames = replay(&mut view, &script, 1.0 / 60.0, true);

        assert!(frames > 0);
        assert_eq!(view.scroll_x(), 0);
        assert_eq!(view.state(), GestureState::Idle);
    }

    #[test]
    fn test_slow_drag_stops_without_fling() {
        let script = Script::parse(SLOW_DRAG).unwrap();
        let mut view = view_for(&script);

        replay(&mut view, &script, 1.0 / 60.0, true);

        assert_eq!(view.state(), GestureState::Idle);
        // 12 past slop, then two 20px moves
        assert_eq!(view.scroll_x(), 52);
    }
}

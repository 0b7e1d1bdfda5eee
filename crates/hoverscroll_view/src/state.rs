//! Gesture state machine
//!
//! ```text
//!            DOWN              SLOP_EXCEEDED
//!   Idle ──────────► Pressed ───────────────► Dragging
//!    ▲                  │ UP/CANCEL              │ UP/CANCEL
//!    │◄─────────────────┘◄───────────────────────┤
//!    │                                           │ FLING/SPRING_BACK
//!    │       SETTLED                             ▼
//!    └──────────────────────────────────── Settling
//!                                  DOWN (catch) ─┘──► Pressed
//!
//! Idle also moves straight to Settling on a programmatic FLING/SPRING_BACK.
//! ```

use std::hash::Hash;

/// States that react to gesture events
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Handle an event and return the new state, or None if no transition
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Events driving [`GestureState`]
pub mod gesture_events {
    /// Pointer went down
    pub const TOUCH_DOWN: u32 = 1;
    /// Pointer travelled further than the touch slop
    pub const SLOP_EXCEEDED: u32 = 2;
    /// Pointer lifted without starting an animation
    pub const TOUCH_UP: u32 = 3;
    /// Gesture cancelled by the host
    pub const TOUCH_CANCEL: u32 = 4;
    /// Release velocity started a fling
    pub const FLING: u32 = 10;
    /// Offset left out of range; correcting back to the edge
    pub const SPRING_BACK: u32 = 11;
    /// Animator came to rest
    pub const SETTLED: u32 = 12;
}

/// Phase of the touch controller
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GestureState {
    /// Nothing happening
    #[default]
    Idle,
    /// Pointer down, still within the touch slop (drag candidate)
    Pressed,
    /// Pointer is scrolling the content
    Dragging,
    /// Fling or spring-back animation running
    Settling,
}

impl GestureState {
    pub fn is_dragging(&self) -> bool {
        matches!(self, GestureState::Dragging)
    }

    pub fn is_settling(&self) -> bool {
        matches!(self, GestureState::Settling)
    }
}

impl StateTransitions for GestureState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use gesture_events::*;

        match (self, event) {
            (GestureState::Idle, TOUCH_DOWN) => Some(GestureState::Pressed),
            (GestureState::Idle, FLING | SPRING_BACK) => Some(GestureState::Settling),
            // Touching a running animation stops it; the touch is a new candidate
            (GestureState::Settling, TOUCH_DOWN) => Some(GestureState::Pressed),

            (GestureState::Pressed, SLOP_EXCEEDED) => Some(GestureState::Dragging),
            (GestureState::Pressed, TOUCH_UP | TOUCH_CANCEL) => Some(GestureState::Idle),

            (GestureState::Dragging, TOUCH_UP | TOUCH_CANCEL) => Some(GestureState::Idle),
            (GestureState::Dragging, FLING | SPRING_BACK) => Some(GestureState::Settling),

            // Edge hit mid-fling swaps the animation, not the phase
            (GestureState::Settling, FLING | SPRING_BACK) => None,
            (GestureState::Settling, SETTLED) => Some(GestureState::Idle),

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::gesture_events::*;
    use super::*;

    #[test]
    fn test_tap_returns_to_idle() {
        let state = GestureState::Idle.on_event(TOUCH_DOWN).unwrap();
        assert_eq!(state, GestureState::Pressed);
        assert_eq!(state.on_event(TOUCH_UP), Some(GestureState::Idle));
    }

    #[test]
    fn test_drag_then_fling_then_settle() {
        let mut state = GestureState::Idle;
        for event in [TOUCH_DOWN, SLOP_EXCEEDED, FLING, SETTLED] {
            state = state.on_event(event).unwrap_or(state);
        }
        assert_eq!(state, GestureState::Idle);
    }

    #[test]
    fn test_down_while_settling_catches_as_candidate() {
        let caught = GestureState::Settling.on_event(TOUCH_DOWN).unwrap();
        assert_eq!(caught, GestureState::Pressed);
        assert_eq!(caught.on_event(TOUCH_UP), Some(GestureState::Idle));
        assert_eq!(caught.on_event(SLOP_EXCEEDED), Some(GestureState::Dragging));
    }

    #[test]
    fn test_dragging_and_settling_are_exclusive() {
        for state in [
            GestureState::Idle,
            GestureState::Pressed,
            GestureState::Dragging,
            GestureState::Settling,
        ] {
            assert!(!(state.is_dragging() && state.is_settling()));
        }
    }

    #[test]
    fn test_pressed_cannot_fling() {
        assert_eq!(GestureState::Pressed.on_event(FLING), None);
        assert_eq!(GestureState::Idle.on_event(SETTLED), None);
    }
}

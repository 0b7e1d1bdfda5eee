//! Touch input types and the input source capability

use std::collections::VecDeque;

// ============================================================================
// Touch Events
// ============================================================================

/// Masked touch action, as delivered by the host dispatch loop
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TouchAction {
    /// First pointer went down
    Down,
    /// Pointer moved while down
    Move,
    /// Last pointer lifted
    Up,
    /// Gesture taken away by the system or an ancestor
    Cancel,
}

/// A single touch sample for the primary pointer
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TouchEvent {
    /// What happened
    pub action: TouchAction,
    /// X position in view coordinates
    pub x: f32,
    /// Y position in view coordinates
    pub y: f32,
    /// Event time in milliseconds (monotonic, host clock)
    pub time_ms: u64,
}

impl TouchEvent {
    pub fn new(action: TouchAction, x: f32, y: f32, time_ms: u64) -> Self {
        Self {
            action,
            x,
            y,
            time_ms,
        }
    }

    pub fn down(x: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Down, x, 0.0, time_ms)
    }

    pub fn moved(x: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Move, x, 0.0, time_ms)
    }

    pub fn up(x: f32, time_ms: u64) -> Self {
        Self::new(TouchAction::Up, x, 0.0, time_ms)
    }

    pub fn cancel(time_ms: u64) -> Self {
        Self::new(TouchAction::Cancel, 0.0, 0.0, time_ms)
    }

    /// Get the position (returns None for Cancel)
    pub fn position(&self) -> Option<(f32, f32)> {
        match self.action {
            TouchAction::Cancel => None,
            _ => Some((self.x, self.y)),
        }
    }
}

// ============================================================================
// Input Source
// ============================================================================

/// Host-side delivery of touch samples
///
/// Implemented by platform backends; samples arrive serially on the UI thread.
pub trait InputSource {
    /// Next pending touch sample, or None when the stream is drained
    fn next_touch(&mut self) -> Option<TouchEvent>;

    /// Borrow the source as an iterator over pending samples
    fn touch_stream(&mut self) -> TouchStream<'_, Self>
    where
        Self: Sized,
    {
        TouchStream { source: self }
    }
}

/// Iterator adapter returned by [`InputSource::touch_stream`]
pub struct TouchStream<'a, S: InputSource> {
    source: &'a mut S,
}

impl<S: InputSource> Iterator for TouchStream<'_, S> {
    type Item = TouchEvent;

    fn next(&mut self) -> Option<TouchEvent> {
        self.source.next_touch()
    }
}

/// Queue-backed input source for replays and tests
#[derive(Debug, Default, Clone)]
pub struct ScriptedInput {
    pending: VecDeque<TouchEvent>,
}

impl ScriptedInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue a sample behind any already pending
    pub fn push(&mut self, event: TouchEvent) {
        self.pending.push_back(event);
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl FromIterator<TouchEvent> for ScriptedInput {
    fn from_iter<T: IntoIterator<Item = TouchEvent>>(iter: T) -> Self {
        Self {
            pending: iter.into_iter().collect(),
        }
    }
}

impl InputSource for ScriptedInput {
    fn next_touch(&mut self) -> Option<TouchEvent> {
        self.pending.pop_front()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cancel_has_no_position() {
        assert_eq!(TouchEvent::cancel(5).position(), None);
        assert_eq!(TouchEvent::moved(12.0, 5).position(), Some((12.0, 0.0)));
    }

    #[test]
    fn test_scripted_input_preserves_order() {
        let mut input: ScriptedInput = [
            TouchEvent::down(100.0, 0),
            TouchEvent::moved(90.0, 16),
            TouchEvent::up(80.0, 32),
        ]
        .into_iter()
        .collect();

        let actions: Vec<_> = input.touch_stream().map(|e| e.action).collect();
        assert_eq!(
            actions,
            vec![TouchAction::Down, TouchAction::Move, TouchAction::Up]
        );
        assert!(input.is_empty());
    }
}

//! Slide-in reveal animation state

use std::time::{Duration, Instant};

/// Animation phase for a reveal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealPhase {
    /// Content sliding into place
    Entering,
    /// Animation finished
    Complete,
}

/// Reveal animation: content starts a few rows low and eases into place
#[derive(Debug, Clone)]
pub struct RevealState {
    /// When the reveal started
    pub start_time: Instant,
    /// Current animation phase
    pub phase: RevealPhase,
    /// Rows still to travel (`DISTANCE` at start, 0 when complete)
    pub offset: f32,
}

impl RevealState {
    /// Duration of the slide (400ms)
    const DURATION: Duration = Duration::from_millis(400);
    /// Rows travelled during the slide
    const DISTANCE: f32 = 2.0;

    pub fn new() -> Self {
        Self::started_at(Instant::now())
    }

    pub fn started_at(start_time: Instant) -> Self {
        Self {
            start_time,
            phase: RevealPhase::Entering,
            offset: Self::DISTANCE,
        }
    }

    /// Update animation state based on elapsed time
    pub fn update(&mut self) {
        let elapsed = self.start_time.elapsed();

        if elapsed < Self::DURATION {
            let progress = elapsed.as_secs_f32() / Self::DURATION.as_secs_f32();
            // Cubic ease-out for smooth deceleration
            let eased = simple_easing::cubic_out(progress);
            self.offset = (1.0 - eased) * Self::DISTANCE;
        } else {
            self.skip();
        }
    }

    /// Jump to the final position
    pub fn skip(&mut self) {
        self.phase = RevealPhase::Complete;
        self.offset = 0.0;
    }

    pub fn is_complete(&self) -> bool {
        self.phase == RevealPhase::Complete
    }

    /// Whole rows the content is currently shifted down by
    pub fn row_offset(&self) -> u16 {
        self.offset.round() as u16
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_starts_entering_at_full_offset() {
        let state = RevealState::new();
        assert_eq!(state.phase, RevealPhase::Entering);
        assert_eq!(state.row_offset(), 2);
        assert!(!state.is_complete());
    }

    #[test]
    fn test_update_immediately_stays_entering() {
        let mut state = RevealState::new();
        state.update();
        assert_eq!(state.phase, RevealPhase::Entering);
        assert!(state.offset > 0.0);
    }

    #[test]
    fn test_update_after_duration_completes() {
        let mut state = RevealState::started_at(Instant::now() - Duration::from_millis(500));
        state.update();
        assert!(state.is_complete());
        assert_eq!(state.row_offset(), 0);
    }

    #[test]
    fn test_offset_shrinks_midway() {
        let mut state = RevealState::started_at(Instant::now() - Duration::from_millis(200));
        state.update();
        assert!(state.offset < RevealState::DISTANCE);
        assert!(state.offset > 0.0);
    }

    #[test]
    fn test_skip_completes() {
        let mut state = RevealState::new();
        state.skip();
        state.skip();
        assert!(state.is_complete());
        assert_eq!(state.offset, 0.0);
    }
}

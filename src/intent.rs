//! Intent evaluation: is the pointer heading for the open submenu content?
//!
//! The evaluator compares the gradient from the two latest pointer samples to
//! each of the two chosen corners. Moving toward the content keeps the
//! gradient to the decreasing corner from growing and the gradient to the
//! increasing corner from shrinking. Any departure from that, or any input
//! that makes the comparison meaningless, allows an immediate switch.

use crate::geometry::{derive_corners, gradient, ContentDirection, CornerPair, Point, Region};
use crate::pointer::SampleBuffer;

/// Why a switch was allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwitchReason {
    NoActiveItem,
    MissingSamples,
    EnteredFromOutside,
    PointerIdle,
    LeavingDecreasingCorner,
    LeavingIncreasingCorner,
}

/// Outcome of one evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    /// Switching the active item is allowed now.
    Switch(SwitchReason),
    /// The pointer is travelling toward the active content; hold off.
    Wait,
}

impl Verdict {
    pub fn is_switch(&self) -> bool {
        matches!(self, Verdict::Switch(_))
    }
}

/// Mutable evaluation state owned by one bound menu.
///
/// `last_checked` is the sample at which the evaluator last decided to wait.
/// It is only set while the menu is delaying and is cleared by any decisive
/// verdict.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct IntentState {
    last_checked: Option<Point>,
    delaying: bool,
}

impl IntentState {
    pub fn last_checked(&self) -> Option<Point> {
        self.last_checked
    }

    pub fn is_delaying(&self) -> bool {
        self.delaying
    }

    /// Forget the last wait. Used when a pending retry is dropped without
    /// being evaluated.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}

/// Fixed geometry for one bound menu.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IntentEvaluator {
    region: Region,
    corners: CornerPair,
}

impl IntentEvaluator {
    pub fn new(region: Region, threshold: f64, direction: ContentDirection) -> Self {
        Self {
            region,
            corners: derive_corners(&region, threshold, direction),
        }
    }

    pub fn region(&self) -> &Region {
        &self.region
    }

    pub fn corners(&self) -> &CornerPair {
        &self.corners
    }

    /// Decide whether the active item may change, updating `state`.
    ///
    /// A switch verdict clears `last_checked` and ends delaying; a wait verdict
    /// remembers the current sample and starts (or continues) delaying.
    pub fn should_switch(
        &self,
        state: &mut IntentState,
        has_active_item: bool,
        samples: &SampleBuffer,
    ) -> Verdict {
        match self.classify(state.last_checked, has_active_item, samples) {
            Some(reason) => {
                state.last_checked = None;
                state.delaying = false;
                tracing::trace!(?reason, "switch allowed");
                Verdict::Switch(reason)
            }
            None => {
                state.last_checked = samples.current;
                state.delaying = true;
                tracing::trace!(current = ?samples.current, "pointer aimed at content, waiting");
                Verdict::Wait
            }
        }
    }

    fn classify(
        &self,
        last_checked: Option<Point>,
        has_active_item: bool,
        samples: &SampleBuffer,
    ) -> Option<SwitchReason> {
        if !has_active_item {
            return Some(SwitchReason::NoActiveItem);
        }
        let Some((previous, current)) = samples.pair() else {
            return Some(SwitchReason::MissingSamples);
        };
        if !self.region.contains(previous) {
            return Some(SwitchReason::EnteredFromOutside);
        }
        // Exact comparison: the pointer has not moved since we last chose to wait.
        if last_checked == Some(current) {
            return Some(SwitchReason::PointerIdle);
        }

        let CornerPair {
            decreasing,
            increasing,
        } = self.corners;
        if gradient(current, decreasing) > gradient(previous, decreasing) {
            return Some(SwitchReason::LeavingDecreasingCorner);
        }
        if gradient(current, increasing) < gradient(previous, increasing) {
            return Some(SwitchReason::LeavingIncreasingCorner);
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn evaluator() -> IntentEvaluator {
        IntentEvaluator::new(Region::new(0.0, 100.0, 50.0, 0.0), 0.0, ContentDirection::Right)
    }

    fn samples(previous: (f64, f64), current: (f64, f64)) -> SampleBuffer {
        SampleBuffer {
            previous: Some(Point::new(previous.0, previous.1)),
            current: Some(Point::new(current.0, current.1)),
        }
    }

    #[test]
    fn test_no_active_item_always_switches() {
        let eval = evaluator();
        let mut state = IntentState::default();
        let verdict = eval.should_switch(&mut state, false, &samples((90.0, 10.0), (95.0, 5.0)));
        assert_eq!(verdict, Verdict::Switch(SwitchReason::NoActiveItem));
        assert!(!state.is_delaying());
    }

    #[test]
    fn test_missing_samples_switch() {
        let eval = evaluator();
        let mut state = IntentState::default();
        let only_current = SampleBuffer {
            previous: None,
            current: Some(Point::new(5.0, 5.0)),
        };
        assert_eq!(
            eval.should_switch(&mut state, true, &only_current),
            Verdict::Switch(SwitchReason::MissingSamples)
        );
        assert_eq!(
            eval.should_switch(&mut state, true, &SampleBuffer::default()),
            Verdict::Switch(SwitchReason::MissingSamples)
        );
    }

    #[test]
    fn test_previous_outside_region_switches() {
        let eval = evaluator();
        let mut state = IntentState::default();
        let verdict = eval.should_switch(&mut state, true, &samples((101.0, 10.0), (95.0, 5.0)));
        assert_eq!(verdict, Verdict::Switch(SwitchReason::EnteredFromOutside));
    }

    #[test]
    fn test_moving_toward_top_right_waits() {
        let eval = evaluator();
        let mut state = IntentState::default();
        let verdict = eval.should_switch(&mut state, true, &samples((90.0, 10.0), (95.0, 5.0)));
        assert_eq!(verdict, Verdict::Wait);
        assert!(state.is_delaying());
        assert_eq!(state.last_checked(), Some(Point::new(95.0, 5.0)));
    }

    #[test]
    fn test_moving_far_away_switches_and_clears_state() {
        let eval = evaluator();
        let mut state = IntentState::default();
        eval.should_switch(&mut state, true, &samples((90.0, 10.0), (95.0, 5.0)));
        assert!(state.is_delaying());

        let verdict = eval.should_switch(&mut state, true, &samples((10.0, 10.0), (200.0, 200.0)));
        assert!(verdict.is_switch());
        assert!(!state.is_delaying());
        assert_eq!(state.last_checked(), None);
    }

    #[test]
    fn test_idle_pointer_escapes_wait() {
        let eval = evaluator();
        let mut state = IntentState::default();
        let s = samples((90.0, 10.0), (95.0, 5.0));
        assert_eq!(eval.should_switch(&mut state, true, &s), Verdict::Wait);
        // Same samples again: the pointer never moved.
        assert_eq!(
            eval.should_switch(&mut state, true, &s),
            Verdict::Switch(SwitchReason::PointerIdle)
        );
    }

    #[test]
    fn test_idle_check_has_no_tolerance() {
        let eval = evaluator();
        let mut state = IntentState::default();
        assert_eq!(
            eval.should_switch(&mut state, true, &samples((90.0, 10.0), (95.0, 5.0))),
            Verdict::Wait
        );
        // A half-cell nudge along the same line is still movement.
        let verdict = eval.should_switch(&mut state, true, &samples((95.0, 5.0), (95.5, 4.5)));
        assert_eq!(verdict, Verdict::Wait);
    }

    #[test]
    fn test_moving_down_and_left_trips_increasing_corner() {
        let eval = evaluator();
        let mut state = IntentState::default();
        // Heading away from both right-hand corners.
        let verdict = eval.should_switch(&mut state, true, &samples((50.0, 10.0), (40.0, 20.0)));
        assert!(verdict.is_switch());
    }

    #[test]
    fn test_vertical_alignment_is_comparable() {
        let eval = IntentEvaluator::new(Region::new(0.0, 100.0, 50.0, 0.0), 0.0, ContentDirection::Top);
        let mut state = IntentState::default();
        // current sits directly below the top-left corner: gradient is -inf.
        let verdict = eval.should_switch(&mut state, true, &samples((5.0, 10.0), (0.0, 5.0)));
        assert_eq!(verdict, Verdict::Wait);
    }
}

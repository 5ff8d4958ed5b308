use super::viewport::{ScrollBehavior, Viewport};

/// Direction of a discrete navigation step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Previous,
    Next,
}

impl Direction {
    /// Relative scroll for one step of `pitch`
    pub fn delta(self, pitch: f64) -> f64 {
        match self {
            Direction::Previous => -pitch,
            Direction::Next => pitch,
        }
    }

    /// Accessible label of the control that issues this step
    pub fn label(self) -> &'static str {
        match self {
            Direction::Previous => "Previous reviews",
            Direction::Next => "Next reviews",
        }
    }
}

/// Issue one animated step from wherever the viewport is right now.
///
/// In-flight animations are not awaited: each step is relative to the
/// offset at call time and the viewport's snapping settles the result.
pub fn advance<V: Viewport + ?Sized>(viewport: &mut V, direction: Direction, pitch: f64) -> bool {
    if pitch <= 0.0 {
        return false;
    }
    viewport.scroll_by(direction.delta(pitch), ScrollBehavior::Smooth);
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Default)]
    struct Recorder {
        offset: f64,
        calls: Vec<(f64, ScrollBehavior)>,
    }

    impl Viewport for Recorder {
        fn offset(&self) -> f64 {
            self.offset
        }

        fn scroll_to(&mut self, offset: f64, _behavior: ScrollBehavior) {
            self.offset = offset;
        }

        fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) {
            self.calls.push((delta, behavior));
            self.offset += delta;
        }
    }

    #[test]
    fn test_delta_sign() {
        assert_eq!(Direction::Next.delta(400.0), 400.0);
        assert_eq!(Direction::Previous.delta(400.0), -400.0);
    }

    #[test]
    fn test_advance_is_smooth_and_relative() {
        let mut viewport = Recorder {
            offset: 1234.0,
            ..Default::default()
        };
        assert!(advance(&mut viewport, Direction::Next, 100.0));
        assert!(advance(&mut viewport, Direction::Previous, 100.0));
        assert_eq!(
            viewport.calls,
            vec![(100.0, ScrollBehavior::Smooth), (-100.0, ScrollBehavior::Smooth)]
        );
        assert_eq!(viewport.offset, 1234.0);
    }

    #[test]
    fn test_advance_without_pitch_is_noop() {
        let mut viewport = Recorder::default();
        assert!(!advance(&mut viewport, Direction::Next, 0.0));
        assert!(viewport.calls.is_empty());
    }
}

/// How an offset write reaches its destination
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    /// Jump immediately, no animation
    Instant,
    /// Interpolate towards the destination over several frames
    Smooth,
}

/// The horizontally scrollable region a carousel drives.
///
/// Implementations own the offset. Every change of the offset, whether
/// caused by the user, an animation frame, or a write from the carousel
/// itself, must be reported back to the carousel as a scroll notification
/// (see [`Carousel::on_scroll`](super::Carousel::on_scroll)).
pub trait Viewport {
    /// Current horizontal offset in logical units
    fn offset(&self) -> f64;

    /// Move to an absolute offset
    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior);

    /// Move relative to the offset at call time
    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior);
}

impl<V: Viewport + ?Sized> Viewport for Box<V> {
    fn offset(&self) -> f64 {
        (**self).offset()
    }

    fn scroll_to(&mut self, offset: f64, behavior: ScrollBehavior) {
        (**self).scroll_to(offset, behavior)
    }

    fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) {
        (**self).scroll_by(delta, behavior)
    }
}

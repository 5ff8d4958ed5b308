use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use super::geometry::Boundaries;
use super::guard::{Correction, CorrectionPolicy};
use super::navigation::{self, Direction};
use super::sequence::{Normalizer, PaddedSequence};
use super::tracker::ScrollTracker;
use super::viewport::{ScrollBehavior, Viewport};
use crate::config::CarouselConfig;

/// Where the carousel is in its lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lifecycle {
    /// Created, waiting for the first layout pass
    Pending,
    /// Card measured, offset initialised, listening for scrolls
    Mounted,
    /// Listeners detached; every further call is a no-op
    Unmounted,
}

/// An infinitely looping carousel over a fixed list.
///
/// The carousel owns its viewport exclusively. The host feeds it:
/// - `mount(card_width)` once the first layout pass knows the card size
/// - `on_scroll(now)` for every scroll notification the viewport emits
/// - `tick(now)` regularly, so the correction guard can release
/// - `advance(direction)` for previous/next controls
#[derive(Debug)]
pub struct Carousel<T, V: Viewport> {
    viewport: V,
    items: Arc<[T]>,
    normalizer: Normalizer<T>,
    tracker: ScrollTracker,
    policy: CorrectionPolicy,
    remeasure_on_resize: bool,
    lifecycle: Lifecycle,
}

impl<T, V: Viewport> Carousel<T, V> {
    pub fn new(items: Arc<[T]>, viewport: V, config: &CarouselConfig) -> Self {
        let mut normalizer = Normalizer::new(config.clone_count);
        normalizer.normalize(&items);

        Self {
            viewport,
            items,
            normalizer,
            tracker: ScrollTracker::new(config.gap),
            policy: CorrectionPolicy::new(config.settle_duration(), config.wrap_rule),
            remeasure_on_resize: config.remeasure_on_resize,
            lifecycle: Lifecycle::Pending,
        }
    }

    pub fn lifecycle(&self) -> Lifecycle {
        self.lifecycle
    }

    pub fn is_mounted(&self) -> bool {
        self.lifecycle == Lifecycle::Mounted
    }

    pub fn items(&self) -> &Arc<[T]> {
        &self.items
    }

    /// Padded strip to render, `None` when there is nothing to show
    pub fn sequence(&self) -> Option<&PaddedSequence<T>> {
        self.normalizer.current().filter(|seq| !seq.is_empty())
    }

    /// Measured card width, if any
    pub fn card_width(&self) -> Option<f64> {
        self.tracker.card_width()
    }

    /// Card width plus gap; `0.0` while unmeasured or empty
    pub fn pitch(&self) -> f64 {
        if self.items.is_empty() {
            0.0
        } else {
            self.tracker.pitch()
        }
    }

    pub fn boundaries(&self) -> Option<Boundaries> {
        let seq = self.sequence()?;
        Boundaries::compute(seq.clone_count(), seq.original_len(), self.pitch())
    }

    pub fn policy(&self) -> &CorrectionPolicy {
        &self.policy
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    pub fn viewport_mut(&mut self) -> &mut V {
        &mut self.viewport
    }

    pub fn current_offset(&self) -> f64 {
        self.tracker.current_offset(&self.viewport)
    }

    /// Subscribe to every scroll notification the carousel observes
    pub fn on_offset_changed(&mut self, handler: impl FnMut(f64) + 'static) {
        if self.lifecycle != Lifecycle::Unmounted {
            self.tracker.on_offset_changed(handler);
        }
    }

    /// First layout pass: measure the card and show the first real card
    /// without animation.
    pub fn mount(&mut self, card_width: f64) -> bool {
        if self.lifecycle != Lifecycle::Pending {
            return false;
        }
        self.tracker.measure(card_width);
        self.lifecycle = Lifecycle::Mounted;
        info!(
            "Carousel mounted: {} items, pitch {}",
            self.items.len(),
            self.pitch()
        );
        self.jump_to_start();
        true
    }

    /// Replace the list. Identical lists (by identity) are ignored; a new
    /// list is re-padded and, when mounted, the first real card is shown again.
    pub fn set_items(&mut self, items: Arc<[T]>) {
        if self.lifecycle == Lifecycle::Unmounted || Arc::ptr_eq(&self.items, &items) {
            return;
        }
        self.normalizer.normalize(&items);
        self.items = items;
        self.policy.reset();
        debug!("Carousel list replaced: {} items", self.items.len());
        if self.is_mounted() {
            self.jump_to_start();
        }
    }

    /// Viewport size changed.
    ///
    /// A carousel mounted without a usable card width takes the first valid
    /// measurement and shows the first real card. Once measured, the card is
    /// only measured again when `remeasure_on_resize` is enabled; the offset
    /// then keeps its card position.
    pub fn on_resize(&mut self, card_width: f64) -> bool {
        if !self.is_mounted() {
            return false;
        }
        if self.tracker.pitch() <= 0.0 {
            self.tracker.measure(card_width);
            if self.pitch() <= 0.0 {
                return false;
            }
            info!("Carousel measured after mount: pitch {}", self.pitch());
            self.jump_to_start();
            return true;
        }
        if !self.remeasure_on_resize {
            return false;
        }
        let old_pitch = self.pitch();
        self.tracker.measure(card_width);
        let new_pitch = self.pitch();
        if old_pitch <= 0.0 || new_pitch <= 0.0 || old_pitch == new_pitch {
            return false;
        }
        let cards = self.current_offset() / old_pitch;
        self.viewport
            .scroll_to(cards * new_pitch, ScrollBehavior::Instant);
        debug!("Carousel re-measured: pitch {} -> {}", old_pitch, new_pitch);
        true
    }

    /// Handle one scroll notification from the viewport
    pub fn on_scroll(&mut self, now: Instant) -> Correction {
        if !self.is_mounted() {
            return Correction::Skipped;
        }

        let offset = self.current_offset();
        self.tracker.notify(offset);

        let bounds = self.boundaries();
        let correction = self.policy.on_scroll(offset, bounds.as_ref(), now);
        if let Correction::SnapTo(target) = correction {
            debug!("Wrapping offset {} -> {}", offset, target);
            self.viewport.scroll_to(target, ScrollBehavior::Instant);
        }
        correction
    }

    /// Advance the guard timer. Returns true when the guard released.
    ///
    /// A genuine scroll swallowed while the guard was engaged is inspected
    /// once on release, so an animation that comes to rest inside the
    /// guard window still gets wrapped.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let released = self.policy.tick(now);
        if released && self.policy.take_missed() {
            self.on_scroll(now);
        }
        released
    }

    /// Scroll one card in `direction`, animated
    pub fn advance(&mut self, direction: Direction) -> bool {
        if !self.is_mounted() {
            return false;
        }
        let pitch = self.pitch();
        navigation::advance(&mut self.viewport, direction, pitch)
    }

    /// Detach listeners and drop any pending guard release
    pub fn unmount(&mut self) {
        if self.lifecycle == Lifecycle::Unmounted {
            return;
        }
        self.tracker.detach();
        self.policy.reset();
        self.lifecycle = Lifecycle::Unmounted;
        debug!("Carousel unmounted");
    }

    /// Strip position of the card at the left edge of the viewport
    pub fn leading_position(&self) -> Option<usize> {
        let bounds = self.boundaries()?;
        let seq = self.sequence()?;
        Some(bounds.position_at(self.current_offset()).min(seq.len() - 1))
    }

    /// Item shown by the card at the left edge of the viewport
    pub fn leading_item(&self) -> Option<&T> {
        let position = self.leading_position()?;
        self.sequence()?.get(position).map(|(_, item)| item)
    }

    fn jump_to_start(&mut self) {
        if let Some(bounds) = self.boundaries() {
            self.viewport.scroll_to(bounds.start, ScrollBehavior::Instant);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    use super::*;
    use crate::config::WrapRule;

    const CARD: f64 = 68.0;
    const PITCH: f64 = 100.0;

    /// Applies every write immediately and queues one notification per change
    #[derive(Debug, Default)]
    struct ImmediateViewport {
        offset: f64,
        pending: usize,
    }

    impl Viewport for ImmediateViewport {
        fn offset(&self) -> f64 {
            self.offset
        }

        fn scroll_to(&mut self, offset: f64, _behavior: ScrollBehavior) {
            if offset != self.offset {
                self.offset = offset;
                self.pending += 1;
            }
        }

        fn scroll_by(&mut self, delta: f64, behavior: ScrollBehavior) {
            self.scroll_to(self.offset + delta, behavior);
        }
    }

    struct Harness {
        carousel: Carousel<usize, ImmediateViewport>,
        now: Instant,
    }

    impl Harness {
        fn new(n: usize, rule: WrapRule) -> Self {
            let config = CarouselConfig {
                wrap_rule: rule,
                ..Default::default()
            };
            let items: Arc<[usize]> = (0..n).collect::<Vec<_>>().into();
            let mut harness = Self {
                carousel: Carousel::new(items, ImmediateViewport::default(), &config),
                now: Instant::now(),
            };
            harness.carousel.mount(CARD);
            harness.drain();
            harness.wait(100);
            harness
        }

        /// Deliver queued notifications, as the event loop would
        fn drain(&mut self) {
            while self.carousel.viewport().pending > 0 {
                self.carousel.viewport_mut().pending -= 1;
                self.carousel.on_scroll(self.now);
            }
        }

        fn wait(&mut self, ms: u64) {
            self.now += Duration::from_millis(ms);
            self.carousel.tick(self.now);
        }

        fn click(&mut self, direction: Direction) {
            self.carousel.advance(direction);
            self.drain();
            self.wait(100);
        }

        fn drag_to(&mut self, offset: f64) {
            self.carousel
                .viewport_mut()
                .scroll_to(offset, ScrollBehavior::Instant);
            self.drain();
            self.wait(100);
        }

        fn offset(&self) -> f64 {
            self.carousel.current_offset()
        }
    }

    #[test]
    fn test_initial_offset_is_start_boundary() {
        let h = Harness::new(12, WrapRule::LastRealCard);
        let bounds = h.carousel.boundaries().unwrap();
        assert_eq!(bounds.pitch, PITCH);
        assert_eq!(h.offset(), bounds.start);
        assert_eq!(h.offset(), 3.0 * PITCH);
        assert_eq!(h.carousel.leading_item(), Some(&0));
        assert_eq!(h.carousel.sequence().unwrap().len(), 18);
    }

    #[test]
    fn test_snap_at_last_real_card() {
        let mut h = Harness::new(12, WrapRule::LastRealCard);
        h.drag_to(13.0 * PITCH);
        assert_eq!(h.offset(), 13.0 * PITCH);

        h.drag_to((3.0 + 12.0) * PITCH - PITCH);
        assert_eq!(h.offset(), 3.0 * PITCH);
    }

    #[test]
    fn test_snap_at_leading_clones_preserves_content() {
        for rule in [WrapRule::LastRealCard, WrapRule::FirstClone] {
            let mut h = Harness::new(12, rule);
            h.drag_to(2.0 * PITCH);
            assert_eq!(h.offset(), 14.0 * PITCH, "{rule:?}");
            assert_eq!(h.carousel.leading_item(), Some(&11));
        }
    }

    #[test]
    fn test_first_clone_snap_preserves_content() {
        let mut h = Harness::new(12, WrapRule::FirstClone);
        h.drag_to(14.0 * PITCH);
        assert_eq!(h.carousel.leading_item(), Some(&11));

        let before = h.carousel.sequence().unwrap().get(15).map(|(_, item)| *item);
        h.drag_to(15.0 * PITCH);
        assert_eq!(h.offset(), 3.0 * PITCH);
        assert_eq!(h.carousel.leading_item().copied(), before);
    }

    #[test]
    fn test_correction_applied_twice_is_stable() {
        let mut h = Harness::new(12, WrapRule::LastRealCard);
        h.carousel
            .viewport_mut()
            .scroll_to(2.0 * PITCH, ScrollBehavior::Instant);
        h.carousel.viewport_mut().pending = 0;

        assert_eq!(h.carousel.on_scroll(h.now), Correction::SnapTo(14.0 * PITCH));
        let once = h.offset();
        assert_eq!(h.carousel.on_scroll(h.now), Correction::Suppressed);
        assert_eq!(h.offset(), once);
    }

    #[test]
    fn test_full_loop_returns_to_initial_position() {
        let mut h = Harness::new(12, WrapRule::FirstClone);
        let initial = h.offset();
        let first = h.carousel.leading_item().copied();

        for _ in 0..12 {
            h.click(Direction::Next);
        }

        assert_eq!(h.offset(), initial);
        assert_eq!(h.carousel.leading_item().copied(), first);
    }

    #[test]
    fn test_scroll_swallowed_by_guard_is_inspected_on_release() {
        let mut h = Harness::new(12, WrapRule::LastRealCard);
        h.drag_to(13.0 * PITCH);

        // Guard engaged by the 13p notification; the final frame lands inside it
        h.carousel
            .viewport_mut()
            .scroll_to(13.5 * PITCH, ScrollBehavior::Instant);
        h.drain();
        h.now += Duration::from_millis(10);
        h.carousel
            .viewport_mut()
            .scroll_to(14.0 * PITCH, ScrollBehavior::Instant);
        h.drain();
        assert_eq!(h.offset(), 14.0 * PITCH);

        h.wait(60);
        h.drain();
        assert_eq!(h.offset(), 3.0 * PITCH);
    }

    #[test]
    fn test_previous_from_start_wraps_to_last_item() {
        let mut h = Harness::new(12, WrapRule::LastRealCard);
        h.click(Direction::Previous);
        assert_eq!(h.offset(), 14.0 * PITCH);
        assert_eq!(h.carousel.leading_item(), Some(&11));
    }

    #[test]
    fn test_two_items_three_clones() {
        let h = Harness::new(2, WrapRule::LastRealCard);
        let seq = h.carousel.sequence().unwrap();
        assert_eq!(seq.clone_count(), 2);
        assert_eq!(seq.len(), 6);
        assert_eq!(h.offset(), 2.0 * PITCH);
    }

    #[test]
    fn test_empty_list_renders_nothing() {
        let config = CarouselConfig::default();
        let items: Arc<[usize]> = Vec::new().into();
        let mut carousel = Carousel::new(items, ImmediateViewport::default(), &config);

        assert!(carousel.mount(CARD));
        assert!(carousel.sequence().is_none());
        assert_eq!(carousel.pitch(), 0.0);
        assert!(carousel.boundaries().is_none());
        assert_eq!(carousel.current_offset(), 0.0);
        assert!(!carousel.advance(Direction::Next));
        assert_eq!(carousel.on_scroll(Instant::now()), Correction::Skipped);
    }

    #[test]
    fn test_unmeasured_card_skips_correction() {
        let config = CarouselConfig::default();
        let items: Arc<[usize]> = (0..5).collect::<Vec<_>>().into();
        let mut carousel = Carousel::new(items, ImmediateViewport::default(), &config);

        carousel.mount(0.0);
        assert_eq!(carousel.pitch(), 0.0);
        assert_eq!(carousel.on_scroll(Instant::now()), Correction::Skipped);
        assert!(!carousel.policy().is_correcting());
    }

    #[test]
    fn test_first_valid_resize_measures_unmeasured_carousel() {
        let config = CarouselConfig::default();
        assert!(!config.remeasure_on_resize);
        let items: Arc<[usize]> = (0..12).collect::<Vec<_>>().into();
        let mut carousel = Carousel::new(items, ImmediateViewport::default(), &config);

        carousel.mount(0.0);
        assert!(!carousel.advance(Direction::Next));
        assert!(!carousel.on_resize(-4.0));
        assert_eq!(carousel.pitch(), 0.0);

        assert!(carousel.on_resize(CARD));
        assert_eq!(carousel.pitch(), PITCH);
        assert_eq!(carousel.current_offset(), 3.0 * PITCH);
        assert!(carousel.advance(Direction::Next));
        assert_eq!(carousel.current_offset(), 4.0 * PITCH);

        // Measured now, so the default no-remeasure rule applies again
        assert!(!carousel.on_resize(168.0));
        assert_eq!(carousel.pitch(), PITCH);
    }

    #[test]
    fn test_set_items_resets_to_new_start() {
        let mut h = Harness::new(12, WrapRule::LastRealCard);
        h.click(Direction::Next);
        assert_eq!(h.offset(), 4.0 * PITCH);

        // Same list: ignored
        let same = Arc::clone(h.carousel.items());
        h.carousel.set_items(same);
        assert_eq!(h.offset(), 4.0 * PITCH);

        let two: Arc<[usize]> = vec![7, 8].into();
        h.carousel.set_items(two);
        h.drain();
        assert_eq!(h.carousel.sequence().unwrap().len(), 6);
        assert_eq!(h.offset(), 2.0 * PITCH);
        assert_eq!(h.carousel.leading_item(), Some(&7));
    }

    #[test]
    fn test_resize_keeps_measurement_by_default() {
        let mut h = Harness::new(12, WrapRule::LastRealCard);
        assert!(!h.carousel.on_resize(168.0));
        assert_eq!(h.carousel.pitch(), PITCH);
    }

    #[test]
    fn test_resize_remeasures_when_enabled() {
        let config = CarouselConfig {
            remeasure_on_resize: true,
            ..Default::default()
        };
        let items: Arc<[usize]> = (0..12).collect::<Vec<_>>().into();
        let mut carousel = Carousel::new(items, ImmediateViewport::default(), &config);
        carousel.mount(CARD);
        carousel
            .viewport_mut()
            .scroll_to(5.0 * PITCH, ScrollBehavior::Instant);

        assert!(carousel.on_resize(168.0));
        assert_eq!(carousel.pitch(), 200.0);
        assert_eq!(carousel.current_offset(), 1000.0);
    }

    #[test]
    fn test_listeners_see_notifications_until_unmount() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let mut h = Harness::new(12, WrapRule::LastRealCard);
        let sink = Rc::clone(&seen);
        h.carousel
            .on_offset_changed(move |offset| sink.borrow_mut().push(offset));

        h.click(Direction::Next);
        h.carousel.unmount();
        h.carousel
            .viewport_mut()
            .scroll_to(9.0 * PITCH, ScrollBehavior::Instant);
        h.drain();

        assert_eq!(*seen.borrow(), vec![4.0 * PITCH]);
    }

    #[test]
    fn test_pending_release_discarded_after_unmount() {
        let mut h = Harness::new(12, WrapRule::LastRealCard);
        h.carousel
            .viewport_mut()
            .scroll_to(700.0, ScrollBehavior::Instant);
        h.drain();
        assert!(h.carousel.policy().is_correcting());

        h.carousel.unmount();
        assert!(!h.carousel.policy().is_correcting());
        h.wait(500);
        assert_eq!(h.carousel.lifecycle(), Lifecycle::Unmounted);
        assert!(!h.carousel.advance(Direction::Next));
        assert!(!h.carousel.mount(CARD));
    }
}

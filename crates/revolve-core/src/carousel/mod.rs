//! Headless engine for a seamless, infinitely looping horizontal carousel
//!
//! A finite list is padded with clones on both ends and laid out as one
//! scrollable strip. Whenever the offset drifts into the clones it is
//! snapped, without animation, to the equivalent offset among the real
//! cards, which renders identically. Any driver (drag, wheel, buttons)
//! only moves the offset; the snapping reacts to the resulting scroll
//! notifications.
//!
//! # Layers
//!
//! - `sequence` - pads the list (`last k ++ list ++ first k`)
//! - `geometry` - pitch and boundary arithmetic
//! - `viewport` - the scrollable region the carousel drives
//! - `tracker` - card measurement and scroll notification fan-out
//! - `guard` - boundary correction policy (`Stable` / `Correcting`)
//! - `navigation` - previous/next steps of one pitch
//! - `controller` - `Carousel`, tying the above together
//!
//! # Usage
//!
//! ```ignore
//! let mut carousel = Carousel::new(items, viewport, &config.carousel);
//!
//! // After the first layout pass
//! carousel.mount(card_width);
//!
//! // In the event loop
//! for _ in viewport_notifications {
//!     carousel.on_scroll(now);
//! }
//! carousel.tick(now);
//! ```

pub mod controller;
pub mod geometry;
pub mod guard;
pub mod navigation;
pub mod sequence;
pub mod tracker;
pub mod viewport;

pub use controller::{Carousel, Lifecycle};
pub use geometry::{pitch, Boundaries, CARD_GAP};
pub use guard::{snap_target, Correction, CorrectionPolicy, GuardState};
pub use navigation::Direction;
pub use sequence::{normalize, Normalizer, PaddedSequence, Slot, SlotKey, SlotKind};
pub use tracker::ScrollTracker;
pub use viewport::{ScrollBehavior, Viewport};

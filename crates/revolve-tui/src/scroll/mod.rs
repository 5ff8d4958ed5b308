//! Smooth scrolling for the carousel strip
//!
//! ## L4 Atomic Layer
//! - `easing` - Pure easing functions (cubic, quintic, exponential)
//! - `timing` - Time calculation utilities (progress, interpolation)
//! - `config` - Derived values on top of `revolve_core::ScrollConfig`
//!
//! ## L3 Molecular Layer
//! - `animation` - Animation controller combining atoms
//!
//! # Usage
//!
//! ```ignore
//! use std::time::Instant;
//! use revolve_tui::scroll::ScrollAnimator;
//!
//! let mut animator = ScrollAnimator::default();
//! animator.scroll_by(400.0, max_offset, Instant::now());
//!
//! // In main loop
//! let offset = animator.update(max_offset, Instant::now());
//! ```

// L4 Atomic Layer
pub mod config;
pub mod easing;
pub mod timing;

// L3 Molecular Layer
pub mod animation;

pub use animation::ScrollAnimator;
pub use config::{ScrollConfig, ScrollConfigExt};
pub use easing::{EasingType, EasingTypeExt};

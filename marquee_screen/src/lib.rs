// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Screen: a controller that keeps a fixed-design-resolution stage
//! fitted to a live viewport.
//!
//! Dashboards and kiosk screens are authored at one design resolution (for
//! example 1920×1080) and shown on displays of arbitrary size. This crate
//! provides [`StageController`], which continuously rescales and recenters
//! the stage so proportions are preserved, staying synchronized against
//! three independent change sources:
//!
//! - host viewport resizes,
//! - external mutations of the stage's inline `style` attribute, and
//! - reactivation after the stage was kept alive offscreen.
//!
//! Resize and mutation triggers are collapsed by a trailing-edge debounce
//! so bursts cost one recomputation; reactivation reapplies the scale
//! immediately. The scaling math lives in [`marquee_fit`]; the debounce in
//! [`marquee_debounce`].
//!
//! The controller is headless and host-agnostic. It does **not** own
//! elements, event listeners, observers, or a clock. Hosts implement
//! [`StageHost`] over their element/window handles and are responsible for:
//!
//! - Calling [`StageController::mount`] when the stage element exists, and
//!   [`StageController::layout_settled`] after the **next** render/layout
//!   pass (measuring earlier reads zero sizes — this ordering is a hard
//!   contract).
//! - Forwarding resize events to [`StageController::viewport_resized`] and
//!   attribute-mutation notifications to
//!   [`StageController::attribute_mutated`], with monotonic millisecond
//!   timestamps of any epoch.
//! - Scheduling one timeout per returned deadline and calling
//!   [`StageController::poll`] when it elapses.
//! - Calling [`StageController::reactivated`] when a kept-alive stage is
//!   shown again, and [`StageController::unmount`] on teardown.
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use marquee_screen::{StageConfig, StageController, StageHost};
//!
//! // A toy host: a 1600x1000 window showing a 1920x1080 design.
//! struct Host {
//!     scale: (f64, f64),
//!     margin: (f64, f64),
//!     size: Size,
//!     overflow: String,
//! }
//!
//! impl StageHost for Host {
//!     fn viewport_size(&self) -> Size {
//!         Size::new(1600.0, 1000.0)
//!     }
//!     fn screen_size(&self) -> Size {
//!         Size::new(1920.0, 1080.0)
//!     }
//!     fn stage_size(&self) -> Size {
//!         self.size
//!     }
//!     fn set_stage_size(&mut self, size: Size) {
//!         self.size = size;
//!     }
//!     fn set_stage_scale(&mut self, x: f64, y: f64) {
//!         self.scale = (x, y);
//!     }
//!     fn set_stage_margin(&mut self, vertical: f64, horizontal: f64) {
//!         self.margin = (vertical, horizontal);
//!     }
//!     fn overflow(&self) -> String {
//!         self.overflow.clone()
//!     }
//!     fn set_overflow(&mut self, overflow: &str) {
//!         self.overflow = overflow.into();
//!     }
//! }
//!
//! let mut host = Host {
//!     scale: (1.0, 1.0),
//!     margin: (0.0, 0.0),
//!     size: Size::ZERO,
//!     overflow: "auto".into(),
//! };
//!
//! let mut controller = StageController::new(StageConfig::default());
//! controller.mount(&mut host);
//! // ... one host layout pass later:
//! controller.layout_settled(&mut host);
//!
//! // Width is the tighter axis: 1600/1920. The spare height is centered.
//! assert_eq!(host.scale, (1600.0 / 1920.0, 1600.0 / 1920.0));
//! assert!((host.margin.0 - 50.0).abs() < 1e-9);
//! assert!(host.margin.1.abs() < 1e-9);
//! assert_eq!(host.overflow, "hidden");
//!
//! controller.unmount(&mut host);
//! assert_eq!(host.overflow, "auto");
//! ```
//!
//! ## Zero-size frames
//!
//! Measuring a stage whose content has not rendered yet yields a zero size
//! and, downstream, a non-finite scale. This is deliberately left visible
//! rather than clamped: each trigger recomputes from fresh measurements, so
//! the next resize or mutation corrects the frame. See the
//! [`marquee_fit`] crate docs for the full rationale.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod apply;
mod config;
mod controller;
mod host;
mod watcher;

pub use apply::{apply_plan, apply_size};
pub use config::StageConfig;
pub use controller::{StageController, StageDebugInfo, StagePhase};
pub use host::StageHost;
pub use watcher::StyleWatcher;

// Re-exported so hosts can describe a [`StageConfig`] with one import.
pub use marquee_fit::{Centering, FitStrategy, ScalePlan};

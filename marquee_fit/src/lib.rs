// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Marquee Fit: design-resolution fit math.
//!
//! This crate provides the headless math used to scale a stage authored at a
//! fixed design resolution (for example 1920×1080) into a live viewport of a
//! different size. It focuses on:
//! - Per-axis and uniform (aspect-preserving) scale factors.
//! - Centering margins, clamped so content pinned against an edge never
//!   produces negative offsets.
//! - Resolving which reference dimensions to scale against: an authored
//!   design size, a measured element size, or the host display resolution.
//!
//! It does **not** touch any element, window, or clock. Callers are expected
//! to:
//! - Measure the live viewport and stage themselves.
//! - Feed measurements into [`compute_plan`] and [`centering_margins`].
//! - Write the resulting transform and margins back through whatever style
//!   mechanism their host provides (see the `marquee_screen` crate for a
//!   ready-made controller).
//!
//! ## Minimal example
//!
//! ```rust
//! use kurbo::Size;
//! use marquee_fit::{compute_plan, Centering, FitStrategy, ScalePlan};
//!
//! // A 1920x1080 design shown in a 1600x900 viewport.
//! let live = Size::new(1600.0, 900.0);
//! let reference = Size::new(1920.0, 1080.0);
//!
//! let plan = compute_plan(live, reference, FitStrategy::Contain, Centering::Uniform);
//! match plan {
//!     ScalePlan::Uniform { scale } => assert!((scale - 1600.0 / 1920.0).abs() < 1e-12),
//!     _ => unreachable!(),
//! }
//! ```
//!
//! ## Zero-size measurements
//!
//! A reference dimension of zero (an element measured before host layout has
//! settled) is deliberately **not** special-cased: the resulting factor is
//! non-finite, exactly as dividing by a zero client size behaves in the DOM.
//! The defect is visual, not fatal, and the next recomputation from fresh
//! measurements corrects it. See [`compute_plan`] for details.
//!
//! This crate is `no_std`.

#![no_std]

mod modes;
mod resolve;
mod scale;

pub use modes::{Centering, FitStrategy};
pub use resolve::{is_resolved, reference_size, resolve_design_size, resolve_stage_size};
pub use scale::{ScalePlan, axis_factors, centering_margins, compute_plan};

// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The host environment surface consumed by the controller.

use alloc::string::String;

use kurbo::Size;

/// Host environment for one mounted stage.
///
/// Implementations wrap whatever the host UI stack provides: a DOM element
/// plus `window`/`document.body` in a browser, a native window and widget in
/// a desktop toolkit, or a plain struct in tests. The controller is the only
/// writer of the stage's style by contract (an external contract, not
/// enforced here); the same host may freely serve reads.
///
/// All sizes are content-box extents in logical pixels.
pub trait StageHost {
    /// Current viewport content-box size (for example `document.body`).
    fn viewport_size(&self) -> Size;

    /// Native resolution of the host display.
    ///
    /// Used only as the final fallback for the design resolution when the
    /// stage was neither configured nor measurably laid out.
    fn screen_size(&self) -> Size;

    /// Measured content-box size of the stage element.
    ///
    /// May legitimately be zero before host layout has settled; the
    /// controller tolerates a zero-size frame and corrects on the next
    /// trigger.
    fn stage_size(&self) -> Size;

    /// Writes a pixel width/height onto the stage element.
    fn set_stage_size(&mut self, size: Size);

    /// Writes a scale transform with independent axis factors onto the
    /// stage element. Uniform scaling passes the same factor twice.
    fn set_stage_scale(&mut self, x: f64, y: f64);

    /// Writes the stage margins, vertical then horizontal (the CSS
    /// two-value `margin` shorthand order).
    fn set_stage_margin(&mut self, vertical: f64, horizontal: f64);

    /// Reads the ambient overflow style the controller may temporarily
    /// override (for example `document.body.style.overflow`).
    fn overflow(&self) -> String;

    /// Writes the ambient overflow style.
    fn set_overflow(&mut self, overflow: &str);
}

// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Style application: writes sizes, transforms, and margins onto the stage.
//!
//! These helpers are the only code that mutates the stage. They write
//! absolute values (never deltas), so reapplying the same plan is
//! idempotent: a redundant pass — say, the watcher reacting to the
//! applier's own writes — converges on the same final style instead of
//! compounding.

use kurbo::Size;
use marquee_fit::{Centering, ScalePlan, centering_margins, is_resolved};

use crate::host::StageHost;

/// Writes the stage's pixel size: the resolved stage size when both
/// dimensions are non-zero, else the resolved design size.
pub fn apply_size<H: StageHost>(host: &mut H, stage_size: Size, design_size: Size) {
    if is_resolved(stage_size) {
        host.set_stage_size(stage_size);
    } else {
        host.set_stage_size(design_size);
    }
}

/// Applies a scale plan to the stage.
///
/// - [`ScalePlan::Stretch`] writes the per-axis transform and nothing else;
///   centering is not applicable to a stage that fills the viewport.
/// - [`ScalePlan::Uniform`] writes the uniform transform, then measures the
///   stage's natural size and the live viewport and writes the clamped
///   centering margins, vertical before horizontal.
/// - [`ScalePlan::Keep`] writes nothing; the stage keeps its natural size.
pub fn apply_plan<H: StageHost>(host: &mut H, plan: ScalePlan, centering: Centering) {
    match plan {
        ScalePlan::Keep => {}
        ScalePlan::Stretch { x, y } => host.set_stage_scale(x, y),
        ScalePlan::Uniform { scale } => {
            let natural = host.stage_size();
            host.set_stage_scale(scale, scale);
            let viewport = host.viewport_size();
            let (mx, my) = centering_margins(viewport, natural, scale, centering);
            host.set_stage_margin(my, mx);
        }
    }
}

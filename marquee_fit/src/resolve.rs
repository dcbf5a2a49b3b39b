// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Reference-dimension resolution: configured size, measured size, or the
//! host display resolution.

use kurbo::Size;

/// Returns `true` when both dimensions of `size` are non-zero.
///
/// A size with a zero dimension is treated as unresolved throughout this
/// crate: it either was never configured or was measured before host layout
/// settled.
#[must_use]
pub fn is_resolved(size: Size) -> bool {
    size.width != 0.0 && size.height != 0.0
}

/// Resolves the stage's target size for one pass.
///
/// A fully specified `configured` size wins; otherwise the stage's measured
/// content box is used as-is. A zero `measured` size (element not laid out
/// yet, content still loading) is returned unchanged — no error is raised at
/// this layer and callers must tolerate a zero-size frame until the next
/// trigger remeasures.
///
/// This must only be called after host layout has settled (one deferred
/// render pass after mounting); calling it earlier is the most common source
/// of zero measurements. That ordering is the caller's contract, not an
/// optimization.
#[must_use]
pub fn resolve_stage_size(configured: Option<Size>, measured: Size) -> Size {
    match configured {
        Some(size) if is_resolved(size) => size,
        _ => measured,
    }
}

/// Returns the reference size the scale is computed against: the resolved
/// stage size, falling back to the design size per axis.
///
/// The fallback is per-axis, not all-or-nothing: a stage with only one
/// resolved dimension borrows the other from the design resolution.
#[must_use]
pub fn reference_size(stage: Size, design: Size) -> Size {
    Size::new(
        if stage.width != 0.0 {
            stage.width
        } else {
            design.width
        },
        if stage.height != 0.0 {
            stage.height
        } else {
            design.height
        },
    )
}

/// Resolves the design (reference) resolution, at most once.
///
/// While `current` still has a zero dimension the host display's native
/// resolution is substituted; once resolved, `current` is returned unchanged
/// forever, even if later calls observe a different `screen`. Callers store
/// the result back, so the guard is simply "only recompute while
/// unresolved".
#[must_use]
pub fn resolve_design_size(current: Size, screen: Size) -> Size {
    if is_resolved(current) { current } else { screen }
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{is_resolved, reference_size, resolve_design_size, resolve_stage_size};

    #[test]
    fn configured_size_wins_when_fully_specified() {
        let configured = Some(Size::new(1920.0, 1080.0));
        let measured = Size::new(800.0, 600.0);
        assert_eq!(
            resolve_stage_size(configured, measured),
            Size::new(1920.0, 1080.0)
        );
    }

    #[test]
    fn partial_configuration_falls_back_to_measurement() {
        let measured = Size::new(800.0, 600.0);
        assert_eq!(
            resolve_stage_size(Some(Size::new(1920.0, 0.0)), measured),
            measured
        );
        assert_eq!(resolve_stage_size(None, measured), measured);
    }

    #[test]
    fn zero_measurement_is_tolerated() {
        // Measuring before layout settles yields zero; the resolver passes it
        // through rather than erroring.
        assert_eq!(resolve_stage_size(None, Size::ZERO), Size::ZERO);
    }

    #[test]
    fn design_size_resolves_once_from_screen() {
        let screen = Size::new(2560.0, 1440.0);

        // Unresolved: fall back to the display resolution.
        let resolved = resolve_design_size(Size::ZERO, screen);
        assert_eq!(resolved, screen);

        // Resolved: later calls never overwrite, even with a new screen.
        let unchanged = resolve_design_size(resolved, Size::new(1024.0, 768.0));
        assert_eq!(unchanged, screen);
    }

    #[test]
    fn reference_falls_back_per_axis() {
        let design = Size::new(1920.0, 1080.0);
        assert_eq!(
            reference_size(Size::new(800.0, 600.0), design),
            Size::new(800.0, 600.0)
        );
        assert_eq!(reference_size(Size::ZERO, design), design);
        assert_eq!(
            reference_size(Size::new(800.0, 0.0), design),
            Size::new(800.0, 1080.0)
        );
    }

    #[test]
    fn either_zero_dimension_counts_as_unresolved() {
        assert!(!is_resolved(Size::new(1920.0, 0.0)));
        assert!(!is_resolved(Size::new(0.0, 1080.0)));
        assert!(is_resolved(Size::new(1.0, 1.0)));
    }
}

// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Size;

use crate::modes::{Centering, FitStrategy};

/// The scaling decision for one recomputation pass.
///
/// A plan is a pure value: applying it (writing transforms and margins onto
/// an element) is the caller's job, which keeps application idempotent —
/// applying the same plan twice yields the same final style.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScalePlan {
    /// Leave the stage at its natural size; write nothing.
    Keep,
    /// Scale both axes by `scale` and center via [`centering_margins`].
    Uniform {
        /// The uniform factor, `min` of the two axis ratios.
        scale: f64,
    },
    /// Scale each axis by its own factor; no margins apply.
    Stretch {
        /// Horizontal factor.
        x: f64,
        /// Vertical factor.
        y: f64,
    },
}

/// Returns the per-axis ratios of `live` to `reference`.
///
/// A zero `reference` dimension produces a non-finite factor. This is
/// intentionally not clamped: the zero comes from measuring an element
/// before host layout settled, the mis-scale is visible rather than fatal,
/// and the next recomputation from fresh measurements corrects it.
#[must_use]
pub fn axis_factors(live: Size, reference: Size) -> (f64, f64) {
    (
        live.width / reference.width,
        live.height / reference.height,
    )
}

/// Computes the scaling plan for one pass.
///
/// - [`FitStrategy::Stretch`] always stretches, independently per axis,
///   even when `centering` is [`Centering::Disabled`].
/// - [`FitStrategy::Contain`] picks the smaller axis ratio so the whole
///   stage fits, unless `centering` is [`Centering::Disabled`], in which
///   case no scaling happens at all ([`ScalePlan::Keep`]).
///
/// # Example
///
/// ```
/// use kurbo::Size;
/// use marquee_fit::{compute_plan, Centering, FitStrategy, ScalePlan};
///
/// let plan = compute_plan(
///     Size::new(1000.0, 450.0),
///     Size::new(800.0, 600.0),
///     FitStrategy::Stretch,
///     Centering::Uniform,
/// );
/// assert_eq!(plan, ScalePlan::Stretch { x: 1.25, y: 0.75 });
/// ```
#[must_use]
pub fn compute_plan(
    live: Size,
    reference: Size,
    fit: FitStrategy,
    centering: Centering,
) -> ScalePlan {
    let (x, y) = axis_factors(live, reference);
    match fit {
        FitStrategy::Stretch => ScalePlan::Stretch { x, y },
        FitStrategy::Contain => {
            if centering == Centering::Disabled {
                ScalePlan::Keep
            } else {
                ScalePlan::Uniform { scale: x.min(y) }
            }
        }
    }
}

/// Computes the `(horizontal, vertical)` margins that center a stage of
/// `natural` size, scaled by `scale`, inside `viewport`.
///
/// Margins are never negative: when the scaled stage overflows an axis the
/// margin clamps to zero rather than pulling content off-screen. An axis
/// disabled through [`Centering::PerAxis`] gets a zero margin regardless of
/// the computed value, pinning the stage to that edge.
#[must_use]
pub fn centering_margins(
    viewport: Size,
    natural: Size,
    scale: f64,
    centering: Centering,
) -> (f64, f64) {
    let mut mx = ((viewport.width - natural.width * scale) / 2.0).max(0.0);
    let mut my = ((viewport.height - natural.height * scale) / 2.0).max(0.0);
    match centering {
        Centering::Disabled => {
            mx = 0.0;
            my = 0.0;
        }
        Centering::Uniform => {}
        Centering::PerAxis { x, y } => {
            if !x {
                mx = 0.0;
            }
            if !y {
                my = 0.0;
            }
        }
    }
    (mx, my)
}

#[cfg(test)]
mod tests {
    use kurbo::Size;

    use super::{ScalePlan, axis_factors, centering_margins, compute_plan};
    use crate::modes::{Centering, FitStrategy};

    #[test]
    fn contain_picks_the_tighter_axis() {
        // 1600/1920 = 0.8333..., 900/1080 = 0.8333...: exact fit ratio.
        let plan = compute_plan(
            Size::new(1600.0, 900.0),
            Size::new(1920.0, 1080.0),
            FitStrategy::Contain,
            Centering::Uniform,
        );
        let ScalePlan::Uniform { scale } = plan else {
            panic!("expected uniform plan, got {plan:?}");
        };
        assert!((scale - 1600.0 / 1920.0).abs() < 1e-12);

        // 1600/1920 < 1000/1080: width is the tighter constraint.
        let plan = compute_plan(
            Size::new(1600.0, 1000.0),
            Size::new(1920.0, 1080.0),
            FitStrategy::Contain,
            Centering::Uniform,
        );
        assert_eq!(plan, ScalePlan::Uniform { scale: 1600.0 / 1920.0 });
    }

    #[test]
    fn stretch_keeps_independent_factors() {
        let plan = compute_plan(
            Size::new(1000.0, 450.0),
            Size::new(800.0, 600.0),
            FitStrategy::Stretch,
            Centering::Uniform,
        );
        assert_eq!(plan, ScalePlan::Stretch { x: 1.25, y: 0.75 });
    }

    #[test]
    fn stretch_ignores_disabled_centering() {
        let plan = compute_plan(
            Size::new(1000.0, 450.0),
            Size::new(800.0, 600.0),
            FitStrategy::Stretch,
            Centering::Disabled,
        );
        assert_eq!(plan, ScalePlan::Stretch { x: 1.25, y: 0.75 });
    }

    #[test]
    fn contain_with_disabled_centering_keeps_natural_size() {
        let plan = compute_plan(
            Size::new(1600.0, 900.0),
            Size::new(1920.0, 1080.0),
            FitStrategy::Contain,
            Centering::Disabled,
        );
        assert_eq!(plan, ScalePlan::Keep);
    }

    #[test]
    fn margins_center_the_loose_axis_only() {
        // Width governs at 0.8333...; the height has 1000 - 1080 * 0.8333 = 100
        // spare pixels, so the vertical margin is 50 and horizontal is 0.
        let scale = 1600.0 / 1920.0;
        let (mx, my) = centering_margins(
            Size::new(1600.0, 1000.0),
            Size::new(1920.0, 1080.0),
            scale,
            Centering::Uniform,
        );
        assert!((mx - 0.0).abs() < 1e-9);
        assert!((my - 50.0).abs() < 1e-9);
    }

    #[test]
    fn exact_fit_has_zero_margins() {
        // 1600x900 is exactly 1920x1080 at 5/6 scale; up to float rounding
        // both margins are zero, and clamping keeps them non-negative.
        let scale = 1600.0 / 1920.0;
        let (mx, my) = centering_margins(
            Size::new(1600.0, 900.0),
            Size::new(1920.0, 1080.0),
            scale,
            Centering::Uniform,
        );
        assert!((0.0..1e-9).contains(&mx));
        assert!((0.0..1e-9).contains(&my));
    }

    #[test]
    fn margins_clamp_to_zero_when_content_overflows() {
        // Scale 1.0 of a 1920-wide stage in a 1600-wide viewport would give a
        // negative horizontal margin; it must clamp to zero instead.
        let (mx, my) = centering_margins(
            Size::new(1600.0, 2000.0),
            Size::new(1920.0, 1080.0),
            1.0,
            Centering::Uniform,
        );
        assert_eq!(mx, 0.0);
        assert!((my - 460.0).abs() < 1e-9);
    }

    #[test]
    fn per_axis_lock_forces_zero_margin() {
        let viewport = Size::new(2000.0, 2000.0);
        let natural = Size::new(1000.0, 1000.0);

        let (mx, my) = centering_margins(viewport, natural, 1.0, Centering::PerAxis {
            x: false,
            y: true,
        });
        assert_eq!(mx, 0.0);
        assert_eq!(my, 500.0);

        let (mx, my) = centering_margins(viewport, natural, 1.0, Centering::PerAxis {
            x: true,
            y: false,
        });
        assert_eq!(mx, 500.0);
        assert_eq!(my, 0.0);
    }

    #[test]
    fn zero_reference_propagates_non_finite_factors() {
        let (x, y) = axis_factors(Size::new(1600.0, 900.0), Size::ZERO);
        assert!(x.is_infinite());
        assert!(y.is_infinite());

        // The uniform plan carries the non-finite factor through unchanged.
        let plan = compute_plan(
            Size::new(1600.0, 900.0),
            Size::ZERO,
            FitStrategy::Contain,
            Centering::Uniform,
        );
        let ScalePlan::Uniform { scale } = plan else {
            panic!("expected uniform plan, got {plan:?}");
        };
        assert!(!scale.is_finite());
    }

    #[test]
    fn zero_live_size_yields_zero_scale() {
        let plan = compute_plan(
            Size::ZERO,
            Size::new(1920.0, 1080.0),
            FitStrategy::Contain,
            Centering::Uniform,
        );
        assert_eq!(plan, ScalePlan::Uniform { scale: 0.0 });
    }
}

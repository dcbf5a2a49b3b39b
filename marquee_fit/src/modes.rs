// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

/// How the stage is fitted into the live viewport.
///
/// This enum is consumed by [`crate::compute_plan`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum FitStrategy {
    /// Scale both axes by the same factor, the smaller of the two axis
    /// ratios, so the whole stage stays visible and aspect ratio is
    /// preserved. The tighter axis governs; the other axis gains margins.
    #[default]
    Contain,
    /// Scale each axis independently so the stage fills the viewport
    /// completely. Aspect ratio is not preserved and centering does not
    /// apply.
    Stretch,
}

/// Whether and how the fitted stage is centered inside the viewport.
///
/// This models a configuration surface that is either a single on/off switch
/// or a per-axis pair, as a tagged variant so that axis handling stays
/// exhaustive. It is consulted by [`crate::compute_plan`] and
/// [`crate::centering_margins`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Centering {
    /// Scaling is disabled entirely: under [`FitStrategy::Contain`] no
    /// transform is computed or applied and the stage keeps its natural
    /// size. ([`FitStrategy::Stretch`] ignores this switch and stretches
    /// regardless.)
    Disabled,
    /// Center the stage on both axes.
    #[default]
    Uniform,
    /// Center per axis. An axis set to `false` keeps a zero margin, pinning
    /// the stage to that edge instead of centering it.
    PerAxis {
        /// Center horizontally.
        x: bool,
        /// Center vertically.
        y: bool,
    },
}

impl From<bool> for Centering {
    /// Maps an on/off switch to the matching variant: `true` centers both
    /// axes, `false` disables scaling.
    fn from(enabled: bool) -> Self {
        if enabled { Self::Uniform } else { Self::Disabled }
    }
}

#[cfg(test)]
mod tests {
    use super::Centering;

    #[test]
    fn bool_conversion_matches_variants() {
        assert_eq!(Centering::from(true), Centering::Uniform);
        assert_eq!(Centering::from(false), Centering::Disabled);
    }
}

// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-mount stage configuration.

use kurbo::Size;
use marquee_debounce::Debounce;
use marquee_fit::{Centering, FitStrategy};

/// Configuration for one mounted stage. Immutable for the mount's lifetime.
///
/// The defaults describe the common kiosk case: a 1920×1080 design, uniform
/// aspect-preserving fit, centered on both axes, half-second debounce, and
/// the host's scrollbars hidden while mounted.
///
/// ```
/// use marquee_screen::{Centering, FitStrategy, StageConfig};
///
/// let config = StageConfig::default();
/// assert_eq!(config.design_size, Some(StageConfig::DEFAULT_DESIGN_SIZE));
/// assert_eq!(config.fit, FitStrategy::Contain);
/// assert_eq!(config.centering, Centering::Uniform);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StageConfig {
    /// Authored design resolution. `None` (or a zero dimension) means the
    /// stage's measured size is used instead.
    pub design_size: Option<Size>,
    /// Uniform fit versus independent per-axis stretch.
    pub fit: FitStrategy,
    /// Whether and how the fitted stage is centered; also the master switch
    /// that disables scaling entirely under [`FitStrategy::Contain`].
    pub centering: Centering,
    /// Trailing-edge debounce delay for resize and mutation triggers, in
    /// milliseconds. Non-positive values are coerced to
    /// [`Debounce::MIN_DELAY_MS`] at mount.
    pub debounce_ms: f64,
    /// Capture the host's ambient overflow style at mount, hide it, and
    /// restore it at unmount.
    pub hide_overflow: bool,
}

impl StageConfig {
    /// The default authored design resolution.
    pub const DEFAULT_DESIGN_SIZE: Size = Size::new(1920.0, 1080.0);

    /// A configuration that measures the stage instead of assuming an
    /// authored design resolution.
    #[must_use]
    pub fn measured() -> Self {
        Self {
            design_size: None,
            ..Self::default()
        }
    }
}

impl Default for StageConfig {
    fn default() -> Self {
        Self {
            design_size: Some(Self::DEFAULT_DESIGN_SIZE),
            fit: FitStrategy::Contain,
            centering: Centering::Uniform,
            debounce_ms: Debounce::DEFAULT_DELAY_MS,
            hide_overflow: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::StageConfig;

    #[test]
    fn measured_config_drops_the_design_size() {
        let config = StageConfig::measured();
        assert_eq!(config.design_size, None);
        // Everything else keeps the defaults.
        assert!(config.hide_overflow);
        assert_eq!(config.debounce_ms, 500.0);
    }
}

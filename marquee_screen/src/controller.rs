// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;

use kurbo::Size;
use marquee_debounce::Debounce;
use marquee_fit::{
    compute_plan, reference_size, resolve_design_size, resolve_stage_size,
};

use crate::apply;
use crate::config::StageConfig;
use crate::host::StageHost;
use crate::watcher::StyleWatcher;

/// Lifecycle phase of a [`StageController`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum StagePhase {
    /// Not mounted; no host resources are held.
    #[default]
    Unmounted,
    /// Mounted, waiting for the host's next layout pass before the initial
    /// measurement. Triggers are not accepted yet.
    AwaitingLayout,
    /// Initial pass complete; resize and mutation triggers are live and the
    /// style watcher exists.
    Active,
}

/// Controller that keeps a fixed-design-resolution stage fitted to a live
/// viewport.
///
/// The controller is a deterministic state machine driven entirely by host
/// callbacks; it owns no clock, no timers, and no element references. One
/// controller serves one stage. See the crate docs for the full host
/// protocol and a worked example.
///
/// Recomputation runs over a single logical state: idle, until a trigger
/// arms the debounce; pending, until the armed deadline expires; then one
/// synchronous resolve → compute → apply pass back to idle. Arming while
/// pending replaces the deadline (trailing edge), so a burst of triggers
/// produces exactly one pass, timed from the last of them.
#[derive(Clone, Debug)]
pub struct StageController {
    config: StageConfig,
    debounce: Debounce,
    phase: StagePhase,
    design_size: Size,
    stage_size: Size,
    watcher: Option<StyleWatcher>,
    saved_overflow: Option<String>,
}

impl StageController {
    /// Creates an unmounted controller for the given configuration.
    ///
    /// The configuration is fixed for the controller's lifetime; a
    /// non-positive `debounce_ms` is coerced to the debounce floor here.
    #[must_use]
    pub fn new(config: StageConfig) -> Self {
        Self {
            debounce: Debounce::new(config.debounce_ms),
            config,
            phase: StagePhase::default(),
            design_size: Size::ZERO,
            stage_size: Size::ZERO,
            watcher: None,
            saved_overflow: None,
        }
    }

    /// Returns the controller's configuration.
    #[must_use]
    pub fn config(&self) -> &StageConfig {
        &self.config
    }

    /// Returns the current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> StagePhase {
        self.phase
    }

    /// Returns the pending debounce deadline, if any.
    ///
    /// Hosts schedule one timeout per returned value and call
    /// [`StageController::poll`] when it elapses. Triggers return the fresh
    /// deadline directly, so polling this is only needed when the host
    /// drives time some other way.
    #[must_use]
    pub fn deadline(&self) -> Option<f64> {
        self.debounce.deadline()
    }

    /// Returns the style watcher, if the initial pass has completed.
    ///
    /// Hosts that own a real mutation observer attach it when this becomes
    /// `Some` and detach when the controller unmounts.
    #[must_use]
    pub fn watcher(&self) -> Option<&StyleWatcher> {
        self.watcher.as_ref()
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Mounts the controller: captures and hides the host's ambient
    /// overflow style (when configured), then waits for layout.
    ///
    /// No measurement happens here. The host must call
    /// [`StageController::layout_settled`] after its next render/layout
    /// pass; measuring before layout settles is the canonical source of
    /// zero-size failures, so the split is a hard contract, not an
    /// optimization.
    pub fn mount<H: StageHost>(&mut self, host: &mut H) {
        debug_assert!(
            self.phase == StagePhase::Unmounted,
            "mount called on a controller that is already mounted"
        );
        if self.phase != StagePhase::Unmounted {
            return;
        }
        if self.config.hide_overflow && self.saved_overflow.is_none() {
            self.saved_overflow = Some(host.overflow());
            host.set_overflow("hidden");
        }
        self.phase = StagePhase::AwaitingLayout;
    }

    /// Completes mounting after the host's layout has settled.
    ///
    /// Resolves dimensions, applies the initial size and scale, and only
    /// then creates the style watcher and starts accepting resize triggers.
    /// Creating the watcher any earlier would let it observe the applier's
    /// own initial writes.
    pub fn layout_settled<H: StageHost>(&mut self, host: &mut H) {
        debug_assert!(
            self.phase == StagePhase::AwaitingLayout,
            "layout_settled called outside the mount sequence"
        );
        if self.phase != StagePhase::AwaitingLayout {
            return;
        }
        self.recompute(host);
        self.watcher = Some(StyleWatcher::new());
        self.phase = StagePhase::Active;
    }

    /// Unmounts the controller: drops the watcher, cancels any pending
    /// recomputation, and restores the captured overflow style.
    ///
    /// Safe on every exit path and idempotent; a second call is a no-op.
    pub fn unmount<H: StageHost>(&mut self, host: &mut H) {
        self.watcher = None;
        self.debounce.cancel();
        if let Some(saved) = self.saved_overflow.take() {
            host.set_overflow(&saved);
        }
        self.phase = StagePhase::Unmounted;
    }

    // -------------------------------------------------------------------------
    // Triggers
    // -------------------------------------------------------------------------

    /// Notifies the controller that the host viewport resized.
    ///
    /// Arms (or re-arms) the debounce and returns the new deadline, which
    /// the host should schedule a timeout for. Returns `None` while the
    /// controller is not active: before the initial pass completes the
    /// resize listener does not exist yet, so early events fall through
    /// silently rather than being an error.
    pub fn viewport_resized(&mut self, now: f64) -> Option<f64> {
        if self.phase != StagePhase::Active {
            return None;
        }
        Some(self.debounce.arm(now))
    }

    /// Notifies the controller of an attribute mutation on the stage.
    ///
    /// Only mutations of the watched `style` attribute arm the debounce;
    /// anything else is ignored, which keeps unrelated attribute churn from
    /// triggering passes. The applier's own style writes do arrive here —
    /// the debounce window collapses them and the reapplied correction is
    /// idempotent, so the redundant pass is harmless.
    pub fn attribute_mutated(&mut self, attribute: &str, now: f64) -> Option<f64> {
        match &self.watcher {
            Some(watcher) if watcher.observes(attribute) => Some(self.debounce.arm(now)),
            _ => None,
        }
    }

    /// Runs the debounced pass if its deadline has expired.
    ///
    /// Returns `true` when a full resolve → size → scale pass ran. Stale
    /// timers from replaced deadlines return `false` and die quietly.
    pub fn poll<H: StageHost>(&mut self, host: &mut H, now: f64) -> bool {
        if !self.debounce.fire(now) {
            return false;
        }
        self.recompute(host);
        true
    }

    /// Handles reactivation after the stage was kept alive offscreen.
    ///
    /// Recomputes and applies the scale immediately — no debounce, and no
    /// re-resolution of dimensions: the stage was already measured, only
    /// the viewport may have changed while it was hidden.
    pub fn reactivated<H: StageHost>(&mut self, host: &mut H) {
        if !self.recompute_allowed() {
            return;
        }
        self.apply_scale(host);
    }

    // -------------------------------------------------------------------------
    // Recomputation
    // -------------------------------------------------------------------------

    fn recompute_allowed(&self) -> bool {
        debug_assert!(
            self.phase == StagePhase::Active,
            "recompute requested while the stage element is unavailable"
        );
        self.phase == StagePhase::Active
    }

    /// Full pass: resolve dimensions, apply size, apply scale.
    fn recompute<H: StageHost>(&mut self, host: &mut H) {
        self.design_size = resolve_design_size(self.design_size, host.screen_size());
        self.stage_size = resolve_stage_size(self.config.design_size, host.stage_size());
        apply::apply_size(host, self.stage_size, self.design_size);
        self.apply_scale(host);
    }

    /// Scale-only pass over the already-resolved dimensions.
    fn apply_scale<H: StageHost>(&mut self, host: &mut H) {
        let live = host.viewport_size();
        let reference = reference_size(self.stage_size, self.design_size);
        let plan = compute_plan(live, reference, self.config.fit, self.config.centering);
        apply::apply_plan(host, plan, self.config.centering);
    }

    /// Snapshot of the controller state for debugging and inspection.
    #[must_use]
    pub fn debug_info(&self) -> StageDebugInfo {
        StageDebugInfo {
            phase: self.phase,
            design_size: self.design_size,
            stage_size: self.stage_size,
            watching: self.watcher.is_some(),
            overflow_captured: self.saved_overflow.is_some(),
            deadline: self.debounce.deadline(),
        }
    }
}

/// Debug snapshot of a [`StageController`] state.
#[derive(Clone, Debug, PartialEq)]
pub struct StageDebugInfo {
    /// Current lifecycle phase.
    pub phase: StagePhase,
    /// Resolved design resolution (zero until resolved).
    pub design_size: Size,
    /// Last computed stage size (zero until resolved).
    pub stage_size: Size,
    /// Whether the style watcher currently exists.
    pub watching: bool,
    /// Whether an ambient overflow style is held for restoration.
    pub overflow_captured: bool,
    /// Pending debounce deadline, if armed.
    pub deadline: Option<f64>,
}

// Copyright 2026 the Marquee Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Ownership handle for the stage's attribute-mutation watcher.

/// Handle for a live attribute-mutation watcher on the stage element.
///
/// The controller holds at most one of these, created only after the
/// initial measurement pass completes and dropped at unmount, so "a watcher
/// exists" and "mutation notifications are acted on" stay the same fact.
/// Creating it earlier would let the watcher observe the applier's own
/// initial writes.
///
/// The watcher is filtered to the single attribute the controller corrects:
/// the inline `style`. The filter guards against unrelated attribute churn;
/// it deliberately does not guard against the applier's own style writes.
/// Those can re-trigger a pass, which the debounce window collapses and the
/// idempotent reapplication renders harmless.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StyleWatcher {
    filter: &'static str,
}

impl StyleWatcher {
    /// The only attribute whose mutations trigger recomputation.
    pub const WATCHED_ATTRIBUTE: &'static str = "style";

    pub(crate) fn new() -> Self {
        Self {
            filter: Self::WATCHED_ATTRIBUTE,
        }
    }

    /// Returns `true` when a mutation of `attribute` should trigger
    /// recomputation.
    #[must_use]
    pub fn observes(&self, attribute: &str) -> bool {
        attribute == self.filter
    }
}

#[cfg(test)]
mod tests {
    use super::StyleWatcher;

    #[test]
    fn only_style_mutations_pass_the_filter() {
        let watcher = StyleWatcher::new();
        assert!(watcher.observes("style"));
        assert!(!watcher.observes("class"));
        assert!(!watcher.observes("data-style"));
        assert!(!watcher.observes(""));
    }
}

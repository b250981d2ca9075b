//! Swipeable tab view paging state machine.
//!
//! The scene strip tracks a single absolute horizontal offset: `-width * n`
//! when settled at tab `n`, pointer-driven while dragging, eased during page
//! commits.  Releases either commit to a neighboring page or snap back; the
//! active index changes only when the commit animation completes.
//!
//! All distances are logical pixels; all time arrives as `Instant` parameters.

use std::time::{Duration, Instant};

use crate::core::animation::{AnimatedScalar, Easing};

/// Duration of page commit, snap-back, and tab-press animations.
pub const PAGE_ANIMATION: Duration = Duration::from_millis(200);

/// Exponent of the rubber-band compression at the first and last tab.
const EDGE_RESISTANCE_EXPONENT: f32 = 0.4;

/// Behavior switches covering the component's variants.
#[derive(Clone, Copy, Debug)]
pub struct TabViewOptions {
    /// Draw the sliding indicator under the tab bar items.
    pub show_indicator: bool,
    /// Let a single long swipe skip several pages instead of exactly one.
    pub allows_multi_page_jump: bool,
}

impl Default for TabViewOptions {
    fn default() -> Self {
        TabViewOptions {
            show_indicator: true,
            allows_multi_page_jump: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PagingPhase {
    Settled,
    Dragging,
    /// Easing toward `-width * target`; the index commits on completion.
    Animating { target: usize },
}

/// Compresses a translation at the strip's ends: `t / |t|^0.4`.
///
/// Output magnitude grows sublinearly, so pulling against the edge feels
/// progressively stiffer. Zero maps to zero.
pub fn edge_resistance(translation: f32) -> f32 {
    if translation == 0.0 {
        return 0.0;
    }
    translation / translation.abs().powf(EDGE_RESISTANCE_EXPONENT)
}

pub struct TabView {
    labels: Vec<String>,
    width: f32,
    options: TabViewOptions,
    active: usize,
    /// Absolute strip offset in logical pixels; `-width * active` at rest.
    translation: AnimatedScalar,
    phase: PagingPhase,
    /// Committed index changes not yet drained by the host.
    pending_changes: Vec<usize>,
}

impl TabView {
    pub fn new(labels: Vec<String>, width: f32, options: TabViewOptions) -> TabView {
        TabView {
            labels,
            width: width.max(1.0),
            options,
            active: 0,
            translation: AnimatedScalar::new(0.0),
            phase: PagingPhase::Settled,
            pending_changes: Vec::new(),
        }
    }

    pub fn labels(&self) -> &[String] {
        &self.labels
    }

    pub fn tab_count(&self) -> usize {
        self.labels.len()
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn options(&self) -> TabViewOptions {
        self.options
    }

    /// Re-snaps the strip when the viewport width changes (window resize).
    /// Any in-flight gesture or settle is dropped.
    pub fn set_viewport_width(&mut self, width: f32) {
        self.width = width.max(1.0);
        self.translation.set(-self.width * self.active as f32);
        self.phase = PagingPhase::Settled;
    }

    /// Absolute strip offset at `now`.
    pub fn translation_x(&self, now: Instant) -> f32 {
        self.translation.value(now)
    }

    /// Normalized paging position in `[0, tab_count-1]`: 0 at the first tab,
    /// fractional between neighbors. Drives the tab bar indicator and fades.
    pub fn transition(&self, now: Instant) -> f32 {
        if self.labels.is_empty() {
            return 0.0;
        }
        let max = (self.labels.len() - 1) as f32;
        (self.translation.value(now).abs() / self.width).clamp(0.0, max)
    }

    /// Feeds a horizontal drag translation.
    ///
    /// At the first tab a rightward pull (and at the last tab a leftward
    /// pull) is compressed by [`edge_resistance`].  Drags are rejected while
    /// a commit or snap-back animation is still running.
    pub fn drag_change(&mut self, translation_x: f32) {
        if matches!(self.phase, PagingPhase::Animating { .. }) || self.labels.is_empty() {
            return;
        }
        self.phase = PagingPhase::Dragging;

        let at_first = self.active == 0 && translation_x > 0.0;
        let at_last = self.active == self.labels.len() - 1 && translation_x < 0.0;
        let translation = if at_first || at_last {
            edge_resistance(translation_x)
        } else {
            translation_x
        };

        self.translation
            .set(-self.width * self.active as f32 + translation);
    }

    /// Ends the drag: commits to a neighboring page when the drag covered
    /// more than half the viewport and the offset is still inside the valid
    /// page range, otherwise snaps back to the current page.
    pub fn drag_end(&mut self, translation_x: f32, now: Instant) {
        if self.phase != PagingPhase::Dragging {
            return;
        }

        let offset = self.translation.value(now);
        let in_range = offset < 0.0 && offset > -((self.labels.len() - 1) as f32) * self.width;

        let target = if translation_x.abs() > self.width / 2.0 && in_range {
            let pages = if self.options.allows_multi_page_jump {
                ((translation_x.abs() / self.width).round() as usize).max(1)
            } else {
                1
            };
            if translation_x < 0.0 {
                (self.active + pages).min(self.labels.len() - 1)
            } else {
                self.active.saturating_sub(pages)
            }
        } else {
            self.active
        };

        self.animate_to_page(target, Easing::EaseOutQuart, now);
    }

    /// Selects a tab directly (tab bar press).
    pub fn select(&mut self, index: usize, now: Instant) {
        if index >= self.labels.len() {
            return;
        }
        self.animate_to_page(index, Easing::EaseOutQuad, now);
    }

    fn animate_to_page(&mut self, target: usize, easing: Easing, now: Instant) {
        self.translation
            .animate_to(-self.width * target as f32, PAGE_ANIMATION, easing, now);
        self.phase = PagingPhase::Animating { target };
    }

    /// Advances the strip animation, committing the pending index change on
    /// completion. Returns whether more frames are needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.translation.tick(now) {
            if let PagingPhase::Animating { target } = self.phase {
                if target != self.active {
                    self.active = target;
                    self.pending_changes.push(target);
                }
            }
            self.phase = PagingPhase::Settled;
        }
        self.translation.is_animating()
    }

    /// Whether a commit or snap-back animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.translation.is_animating()
    }

    /// Drains one committed index change, oldest first. Each committed change
    /// is reported exactly once.
    pub fn take_committed_change(&mut self) -> Option<usize> {
        if self.pending_changes.is_empty() {
            None
        } else {
            Some(self.pending_changes.remove(0))
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_tabs.rs"]
mod tests;

//! Time-driven scalar animation.
//!
//! Every component interaction funnels into a single [`AnimatedScalar`]: the
//! value is written directly while a drag is active, then eased toward a
//! resting target once the gesture ends.  Nothing here reads the clock on its
//! own; callers pass `Instant`s in, so the whole module runs headlessly in
//! tests.

use std::time::{Duration, Instant};

/// Easing curves used by settle animations.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Easing {
    Linear,
    /// Quadratic ease-out: fast start, smooth deceleration.
    EaseOutQuad,
    /// Quartic ease-out: the paging curve, decelerates harder.
    EaseOutQuart,
}

impl Easing {
    pub fn apply(self, t: f32) -> f32 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Easing::Linear => t,
            Easing::EaseOutQuad => 1.0 - (1.0 - t) * (1.0 - t),
            Easing::EaseOutQuart => 1.0 - (1.0 - t).powi(4),
        }
    }
}

/// A single interpolation from `from` to `to` over a fixed duration.
#[derive(Clone, Copy, Debug)]
struct Timing {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
    easing: Easing,
}

impl Timing {
    fn value_at(&self, now: Instant) -> f32 {
        if self.duration.is_zero() {
            return self.to;
        }
        let elapsed = now.saturating_duration_since(self.started);
        if elapsed >= self.duration {
            return self.to;
        }
        let t = elapsed.as_secs_f32() / self.duration.as_secs_f32();
        self.from + (self.to - self.from) * self.easing.apply(t)
    }

    fn finished_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }
}

/// A scalar that is either written directly (active drag) or eased toward a
/// target by a running [`Timing`].
#[derive(Debug)]
pub struct AnimatedScalar {
    current: f32,
    timing: Option<Timing>,
}

impl AnimatedScalar {
    pub fn new(value: f32) -> Self {
        AnimatedScalar {
            current: value,
            timing: None,
        }
    }

    /// Writes the value immediately, cancelling any running animation.
    pub fn set(&mut self, value: f32) {
        self.timing = None;
        self.current = value;
    }

    /// Starts easing from the current value toward `target`.
    pub fn animate_to(&mut self, target: f32, duration: Duration, easing: Easing, now: Instant) {
        self.timing = Some(Timing {
            from: self.value(now),
            to: target,
            started: now,
            duration,
            easing,
        });
    }

    /// Current value, sampling any running animation at `now`.
    pub fn value(&self, now: Instant) -> f32 {
        match &self.timing {
            Some(timing) => timing.value_at(now),
            None => self.current,
        }
    }

    pub fn is_animating(&self) -> bool {
        self.timing.is_some()
    }

    /// Advances the scalar. Returns `true` exactly once, on the tick where a
    /// running animation completes.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(timing) = self.timing else {
            return false;
        };
        self.current = timing.value_at(now);
        if timing.finished_at(now) {
            self.current = timing.to;
            self.timing = None;
            true
        } else {
            false
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_animation.rs"]
mod tests;

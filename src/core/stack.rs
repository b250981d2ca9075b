//! Card stack drag state machine.
//!
//! The frontmost card of the stack is draggable.  Upward drag distance maps
//! onto a normalized progress scalar; on release the scalar either snaps back
//! (the card stays on top) or plays a long descend animation, after which the
//! card moves to the back of the visual stack (index 0 of the sequence).
//!
//! All distances are logical pixels; all time arrives as `Instant` parameters.

use std::time::{Duration, Instant};

use crate::core::animation::{AnimatedScalar, Easing};

/// Drag-distance ratio (relative to card height) at or above which a release
/// commits the card to the back of the stack.
pub const DESCEND_THRESHOLD: f32 = 1.02;

/// Settle duration when a release stays below the threshold.
pub const RETURN_DURATION: Duration = Duration::from_millis(40);

/// Settle duration when a release commits the card.
pub const DESCEND_DURATION: Duration = Duration::from_millis(500);

/// Parallax factor applied to the resting cards while a drag is active.
pub const PARALLAX_FACTOR: f32 = 0.02;

/// Diagonal offset between adjacent resting positions, in logical pixels.
pub const STACK_STEP: f32 = 3.2;

/// Default number of visibly offset cards.
pub const DEFAULT_VISIBLE_CARDS: usize = 4;

/// Minimum scale of a descending card.
const DESCEND_MIN_SCALE: f32 = 0.94;

/// A stack entry. Opaque to the machine apart from its identity.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Card {
    pub id: String,
}

impl Card {
    pub fn new(id: impl Into<String>) -> Card {
        Card { id: id.into() }
    }
}

/// Interaction phase of the stack.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DragPhase {
    Idle,
    /// Pointer down on the frontmost card, progress tracks the pointer.
    Drag,
    /// Released below the threshold; snapping back onto the stack.
    Return,
    /// Released at/above the threshold; descending behind the stack.
    Descend,
}

/// Visual transform for one card, derived from machine state.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CardTransform {
    pub translate_x: f32,
    pub translate_y: f32,
    pub scale: f32,
    /// False while the card descends behind the rest of the stack.
    pub on_top: bool,
}

impl CardTransform {
    const IDENTITY: CardTransform = CardTransform {
        translate_x: 0.0,
        translate_y: 0.0,
        scale: 1.0,
        on_top: true,
    };
}

pub struct StackList {
    cards: Vec<Card>,
    visible: usize,
    phase: DragPhase,
    dragged: Option<String>,
    /// Learned once from the first measured card; drag math is gated on it.
    item_height: Option<f32>,
    scalar: AnimatedScalar,
}

impl StackList {
    pub fn new(mut cards: Vec<Card>, visible: usize, reversed: bool) -> StackList {
        if reversed {
            cards.reverse();
        }
        StackList {
            cards,
            visible: visible.max(1),
            phase: DragPhase::Idle,
            dragged: None,
            item_height: None,
            scalar: AnimatedScalar::new(0.0),
        }
    }

    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    pub fn phase(&self) -> DragPhase {
        self.phase
    }

    /// The draggable card: last in the sequence.
    pub fn frontmost(&self) -> Option<&Card> {
        self.cards.last()
    }

    pub fn item_height(&self) -> Option<f32> {
        self.item_height
    }

    /// Records the measured card height. Only the first positive measurement
    /// is kept; later layout passes do not change the threshold math.
    pub fn set_item_height(&mut self, height: f32) {
        if self.item_height.is_none() && height > 0.0 {
            self.item_height = Some(height);
        }
    }

    /// Diagonal resting offset of the card at `index`, in logical pixels.
    ///
    /// Deeper cards collapse onto the same spot once more than `visible`
    /// cards are stacked.
    pub fn resting_offset(&self, index: usize) -> f32 {
        if index >= self.cards.len() {
            return 0.0;
        }
        let depth_from_front = self.cards.len() - index;
        (self.visible - self.visible.min(depth_from_front)) as f32 * STACK_STEP
    }

    /// Starts a drag on the card with the given id.
    ///
    /// Only the frontmost card accepts a drag, and only while the machine is
    /// idle: a gesture that begins before the previous settle finished is
    /// rejected outright.  Returns whether the drag was accepted.
    pub fn drag_begin(&mut self, id: &str) -> bool {
        if self.phase != DragPhase::Idle {
            return false;
        }
        let Some(front) = self.cards.last() else {
            return false;
        };
        if front.id != id {
            return false;
        }
        self.dragged = Some(front.id.clone());
        self.phase = DragPhase::Drag;
        true
    }

    /// Feeds a drag translation (vertical, logical pixels).
    ///
    /// Downward translations are dropped, not clamped.  Before the card
    /// height is measured no progress can be derived, so the event is
    /// ignored rather than dividing by nothing.
    pub fn drag_change(&mut self, translation_y: f64) {
        if self.phase != DragPhase::Drag || translation_y > 0.0 {
            return;
        }
        let Some(height) = self.item_height else {
            return;
        };
        let progress = (translation_y.abs() as f32 / height).min(DESCEND_THRESHOLD);
        self.scalar.set(progress);
    }

    /// Ends the drag and picks the outcome: snap back below the threshold,
    /// descend at or above it.
    ///
    /// A release with downward translation carries zero progress and settles
    /// as a return, so the machine never wedges in `Drag`.
    pub fn drag_end(&mut self, translation_y: f64, now: Instant) {
        if self.phase != DragPhase::Drag {
            return;
        }
        let ratio = match self.item_height {
            Some(height) if translation_y <= 0.0 => translation_y.abs() as f32 / height,
            _ => 0.0,
        };

        if ratio < DESCEND_THRESHOLD {
            self.phase = DragPhase::Return;
            self.scalar
                .animate_to(0.0, RETURN_DURATION, Easing::EaseOutQuad, now);
        } else {
            self.phase = DragPhase::Descend;
            self.scalar.set(DESCEND_THRESHOLD);
            self.scalar
                .animate_to(0.0, DESCEND_DURATION, Easing::EaseOutQuad, now);
        }
    }

    /// Advances the settle animation. Returns whether more frames are needed.
    ///
    /// When a descend settle completes, the dragged card moves to index 0; a
    /// missing id (card vanished mid-flight) is a silent no-op.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.scalar.tick(now) {
            match self.phase {
                DragPhase::Descend => {
                    self.move_dragged_to_back();
                    self.phase = DragPhase::Idle;
                    self.dragged = None;
                }
                DragPhase::Return => {
                    self.phase = DragPhase::Idle;
                    self.dragged = None;
                }
                DragPhase::Idle | DragPhase::Drag => {}
            }
        }
        self.scalar.is_animating()
    }

    pub fn scalar_value(&self, now: Instant) -> f32 {
        self.scalar.value(now)
    }

    /// Whether a settle animation is in flight.
    pub fn is_animating(&self) -> bool {
        self.scalar.is_animating()
    }

    /// Visual transform of the card at `index`, sampled at `now`.
    pub fn transform_for(&self, index: usize, now: Instant) -> CardTransform {
        if self.phase == DragPhase::Idle {
            return CardTransform::IDENTITY;
        }
        let height = self.item_height.unwrap_or(0.0);
        let scalar = self.scalar.value(now);

        let is_dragged = self
            .dragged
            .as_deref()
            .is_some_and(|id| self.cards.get(index).is_some_and(|c| c.id == id));

        if is_dragged {
            match self.phase {
                DragPhase::Drag | DragPhase::Return => CardTransform {
                    translate_y: -scalar * height,
                    ..CardTransform::IDENTITY
                },
                DragPhase::Descend => CardTransform {
                    translate_y: -scalar * height,
                    scale: scalar.clamp(DESCEND_MIN_SCALE, 1.0),
                    on_top: false,
                    ..CardTransform::IDENTITY
                },
                DragPhase::Idle => CardTransform::IDENTITY,
            }
        } else {
            // Small diagonal parallax on the resting cards while anything is
            // in flight.
            CardTransform {
                translate_x: PARALLAX_FACTOR * scalar * height,
                translate_y: -PARALLAX_FACTOR * scalar * height,
                ..CardTransform::IDENTITY
            }
        }
    }

    /// Moves the dragged card to index 0, preserving the relative order of
    /// the rest. Unknown ids leave the sequence untouched.
    fn move_dragged_to_back(&mut self) {
        let Some(id) = self.dragged.as_deref() else {
            return;
        };
        let Some(pos) = self.cards.iter().position(|c| c.id == id) else {
            return;
        };
        let card = self.cards.remove(pos);
        self.cards.insert(0, card);
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_stack.rs"]
mod tests;

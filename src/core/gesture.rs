//! Pan gesture recognition.
//!
//! Raw pointer press/move/release events come in; begin/change/end pan events
//! with cumulative translations come out.  A press is armed first and only
//! becomes a pan once the pointer travels past an activation threshold;
//! sub-threshold releases surface as taps so click targets keep working.

/// Minimum pointer movement to activate a pan, in the caller's units.
pub const PAN_ACTIVATION_THRESHOLD: f64 = 5.0;

/// Events emitted by [`PanRecognizer`].
///
/// `dx`/`dy` are cumulative translations from the press origin.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PanEvent {
    Begin,
    Change { dx: f64, dy: f64 },
    End { dx: f64, dy: f64 },
    /// Released without ever crossing the activation threshold.
    Tap { x: f64, y: f64 },
}

/// Single-pointer pan recognizer.
pub struct PanRecognizer {
    origin: Option<(f64, f64)>,
    current: (f64, f64),
    active: bool,
    threshold: f64,
}

impl PanRecognizer {
    pub fn new(threshold: f64) -> Self {
        PanRecognizer {
            origin: None,
            current: (0.0, 0.0),
            active: false,
            threshold,
        }
    }

    /// Arms the recognizer. A second press while armed restarts the gesture.
    pub fn press(&mut self, x: f64, y: f64) {
        self.origin = Some((x, y));
        self.current = (x, y);
        self.active = false;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Feeds a pointer move. Emits `Begin` on the move that crosses the
    /// activation threshold and `Change` on every move after that.
    pub fn motion(&mut self, x: f64, y: f64) -> Option<PanEvent> {
        let (ox, oy) = self.origin?;
        self.current = (x, y);
        let dx = x - ox;
        let dy = y - oy;

        if !self.active {
            if (dx * dx + dy * dy).sqrt() > self.threshold {
                self.active = true;
                return Some(PanEvent::Begin);
            }
            return None;
        }

        Some(PanEvent::Change { dx, dy })
    }

    /// Feeds the pointer release, concluding the gesture.
    pub fn release(&mut self, x: f64, y: f64) -> Option<PanEvent> {
        let (ox, oy) = self.origin.take()?;
        let was_active = self.active;
        self.active = false;

        if was_active {
            Some(PanEvent::End {
                dx: x - ox,
                dy: y - oy,
            })
        } else {
            Some(PanEvent::Tap { x, y })
        }
    }

    /// Drops any gesture in progress without emitting an event (focus loss,
    /// pointer leaving the window).
    pub fn cancel(&mut self) {
        self.origin = None;
        self.active = false;
    }
}

#[cfg(test)]
#[path = "../../tests/unit/core_gesture.rs"]
mod tests;

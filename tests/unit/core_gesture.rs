use super::{PAN_ACTIVATION_THRESHOLD, PanEvent, PanRecognizer};

fn recognizer() -> PanRecognizer {
    PanRecognizer::new(PAN_ACTIVATION_THRESHOLD)
}

#[test]
fn sub_threshold_release_is_a_tap() {
    let mut pan = recognizer();
    pan.press(100.0, 100.0);
    assert_eq!(pan.motion(102.0, 101.0), None);
    assert_eq!(
        pan.release(102.0, 101.0),
        Some(PanEvent::Tap { x: 102.0, y: 101.0 })
    );
}

#[test]
fn crossing_the_threshold_begins_a_pan() {
    let mut pan = recognizer();
    pan.press(100.0, 100.0);
    assert_eq!(pan.motion(100.0, 104.0), None);
    assert_eq!(pan.motion(100.0, 110.0), Some(PanEvent::Begin));
    assert!(pan.is_active());
    assert_eq!(
        pan.motion(100.0, 80.0),
        Some(PanEvent::Change { dx: 0.0, dy: -20.0 })
    );
    assert_eq!(
        pan.release(90.0, 70.0),
        Some(PanEvent::End { dx: -10.0, dy: -30.0 })
    );
    assert!(!pan.is_active());
}

#[test]
fn translations_are_cumulative_from_the_press_origin() {
    let mut pan = recognizer();
    pan.press(0.0, 0.0);
    pan.motion(0.0, -10.0);
    assert_eq!(
        pan.motion(3.0, -40.0),
        Some(PanEvent::Change { dx: 3.0, dy: -40.0 })
    );
}

#[test]
fn motion_without_a_press_is_ignored() {
    let mut pan = recognizer();
    assert_eq!(pan.motion(10.0, 10.0), None);
    assert_eq!(pan.release(10.0, 10.0), None);
}

#[test]
fn cancel_drops_the_gesture_silently() {
    let mut pan = recognizer();
    pan.press(0.0, 0.0);
    pan.motion(0.0, 20.0);
    pan.cancel();
    assert!(!pan.is_active());
    assert_eq!(pan.release(0.0, 30.0), None);
}

#[test]
fn second_press_restarts_the_gesture() {
    let mut pan = recognizer();
    pan.press(0.0, 0.0);
    pan.motion(0.0, 20.0);
    pan.press(50.0, 50.0);
    assert!(!pan.is_active());
    assert_eq!(pan.motion(52.0, 50.0), None);
}

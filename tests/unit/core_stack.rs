use std::time::Instant;

use super::{
    Card, DESCEND_DURATION, DESCEND_THRESHOLD, DragPhase, PARALLAX_FACTOR, RETURN_DURATION,
    StackList,
};

const HEIGHT: f32 = 120.0;

fn deck() -> StackList {
    let cards = (1..=6).map(|n| Card::new(n.to_string())).collect();
    let mut stack = StackList::new(cards, 4, false);
    stack.set_item_height(HEIGHT);
    stack
}

fn ids(stack: &StackList) -> Vec<&str> {
    stack.cards().iter().map(|c| c.id.as_str()).collect()
}

#[test]
fn full_drag_cycles_the_card_to_the_back() {
    let mut stack = deck();
    let now = Instant::now();
    let pull = -(HEIGHT as f64) * 1.05;

    assert!(stack.drag_begin("6"));
    stack.drag_change(pull);
    stack.drag_end(pull, now);
    assert_eq!(stack.phase(), DragPhase::Descend);

    stack.tick(now + DESCEND_DURATION);
    assert_eq!(stack.phase(), DragPhase::Idle);
    assert_eq!(ids(&stack), ["6", "1", "2", "3", "4", "5"]);
    assert_eq!(stack.frontmost().map(|c| c.id.as_str()), Some("5"));
}

#[test]
fn short_drag_snaps_back_in_place() {
    let mut stack = deck();
    let now = Instant::now();

    assert!(stack.drag_begin("6"));
    stack.drag_change(-60.0);
    stack.drag_end(-60.0, now);
    assert_eq!(stack.phase(), DragPhase::Return);

    stack.tick(now + RETURN_DURATION);
    assert_eq!(stack.phase(), DragPhase::Idle);
    assert_eq!(ids(&stack), ["1", "2", "3", "4", "5", "6"]);

    // A second aborted drag changes nothing either.
    let then = now + RETURN_DURATION;
    assert!(stack.drag_begin("6"));
    stack.drag_change(-90.0);
    stack.drag_end(-90.0, then);
    stack.tick(then + RETURN_DURATION);
    assert_eq!(ids(&stack), ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn downward_translation_carries_no_progress() {
    let mut stack = deck();
    let now = Instant::now();

    assert!(stack.drag_begin("6"));
    stack.drag_change(30.0);
    assert_eq!(stack.scalar_value(now), 0.0);

    stack.drag_end(30.0, now);
    assert_eq!(stack.phase(), DragPhase::Return);
    stack.tick(now + RETURN_DURATION);
    assert_eq!(ids(&stack), ["1", "2", "3", "4", "5", "6"]);
}

#[test]
fn only_the_frontmost_card_accepts_a_drag() {
    let mut stack = deck();
    assert!(!stack.drag_begin("3"));
    assert!(!stack.drag_begin("missing"));
    assert_eq!(stack.phase(), DragPhase::Idle);
}

#[test]
fn drag_is_rejected_while_a_settle_is_in_flight() {
    let mut stack = deck();
    let now = Instant::now();
    let pull = -(HEIGHT as f64) * 1.1;

    assert!(stack.drag_begin("6"));
    stack.drag_change(pull);
    stack.drag_end(pull, now);

    // The descend takes half a second; a new gesture during it is dropped.
    assert!(!stack.drag_begin("6"));
    stack.tick(now + DESCEND_DURATION);
    assert!(stack.drag_begin("5"));
}

#[test]
fn unmeasured_height_gates_drag_progress() {
    let cards = (1..=3).map(|n| Card::new(n.to_string())).collect();
    let mut stack = StackList::new(cards, 4, false);
    let now = Instant::now();

    assert!(stack.drag_begin("3"));
    stack.drag_change(-200.0);
    assert_eq!(stack.scalar_value(now), 0.0);
    stack.drag_end(-200.0, now);
    assert_eq!(stack.phase(), DragPhase::Return);
}

#[test]
fn progress_caps_at_the_descend_threshold() {
    let mut stack = deck();
    assert!(stack.drag_begin("6"));
    stack.drag_change(-10_000.0);
    assert_eq!(stack.scalar_value(Instant::now()), DESCEND_THRESHOLD);
}

#[test]
fn only_the_first_height_measurement_sticks() {
    let mut stack = deck();
    stack.set_item_height(999.0);
    assert_eq!(stack.item_height(), Some(HEIGHT));
}

#[test]
fn resting_offsets_step_by_depth_and_collapse_past_visible() {
    let stack = deck();
    assert_eq!(stack.resting_offset(5), 3.0 * super::STACK_STEP);
    assert_eq!(stack.resting_offset(4), 2.0 * super::STACK_STEP);
    assert_eq!(stack.resting_offset(2), 0.0);
    assert_eq!(stack.resting_offset(0), 0.0);
}

#[test]
fn dragged_card_lifts_and_the_rest_drift() {
    let mut stack = deck();
    let now = Instant::now();

    assert!(stack.drag_begin("6"));
    stack.drag_change(-60.0);

    let dragged = stack.transform_for(5, now);
    assert_eq!(dragged.translate_y, -60.0);
    assert_eq!(dragged.scale, 1.0);
    assert!(dragged.on_top);

    let resting = stack.transform_for(0, now);
    assert_eq!(resting.translate_x, PARALLAX_FACTOR * 0.5 * HEIGHT);
    assert_eq!(resting.translate_y, -PARALLAX_FACTOR * 0.5 * HEIGHT);
}

#[test]
fn descending_card_shrinks_and_drops_behind() {
    let mut stack = deck();
    let now = Instant::now();
    let pull = -(HEIGHT as f64) * 1.1;

    assert!(stack.drag_begin("6"));
    stack.drag_change(pull);
    stack.drag_end(pull, now);

    let transform = stack.transform_for(5, now);
    assert!(!transform.on_top);
    assert_eq!(transform.scale, 1.0);
    assert_eq!(transform.translate_y, -DESCEND_THRESHOLD * HEIGHT);
}

#[test]
fn vanished_card_leaves_the_order_untouched() {
    let mut stack = deck();
    let now = Instant::now();
    let pull = -(HEIGHT as f64) * 1.1;

    assert!(stack.drag_begin("6"));
    stack.drag_change(pull);
    stack.drag_end(pull, now);
    stack.cards.retain(|c| c.id != "6");

    stack.tick(now + DESCEND_DURATION);
    assert_eq!(stack.phase(), DragPhase::Idle);
    assert_eq!(ids(&stack), ["1", "2", "3", "4", "5"]);
}

#[test]
fn reversed_seeding_flips_the_deck() {
    let cards = (1..=4).map(|n| Card::new(n.to_string())).collect();
    let stack = StackList::new(cards, 4, true);
    assert_eq!(stack.frontmost().map(|c| c.id.as_str()), Some("1"));
    assert_eq!(ids(&stack), ["4", "3", "2", "1"]);
}

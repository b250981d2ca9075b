use std::time::{Duration, Instant};

use super::{PAGE_ANIMATION, TabView, TabViewOptions, edge_resistance};

const WIDTH: f32 = 400.0;

fn tabs_with(options: TabViewOptions) -> TabView {
    TabView::new(
        ["first", "second", "third", "fourth"]
            .map(String::from)
            .to_vec(),
        WIDTH,
        options,
    )
}

fn tabs() -> TabView {
    tabs_with(TabViewOptions::default())
}

#[test]
fn long_swipe_commits_the_next_page() {
    let mut tabs = tabs();
    let now = Instant::now();

    tabs.drag_change(-250.0);
    tabs.drag_end(-250.0, now);
    // Index only commits once the strip finishes settling.
    assert_eq!(tabs.active(), 0);
    assert!(tabs.is_animating());

    tabs.tick(now + PAGE_ANIMATION);
    assert_eq!(tabs.active(), 1);
    assert_eq!(tabs.translation_x(now + PAGE_ANIMATION), -WIDTH);
    assert_eq!(tabs.take_committed_change(), Some(1));
    assert_eq!(tabs.take_committed_change(), None);
}

#[test]
fn half_width_swipe_snaps_back() {
    let mut tabs = tabs();
    let now = Instant::now();

    tabs.drag_change(-200.0);
    tabs.drag_end(-200.0, now);
    tabs.tick(now + PAGE_ANIMATION);

    assert_eq!(tabs.active(), 0);
    assert_eq!(tabs.translation_x(now + PAGE_ANIMATION), 0.0);
    assert_eq!(tabs.take_committed_change(), None);
}

#[test]
fn first_tab_resists_a_rightward_pull() {
    let mut tabs = tabs();
    let now = Instant::now();

    tabs.drag_change(100.0);
    let pulled = tabs.translation_x(now);
    assert_eq!(pulled, edge_resistance(100.0));
    assert!(pulled > 0.0 && pulled < 100.0);
}

#[test]
fn releasing_past_the_first_tab_never_goes_negative() {
    let mut tabs = tabs();
    let now = Instant::now();

    tabs.drag_change(300.0);
    tabs.drag_end(300.0, now);
    tabs.tick(now + PAGE_ANIMATION);
    assert_eq!(tabs.active(), 0);
    assert_eq!(tabs.translation_x(now + PAGE_ANIMATION), 0.0);
}

#[test]
fn last_tab_resists_a_leftward_pull() {
    let mut tabs = tabs();
    let now = Instant::now();
    tabs.select(3, now);
    tabs.tick(now + PAGE_ANIMATION);
    tabs.take_committed_change();

    let then = now + PAGE_ANIMATION;
    tabs.drag_change(-300.0);
    assert_eq!(tabs.translation_x(then), -WIDTH * 3.0 + edge_resistance(-300.0));

    tabs.drag_end(-300.0, then);
    tabs.tick(then + PAGE_ANIMATION);
    assert_eq!(tabs.active(), 3);
    assert_eq!(tabs.take_committed_change(), None);
}

#[test]
fn single_page_jump_is_the_default() {
    let mut tabs = tabs();
    let now = Instant::now();

    tabs.drag_change(-850.0);
    tabs.drag_end(-850.0, now);
    tabs.tick(now + PAGE_ANIMATION);
    assert_eq!(tabs.active(), 1);
}

#[test]
fn long_swipe_can_jump_pages_when_allowed() {
    let mut tabs = tabs_with(TabViewOptions {
        allows_multi_page_jump: true,
        ..TabViewOptions::default()
    });
    let now = Instant::now();

    tabs.drag_change(-850.0);
    tabs.drag_end(-850.0, now);
    tabs.tick(now + PAGE_ANIMATION);
    assert_eq!(tabs.active(), 2);
}

#[test]
fn jump_target_is_clamped_to_the_last_tab() {
    let mut tabs = tabs_with(TabViewOptions {
        allows_multi_page_jump: true,
        ..TabViewOptions::default()
    });
    let now = Instant::now();

    // A huge fling would overshoot, but the drag itself stays in range
    // (deep into the strip, short of the last page boundary).
    tabs.drag_change(-1150.0);
    tabs.drag_end(-1150.0, now);
    tabs.tick(now + PAGE_ANIMATION);
    assert_eq!(tabs.active(), 3);
}

#[test]
fn select_commits_on_completion() {
    let mut tabs = tabs();
    let now = Instant::now();

    tabs.select(2, now);
    assert_eq!(tabs.active(), 0);
    // Mid-flight tick asks for more frames and leaves the index alone.
    assert!(tabs.tick(now + Duration::from_millis(100)));
    assert_eq!(tabs.active(), 0);

    tabs.tick(now + PAGE_ANIMATION);
    assert_eq!(tabs.active(), 2);
    assert_eq!(tabs.take_committed_change(), Some(2));
    assert_eq!(tabs.take_committed_change(), None);
}

#[test]
fn select_out_of_range_is_ignored() {
    let mut tabs = tabs();
    tabs.select(9, Instant::now());
    assert!(!tabs.is_animating());
}

#[test]
fn drag_is_rejected_while_the_strip_settles() {
    let mut tabs = tabs();
    let now = Instant::now();

    tabs.select(1, now);
    tabs.drag_change(-399.0);
    tabs.tick(now + PAGE_ANIMATION);

    // Had the drag landed, the animation would have been cancelled mid-way.
    assert_eq!(tabs.active(), 1);
    assert_eq!(tabs.translation_x(now + PAGE_ANIMATION), -WIDTH);
}

#[test]
fn transition_tracks_the_strip_and_stays_in_range() {
    let mut tabs = tabs();
    let now = Instant::now();

    assert_eq!(tabs.transition(now), 0.0);
    tabs.drag_change(-200.0);
    assert_eq!(tabs.transition(now), 0.5);

    tabs.drag_end(0.0, now);
    tabs.tick(now + PAGE_ANIMATION);
    tabs.drag_change(250.0);
    assert!(tabs.transition(now + PAGE_ANIMATION) >= 0.0);
}

#[test]
fn committed_changes_drain_in_order() {
    let mut tabs = tabs();
    let now = Instant::now();

    tabs.select(1, now);
    tabs.tick(now + PAGE_ANIMATION);
    let then = now + PAGE_ANIMATION;
    tabs.select(2, then);
    tabs.tick(then + PAGE_ANIMATION);

    assert_eq!(tabs.take_committed_change(), Some(1));
    assert_eq!(tabs.take_committed_change(), Some(2));
    assert_eq!(tabs.take_committed_change(), None);
}

#[test]
fn viewport_resize_resnaps_the_strip() {
    let mut tabs = tabs();
    let now = Instant::now();
    tabs.select(1, now);
    tabs.tick(now + PAGE_ANIMATION);

    tabs.set_viewport_width(300.0);
    assert!(!tabs.is_animating());
    assert_eq!(tabs.translation_x(now + PAGE_ANIMATION), -300.0);
}

#[test]
fn edge_resistance_preserves_sign_and_compresses() {
    assert_eq!(edge_resistance(0.0), 0.0);
    assert!(edge_resistance(100.0) > 0.0);
    assert!(edge_resistance(-100.0) < 0.0);
    assert!(edge_resistance(100.0).abs() < 100.0);
    // Stiffer the further out it goes, relative to the raw pull.
    assert!(edge_resistance(300.0) / 300.0 < edge_resistance(100.0) / 100.0);
}

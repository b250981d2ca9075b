use super::{indicator_width, indicator_x, item_fade_opacity, item_offsets};

const WIDTHS: [f32; 3] = [50.0, 70.0, 60.0];

#[test]
fn offsets_accumulate_widths() {
    assert_eq!(item_offsets(&WIDTHS), vec![0.0, 50.0, 120.0]);
    assert!(item_offsets(&[]).is_empty());
}

#[test]
fn indicator_width_blends_between_neighbors() {
    assert_eq!(indicator_width(0.0, &WIDTHS), 50.0);
    assert_eq!(indicator_width(1.0, &WIDTHS), 70.0);
    assert!((indicator_width(0.5, &WIDTHS) - 60.0).abs() < 1e-4);
}

#[test]
fn indicator_x_tracks_item_offsets() {
    assert_eq!(indicator_x(0.0, &WIDTHS), 0.0);
    assert_eq!(indicator_x(2.0, &WIDTHS), 120.0);
    assert!((indicator_x(1.5, &WIDTHS) - 85.0).abs() < 1e-4);
}

#[test]
fn indicator_x_is_pinned_at_the_bar_ends() {
    assert_eq!(indicator_x(-0.5, &WIDTHS), 0.0);
    assert_eq!(indicator_x(5.0, &WIDTHS), 120.0);
}

#[test]
fn fade_peaks_on_the_item_and_dies_one_tab_away() {
    assert_eq!(item_fade_opacity(1.0, 1), 0.8);
    assert!((item_fade_opacity(0.5, 1) - 0.4).abs() < 1e-4);
    assert_eq!(item_fade_opacity(0.0, 1), 0.0);
    assert_eq!(item_fade_opacity(2.0, 1), 0.0);
}

#[test]
fn fade_never_leaves_the_unit_range() {
    assert_eq!(item_fade_opacity(3.5, 1), 0.0);
    assert_eq!(item_fade_opacity(-2.0, 0), 0.0);
}

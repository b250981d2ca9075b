//! Tab bar and scene strip layout.
//!
//! The bar lays items out left to right from their measured widths; the
//! sliding indicator and the per-item highlight fades are pure functions of
//! the paging transition scalar.  The scene strip is a row of full-width
//! pages shifted by the machine's absolute offset.

use std::time::Instant;

use crate::config::ThemePalette;
use crate::core::tab_bar;
use crate::core::tabs::TabView;

use super::super::types::{DrawCmd, FlatRectCmd, RectF, RoundedRectCmd, TextCmd};

/// Bar geometry in logical pixels.
pub const BAR_PADDING_V: f32 = 15.0;
pub const ITEM_PADDING_H: f32 = 7.0;
pub const ITEM_PADDING_V: f32 = 10.0;
pub const LABEL_SIZE: f32 = 15.0;

const ITEM_RADIUS: f32 = 8.0;
const INDICATOR_HEIGHT: f32 = 15.0;
const INDICATOR_RADIUS: f32 = 5.0;
const SCENE_LABEL_SIZE: f32 = 22.0;

/// Item width when no font is available to measure labels.
pub const FALLBACK_ITEM_WIDTH: f32 = 64.0;

pub fn item_height(scale: f32) -> f32 {
    (LABEL_SIZE + 2.0 * ITEM_PADDING_V) * scale
}

/// Full bar height, physical pixels.
pub fn bar_height(scale: f32) -> f32 {
    item_height(scale) + 2.0 * BAR_PADDING_V * scale
}

/// Builds the tab bar's draw commands from measured item widths (physical
/// pixels): per-item highlight fades, labels, and the sliding indicator.
pub fn tab_bar_scene(
    tabs: &TabView,
    item_widths: &[f32],
    now: Instant,
    scale: f32,
    palette: &ThemePalette,
) -> Vec<DrawCmd> {
    let transition = tabs.transition(now);
    let offsets = tab_bar::item_offsets(item_widths);
    let item_y = BAR_PADDING_V * scale;
    let item_h = item_height(scale);

    let mut cmds = Vec::with_capacity(item_widths.len() * 2 + 1);

    for (index, label) in tabs.labels().iter().enumerate() {
        let Some(&x) = offsets.get(index) else {
            break;
        };
        let Some(&w) = item_widths.get(index) else {
            break;
        };
        let rect = RectF::new(x, item_y, w, item_h);

        let fade = tab_bar::item_fade_opacity(transition, index);
        if fade > 0.0 {
            cmds.push(DrawCmd::Rounded(RoundedRectCmd {
                rect,
                radius: ITEM_RADIUS * scale,
                color: palette.tab_item_highlight,
                opacity: fade,
            }));
        }
        cmds.push(DrawCmd::Text(TextCmd {
            rect,
            text: label.clone(),
            size: LABEL_SIZE * scale,
            color: palette.tab_text,
            opacity: 1.0,
        }));
    }

    if tabs.options().show_indicator && !item_widths.is_empty() {
        let x = tab_bar::indicator_x(transition, item_widths);
        let w = tab_bar::indicator_width(transition, item_widths);
        let h = INDICATOR_HEIGHT * scale;
        cmds.push(DrawCmd::Rounded(RoundedRectCmd {
            rect: RectF::new(x, bar_height(scale) - h, w, h),
            radius: INDICATOR_RADIUS * scale,
            color: palette.indicator,
            opacity: 1.0,
        }));
    }

    cmds
}

/// Returns the bar item under `(x, y)`, if any. Physical pixels.
pub fn hit_test_bar_item(item_widths: &[f32], scale: f32, x: f64, y: f64) -> Option<usize> {
    let item_y = (BAR_PADDING_V * scale) as f64;
    if y < item_y || y >= item_y + item_height(scale) as f64 {
        return None;
    }
    let mut left = 0.0f64;
    for (index, w) in item_widths.iter().enumerate() {
        let right = left + *w as f64;
        if x >= left && x < right {
            return Some(index);
        }
        left = right;
    }
    None
}

/// Builds the scene strip below the bar: one full-width page per tab,
/// shifted by the machine's absolute offset. Offscreen pages are skipped.
pub fn scene_strip_scene(
    tabs: &TabView,
    now: Instant,
    viewport: (f32, f32),
    scale: f32,
    palette: &ThemePalette,
) -> Vec<DrawCmd> {
    let top = bar_height(scale);
    let page_h = viewport.1 - top;
    let page_w = viewport.0;
    let shift = tabs.translation_x(now) * scale;

    let mut cmds = Vec::with_capacity(tabs.tab_count() * 2);
    for (index, label) in tabs.labels().iter().enumerate() {
        let x = index as f32 * page_w + shift;
        if x >= viewport.0 || x + page_w <= 0.0 {
            continue;
        }
        let rect = RectF::new(x, top, page_w, page_h);
        cmds.push(DrawCmd::Flat(FlatRectCmd {
            rect,
            color: palette.scene_color(index),
            opacity: 1.0,
        }));
        cmds.push(DrawCmd::Text(TextCmd {
            rect,
            text: label.clone(),
            size: SCENE_LABEL_SIZE * scale,
            color: palette.scene_text,
            opacity: 1.0,
        }));
    }
    cmds
}

//! Card stack scene layout.
//!
//! Cards rest centered in the viewport, each one nudged diagonally by its
//! stack offset (down-left toward the back, up-right toward the front).  The
//! machine's per-card transform is applied on top: drag translation, descend
//! shrink, and the parallax drift of the resting cards.

use std::time::Instant;

use crate::config::ThemePalette;
use crate::core::stack::StackList;

use super::super::types::{DrawCmd, RectF, RoundedRectCmd, TextCmd};

/// Card size in logical pixels.
pub const CARD_WIDTH: f32 = 200.0;
pub const CARD_HEIGHT: f32 = 120.0;

const CARD_RADIUS: f32 = 20.0;
const CARD_BORDER: f32 = 1.0;
const LABEL_SIZE: f32 = 16.0;

/// Physical-pixel rect of the card at `index`, resting offset and the
/// machine's current transform applied.
pub fn card_rect(
    stack: &StackList,
    index: usize,
    now: Instant,
    viewport: (f32, f32),
    scale: f32,
) -> RectF {
    let transform = stack.transform_for(index, now);
    let offset = stack.resting_offset(index);

    let w = CARD_WIDTH * transform.scale * scale;
    let h = CARD_HEIGHT * transform.scale * scale;
    // Screen y grows downward; the "bottom" offset and upward drag
    // translation both subtract.
    let cx = viewport.0 / 2.0 + (offset + transform.translate_x) * scale;
    let cy = viewport.1 / 2.0 - offset * scale + transform.translate_y * scale;

    RectF::new(cx - w / 2.0, cy - h / 2.0, w, h)
}

/// The frontmost card's id and current rect, for gesture hit testing.
pub fn frontmost_hit_rect(
    stack: &StackList,
    now: Instant,
    viewport: (f32, f32),
    scale: f32,
) -> Option<(String, RectF)> {
    let front = stack.frontmost()?;
    let index = stack.cards().len() - 1;
    Some((front.id.clone(), card_rect(stack, index, now, viewport, scale)))
}

/// Builds the stack screen's draw commands, back to front.
///
/// A descending card renders behind everything else; otherwise sequence
/// order is paint order, so the last card naturally lands on top.
pub fn stack_scene(
    stack: &StackList,
    now: Instant,
    viewport: (f32, f32),
    scale: f32,
    palette: &ThemePalette,
) -> Vec<DrawCmd> {
    let count = stack.cards().len();
    let mut order: Vec<usize> = Vec::with_capacity(count);
    order.extend((0..count).filter(|&i| !stack.transform_for(i, now).on_top));
    order.extend((0..count).filter(|&i| stack.transform_for(i, now).on_top));

    let mut cmds = Vec::with_capacity(count * 3);
    for index in order {
        let rect = card_rect(stack, index, now, viewport, scale);
        let id = &stack.cards()[index].id;

        cmds.push(DrawCmd::Rounded(RoundedRectCmd {
            rect: rect.inflate(CARD_BORDER * scale),
            radius: (CARD_RADIUS + CARD_BORDER) * scale,
            color: palette.card_border,
            opacity: 0.9,
        }));
        cmds.push(DrawCmd::Rounded(RoundedRectCmd {
            rect,
            radius: CARD_RADIUS * scale,
            color: palette.card_color(id),
            opacity: 1.0,
        }));
        cmds.push(DrawCmd::Text(TextCmd {
            rect,
            text: format!("Id is: {id}"),
            size: LABEL_SIZE * scale,
            color: palette.card_text,
            opacity: 1.0,
        }));
    }
    cmds
}

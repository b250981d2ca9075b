use crate::core::Color;

/// A frame's pixel buffer plus dimensions.
pub struct RenderTarget<'a> {
    pub buffer: &'a mut [u32],
    pub width: usize,
    pub height: usize,
}

/// Axis-aligned rectangle in physical pixels.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RectF {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl RectF {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> RectF {
        RectF { x, y, w, h }
    }

    pub fn contains(&self, px: f64, py: f64) -> bool {
        px >= self.x as f64
            && px < (self.x + self.w) as f64
            && py >= self.y as f64
            && py < (self.y + self.h) as f64
    }

    /// Grows the rect by `amount` on every side.
    pub fn inflate(&self, amount: f32) -> RectF {
        RectF {
            x: self.x - amount,
            y: self.y - amount,
            w: self.w + amount * 2.0,
            h: self.h + amount * 2.0,
        }
    }
}

/// Backend-agnostic draw commands produced by the layout functions.
///
/// The layout side stays free of pixel work; renderers just iterate and
/// issue their own draw calls in order.
#[derive(Clone, Debug)]
pub enum DrawCmd {
    Flat(FlatRectCmd),
    Rounded(RoundedRectCmd),
    Text(TextCmd),
}

#[derive(Clone, Copy, Debug)]
pub struct FlatRectCmd {
    pub rect: RectF,
    pub color: Color,
    pub opacity: f32,
}

#[derive(Clone, Copy, Debug)]
pub struct RoundedRectCmd {
    pub rect: RectF,
    pub radius: f32,
    pub color: Color,
    pub opacity: f32,
}

/// A single line of text, centered inside `rect`.
#[derive(Clone, Debug)]
pub struct TextCmd {
    pub rect: RectF,
    pub text: String,
    pub size: f32,
    pub color: Color,
    pub opacity: f32,
}

/// Rasterized glyph, cached per (char, size) pair.
pub(in crate::gui::renderer) struct GlyphBitmap {
    pub data: Vec<u8>,
    pub width: usize,
    pub height: usize,
    pub left: i32,
    /// Distance from the baseline to the bitmap's top row.
    pub top: i32,
    pub advance: f32,
}

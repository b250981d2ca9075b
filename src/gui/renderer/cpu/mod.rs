mod primitives;
mod trait_impl;

use std::collections::HashMap;

use fontdue::Font;

use super::types::GlyphBitmap;

/// CPU-based software renderer drawing into softbuffer pixel buffers.
///
/// Text rendering is optional: with no system font available the renderer
/// still draws every shape and simply skips text commands.
pub struct CpuRenderer {
    pub(in crate::gui::renderer) font: Option<Font>,
    pub(in crate::gui::renderer) ui_scale: f64,
    /// Keyed by (char, size in tenths of a pixel) so each text size gets its
    /// own rasterization.
    pub(in crate::gui::renderer) glyph_cache: HashMap<(char, u32), GlyphBitmap>,
}

impl CpuRenderer {
    pub fn new(font: Option<Font>) -> Self {
        CpuRenderer {
            font,
            ui_scale: 1.0,
            glyph_cache: HashMap::new(),
        }
    }

    pub(in crate::gui::renderer) fn size_key(size_px: f32) -> u32 {
        (size_px * 10.0).round().max(1.0) as u32
    }
}

use crate::core::Color;
use crate::gui::renderer::sanitize_scale;

use super::super::traits::Renderer;
use super::super::types::{DrawCmd, RenderTarget};
use super::CpuRenderer;

impl Renderer for CpuRenderer {
    fn set_scale(&mut self, scale_factor: f64) {
        let scale = sanitize_scale(scale_factor);
        if (scale - self.ui_scale).abs() < 1e-6 {
            return;
        }
        self.ui_scale = scale;
        // Glyphs are rasterized at physical sizes; a new scale means new sizes.
        self.glyph_cache.clear();
    }

    fn ui_scale(&self) -> f64 {
        self.ui_scale
    }

    fn text_width(&mut self, text: &str, size_px: f32) -> f32 {
        self.measure(text, size_px)
    }

    fn has_font(&self) -> bool {
        self.font.is_some()
    }

    fn clear(&mut self, target: &mut RenderTarget<'_>, color: Color) {
        target.buffer.fill(color.to_pixel());
    }

    fn execute(&mut self, target: &mut RenderTarget<'_>, cmds: &[DrawCmd]) {
        for cmd in cmds {
            match cmd {
                DrawCmd::Flat(flat) => self.draw_flat_rect(target, flat),
                DrawCmd::Rounded(rounded) => self.draw_rounded_rect(target, rounded),
                DrawCmd::Text(text) => self.draw_text_centered(target, text),
            }
        }
    }
}

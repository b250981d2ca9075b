use crate::core::Color;
use crate::gui::renderer::blend_rgb;

use super::super::types::{FlatRectCmd, GlyphBitmap, RenderTarget, RoundedRectCmd, TextCmd};
use super::CpuRenderer;

impl CpuRenderer {
    pub(in crate::gui::renderer) fn draw_flat_rect(
        &self,
        target: &mut RenderTarget<'_>,
        cmd: &FlatRectCmd,
    ) {
        let alpha = (cmd.opacity * 255.0).round().clamp(0.0, 255.0) as u8;
        if alpha == 0 || cmd.rect.w <= 0.0 || cmd.rect.h <= 0.0 {
            return;
        }
        let x0 = cmd.rect.x.floor().max(0.0) as usize;
        let y0 = cmd.rect.y.floor().max(0.0) as usize;
        let x1 = ((cmd.rect.x + cmd.rect.w).ceil() as usize).min(target.width);
        let y1 = ((cmd.rect.y + cmd.rect.h).ceil() as usize).min(target.height);

        for py in y0..y1 {
            for px in x0..x1 {
                let idx = py * target.width + px;
                target.buffer[idx] = blend_rgb(target.buffer[idx], cmd.color, alpha);
            }
        }
    }

    /// Draws a filled rounded rectangle with anti-aliased corners.
    pub(in crate::gui::renderer) fn draw_rounded_rect(
        &self,
        target: &mut RenderTarget<'_>,
        cmd: &RoundedRectCmd,
    ) {
        let alpha = (cmd.opacity * 255.0).round().clamp(0.0, 255.0) as f32;
        if alpha == 0.0 || cmd.rect.w < 1.0 || cmd.rect.h < 1.0 {
            return;
        }
        let x = cmd.rect.x.round() as i32;
        let y = cmd.rect.y.round() as i32;
        let w = cmd.rect.w.round() as i32;
        let h = cmd.rect.h.round() as i32;
        let r = (cmd.radius.round() as i32).min(w / 2).min(h / 2).max(0);

        let max_x = target.width as i32 - 1;
        let max_y = target.height as i32 - 1;

        for py in 0..h {
            let sy = y + py;
            if sy < 0 || sy > max_y {
                continue;
            }
            for px in 0..w {
                let sx = x + px;
                if sx < 0 || sx > max_x {
                    continue;
                }
                let coverage = Self::rounded_coverage(px, py, w, h, r);
                if coverage <= 0.0 {
                    continue;
                }
                let aa_alpha = (alpha * coverage).round().clamp(0.0, 255.0) as u8;
                if aa_alpha == 0 {
                    continue;
                }
                let idx = sy as usize * target.width + sx as usize;
                target.buffer[idx] = blend_rgb(target.buffer[idx], cmd.color, aa_alpha);
            }
        }
    }

    /// Pixel coverage inside a rounded rect: 1.0 in the body, a soft ramp
    /// across each corner arc.
    fn rounded_coverage(px: i32, py: i32, w: i32, h: i32, r: i32) -> f32 {
        if px < 0 || py < 0 || px >= w || py >= h {
            return 0.0;
        }
        if r <= 0 {
            return 1.0;
        }

        let in_tl = px < r && py < r;
        let in_tr = px >= w - r && py < r;
        let in_bl = px < r && py >= h - r;
        let in_br = px >= w - r && py >= h - r;
        if !(in_tl || in_tr || in_bl || in_br) {
            return 1.0;
        }

        let cx = if in_tl || in_bl {
            r as f32 - 0.5
        } else {
            (w - r) as f32 - 0.5
        };
        let cy = if in_tl || in_tr {
            r as f32 - 0.5
        } else {
            (h - r) as f32 - 0.5
        };

        let dx = px as f32 + 0.5 - cx;
        let dy = py as f32 + 0.5 - cy;
        let dist = (dx * dx + dy * dy).sqrt();
        (r as f32 + 0.5 - dist).clamp(0.0, 1.0)
    }

    /// Draws one line of text centered inside the command's rect.
    pub(in crate::gui::renderer) fn draw_text_centered(
        &mut self,
        target: &mut RenderTarget<'_>,
        cmd: &TextCmd,
    ) {
        if self.font.is_none() {
            return;
        }
        let alpha = (cmd.opacity * 255.0).round().clamp(0.0, 255.0) as u8;
        if alpha == 0 {
            return;
        }

        let total = self.measure(&cmd.text, cmd.size);
        let mut pen_x = cmd.rect.x + (cmd.rect.w - total) / 2.0;
        // Baseline sits below the visual center by roughly a third of the
        // text size; close enough for single-line labels.
        let baseline = (cmd.rect.y + cmd.rect.h / 2.0 + cmd.size * 0.35).round() as i32;

        for ch in cmd.text.chars() {
            let glyph = self.glyph_for(ch, cmd.size);
            Self::blit_glyph(target, glyph, pen_x.round() as i32, baseline, cmd.color, alpha);
            pen_x += glyph.advance;
        }
    }

    pub(in crate::gui::renderer) fn measure(&mut self, text: &str, size_px: f32) -> f32 {
        if self.font.is_none() {
            return 0.0;
        }
        text.chars().map(|ch| self.glyph_for(ch, size_px).advance).sum()
    }

    fn glyph_for(&mut self, ch: char, size_px: f32) -> &GlyphBitmap {
        let key = (ch, Self::size_key(size_px));
        let font = self.font.as_ref().expect("glyph_for requires a font");
        self.glyph_cache.entry(key).or_insert_with(|| {
            let (metrics, bitmap) = font.rasterize(ch, size_px);
            GlyphBitmap {
                data: bitmap,
                width: metrics.width,
                height: metrics.height,
                left: metrics.xmin,
                top: metrics.height as i32 + metrics.ymin,
                advance: metrics.advance_width,
            }
        })
    }

    fn blit_glyph(
        target: &mut RenderTarget<'_>,
        glyph: &GlyphBitmap,
        pen_x: i32,
        baseline: i32,
        color: Color,
        alpha: u8,
    ) {
        for gy in 0..glyph.height {
            for gx in 0..glyph.width {
                let coverage = glyph.data[gy * glyph.width + gx];
                if coverage == 0 {
                    continue;
                }
                let sx = pen_x + glyph.left + gx as i32;
                let sy = baseline - glyph.top + gy as i32;
                if sx < 0 || sy < 0 || sx as usize >= target.width || sy as usize >= target.height
                {
                    continue;
                }
                let idx = sy as usize * target.width + sx as usize;
                let blended = (coverage as u16 * alpha as u16 / 255) as u8;
                target.buffer[idx] = blend_rgb(target.buffer[idx], color, blended);
            }
        }
    }
}

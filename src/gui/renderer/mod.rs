pub mod backend;
mod cpu;
pub mod shared;
pub mod traits;
pub mod types;

use crate::core::Color;

pub use backend::RendererBackend;
pub use cpu::CpuRenderer;
pub use traits::Renderer;

/// Blends `color` over an existing 0RGB pixel with the given alpha.
pub(in crate::gui) fn blend_rgb(bg: u32, color: Color, alpha: u8) -> u32 {
    let a = alpha as u32;
    let inv_a = 255 - a;
    let bg_r = (bg >> 16) & 0xFF;
    let bg_g = (bg >> 8) & 0xFF;
    let bg_b = bg & 0xFF;
    let r = (color.r as u32 * a + bg_r * inv_a) / 255;
    let g = (color.g as u32 * a + bg_g * inv_a) / 255;
    let b = (color.b as u32 * a + bg_b * inv_a) / 255;
    (r << 16) | (g << 8) | b
}

/// Clamps wild scale factors reported by some window systems.
pub(in crate::gui) fn sanitize_scale(scale_factor: f64) -> f64 {
    if !scale_factor.is_finite() || scale_factor <= 0.0 {
        1.0
    } else {
        scale_factor.clamp(0.5, 4.0)
    }
}

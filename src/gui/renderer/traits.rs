use crate::core::Color;

use super::types::{DrawCmd, RenderTarget};

/// The renderer interface used by the GUI layer.
///
/// Everything above this trait works in draw commands and measurements, so
/// the interaction code never touches pixels and an alternative backend only
/// has to implement these few methods.
pub trait Renderer {
    // ── Lifecycle ────────────────────────────────────────────────────

    fn set_scale(&mut self, scale_factor: f64);

    // ── Metrics ─────────────────────────────────────────────────────

    fn ui_scale(&self) -> f64;

    /// Advance width of `text` at the given pixel size. Zero when no font
    /// is available.
    fn text_width(&mut self, text: &str, size_px: f32) -> f32;

    fn has_font(&self) -> bool;

    // ── Drawing ─────────────────────────────────────────────────────

    fn clear(&mut self, target: &mut RenderTarget<'_>, color: Color);

    /// Executes draw commands in order.
    fn execute(&mut self, target: &mut RenderTarget<'_>, cmds: &[DrawCmd]);
}

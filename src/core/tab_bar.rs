//! Pure tab bar math.
//!
//! Given measured item widths and the paging transition scalar, these
//! functions place the sliding indicator and fade the item highlights.  No
//! rendering code, no side effects; the renderer consumes the results.

use crate::core::interpolate::{Extrapolate, interpolate};

/// Opacity of an item's highlight when the strip rests exactly on it.
const ITEM_PEAK_OPACITY: f32 = 0.8;

/// Cumulative x-offsets of the tab bar items from their measured widths.
///
/// `offsets[i]` is the left edge of item `i` relative to the bar origin.
pub fn item_offsets(widths: &[f32]) -> Vec<f32> {
    let mut offsets = Vec::with_capacity(widths.len());
    let mut x = 0.0;
    for w in widths {
        offsets.push(x);
        x += w;
    }
    offsets
}

/// Indicator width at a fractional tab position: blends between the widths
/// of the two neighboring items.
pub fn indicator_width(transition: f32, widths: &[f32]) -> f32 {
    let stops: Vec<f32> = (0..widths.len()).map(|i| i as f32).collect();
    interpolate(transition, &stops, widths, Extrapolate::Extend)
}

/// Indicator x-offset at a fractional tab position, pinned to the bar ends.
pub fn indicator_x(transition: f32, widths: &[f32]) -> f32 {
    let stops: Vec<f32> = (0..widths.len()).map(|i| i as f32).collect();
    let offsets = item_offsets(widths);
    interpolate(transition, &stops, &offsets, Extrapolate::Clamp)
}

/// Highlight opacity for the item at `index`: peaks on its own index and
/// fades out one full tab away in either direction.
pub fn item_fade_opacity(transition: f32, index: usize) -> f32 {
    let i = index as f32;
    interpolate(
        transition,
        &[i - 1.0, i, i + 1.0],
        &[0.0, ITEM_PEAK_OPACITY, 0.0],
        Extrapolate::Extend,
    )
    .clamp(0.0, 1.0)
}

#[cfg(test)]
#[path = "../../tests/unit/core_tab_bar.rs"]
mod tests;

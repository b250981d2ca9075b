//! Pure scene layout: `(component state, metrics, palette) -> draw commands`.
//!
//! Nothing in here touches a pixel buffer or the window system, so the
//! geometry that ties gesture state to what ends up on screen is testable
//! without a display.

pub mod stack_layout;
pub mod tab_layout;

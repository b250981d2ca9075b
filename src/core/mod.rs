pub mod animation;
pub mod color;
pub mod gesture;
pub mod interpolate;
pub mod stack;
pub mod tab_bar;
pub mod tabs;

pub use color::Color;

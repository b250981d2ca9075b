mod fonts;
mod model;
mod persistence;
mod theme;

pub(crate) use fonts::load_ui_font;
pub(crate) use model::{AppConfig, StackConfig, TabsConfig, ThemeChoice, WindowConfig};
pub(crate) use persistence::load_config;
pub(crate) use theme::ThemePalette;

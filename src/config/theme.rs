use crate::core::Color;

use super::ThemeChoice;

/// Complete color palette resolved from a [`ThemeChoice`].
pub(crate) struct ThemePalette {
    // -- Chrome --
    pub background: Color,
    pub hint_text: Color,

    // -- Card stack --
    pub card_colors: [Color; 2],
    pub card_border: Color,
    pub card_text: Color,

    // -- Tab bar --
    pub tab_text: Color,
    /// Fill that fades in behind the item nearest to the paging position.
    pub tab_item_highlight: Color,
    pub indicator: Color,

    // -- Tab scenes --
    pub scene_colors: [Color; 4],
    pub scene_text: Color,
}

impl ThemeChoice {
    /// Resolves this theme choice into a full color palette.
    pub fn resolve(&self) -> ThemePalette {
        match self {
            ThemeChoice::PlaygroundLight => ThemePalette::playground_light(),
            ThemeChoice::PlaygroundDark => ThemePalette::playground_dark(),
        }
    }
}

impl ThemePalette {
    /// Playground Light — white canvas, saturated card fills.
    fn playground_light() -> Self {
        Self {
            background: Color::rgb(255, 255, 255),
            hint_text: Color::rgb(120, 120, 126),
            card_colors: [
                Color::rgb(46, 139, 87),  // sea green
                Color::rgb(56, 103, 214), // royal blue
            ],
            card_border: Color::rgb(255, 255, 255),
            card_text: Color::rgb(20, 20, 24),
            tab_text: Color::rgb(20, 20, 24),
            tab_item_highlight: Color::rgb(72, 159, 210),
            indicator: Color::rgb(46, 160, 67),
            scene_colors: [
                Color::rgb(244, 246, 250),
                Color::rgb(232, 240, 254),
                Color::rgb(236, 253, 243),
                Color::rgb(254, 242, 232),
            ],
            scene_text: Color::rgb(55, 58, 64),
        }
    }

    /// Playground Dark — dim canvas, the same accents slightly muted.
    fn playground_dark() -> Self {
        Self {
            background: Color::rgb(30, 30, 36),
            hint_text: Color::rgb(140, 142, 150),
            card_colors: [
                Color::rgb(52, 120, 80),
                Color::rgb(62, 96, 186),
            ],
            card_border: Color::rgb(212, 214, 222),
            card_text: Color::rgb(230, 232, 238),
            tab_text: Color::rgb(222, 224, 230),
            tab_item_highlight: Color::rgb(62, 134, 178),
            indicator: Color::rgb(56, 142, 70),
            scene_colors: [
                Color::rgb(40, 42, 50),
                Color::rgb(36, 44, 62),
                Color::rgb(36, 52, 46),
                Color::rgb(54, 46, 40),
            ],
            scene_text: Color::rgb(208, 210, 218),
        }
    }

    /// Deterministic fill for a card: stable per id, so a card keeps its
    /// color across reorders.
    pub fn card_color(&self, id: &str) -> Color {
        let hash: usize = id.bytes().map(usize::from).sum();
        self.card_colors[hash % self.card_colors.len()]
    }

    /// Background for the scene at `index`, cycling through the palette.
    pub fn scene_color(&self, index: usize) -> Color {
        self.scene_colors[index % self.scene_colors.len()]
    }
}

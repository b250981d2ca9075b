use serde::{Deserialize, Serialize};

use crate::core::stack::DEFAULT_VISIBLE_CARDS;

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct AppConfig {
    pub window: WindowConfig,
    pub stack: StackConfig,
    pub tabs: TabsConfig,
    pub theme: ThemeChoice,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct WindowConfig {
    /// Logical window size; portrait, phone-ish proportions.
    pub width: u32,
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 420,
            height: 760,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct StackConfig {
    /// Ids of the seeded cards, back to front.
    pub card_ids: Vec<String>,
    /// How many cards get a visible diagonal offset.
    pub visible_items: usize,
    /// Seed the deck in reverse order.
    pub reversed: bool,
}

impl Default for StackConfig {
    fn default() -> Self {
        Self {
            card_ids: (1..=6).map(|n| n.to_string()).collect(),
            visible_items: DEFAULT_VISIBLE_CARDS,
            reversed: false,
        }
    }
}

#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(default)]
pub(crate) struct TabsConfig {
    pub labels: Vec<String>,
    pub show_indicator: bool,
    pub allows_multi_page_jump: bool,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            labels: ["first", "second", "third", "fourth"]
                .map(String::from)
                .to_vec(),
            show_indicator: true,
            allows_multi_page_jump: false,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize, Default)]
pub(crate) enum ThemeChoice {
    #[default]
    PlaygroundLight,
    PlaygroundDark,
}

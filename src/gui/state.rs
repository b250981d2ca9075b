use std::sync::Arc;

use softbuffer::Context;
use winit::window::Window;

use crate::config::{AppConfig, ThemePalette};
use crate::core::gesture::PanRecognizer;
use crate::core::stack::StackList;
use crate::core::tabs::TabView;
use crate::gui::renderer::RendererBackend;

/// Which playground screen is showing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Screen {
    Stack,
    Tabs,
}

/// What the armed pan gesture is aimed at, decided at press time.
#[derive(Clone, Debug)]
pub(crate) enum PanTarget {
    /// The frontmost card of the stack.
    StackCard { id: String },
    /// The swipeable scene strip below the tab bar.
    TabStrip,
    /// The tab bar itself; a press target, not a drag surface.
    TabBar,
}

pub(crate) struct PlaygroundWindow {
    pub window: Arc<Window>,
    pub backend: RendererBackend,
    pub config: AppConfig,
    pub palette: ThemePalette,
    pub screen: Screen,
    pub stack: StackList,
    pub tabs: TabView,
    pub pan: PanRecognizer,
    pub pan_target: Option<PanTarget>,
    /// Last cursor position, physical pixels.
    pub mouse_pos: (f64, f64),
    /// Measured tab bar item widths, physical pixels. Invalidated on scale
    /// changes and remeasured on the next frame.
    pub tab_item_widths: Option<Vec<f32>>,
}

pub(crate) struct App {
    pub window: Option<PlaygroundWindow>,
    pub context: Option<Context<winit::event_loop::OwnedDisplayHandle>>,
}

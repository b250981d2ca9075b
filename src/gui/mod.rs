mod events;
mod lifecycle;
mod renderer;
mod state;

use std::num::NonZeroU32;
use std::sync::Arc;

use softbuffer::Context;
use winit::application::ApplicationHandler;
use winit::event::{ElementState, WindowEvent};
use winit::event_loop::{ActiveEventLoop, EventLoop};
use winit::keyboard::{Key, NamedKey};
use winit::window::{Window, WindowId};

use crate::config::{self, AppConfig, StackConfig, TabsConfig, load_config};
use crate::core::gesture::{PAN_ACTIVATION_THRESHOLD, PanEvent, PanRecognizer};
use crate::core::stack::{Card, StackList};
use crate::core::tabs::{TabView, TabViewOptions};
use crate::gui::renderer::shared::{stack_layout, tab_layout};
use crate::gui::renderer::types::{DrawCmd, RectF, RenderTarget, TextCmd};
use crate::gui::renderer::{Renderer, RendererBackend};

use self::state::{App, PanTarget, PlaygroundWindow, Screen};

fn seed_stack(config: &StackConfig) -> StackList {
    let cards = config.card_ids.iter().cloned().map(Card::new).collect();
    StackList::new(cards, config.visible_items, config.reversed)
}

fn seed_tabs(config: &TabsConfig, width: f32) -> TabView {
    TabView::new(
        config.labels.clone(),
        width,
        TabViewOptions {
            show_indicator: config.show_indicator,
            allows_multi_page_jump: config.allows_multi_page_jump,
        },
    )
}

impl PlaygroundWindow {
    /// Wraps an already-created winit window and builds the component state
    /// from the loaded config.
    fn new(
        window: Arc<Window>,
        context: &Context<winit::event_loop::OwnedDisplayHandle>,
        config: AppConfig,
    ) -> Self {
        let font = match config::load_ui_font() {
            Ok(font) => Some(font),
            Err(err) => {
                eprintln!("Text rendering disabled: {err}");
                None
            }
        };
        let mut backend = RendererBackend::new(window.clone(), context, font);
        backend.renderer.set_scale(window.scale_factor());

        let logical_width =
            window.inner_size().width as f32 / backend.renderer.ui_scale() as f32;
        let palette = config.theme.resolve();
        let stack = seed_stack(&config.stack);
        let tabs = seed_tabs(&config.tabs, logical_width);

        PlaygroundWindow {
            window,
            backend,
            config,
            palette,
            screen: Screen::Stack,
            stack,
            tabs,
            pan: PanRecognizer::new(PAN_ACTIVATION_THRESHOLD),
            pan_target: None,
            mouse_pos: (0.0, 0.0),
            tab_item_widths: None,
        }
    }

    fn show_screen(&mut self, screen: Screen) {
        if self.screen == screen {
            return;
        }
        // Settle any drag in flight before the screen disappears.
        self.cancel_interaction();
        self.screen = screen;
    }

    fn toggle_screen(&mut self) {
        let next = match self.screen {
            Screen::Stack => Screen::Tabs,
            Screen::Tabs => Screen::Stack,
        };
        self.show_screen(next);
    }

    /// Reseeds both components from the loaded config.
    fn reset(&mut self) {
        self.cancel_interaction();
        let logical_width =
            self.window.inner_size().width as f32 / self.backend.renderer.ui_scale() as f32;
        self.stack = seed_stack(&self.config.stack);
        self.tabs = seed_tabs(&self.config.tabs, logical_width);
    }
}

impl App {
    fn new() -> Self {
        App {
            window: None,
            context: None,
        }
    }

    /// Creates the playground window and registers it. Returns the WindowId.
    fn create_window(&mut self, event_loop: &ActiveEventLoop) -> Option<WindowId> {
        let context = self.context.as_ref()?;
        let config = load_config();

        let size =
            winit::dpi::LogicalSize::new(config.window.width as f64, config.window.height as f64);
        let attrs = Window::default_attributes()
            .with_title("Cardstack")
            .with_inner_size(size);

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(err) => {
                eprintln!("Failed to create window: {err}");
                return None;
            }
        };

        let id = window.id();
        window.request_redraw();
        self.window = Some(PlaygroundWindow::new(window, context, config));
        Some(id)
    }
}

pub fn run() {
    let event_loop = match EventLoop::new() {
        Ok(loop_) => loop_,
        Err(err) => {
            eprintln!("Failed to create event loop: {err}");
            return;
        }
    };
    let mut app = App::new();
    if let Err(err) = event_loop.run_app(&mut app) {
        eprintln!("Application error: {err}");
    }
}

use std::sync::Arc;

use fontdue::Font;
use softbuffer::Surface;
use winit::window::Window;

use super::CpuRenderer;

/// Bundles the CPU renderer with the softbuffer surface it presents to.
pub struct RendererBackend {
    pub(in crate::gui) renderer: CpuRenderer,
    pub(in crate::gui) surface:
        Surface<winit::event_loop::OwnedDisplayHandle, Arc<Window>>,
}

impl RendererBackend {
    pub fn new(
        window: Arc<Window>,
        context: &softbuffer::Context<winit::event_loop::OwnedDisplayHandle>,
        font: Option<Font>,
    ) -> Self {
        let surface = Surface::new(context, window).expect("softbuffer surface");
        RendererBackend {
            renderer: CpuRenderer::new(font),
            surface,
        }
    }
}

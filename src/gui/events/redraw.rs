use crate::gui::*;
use std::time::{Duration, Instant};

const ANIMATION_FRAME_INTERVAL: Duration = Duration::from_millis(16);

const HINT_TEXT: &str = "1 stack   2 tabs   r reset   q quit";
const HINT_SIZE: f32 = 13.0;
const HINT_MARGIN: f32 = 14.0;

impl PlaygroundWindow {
    pub(in crate::gui) fn animation_schedule(&self, now: Instant) -> Option<(Instant, bool)> {
        if self.stack.is_animating() || self.tabs.is_animating() {
            Some((now + ANIMATION_FRAME_INTERVAL, true))
        } else {
            None
        }
    }

    pub(in crate::gui) fn on_scale_factor_changed(&mut self, scale_factor: f64) {
        let prev_scale = self.backend.renderer.ui_scale();
        self.backend.renderer.set_scale(scale_factor);
        if (self.backend.renderer.ui_scale() - prev_scale).abs() < f64::EPSILON {
            return;
        }

        // Glyph metrics changed, so the measured bar widths are stale.
        self.tab_item_widths = None;
        let size = self.window.inner_size();
        self.sync_viewport(size.width);
    }

    pub(in crate::gui) fn on_resized(&mut self, size: winit::dpi::PhysicalSize<u32>) {
        self.sync_viewport(size.width);
        self.window.request_redraw();
    }

    /// Keeps the paging machine's page width in sync with the window,
    /// in logical pixels.
    fn sync_viewport(&mut self, width_px: u32) {
        let scale = self.backend.renderer.ui_scale() as f32;
        self.tabs.set_viewport_width(width_px as f32 / scale);
    }

    pub(in crate::gui) fn on_redraw_requested(&mut self) {
        let now = Instant::now();
        self.stack.tick(now);
        self.tabs.tick(now);

        while let Some(index) = self.tabs.take_committed_change() {
            if let Some(label) = self.tabs.labels().get(index) {
                println!("tab changed: {index} ({label})");
            }
        }

        // Cards all share one fixed layout height.
        self.stack.set_item_height(stack_layout::CARD_HEIGHT);

        let size = self.window.inner_size();
        let (Some(w), Some(h)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height))
        else {
            return;
        };
        let scale = self.backend.renderer.ui_scale() as f32;
        let viewport = (size.width as f32, size.height as f32);

        if self.tab_item_widths.is_none() {
            self.tab_item_widths = Some(self.measure_tab_items(scale));
        }

        let mut cmds = match self.screen {
            Screen::Stack => {
                stack_layout::stack_scene(&self.stack, now, viewport, scale, &self.palette)
            }
            Screen::Tabs => {
                let widths = self.tab_item_widths.as_deref().unwrap_or(&[]);
                let mut cmds =
                    tab_layout::scene_strip_scene(&self.tabs, now, viewport, scale, &self.palette);
                cmds.extend(tab_layout::tab_bar_scene(
                    &self.tabs,
                    widths,
                    now,
                    scale,
                    &self.palette,
                ));
                cmds
            }
        };
        cmds.push(self.hint_cmd(viewport, scale));

        if self.backend.surface.resize(w, h).is_err() {
            return;
        }
        let Ok(mut buffer) = self.backend.surface.buffer_mut() else {
            return;
        };
        let mut target = RenderTarget {
            buffer: &mut buffer,
            width: size.width as usize,
            height: size.height as usize,
        };
        self.backend.renderer.clear(&mut target, self.palette.background);
        self.backend.renderer.execute(&mut target, &cmds);

        let _ = buffer.present();
    }

    fn measure_tab_items(&mut self, scale: f32) -> Vec<f32> {
        let renderer = &mut self.backend.renderer;
        self.tabs
            .labels()
            .iter()
            .map(|label| {
                if renderer.has_font() {
                    renderer.text_width(label, tab_layout::LABEL_SIZE * scale)
                        + 2.0 * tab_layout::ITEM_PADDING_H * scale
                } else {
                    tab_layout::FALLBACK_ITEM_WIDTH * scale
                }
            })
            .collect()
    }

    fn hint_cmd(&self, viewport: (f32, f32), scale: f32) -> DrawCmd {
        let h = HINT_SIZE * scale;
        DrawCmd::Text(TextCmd {
            rect: RectF::new(0.0, viewport.1 - (HINT_MARGIN * scale) - h, viewport.0, h),
            text: HINT_TEXT.to_string(),
            size: HINT_SIZE * scale,
            color: self.palette.hint_text,
            opacity: 1.0,
        })
    }
}

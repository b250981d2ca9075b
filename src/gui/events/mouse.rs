use std::time::Instant;

use crate::gui::*;
use winit::dpi::PhysicalPosition;
use winit::event::MouseButton;

impl PlaygroundWindow {
    pub(in crate::gui) fn on_cursor_moved(&mut self, position: PhysicalPosition<f64>) {
        self.mouse_pos = (position.x, position.y);
        if let Some(event) = self.pan.motion(position.x, position.y) {
            self.route_pan_event(event);
        }
    }

    pub(in crate::gui) fn on_mouse_input(&mut self, state: ElementState, button: MouseButton) {
        if button != MouseButton::Left {
            return;
        }
        let (x, y) = self.mouse_pos;
        match state {
            ElementState::Pressed => {
                self.pan_target = self.pan_target_at(x, y);
                if self.pan_target.is_some() {
                    self.pan.press(x, y);
                }
            }
            ElementState::Released => {
                if let Some(event) = self.pan.release(x, y) {
                    self.route_pan_event(event);
                }
            }
        }
    }

    /// Ends any gesture in progress. An active pan settles as a release at
    /// the last known cursor position so neither state machine is left
    /// wedged mid-drag.
    pub(in crate::gui) fn cancel_interaction(&mut self) {
        if self.pan.is_active() {
            let (x, y) = self.mouse_pos;
            if let Some(event) = self.pan.release(x, y) {
                self.route_pan_event(event);
            }
        } else {
            self.pan.cancel();
        }
        self.pan_target = None;
    }

    /// Decides at press time what a pan starting here would act on.
    fn pan_target_at(&self, x: f64, y: f64) -> Option<PanTarget> {
        let size = self.window.inner_size();
        let viewport = (size.width as f32, size.height as f32);
        let scale = self.backend.renderer.ui_scale() as f32;

        match self.screen {
            Screen::Stack => {
                let (id, rect) =
                    stack_layout::frontmost_hit_rect(&self.stack, Instant::now(), viewport, scale)?;
                rect.contains(x, y).then(|| PanTarget::StackCard { id })
            }
            Screen::Tabs => {
                if y < tab_layout::bar_height(scale) as f64 {
                    Some(PanTarget::TabBar)
                } else {
                    Some(PanTarget::TabStrip)
                }
            }
        }
    }

    /// Routes a recognized pan event to whatever the press targeted.
    /// Translations arrive in physical pixels and are handed to the state
    /// machines in logical pixels.
    fn route_pan_event(&mut self, event: PanEvent) {
        let now = Instant::now();
        let scale = self.backend.renderer.ui_scale();

        match (event, self.pan_target.as_ref()) {
            (PanEvent::Begin, Some(PanTarget::StackCard { id })) => {
                let id = id.clone();
                if !self.stack.drag_begin(&id) {
                    // Still settling from the previous drag.
                    self.pan.cancel();
                    self.pan_target = None;
                }
            }
            (PanEvent::Begin, Some(PanTarget::TabBar)) => {
                self.pan.cancel();
                self.pan_target = None;
            }
            (PanEvent::Begin, _) => {}

            (PanEvent::Change { dy, .. }, Some(PanTarget::StackCard { .. })) => {
                self.stack.drag_change(dy / scale);
            }
            (PanEvent::Change { dx, .. }, Some(PanTarget::TabStrip)) => {
                self.tabs.drag_change((dx / scale) as f32);
            }
            (PanEvent::Change { .. }, _) => {}

            (PanEvent::End { dy, .. }, Some(PanTarget::StackCard { .. })) => {
                self.stack.drag_end(dy / scale, now);
                self.pan_target = None;
            }
            (PanEvent::End { dx, .. }, Some(PanTarget::TabStrip)) => {
                self.tabs.drag_end((dx / scale) as f32, now);
                self.pan_target = None;
            }
            (PanEvent::End { .. }, _) => {
                self.pan_target = None;
            }

            (PanEvent::Tap { x, y }, Some(PanTarget::TabBar)) => {
                self.pan_target = None;
                if let Some(widths) = self.tab_item_widths.as_deref() {
                    let scale = scale as f32;
                    if let Some(index) = tab_layout::hit_test_bar_item(widths, scale, x, y) {
                        self.tabs.select(index, now);
                    }
                }
            }
            (PanEvent::Tap { .. }, _) => {
                self.pan_target = None;
            }
        }
    }
}

use crate::gui::*;
use winit::event::KeyEvent;

impl PlaygroundWindow {
    pub(in crate::gui) fn on_keyboard_input(
        &mut self,
        event_loop: &ActiveEventLoop,
        event: &KeyEvent,
    ) {
        if event.state != ElementState::Pressed {
            return;
        }

        match &event.logical_key {
            Key::Named(NamedKey::Escape) => event_loop.exit(),
            Key::Named(NamedKey::Tab) => self.toggle_screen(),
            Key::Character(text) => match text.as_str() {
                "1" => self.show_screen(Screen::Stack),
                "2" => self.show_screen(Screen::Tabs),
                "r" => self.reset(),
                "q" => event_loop.exit(),
                _ => (),
            },
            _ => (),
        }
    }
}

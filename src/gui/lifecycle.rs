use crate::gui::*;

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        // Only create the window once.
        if self.window.is_some() {
            return;
        }

        let context = match Context::new(event_loop.owned_display_handle()) {
            Ok(ctx) => ctx,
            Err(err) => {
                eprintln!("Failed to create rendering context: {err}");
                event_loop.exit();
                return;
            }
        };
        self.context = Some(context);

        if self.create_window(event_loop).is_none() {
            event_loop.exit();
        }
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        let Some(win) = self.window.as_mut() else {
            return;
        };
        let mut should_redraw = false;

        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
                return;
            }
            WindowEvent::Focused(focused) => {
                if !focused {
                    win.cancel_interaction();
                }
                should_redraw = true;
            }
            WindowEvent::KeyboardInput { event, .. } => {
                win.on_keyboard_input(event_loop, &event);
                should_redraw = true;
            }
            WindowEvent::CursorMoved { position, .. } => {
                win.on_cursor_moved(position);
                should_redraw = true;
            }
            WindowEvent::CursorLeft { .. } => {
                win.cancel_interaction();
                should_redraw = true;
            }
            WindowEvent::MouseInput { state, button, .. } => {
                win.on_mouse_input(state, button);
                should_redraw = true;
            }
            WindowEvent::ScaleFactorChanged { scale_factor, .. } => {
                win.on_scale_factor_changed(scale_factor);
                should_redraw = true;
            }
            WindowEvent::Resized(size) => {
                win.on_resized(size);
            }
            WindowEvent::RedrawRequested => {
                win.on_redraw_requested();
            }
            _ => (),
        }
        if should_redraw {
            win.window.request_redraw();
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        let now = std::time::Instant::now();
        let mut next_wakeup: Option<std::time::Instant> = None;

        if let Some(win) = self.window.as_ref() {
            if let Some((deadline, redraw_now)) = win.animation_schedule(now) {
                if redraw_now {
                    win.window.request_redraw();
                }
                next_wakeup = Some(deadline);
            }
        }

        match next_wakeup {
            Some(deadline) => {
                event_loop.set_control_flow(winit::event_loop::ControlFlow::WaitUntil(deadline))
            }
            None => event_loop.set_control_flow(winit::event_loop::ControlFlow::Wait),
        }
    }
}

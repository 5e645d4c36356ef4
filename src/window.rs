use std::{num::NonZeroU32, rc::Rc, time::Instant};

use winit::{
    application::ApplicationHandler,
    dpi::PhysicalSize,
    event::{KeyEvent, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::{Key as WKey, NamedKey, SmolStr},
    window::{Window, WindowId},
};

use crate::{
    config::Conf,
    event::{App, Event, EventData, Game},
    graphics::{render_2d, Canvas, Graphics},
    keyboard::Key,
    math::Vec2,
    mouse::MouseButton,
    Error,
};

/// Touchpads scroll in pixels, everything else in lines
const PIXELS_PER_LINE: f64 = 16.0;

fn window_error(err: impl std::fmt::Display) -> Error {
    Error::Window(err.to_string())
}

/// Open a window and run `G` in it until it is closed or the game calls [crate::event::Context::exit]
///
/// # NOTE
/// Must be called from the main thread.
pub fn run<G: Game>(conf: Conf) -> anyhow::Result<()> {
    let app = App::<G>::new(&conf)?;
    let event_loop = EventLoop::new().map_err(window_error)?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut host = Host {
        canvas: Canvas::new(conf.size.width, conf.size.height),
        conf,
        app,
        gfx: Graphics::new(),
        surface: None,
        error: None,
    };
    event_loop.run_app(&mut host).map_err(window_error)?;

    match host.error {
        Some(err) => Err(err),
        None => {
            log::info!("window closed after {} frames", host.app.context().frame_count());
            Ok(())
        }
    }
}

struct WindowSurface {
    window: Rc<Window>,
    // the surface must not outlive its context
    _context: softbuffer::Context<Rc<Window>>,
    surface: softbuffer::Surface<Rc<Window>, Rc<Window>>,
}

struct Host<G: Game> {
    conf: Conf,
    app: App<G>,
    gfx: Graphics,
    canvas: Canvas,
    surface: Option<WindowSurface>,
    error: Option<anyhow::Error>,
}

impl<G: Game> Host<G> {
    fn fail(&mut self, event_loop: &ActiveEventLoop, err: anyhow::Error) {
        log::error!("{err:#}");
        if self.error.is_none() {
            self.error = Some(err);
        }
        event_loop.exit();
    }

    fn open_window(&self, event_loop: &ActiveEventLoop) -> crate::Result<WindowSurface> {
        let attribs = Window::default_attributes()
            .with_title(self.conf.title.as_str())
            .with_inner_size(PhysicalSize::new(self.conf.size.width, self.conf.size.height));
        let window = Rc::new(event_loop.create_window(attribs).map_err(window_error)?);
        let context = softbuffer::Context::new(window.clone()).map_err(window_error)?;
        let surface = softbuffer::Surface::new(&context, window.clone()).map_err(window_error)?;
        log::info!("opened {:?} at {}", self.conf.title, self.conf.size);
        Ok(WindowSurface {
            window,
            _context: context,
            surface,
        })
    }

    fn send(&mut self, data: EventData) -> anyhow::Result<()> {
        self.app.handle_event(Event::new(data))
    }

    fn redraw(&mut self) -> anyhow::Result<()> {
        let Some(ws) = self.surface.as_mut() else {
            return Ok(());
        };
        let size = ws.window.inner_size();
        // minimized
        let (Some(width), Some(height)) = (NonZeroU32::new(size.width), NonZeroU32::new(size.height)) else {
            return Ok(());
        };

        self.canvas.resize(size.width, size.height);
        self.app.frame(Instant::now(), &mut self.gfx)?;
        render_2d::render(&self.gfx, &mut self.canvas);

        ws.surface.resize(width, height).map_err(window_error)?;
        let mut buffer = ws.surface.buffer_mut().map_err(window_error)?;
        render_2d::write_xrgb(&self.canvas, &mut buffer);
        buffer.present().map_err(window_error)?;
        Ok(())
    }

    fn handle_window_event(&mut self, event_loop: &ActiveEventLoop, ev: WindowEvent) -> anyhow::Result<()> {
        match ev {
            WindowEvent::CloseRequested => {
                log::debug!("close requested");
                event_loop.exit();
            }
            WindowEvent::RedrawRequested => {
                self.redraw()?;
                if self.app.exit_requested() {
                    log::debug!("game asked to exit");
                    event_loop.exit();
                }
            }
            WindowEvent::Resized(size) => {
                self.send(EventData::Resized {
                    size: Vec2::new(size.width, size.height),
                })?;
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        logical_key,
                        state,
                        repeat,
                        text,
                        ..
                    },
                ..
            } => {
                if !repeat {
                    self.send(EventData::Key {
                        key: convert_key(logical_key),
                        pressed: state.is_pressed(),
                    })?;
                }
                if let Some(text) = text.filter(|_| state.is_pressed()) {
                    self.send(EventData::Text {
                        text: text.to_string(),
                    })?;
                }
            }
            WindowEvent::CursorMoved { position, .. } => {
                self.send(EventData::MouseMoved {
                    position: Vec2::new(position.x, position.y),
                })?;
            }
            WindowEvent::CursorEntered { .. } => self.send(EventData::MouseEntered)?,
            WindowEvent::CursorLeft { .. } => self.send(EventData::MouseLeft)?,
            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(x, y) => Vec2::new(x, y),
                    MouseScrollDelta::PixelDelta(p) => {
                        Vec2::new(p.x / PIXELS_PER_LINE, p.y / PIXELS_PER_LINE)
                    }
                };
                self.send(EventData::MouseWheel { delta })?;
            }
            WindowEvent::MouseInput { state, button, .. } => {
                self.send(EventData::MouseButton {
                    button: convert_button(button),
                    pressed: state.is_pressed(),
                })?;
            }
            WindowEvent::Focused(focused) => self.send(EventData::FocusChange { focused })?,
            _ => {}
        }
        Ok(())
    }
}

impl<G: Game> ApplicationHandler for Host<G> {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.surface.is_some() {
            return;
        }
        match self.open_window(event_loop) {
            Ok(surface) => self.surface = Some(surface),
            Err(err) => self.fail(event_loop, anyhow::Error::from(err).context("failed to open window")),
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(ws) = &self.surface {
            ws.window.request_redraw();
        }
    }

    fn window_event(&mut self, event_loop: &ActiveEventLoop, _window_id: WindowId, ev: WindowEvent) {
        if self.error.is_some() {
            return;
        }
        if let Err(err) = self.handle_window_event(event_loop, ev) {
            self.fail(event_loop, err);
        }
    }
}

fn convert_button(button: winit::event::MouseButton) -> MouseButton {
    match button {
        winit::event::MouseButton::Left => MouseButton::Left,
        winit::event::MouseButton::Right => MouseButton::Right,
        winit::event::MouseButton::Middle => MouseButton::Middle,
        winit::event::MouseButton::Back => MouseButton::Other(3),
        winit::event::MouseButton::Forward => MouseButton::Other(4),
        winit::event::MouseButton::Other(n) => MouseButton::Other(n),
    }
}

fn convert_key(key: WKey<SmolStr>) -> Key {
    match key {
        WKey::Named(NamedKey::ArrowUp) => Key::Up,
        WKey::Named(NamedKey::ArrowDown) => Key::Down,
        WKey::Named(NamedKey::ArrowLeft) => Key::Left,
        WKey::Named(NamedKey::ArrowRight) => Key::Right,
        WKey::Named(NamedKey::Space) => Key::Space,
        WKey::Named(NamedKey::Enter) => Key::Enter,
        WKey::Named(NamedKey::Escape) => Key::Escape,
        WKey::Named(NamedKey::Backspace) => Key::Backspace,
        WKey::Named(NamedKey::Delete) => Key::Delete,
        WKey::Named(NamedKey::Tab) => Key::Tab,
        WKey::Named(NamedKey::Home) => Key::Home,
        WKey::Named(NamedKey::End) => Key::End,
        WKey::Named(NamedKey::PageUp) => Key::PageUp,
        WKey::Named(NamedKey::PageDown) => Key::PageDown,
        WKey::Named(NamedKey::Insert) => Key::Insert,
        WKey::Named(NamedKey::Shift) => Key::Shift,
        WKey::Named(NamedKey::Control) => Key::Control,
        WKey::Named(NamedKey::Alt) => Key::Alt,
        WKey::Named(NamedKey::Meta) | WKey::Named(NamedKey::Super) => Key::Meta,
        WKey::Named(NamedKey::F1) => Key::F(1),
        WKey::Named(NamedKey::F2) => Key::F(2),
        WKey::Named(NamedKey::F3) => Key::F(3),
        WKey::Named(NamedKey::F4) => Key::F(4),
        WKey::Named(NamedKey::F5) => Key::F(5),
        WKey::Named(NamedKey::F6) => Key::F(6),
        WKey::Named(NamedKey::F7) => Key::F(7),
        WKey::Named(NamedKey::F8) => Key::F(8),
        WKey::Named(NamedKey::F9) => Key::F(9),
        WKey::Named(NamedKey::F10) => Key::F(10),
        WKey::Named(NamedKey::F11) => Key::F(11),
        WKey::Named(NamedKey::F12) => Key::F(12),
        WKey::Character(ch) => ch.chars().next().map(Key::from).unwrap_or(Key::Unknown),
        _ => Key::Unknown,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_convert() {
        assert_eq!(convert_key(WKey::Character(SmolStr::new("Q"))), Key::Char('q'));
        assert_eq!(convert_key(WKey::Character(SmolStr::new(" "))), Key::Space);
        assert_eq!(convert_key(WKey::Named(NamedKey::F5)), Key::F(5));
        assert_eq!(convert_key(WKey::Named(NamedKey::CapsLock)), Key::Unknown);
    }

    #[test]
    fn buttons_convert() {
        assert_eq!(convert_button(winit::event::MouseButton::Middle), MouseButton::Middle);
        assert_eq!(convert_button(winit::event::MouseButton::Other(9)), MouseButton::Other(9));
    }
}

//! Standalone window host backed by winit.
//!
//! The viewer drives a [`SceneEngine`] with on-demand control flow: it polls
//! while the engine wants frames and waits for window events otherwise.
//! Drawn frames go to a [`FrameSink`]; the default [`LogSink`] logs a
//! one-line summary of each.
//!
//! ```no_run
//! # use skillscape::Viewer;
//! Viewer::builder()
//!     .with_title("Skills")
//!     .build()
//!     .run()
//!     .unwrap();
//! ```

use std::{sync::Arc, time::Duration};

use web_time::Instant;
use winit::{
    application::ApplicationHandler,
    event::{ElementState, MouseScrollDelta, WindowEvent},
    event_loop::{ActiveEventLoop, ControlFlow, EventLoop},
    keyboard::PhysicalKey,
    window::{Window, WindowId},
};

use crate::{
    catalog::Catalog, engine::FrameOutcome, error::SkillscapeError,
    options::Options, scene::SceneFrame, FrameSink, InputEvent,
    InputProcessor, MouseButton, PickTarget, SceneCommand, SceneEngine,
};

/// How often the window title refreshes its fps readout.
const TITLE_REFRESH: Duration = Duration::from_millis(250);

// ── Sinks ────────────────────────────────────────────────────────────────

/// Frame sink that logs a summary of every drawn frame.
#[derive(Debug, Default)]
pub struct LogSink {
    frames: u64,
}

impl LogSink {
    /// Frames drawn so far.
    #[must_use]
    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameSink for LogSink {
    fn draw(&mut self, frame: &SceneFrame) {
        self.frames += 1;
        log::debug!(
            "frame {}: eye {}, look-at {}, {} nodes, {} satellites",
            self.frames,
            frame.camera.eye,
            frame.camera.target,
            frame.nodes.len(),
            frame.satellites.len()
        );
    }
}

// ── Builder ──────────────────────────────────────────────────────────────

/// Fluent builder for [`Viewer`].
pub struct ViewerBuilder {
    catalog: Option<Arc<Catalog>>,
    options: Option<Options>,
    sink: Option<Box<dyn FrameSink>>,
    title: String,
}

impl ViewerBuilder {
    /// Create a builder with the reference catalog, default options, a
    /// logging sink and the title "Skillscape".
    fn new() -> Self {
        Self {
            catalog: None,
            options: None,
            sink: None,
            title: "Skillscape".into(),
        }
    }

    /// Use `catalog` instead of the reference catalog.
    #[must_use]
    pub fn with_catalog(mut self, catalog: Arc<Catalog>) -> Self {
        self.catalog = Some(catalog);
        self
    }

    /// Override the default options.
    #[must_use]
    pub fn with_options(mut self, options: Options) -> Self {
        self.options = Some(options);
        self
    }

    /// Send drawn frames to `sink` instead of the log.
    #[must_use]
    pub fn with_sink(mut self, sink: Box<dyn FrameSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Set the window title.
    #[must_use]
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Consume the builder and produce a [`Viewer`].
    #[must_use]
    pub fn build(self) -> Viewer {
        Viewer {
            catalog: self.catalog,
            options: self.options,
            sink: self.sink,
            title: self.title,
        }
    }
}

// ── Viewer ───────────────────────────────────────────────────────────────

/// A standalone window that hosts the skill-map scene.
///
/// Construct via [`Viewer::builder`], then call [`run`](Self::run) to
/// enter the event loop.
pub struct Viewer {
    catalog: Option<Arc<Catalog>>,
    options: Option<Options>,
    sink: Option<Box<dyn FrameSink>>,
    title: String,
}

impl Viewer {
    /// Start a new builder.
    #[must_use]
    pub fn builder() -> ViewerBuilder {
        ViewerBuilder::new()
    }

    /// Open the window and run the event loop. Blocks until the window is
    /// closed.
    ///
    /// # Errors
    ///
    /// Returns [`SkillscapeError::Viewer`] if the event loop cannot be
    /// created or exits abnormally, or a catalog error if no catalog was
    /// given and the reference catalog fails validation.
    pub fn run(self) -> Result<(), SkillscapeError> {
        let catalog = match self.catalog {
            Some(catalog) => catalog,
            None => Arc::new(Catalog::reference()?),
        };
        let options = self.options.unwrap_or_default();
        let input = InputProcessor::new(options.keybindings.clone());
        let engine = SceneEngine::new(catalog, options);

        let event_loop = EventLoop::new()
            .map_err(|e| SkillscapeError::Viewer(e.to_string()))?;
        event_loop.set_control_flow(ControlFlow::Wait);

        let mut app = ViewerApp {
            window: None,
            engine,
            input,
            sink: self.sink.unwrap_or_else(|| Box::new(LogSink::default())),
            title: self.title,
            clock: Instant::now(),
            last_title_update: None,
        };

        event_loop
            .run_app(&mut app)
            .map_err(|e| SkillscapeError::Viewer(e.to_string()))
    }
}

// ── Winit app ────────────────────────────────────────────────────────────

/// Internal winit application handler.
struct ViewerApp {
    window: Option<Arc<Window>>,
    engine: SceneEngine,
    input: InputProcessor,
    sink: Box<dyn FrameSink>,
    title: String,
    /// Origin of the host clock passed to `SceneEngine::frame`
    clock: Instant,
    last_title_update: Option<Instant>,
}

/// Physical window size with zero dimensions bumped to one.
fn viewport_size(inner: winit::dpi::PhysicalSize<u32>) -> (u32, u32) {
    (inner.width.max(1), inner.height.max(1))
}

impl ViewerApp {
    /// Feed one input event through the processor, picking at the event's
    /// position or the last known cursor position.
    fn dispatch(&mut self, event: InputEvent) {
        let hovered = event
            .position()
            .map(|p| (p.x, p.y))
            .or_else(|| self.input.mouse_pos())
            .map_or(PickTarget::None, |(x, y)| self.pick(x, y));
        for cmd in self.input.handle_event(event, hovered) {
            self.engine.execute(cmd);
        }
    }

    fn pick(&self, x: f32, y: f32) -> PickTarget {
        self.sink
            .pick(x, y)
            .unwrap_or_else(|| self.engine.pick_in_viewport(x, y))
    }

    fn redraw(&mut self) {
        let now_ms = self.clock.elapsed().as_secs_f64() * 1000.0;
        match self.engine.frame(now_ms) {
            FrameOutcome::Draw { frame, reason } => {
                log::trace!("draw: {reason}");
                self.sink.draw(frame);
            }
            FrameOutcome::Loading { progress } => {
                log::debug!("loading {progress:.0}%");
            }
            FrameOutcome::Fallback | FrameOutcome::Idle => {}
        }
        self.refresh_title();
    }

    fn refresh_title(&mut self) {
        let now = Instant::now();
        if self
            .last_title_update
            .is_some_and(|t| now.duration_since(t) < TITLE_REFRESH)
        {
            return;
        }
        self.last_title_update = Some(now);
        let Some(window) = &self.window else {
            return;
        };
        let status = self.engine.status();
        let focus = status.selected.as_deref().unwrap_or("overview");
        window.set_title(&format!(
            "{} - {} fps ({}) - {focus}",
            self.title, status.fps, status.tier
        ));
    }

    fn handle_key(&mut self, key: &str) {
        let Some(cmd) = self.input.handle_key_press(key) else {
            return;
        };
        self.engine.execute(cmd);
        if cmd == SceneCommand::ToggleFallbackView
            && self.engine.is_fallback_view()
        {
            for line in self.engine.fallback_view().to_string().lines() {
                log::info!("{line}");
            }
        }
    }
}

impl ApplicationHandler for ViewerApp {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let monitor = event_loop
            .primary_monitor()
            .or_else(|| event_loop.available_monitors().next());
        let attrs = if let Some(mon) = &monitor {
            let mon_size = mon.size();
            let scale = mon.scale_factor();
            let logical_w = (f64::from(mon_size.width) / scale * 0.75) as u32;
            let logical_h = (f64::from(mon_size.height) / scale * 0.75) as u32;
            Window::default_attributes()
                .with_title(&self.title)
                .with_inner_size(winit::dpi::LogicalSize::new(
                    logical_w, logical_h,
                ))
        } else {
            Window::default_attributes().with_title(&self.title)
        };

        let window = match event_loop.create_window(attrs) {
            Ok(w) => Arc::new(w),
            Err(e) => {
                log::error!("Failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let (width, height) = viewport_size(window.inner_size());
        self.engine.execute(SceneCommand::Resize { width, height });
        // Nothing is streamed in natively; the scene is ready at once.
        self.engine.execute(SceneCommand::AssetsLoaded);

        window.request_redraw();
        self.window = Some(window);
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => event_loop.exit(),

            WindowEvent::Resized(size) => {
                let (width, height) = viewport_size(size);
                self.engine.execute(SceneCommand::Resize { width, height });
            }

            WindowEvent::RedrawRequested => self.redraw(),

            WindowEvent::MouseInput { button, state, .. } => {
                self.dispatch(InputEvent::MouseButton {
                    button: MouseButton::from(button),
                    pressed: state == ElementState::Pressed,
                });
            }

            WindowEvent::CursorMoved { position, .. } => {
                let (x, y) = (position.x as f32, position.y as f32);
                self.dispatch(InputEvent::CursorMoved { x, y });
            }

            WindowEvent::CursorLeft { .. } => {
                self.dispatch(InputEvent::CursorLeft);
            }

            WindowEvent::MouseWheel { delta, .. } => {
                let delta = match delta {
                    MouseScrollDelta::LineDelta(_, y) => y,
                    MouseScrollDelta::PixelDelta(pos) => pos.y as f32 * 0.01,
                };
                self.dispatch(InputEvent::Scroll { delta });
            }

            WindowEvent::KeyboardInput { event, .. } => {
                if event.state != ElementState::Pressed || event.repeat {
                    return;
                }
                let PhysicalKey::Code(code) = event.physical_key else {
                    return;
                };
                self.handle_key(&format!("{code:?}"));
            }

            _ => (),
        }
    }

    fn about_to_wait(&mut self, event_loop: &ActiveEventLoop) {
        if self.engine.wants_frame() {
            event_loop.set_control_flow(ControlFlow::Poll);
            if let Some(w) = &self.window {
                w.request_redraw();
            }
        } else {
            event_loop.set_control_flow(ControlFlow::Wait);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_sink_counts_frames() {
        let catalog = Arc::new(Catalog::reference().unwrap());
        let mut engine = SceneEngine::new(catalog, Options::default());
        engine.execute(SceneCommand::AssetsLoaded);
        let mut sink = LogSink::default();
        if let FrameOutcome::Draw { frame, .. } = engine.frame(0.0) {
            sink.draw(frame);
        }
        assert_eq!(sink.frames(), 1);
    }
}

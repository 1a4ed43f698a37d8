//! Window creation and the render loop shared by every exercise
use crate::config::WindowConfig;
use crate::error::{Error, Result};
use crate::graphics;
use crate::input::{KeyboardState, MouseTracker};

use glutin::dpi::LogicalSize;
use glutin::event::{
    DeviceEvent, ElementState, Event, MouseScrollDelta, VirtualKeyCode, WindowEvent,
};
use glutin::event_loop::{ControlFlow, EventLoop};
use glutin::window::WindowBuilder;
use glutin::{Api, ContextBuilder, GlProfile, GlRequest, PossiblyCurrent, WindowedContext};

use std::ffi::CStr;
use std::time::Instant;

/// Pixel scroll deltas (touchpads) are converted to lines with this ratio
const PIXELS_PER_LINE: f32 = 20.0;

/// Seconds since the loop started and since the previous frame
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameTime {
    pub elapsed: f32,
    pub delta: f32,
}

/// A single tutorial program: its GL objects and per-program state
pub trait Exercise: Sized + 'static {
    /// Called once the context is current and the GL functions are loaded
    fn init(config: &WindowConfig) -> Result<Self>;

    /// Called every frame before rendering
    fn process_input(&mut self, _keys: &KeyboardState, _time: FrameTime) {}

    /// Cursor movement in pixels since the previous event
    fn mouse_moved(&mut self, _offset_x: f32, _offset_y: f32) {}

    /// Vertical scroll in lines
    fn scrolled(&mut self, _offset_y: f32) {}

    /// Framebuffer size in physical pixels, the viewport is already updated
    fn resized(&mut self, _width: u32, _height: u32) {}

    fn render(&mut self, time: FrameTime) -> Result<()>;
}

struct Running<E> {
    // dropped before the context so the GL objects are deleted while it is current
    exercise: E,
    context: WindowedContext<PossiblyCurrent>,
}

/// Terminates the process. The exit status is 0 on a clean close
pub fn quit(status: i32) -> ! {
    log::info!("exiting with status {}", status);
    std::process::exit(status)
}

/// Opens the window, initializes `E` and runs the render loop until the
/// window is closed or Escape is pressed.
///
/// Any failure is logged and ends the process with status 1
pub fn run<E: Exercise>(config: WindowConfig) -> ! {
    let el = EventLoop::new();
    let context = match create_context(&config, &el) {
        Ok(context) => context,
        Err(e) => fail(e),
    };
    let exercise = match E::init(&config) {
        Ok(exercise) => exercise,
        Err(e) => fail(e),
    };
    let mut state = Some(Running { exercise, context });
    if let Some(running) = state.as_mut() {
        let size = running.context.window().inner_size();
        running.exercise.resized(size.width, size.height);
    }

    let mut keys = KeyboardState::default();
    let mut mouse =
        MouseTracker::new(config.width, config.height).captured(config.capture_cursor);
    let mut status = 0;

    let start = Instant::now();
    let mut last_frame = start;
    let mut frames = 0u32;
    let mut frame_secs = 0.0;

    el.run(move |event, _, control_flow| {
        *control_flow = ControlFlow::Poll;

        if let Event::LoopDestroyed = event {
            drop(state.take());
            if status != 0 {
                quit(status);
            }
            return;
        }
        let running = match state.as_mut() {
            Some(running) => running,
            None => return,
        };

        match event {
            Event::WindowEvent { event, .. } => match event {
                WindowEvent::CloseRequested => *control_flow = ControlFlow::Exit,
                WindowEvent::Resized(size) => {
                    running.context.resize(size);
                    if size.width > 0 && size.height > 0 {
                        unsafe { gl::Viewport(0, 0, size.width as i32, size.height as i32) };
                        running.exercise.resized(size.width, size.height);
                    }
                }
                WindowEvent::KeyboardInput { input, .. } => {
                    if input.virtual_keycode == Some(VirtualKeyCode::Escape)
                        && input.state == ElementState::Pressed
                    {
                        *control_flow = ControlFlow::Exit;
                    }
                    keys.handle(&input);
                }
                WindowEvent::CursorMoved { position, .. } => {
                    let (x, y) = (position.x as f32, position.y as f32);
                    if let Some((x, y)) = mouse.cursor_moved(x, y) {
                        running.exercise.mouse_moved(x, y);
                    }
                }
                WindowEvent::MouseWheel { delta, .. } => {
                    let lines = match delta {
                        MouseScrollDelta::LineDelta(_, y) => y,
                        MouseScrollDelta::PixelDelta(position) => {
                            position.y as f32 / PIXELS_PER_LINE
                        }
                    };
                    running.exercise.scrolled(lines);
                }
                WindowEvent::Focused(false) => keys.clear(),
                _ => {}
            },
            Event::DeviceEvent {
                event: DeviceEvent::MouseMotion { delta: (dx, dy) },
                ..
            } => {
                if let Some((x, y)) = mouse.device_motion(dx, dy) {
                    running.exercise.mouse_moved(x, y);
                }
            }
            Event::MainEventsCleared => {
                let now = Instant::now();
                let time = FrameTime {
                    elapsed: (now - start).as_secs_f32(),
                    delta: (now - last_frame).as_secs_f32(),
                };
                last_frame = now;

                running.exercise.process_input(&keys, time);
                let frame = running
                    .exercise
                    .render(time)
                    .and_then(|()| running.context.swap_buffers().map_err(Error::from));
                if let Err(e) = frame {
                    log::error!("{}", e);
                    status = 1;
                    *control_flow = ControlFlow::Exit;
                    return;
                }
                unsafe { graphics::check_error() };

                frame_secs += time.delta;
                frames += 1;
                if frames == 50 {
                    log::trace!("fps: {:.1}", frames as f32 / frame_secs);
                    frames = 0;
                    frame_secs = 0.0;
                }
            }
            _ => {}
        }
    })
}

fn fail(error: Error) -> ! {
    log::error!("{}", error);
    quit(1)
}

fn create_context(
    config: &WindowConfig,
    el: &EventLoop<()>,
) -> Result<WindowedContext<PossiblyCurrent>> {
    let wb = WindowBuilder::new()
        .with_title(config.title.clone())
        .with_inner_size(LogicalSize::new(config.width as f64, config.height as f64));
    let wc = ContextBuilder::new()
        .with_gl(GlRequest::Specific(Api::OpenGl, config.gl_version))
        .with_gl_profile(GlProfile::Core)
        .with_vsync(config.vsync)
        .build_windowed(wb, el)?;
    // Set the window context as the current context
    let window = unsafe { wc.make_current() }.map_err(|(_, e)| e)?;
    // Load the opengl functions
    gl::load_with(|symbol| window.context().get_proc_address(symbol) as *const _);

    if config.capture_cursor {
        window.window().set_cursor_grab(true)?;
        window.window().set_cursor_visible(false);
    }

    let size = window.window().inner_size();
    unsafe {
        gl::Viewport(0, 0, size.width as i32, size.height as i32);
        let version = gl::GetString(gl::VERSION);
        if !version.is_null() {
            log::info!(
                "OpenGL {}",
                CStr::from_ptr(version as *const _).to_string_lossy()
            );
        }
    }
    Ok(window)
}

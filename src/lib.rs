//! Shared pieces of the LearnOpenGL exercises: a thin OpenGL wrapper, a
//! first-person camera and the window/render loop every exercise runs in.
//!
//! Each exercise lives in `src/bin/` and implements [`Exercise`].
pub mod assets;
pub mod camera;
pub mod config;
pub mod error;
pub mod geometry;
pub mod graphics;
pub mod input;
pub mod logging;
pub mod window;

pub use camera::{Camera, CameraSettings, Direction};
pub use config::WindowConfig;
pub use error::{Error, Result};
pub use input::{KeyboardState, MouseTracker};
pub use window::{quit, run, Exercise, FrameTime};

/// Re-exported so exercises match on the same key codes the loop tracks
pub use glutin::event::VirtualKeyCode;

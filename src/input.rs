use glutin::event::{ElementState, KeyboardInput, VirtualKeyCode};
use std::collections::HashSet;

/// Keys currently held down
#[derive(Debug, Default, Clone)]
pub struct KeyboardState {
    pressed: HashSet<VirtualKeyCode>,
}

impl KeyboardState {
    pub fn handle(&mut self, input: &KeyboardInput) {
        if let Some(key) = input.virtual_keycode {
            self.set(key, input.state);
        }
    }

    pub fn set(&mut self, key: VirtualKeyCode, state: ElementState) {
        match state {
            ElementState::Pressed => self.pressed.insert(key),
            ElementState::Released => self.pressed.remove(&key),
        };
    }

    pub fn is_pressed(&self, key: VirtualKeyCode) -> bool {
        self.pressed.contains(&key)
    }

    /// Forgets every key, e.g. when the window loses focus and the release
    /// events would be missed
    pub fn clear(&mut self) {
        self.pressed.clear();
    }
}

/// Turns absolute cursor positions into offsets since the previous one.
///
/// A captured cursor is grabbed by the window and stops at its edges (or
/// stops moving at all), so mouse look then comes from raw device motion
#[derive(Debug, Clone)]
pub struct MouseTracker {
    last_x: f32,
    last_y: f32,
    first_input: bool,
    captured: bool,
}

impl MouseTracker {
    /// Starts from the centre of a `width`x`height` window
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            last_x: width as f32 / 2.0,
            last_y: height as f32 / 2.0,
            first_input: true,
            captured: false,
        }
    }

    pub fn captured(mut self, captured: bool) -> Self {
        self.captured = captured;
        self
    }

    /// Offset for a `CursorMoved` position, `None` while the cursor is captured
    pub fn cursor_moved(&mut self, x: f32, y: f32) -> Option<(f32, f32)> {
        if self.captured {
            None
        } else {
            Some(self.offset(x, y))
        }
    }

    /// Offset for a raw `MouseMotion` delta, only used while the cursor is captured
    pub fn device_motion(&self, delta_x: f64, delta_y: f64) -> Option<(f32, f32)> {
        if self.captured {
            Some((delta_x as f32, delta_y as f32))
        } else {
            None
        }
    }

    /// The first position only seeds the tracker and yields no offset
    pub fn offset(&mut self, x: f32, y: f32) -> (f32, f32) {
        if self.first_input {
            self.last_x = x;
            self.last_y = y;
            self.first_input = false;
        }
        let offset = (x - self.last_x, y - self.last_y);
        self.last_x = x;
        self.last_y = y;
        offset
    }
}

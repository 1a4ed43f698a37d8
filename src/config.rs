/// Window and context settings shared by every exercise
#[derive(Debug, Clone, PartialEq)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Requested OpenGL core profile version as (major, minor)
    pub gl_version: (u8, u8),
    pub vsync: bool,
    /// Hide the cursor and keep it inside the window (used for mouse look)
    pub capture_cursor: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "LearnOpenGL".to_string(),
            width: 800,
            height: 600,
            gl_version: (3, 3),
            vsync: true,
            capture_cursor: false,
        }
    }
}

impl WindowConfig {
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_size(mut self, width: u32, height: u32) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    pub fn with_gl_version(mut self, major: u8, minor: u8) -> Self {
        self.gl_version = (major, minor);
        self
    }

    pub fn with_vsync(mut self, vsync: bool) -> Self {
        self.vsync = vsync;
        self
    }

    pub fn with_captured_cursor(mut self, capture: bool) -> Self {
        self.capture_cursor = capture;
        self
    }

    pub fn aspect_ratio(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_tutorial_window() {
        let config = WindowConfig::default();
        assert_eq!(config.title, "LearnOpenGL");
        assert_eq!((config.width, config.height), (800, 600));
        assert_eq!(config.gl_version, (3, 3));
        assert!(!config.capture_cursor);
        assert!((config.aspect_ratio() - 800.0 / 600.0).abs() < f32::EPSILON);
    }

    #[test]
    fn builder_overrides_fields() {
        let config = WindowConfig::default()
            .with_title("Camera")
            .with_size(1024, 0)
            .with_captured_cursor(true);
        assert_eq!(config.title, "Camera");
        assert!(config.capture_cursor);
        // a zero height must not divide by zero
        assert_eq!(config.aspect_ratio(), 1024.0);
    }
}

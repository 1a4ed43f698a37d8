//! Asset locations, fixed at compile time relative to the crate root
use std::path::{Path, PathBuf};

const ROOT: &str = env!("CARGO_MANIFEST_DIR");

/// Path of a shader source under `shaders/`
pub fn shader(relative: impl AsRef<Path>) -> PathBuf {
    Path::new(ROOT).join("shaders").join(relative)
}

/// Path of an image under `assets/textures/`
pub fn texture(relative: impl AsRef<Path>) -> PathBuf {
    Path::new(ROOT).join("assets").join("textures").join(relative)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_are_rooted_at_the_crate() {
        let vert = shader("lighting/shader.vert");
        assert!(vert.is_absolute());
        assert!(vert.ends_with("shaders/lighting/shader.vert"));

        let tex = texture("container.png");
        assert!(tex.ends_with("assets/textures/container.png"));
    }
}

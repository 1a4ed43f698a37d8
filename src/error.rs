use std::path::PathBuf;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to create the window: {0}")]
    Window(#[from] glutin::CreationError),

    #[error("failed to make the GL context current: {0}")]
    Context(#[from] glutin::ContextError),

    #[error("failed to capture the cursor: {0}")]
    CursorGrab(#[from] glutin::error::ExternalError),

    #[error("shader not found: {}", .0.display())]
    ShaderNotFound(PathBuf),

    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("{0} contains an interior NUL byte")]
    InvalidSource(&'static str),

    #[error("{stage} shader compile error:\n{log}")]
    Compile { stage: &'static str, log: String },

    #[error("linking shader program failed:\n{0}")]
    Link(String),

    #[error("could not find uniform '{0}'")]
    UniformNotFound(String),

    #[error("the given image file '{}' does not exist", .0.display())]
    TextureNotFound(PathBuf),

    #[error("failed to load image: {0}")]
    Image(#[from] image::ImageError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_carry_the_diagnostic() {
        let err = Error::Compile {
            stage: "Vertex",
            log: "0:1(1): error: syntax error".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Vertex shader compile error:\n0:1(1): error: syntax error"
        );

        let err = Error::UniformNotFound("model".to_string());
        assert_eq!(err.to_string(), "could not find uniform 'model'");

        let err = Error::TextureNotFound(PathBuf::from("textures/missing.png"));
        assert_eq!(
            err.to_string(),
            "the given image file 'textures/missing.png' does not exist"
        );
    }
}

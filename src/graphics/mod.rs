//! This is a thin wrapper around basic OpenGL calls that doesn't guarantee
//! any safety (thus everything touching the driver is unsafe and requires a
//! current context with the functions loaded)
mod ebo;
mod layout;
mod shader;
mod texture;
mod vao;
mod vbo;

pub use ebo::ElementBufferObject;
pub use layout::VertexLayout;
pub use shader::{read_source, FragmentShader, Program, VertexShader};
pub use texture::{PixelFormat, Texture, TextureImage, TextureOptions, Wrap};
pub use vao::VertexArrayObject;
pub use vbo::VertexBufferObject;

/// Drains the GL error queue, logging every pending error code.
///
/// Returns the number of errors found
pub unsafe fn check_error() -> usize {
    let mut count = 0;
    loop {
        let error = gl::GetError();
        if error == gl::NO_ERROR {
            break count;
        }
        log::warn!("OpenGL error 0x{:04X} ({})", error, error_name(error));
        count += 1;
    }
}

fn error_name(code: gl::types::GLenum) -> &'static str {
    match code {
        gl::INVALID_ENUM => "invalid enum",
        gl::INVALID_VALUE => "invalid value",
        gl::INVALID_OPERATION => "invalid operation",
        gl::INVALID_FRAMEBUFFER_OPERATION => "invalid framebuffer operation",
        gl::OUT_OF_MEMORY => "out of memory",
        gl::STACK_UNDERFLOW => "stack underflow",
        gl::STACK_OVERFLOW => "stack overflow",
        _ => "unknown",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes_have_names() {
        assert_eq!(error_name(gl::INVALID_OPERATION), "invalid operation");
        assert_eq!(error_name(gl::OUT_OF_MEMORY), "out of memory");
        assert_eq!(error_name(0xDEAD), "unknown");
    }
}

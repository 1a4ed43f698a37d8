use crate::error::{Error, Result};
use std::ffi::CString;
use std::io::ErrorKind;
use std::path::Path;

macro_rules! shader {
	($name: ident [$gl: ident]: $($ext:tt)+) => {
		pub struct $name {
			id: u32,
			source: String,
		}

		impl $name {
			pub(super) fn handle(&self) -> u32 {
				self.id
			}

			/// Reads the file at `path` and compiles it
			pub unsafe fn from_file(path: &Path) -> Result<Self> {
				let source = read_source(path)?;
				Self::from_source(&source)
			}

			pub unsafe fn from_source(source: &str) -> Result<Self> {
				const STAGE: &str = stringify!($($ext),+);
				let c_source = CString::new(source).map_err(|_| Error::InvalidSource(STAGE))?;
				// Create a new shader object
				let id = gl::CreateShader(gl::$gl);
				// Attach the source code to it
				gl::ShaderSource(id, 1, &c_source.as_ptr(), std::ptr::null());
				gl::CompileShader(id); // Compile it

				// Checking shader compile status
				let mut status = 0;
				gl::GetShaderiv(id, gl::COMPILE_STATUS, &mut status);
				if status == 0 {
					// Get the legth of the info log
					let mut len = 0;
					gl::GetShaderiv(id, gl::INFO_LOG_LENGTH, &mut len);
					let mut log = info_log_buffer(len);
					// Retrive the info log
					gl::GetShaderInfoLog(id, len, &mut len, log.as_mut_ptr() as *mut _);
					gl::DeleteShader(id);
					Err(Error::Compile { stage: STAGE, log: info_log_to_string(log, len) })
				} else {
					Ok(Self { id, source: source.to_string() })
				}
			}
		}

		impl std::fmt::Debug for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				write!(f, concat!(stringify!($($ext),+)," source code:\n{}"), self.source)
			}
		}

		impl Drop for $name {
			fn drop(&mut self) {
				unsafe {
					gl::DeleteShader(self.id);
				}
			}
		}
	};
}

shader! {VertexShader[VERTEX_SHADER]: Vertex}
shader! {FragmentShader[FRAGMENT_SHADER]: Fragment}

pub use program::Program;
mod program;

/// Reads a whole shader source file
pub fn read_source(path: &Path) -> Result<String> {
    std::fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => Error::ShaderNotFound(path.to_path_buf()),
        _ => Error::Io {
            path: path.to_path_buf(),
            source,
        },
    })
}

// Allocates the memory to store an info log of `len` bytes (NUL included)
fn info_log_buffer(len: i32) -> Vec<u8> {
    vec![0; len.max(1) as usize]
}

// Keeps the `written` bytes the driver reported, without the trailing NUL
fn info_log_to_string(mut log: Vec<u8>, written: i32) -> String {
    log.truncate(written.max(0) as usize);
    while log.last() == Some(&0) {
        log.pop();
    }
    String::from_utf8_lossy(&log).trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets;

    #[test]
    fn missing_source_is_reported_as_not_found() {
        let path = assets::shader("does/not/exist.vert");
        match read_source(&path) {
            Err(Error::ShaderNotFound(p)) => assert_eq!(p, path),
            other => panic!("unexpected result: {:?}", other.map(|_| ())),
        }
    }

    #[test]
    fn shipped_sources_target_the_core_profile() {
        for path in [
            "shader_offset/shader.vert",
            "shader_offset/shader.frag",
            "textures/shader.vert",
            "textures/shader.frag",
            "transformations/shader.vert",
            "coordinate_systems/shader.vert",
            "camera/shader.vert",
            "lighting/shader.vert",
            "lighting/shader.frag",
            "lighting/lamp.frag",
        ] {
            let source = read_source(&assets::shader(path)).unwrap();
            assert!(source.starts_with("#version 330 core"), "{}", path);
        }
    }

    #[test]
    fn info_log_drops_padding() {
        let mut buffer = info_log_buffer(16);
        buffer[..6].copy_from_slice(b"error\n");
        assert_eq!(info_log_to_string(buffer, 7), "error");
        assert_eq!(info_log_to_string(info_log_buffer(0), 0), "");
    }
}

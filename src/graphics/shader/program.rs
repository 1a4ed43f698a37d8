use super::{info_log_buffer, info_log_to_string, FragmentShader, VertexShader};
use crate::error::{Error, Result};
use cgmath::{Matrix4, Vector3};
use std::ffi::CString;
use std::path::Path;

/// A linked vertex + fragment shader program
pub struct Program {
    id: u32,
}

impl Program {
    pub unsafe fn new(vs: &VertexShader, fs: &FragmentShader) -> Result<Self> {
        let id = gl::CreateProgram();
        gl::AttachShader(id, vs.handle());
        gl::AttachShader(id, fs.handle());
        gl::LinkProgram(id);

        let mut status = 0;
        gl::GetProgramiv(id, gl::LINK_STATUS, &mut status);
        if status == 0 {
            let mut len = 0;
            gl::GetProgramiv(id, gl::INFO_LOG_LENGTH, &mut len);
            let mut log = info_log_buffer(len);
            gl::GetProgramInfoLog(id, len, &mut len, log.as_mut_ptr() as *mut _);
            gl::DeleteProgram(id);
            return Err(Error::Link(info_log_to_string(log, len)));
        }
        // The stages are no longer needed once linked
        gl::DetachShader(id, vs.handle());
        gl::DetachShader(id, fs.handle());
        Ok(Self { id })
    }

    pub unsafe fn from_files(vertex_path: &Path, fragment_path: &Path) -> Result<Self> {
        log::info!("vertex shader   : {}", vertex_path.display());
        log::info!("fragment shader : {}", fragment_path.display());
        let vs = VertexShader::from_file(vertex_path)?;
        let fs = FragmentShader::from_file(fragment_path)?;
        Self::new(&vs, &fs)
    }

    pub unsafe fn from_sources(vertex: &str, fragment: &str) -> Result<Self> {
        let vs = VertexShader::from_source(vertex)?;
        let fs = FragmentShader::from_source(fragment)?;
        Self::new(&vs, &fs)
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub unsafe fn bind(program: &Self) {
        gl::UseProgram(program.id);
    }

    pub unsafe fn unbind() {
        gl::UseProgram(0);
    }

    pub unsafe fn uniform_location(&self, name: &str) -> Result<i32> {
        let c_name =
            CString::new(name).map_err(|_| Error::UniformNotFound(name.to_string()))?;
        match gl::GetUniformLocation(self.id, c_name.as_ptr()) {
            -1 => Err(Error::UniformNotFound(name.to_string())),
            location => Ok(location),
        }
    }

    // NOTE: the setters write to the currently bound program, bind `self` first

    pub unsafe fn set_bool(&self, name: &str, value: bool) -> Result<()> {
        gl::Uniform1i(self.uniform_location(name)?, value as i32);
        Ok(())
    }

    pub unsafe fn set_int(&self, name: &str, value: i32) -> Result<()> {
        gl::Uniform1i(self.uniform_location(name)?, value);
        Ok(())
    }

    pub unsafe fn set_float(&self, name: &str, value: f32) -> Result<()> {
        gl::Uniform1f(self.uniform_location(name)?, value);
        Ok(())
    }

    pub unsafe fn set_vec3(&self, name: &str, value: Vector3<f32>) -> Result<()> {
        gl::Uniform3f(self.uniform_location(name)?, value.x, value.y, value.z);
        Ok(())
    }

    pub unsafe fn set_mat4(&self, name: &str, value: &Matrix4<f32>) -> Result<()> {
        let columns: &[f32; 16] = value.as_ref();
        gl::UniformMatrix4fv(self.uniform_location(name)?, 1, gl::FALSE, columns.as_ptr());
        Ok(())
    }
}

impl Drop for Program {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteProgram(self.id);
        }
    }
}

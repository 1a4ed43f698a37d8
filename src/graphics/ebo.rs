use gl::types as gl_t;
use std::mem::size_of_val;

/// A static `GL_ELEMENT_ARRAY_BUFFER` of `u32` indices
pub struct ElementBufferObject {
    id: u32,
    len: usize,
}

impl ElementBufferObject {
    /// NOTE: the binding is recorded by the currently bound vertex array,
    /// create it while the target VAO is bound
    pub unsafe fn new(indices: &[u32]) -> Self {
        let mut id: gl_t::GLuint = 0;
        gl::GenBuffers(1, &mut id);
        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, id);
        gl::BufferData(
            gl::ELEMENT_ARRAY_BUFFER,
            size_of_val(indices) as gl_t::GLsizeiptr,
            indices.as_ptr() as *const _,
            gl::STATIC_DRAW,
        );
        Self {
            id,
            len: indices.len(),
        }
    }

    pub unsafe fn bind(ebo: &Self) {
        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, ebo.id);
    }

    pub unsafe fn unbind() {
        gl::BindBuffer(gl::ELEMENT_ARRAY_BUFFER, 0);
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Draws all the indices as triangles from the bound vertex array
    pub unsafe fn draw_triangles(&self) {
        gl::DrawElements(
            gl::TRIANGLES,
            self.len as gl_t::GLsizei,
            gl::UNSIGNED_INT,
            std::ptr::null(),
        );
    }
}

impl Drop for ElementBufferObject {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteBuffers(1, &self.id);
        }
    }
}

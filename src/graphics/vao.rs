use super::VertexLayout;
use gl::types as gl_t;

pub struct VertexArrayObject {
    id: u32,
}

impl VertexArrayObject {
    pub unsafe fn new() -> Self {
        let mut id: gl_t::GLuint = 0;
        gl::GenVertexArrays(1, &mut id);
        Self { id }
    }

    pub unsafe fn bind(vao: &Self) {
        gl::BindVertexArray(vao.id);
    }

    pub unsafe fn unbind() {
        gl::BindVertexArray(0);
    }

    /// Describes a float attribute of the currently bound array buffer and
    /// enables it on the currently bound vertex array.
    ///
    /// `stride` and `offset` are in bytes
    pub unsafe fn f32_attrib_format(index: u32, size: i32, stride: usize, offset: usize) {
        gl::VertexAttribPointer(
            index,
            size,
            gl::FLOAT,
            gl::FALSE,
            stride as gl_t::GLsizei,
            offset as *const _,
        );
        gl::EnableVertexAttribArray(index);
    }

    /// Calls [`f32_attrib_format`](Self::f32_attrib_format) for every attribute of `layout`
    pub unsafe fn apply_layout(layout: &VertexLayout) {
        let stride = layout.stride();
        for (index, size, offset) in layout.attributes() {
            Self::f32_attrib_format(index, size, stride, offset);
        }
    }
}

impl Drop for VertexArrayObject {
    fn drop(&mut self) {
        unsafe {
            gl::DeleteVertexArrays(1, &self.id);
        }
    }
}

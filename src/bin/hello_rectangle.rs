//! A rectangle drawn from four vertices and six indices, in wireframe
use learn_opengl::geometry::{RECTANGLE, RECTANGLE_INDICES};
use learn_opengl::graphics::{
    ElementBufferObject, Program, VertexArrayObject, VertexBufferObject, VertexLayout,
};
use learn_opengl::{Exercise, FrameTime, Result, WindowConfig};

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 a_pos;
void main() {
    gl_Position = vec4(a_pos.x, a_pos.y, a_pos.z, 1.0);
}
"#;

const FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 frag_color;
void main() {
    frag_color = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;

struct HelloRectangle {
    program: Program,
    vao: VertexArrayObject,
    ebo: ElementBufferObject,
    _vbo: VertexBufferObject,
}

impl Exercise for HelloRectangle {
    fn init(_: &WindowConfig) -> Result<Self> {
        unsafe {
            let vao = VertexArrayObject::new();
            VertexArrayObject::bind(&vao);
            let vbo = VertexBufferObject::new(&RECTANGLE);
            let ebo = ElementBufferObject::new(&RECTANGLE_INDICES);
            VertexArrayObject::apply_layout(&VertexLayout::new(&[3]));
            VertexArrayObject::unbind();
            VertexBufferObject::unbind();
            ElementBufferObject::unbind();

            let program = Program::from_sources(VERTEX_SHADER, FRAGMENT_SHADER)?;
            Ok(Self {
                program,
                vao,
                ebo,
                _vbo: vbo,
            })
        }
    }

    fn render(&mut self, _: FrameTime) -> Result<()> {
        unsafe {
            gl::ClearColor(0.2, 0.3, 0.3, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            Program::bind(&self.program);
            gl::PolygonMode(gl::FRONT_AND_BACK, gl::LINE);
            VertexArrayObject::bind(&self.vao);
            self.ebo.draw_triangles();
            VertexArrayObject::unbind();
        }
        Ok(())
    }
}

fn main() {
    learn_opengl::logging::init();
    learn_opengl::run::<HelloRectangle>(WindowConfig::default())
}

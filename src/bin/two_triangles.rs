//! Two triangles, each with its own vertex array and shader program
use learn_opengl::geometry::triangle;
use learn_opengl::graphics::{
    FragmentShader, Program, VertexArrayObject, VertexBufferObject, VertexLayout, VertexShader,
};
use learn_opengl::{Exercise, FrameTime, Result, WindowConfig};

const VERTEX_SHADER: &str = r#"#version 330 core
layout (location = 0) in vec3 a_pos;
void main() {
    gl_Position = vec4(a_pos.x, a_pos.y, a_pos.z, 1.0);
}
"#;

const ORANGE_FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 frag_color;
void main() {
    frag_color = vec4(1.0f, 0.5f, 0.2f, 1.0f);
}
"#;

const YELLOW_FRAGMENT_SHADER: &str = r#"#version 330 core
out vec4 frag_color;
void main() {
    frag_color = vec4(1.0f, 1.0f, 0.0f, 1.0f);
}
"#;

struct Mesh {
    vao: VertexArrayObject,
    _vbo: VertexBufferObject,
}

impl Mesh {
    unsafe fn triangle(left_x: f32, right_x: f32) -> Self {
        let vao = VertexArrayObject::new();
        VertexArrayObject::bind(&vao);
        let vbo = VertexBufferObject::new(&triangle(left_x, right_x));
        VertexArrayObject::apply_layout(&VertexLayout::new(&[3]));
        VertexArrayObject::unbind();
        VertexBufferObject::unbind();
        Self { vao, _vbo: vbo }
    }

    unsafe fn draw(&self) {
        VertexArrayObject::bind(&self.vao);
        gl::DrawArrays(gl::TRIANGLES, 0, 3);
    }
}

struct TwoTriangles {
    left: Mesh,
    right: Mesh,
    orange: Program,
    yellow: Program,
}

impl Exercise for TwoTriangles {
    fn init(_: &WindowConfig) -> Result<Self> {
        unsafe {
            let left = Mesh::triangle(-1.0, -0.1);
            let right = Mesh::triangle(0.1, 1.0);

            // Both programs share the same compiled vertex stage
            let vs = VertexShader::from_source(VERTEX_SHADER)?;
            let orange = Program::new(&vs, &FragmentShader::from_source(ORANGE_FRAGMENT_SHADER)?)?;
            let yellow = Program::new(&vs, &FragmentShader::from_source(YELLOW_FRAGMENT_SHADER)?)?;

            Ok(Self {
                left,
                right,
                orange,
                yellow,
            })
        }
    }

    fn render(&mut self, _: FrameTime) -> Result<()> {
        unsafe {
            gl::ClearColor(0.2, 0.3, 0.3, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            Program::bind(&self.orange);
            self.left.draw();

            Program::bind(&self.yellow);
            self.right.draw();
        }
        Ok(())
    }
}

fn main() {
    learn_opengl::logging::init();
    learn_opengl::run::<TwoTriangles>(WindowConfig::default())
}

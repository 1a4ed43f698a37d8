//! A triangle with per-vertex colors shifted right by a uniform
use learn_opengl::geometry::COLORED_TRIANGLE;
use learn_opengl::graphics::{Program, VertexArrayObject, VertexBufferObject, VertexLayout};
use learn_opengl::{assets, Exercise, FrameTime, Result, WindowConfig};

const HORIZONTAL_OFFSET: f32 = 0.5;

struct ShaderOffset {
    program: Program,
    vao: VertexArrayObject,
    _vbo: VertexBufferObject,
}

impl Exercise for ShaderOffset {
    fn init(_: &WindowConfig) -> Result<Self> {
        unsafe {
            let vao = VertexArrayObject::new();
            VertexArrayObject::bind(&vao);
            let vbo = VertexBufferObject::new(&COLORED_TRIANGLE);
            // position, color
            VertexArrayObject::apply_layout(&VertexLayout::new(&[3, 3]));
            VertexArrayObject::unbind();
            VertexBufferObject::unbind();

            let program = Program::from_files(
                &assets::shader("shader_offset/shader.vert"),
                &assets::shader("shader_offset/shader.frag"),
            )?;
            Ok(Self {
                program,
                vao,
                _vbo: vbo,
            })
        }
    }

    fn render(&mut self, _: FrameTime) -> Result<()> {
        unsafe {
            gl::ClearColor(0.2, 0.3, 0.3, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            Program::bind(&self.program);
            self.program.set_float("horizontal_offset", HORIZONTAL_OFFSET)?;
            VertexArrayObject::bind(&self.vao);
            gl::DrawArrays(gl::TRIANGLES, 0, 3);
        }
        Ok(())
    }
}

fn main() {
    learn_opengl::logging::init();
    learn_opengl::run::<ShaderOffset>(WindowConfig::default())
}

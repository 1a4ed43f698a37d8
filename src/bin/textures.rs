//! Two textures mixed on a rectangle, the first one clamped to its edges
use learn_opengl::geometry::{COLORED_TEXTURED_RECTANGLE, RECTANGLE_INDICES};
use learn_opengl::graphics::{
    ElementBufferObject, Program, Texture, TextureOptions, VertexArrayObject,
    VertexBufferObject, VertexLayout, Wrap,
};
use learn_opengl::{assets, Exercise, FrameTime, Result, WindowConfig};

struct Textures {
    program: Program,
    container: Texture,
    face: Texture,
    vao: VertexArrayObject,
    ebo: ElementBufferObject,
    _vbo: VertexBufferObject,
}

impl Exercise for Textures {
    fn init(_: &WindowConfig) -> Result<Self> {
        unsafe {
            let container = Texture::load(
                &assets::texture("container.png"),
                &TextureOptions::wrap(Wrap::ClampToEdge),
            )?;
            let face = Texture::load(
                &assets::texture("awesomeface.png"),
                &TextureOptions::default(),
            )?;

            let vao = VertexArrayObject::new();
            VertexArrayObject::bind(&vao);
            let vbo = VertexBufferObject::new(&COLORED_TEXTURED_RECTANGLE);
            let ebo = ElementBufferObject::new(&RECTANGLE_INDICES);
            // position, color, texture coords
            VertexArrayObject::apply_layout(&VertexLayout::new(&[3, 3, 2]));
            VertexArrayObject::unbind();
            VertexBufferObject::unbind();
            ElementBufferObject::unbind();

            let program = Program::from_files(
                &assets::shader("textures/shader.vert"),
                &assets::shader("textures/shader.frag"),
            )?;
            Program::bind(&program);
            program.set_int("texture1", 0)?;
            program.set_int("texture2", 1)?;

            Ok(Self {
                program,
                container,
                face,
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

            Texture::bind_to_unit(&self.container, 0);
            Texture::bind_to_unit(&self.face, 1);

            Program::bind(&self.program);
            VertexArrayObject::bind(&self.vao);
            self.ebo.draw_triangles();
        }
        Ok(())
    }
}

fn main() {
    learn_opengl::logging::init();
    learn_opengl::run::<Textures>(WindowConfig::default())
}

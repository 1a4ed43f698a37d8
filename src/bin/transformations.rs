//! A textured quad spinning around the screen's bottom right quarter
use cgmath::{vec3, Matrix4, Rad};
use learn_opengl::geometry::{RECTANGLE_INDICES, TEXTURED_RECTANGLE};
use learn_opengl::graphics::{
    ElementBufferObject, Program, Texture, TextureOptions, VertexArrayObject,
    VertexBufferObject, VertexLayout,
};
use learn_opengl::{assets, Exercise, FrameTime, Result, WindowConfig};

/// Rotation about +Z by `seconds` radians applied after moving the quad to
/// (0.5, -0.5), so it orbits the center instead of spinning in place
fn transform(seconds: f32) -> Matrix4<f32> {
    Matrix4::from_angle_z(Rad(seconds)) * Matrix4::from_translation(vec3(0.5, -0.5, 0.0))
}

struct Transformations {
    program: Program,
    container: Texture,
    face: Texture,
    vao: VertexArrayObject,
    ebo: ElementBufferObject,
    _vbo: VertexBufferObject,
}

impl Exercise for Transformations {
    fn init(_: &WindowConfig) -> Result<Self> {
        unsafe {
            let container = Texture::load(
                &assets::texture("container.png"),
                &TextureOptions::default(),
            )?;
            let face = Texture::load(
                &assets::texture("awesomeface.png"),
                &TextureOptions::default(),
            )?;

            let vao = VertexArrayObject::new();
            VertexArrayObject::bind(&vao);
            let vbo = VertexBufferObject::new(&TEXTURED_RECTANGLE);
            let ebo = ElementBufferObject::new(&RECTANGLE_INDICES);
            // position, texture coords
            VertexArrayObject::apply_layout(&VertexLayout::new(&[3, 2]));
            VertexArrayObject::unbind();
            VertexBufferObject::unbind();
            ElementBufferObject::unbind();

            let program = Program::from_files(
                &assets::shader("transformations/shader.vert"),
                &assets::shader("transformations/shader.frag"),
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

    fn render(&mut self, time: FrameTime) -> Result<()> {
        unsafe {
            gl::ClearColor(0.2, 0.3, 0.3, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT);

            Texture::bind_to_unit(&self.container, 0);
            Texture::bind_to_unit(&self.face, 1);

            Program::bind(&self.program);
            self.program.set_mat4("transform", &transform(time.elapsed))?;
            VertexArrayObject::bind(&self.vao);
            self.ebo.draw_triangles();
        }
        Ok(())
    }
}

fn main() {
    learn_opengl::logging::init();
    learn_opengl::run::<Transformations>(WindowConfig::default())
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{point3, InnerSpace, Transform};

    #[test]
    fn translates_before_rotating() {
        let origin = point3(0.0, 0.0, 0.0);
        // no rotation yet: the quad center sits at (0.5, -0.5)
        let start = transform(0.0).transform_point(origin);
        assert!((start - point3(0.5, -0.5, 0.0)).magnitude() < 1e-6);

        // a quarter turn counterclockwise moves it to (0.5, 0.5)
        let quarter = transform(std::f32::consts::FRAC_PI_2).transform_point(origin);
        assert!((quarter - point3(0.5, 0.5, 0.0)).magnitude() < 1e-6);
    }
}

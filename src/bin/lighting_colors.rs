//! A coral cube lit by a white light, next to a small cube marking the lamp
use cgmath::{point3, vec3, Matrix4, SquareMatrix};
use learn_opengl::geometry::{cube_positions, CUBE_VERTICES};
use learn_opengl::graphics::{Program, VertexArrayObject, VertexBufferObject, VertexLayout};
use learn_opengl::{
    assets, Camera, CameraSettings, Exercise, FrameTime, KeyboardState, Result, WindowConfig,
};

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

fn lamp_model() -> Matrix4<f32> {
    Matrix4::from_translation(vec3(1.2, 1.0, 2.0)) * Matrix4::from_scale(0.2)
}

struct LightingColors {
    object: Program,
    lamp: Program,
    cube_vao: VertexArrayObject,
    lamp_vao: VertexArrayObject,
    _vbo: VertexBufferObject,
    camera: Camera,
    aspect_ratio: f32,
}

impl Exercise for LightingColors {
    fn init(config: &WindowConfig) -> Result<Self> {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);

            let layout = VertexLayout::new(&[3]);
            let cube_vao = VertexArrayObject::new();
            VertexArrayObject::bind(&cube_vao);
            let vertices = cube_positions();
            let vbo = VertexBufferObject::new(vertices.as_slice());
            VertexArrayObject::apply_layout(&layout);

            // The lamp reuses the same vertices through its own vertex array
            let lamp_vao = VertexArrayObject::new();
            VertexArrayObject::bind(&lamp_vao);
            VertexBufferObject::bind(&vbo);
            VertexArrayObject::apply_layout(&layout);
            VertexArrayObject::unbind();
            VertexBufferObject::unbind();

            let object = Program::from_files(
                &assets::shader("lighting/shader.vert"),
                &assets::shader("lighting/shader.frag"),
            )?;
            let lamp = Program::from_files(
                &assets::shader("lighting/shader.vert"),
                &assets::shader("lighting/lamp.frag"),
            )?;

            Ok(Self {
                object,
                lamp,
                cube_vao,
                lamp_vao,
                _vbo: vbo,
                camera: Camera::new(point3(0.0, 0.0, 3.0), CameraSettings::default()),
                aspect_ratio: config.aspect_ratio(),
            })
        }
    }

    fn process_input(&mut self, keys: &KeyboardState, time: FrameTime) {
        self.camera.process_keyboard(keys, time.delta);
    }

    fn mouse_moved(&mut self, offset_x: f32, offset_y: f32) {
        self.camera.process_mouse_move(offset_x, offset_y, true);
    }

    fn scrolled(&mut self, offset_y: f32) {
        self.camera.process_mouse_scroll(offset_y);
    }

    fn resized(&mut self, width: u32, height: u32) {
        self.aspect_ratio = width as f32 / height as f32;
    }

    fn render(&mut self, _: FrameTime) -> Result<()> {
        let view = self.camera.view_matrix();
        let projection = self
            .camera
            .projection_matrix(self.aspect_ratio, NEAR_PLANE, FAR_PLANE);
        unsafe {
            gl::ClearColor(0.0, 0.0, 0.0, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);

            // Cube
            Program::bind(&self.object);
            self.object.set_vec3("object_color", vec3(1.0, 0.5, 0.31))?;
            self.object.set_vec3("light_color", vec3(1.0, 1.0, 1.0))?;
            self.object.set_mat4("view", &view)?;
            self.object.set_mat4("projection", &projection)?;
            self.object.set_mat4("model", &Matrix4::identity())?;
            VertexArrayObject::bind(&self.cube_vao);
            gl::DrawArrays(gl::TRIANGLES, 0, CUBE_VERTICES as i32);

            // Light source
            Program::bind(&self.lamp);
            self.lamp.set_mat4("view", &view)?;
            self.lamp.set_mat4("projection", &projection)?;
            self.lamp.set_mat4("model", &lamp_model())?;
            VertexArrayObject::bind(&self.lamp_vao);
            gl::DrawArrays(gl::TRIANGLES, 0, CUBE_VERTICES as i32);
        }
        Ok(())
    }
}

fn main() {
    learn_opengl::logging::init();
    learn_opengl::run::<LightingColors>(WindowConfig::default().with_captured_cursor(true))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{InnerSpace, Transform};

    #[test]
    fn lamp_is_a_small_cube_at_the_light() {
        let model = lamp_model();
        let center = model.transform_point(point3(0.0, 0.0, 0.0));
        assert!((center - point3(1.2, 1.0, 2.0)).magnitude() < 1e-6);

        let corner = model.transform_point(point3(0.5, 0.5, 0.5));
        assert!((corner - point3(1.3, 1.1, 2.1)).magnitude() < 1e-6);
    }
}

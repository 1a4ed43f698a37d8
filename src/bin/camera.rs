//! Ten textured cubes explored with a fly camera: WASD to move, the mouse to
//! look around and the scroll wheel to zoom
use cgmath::{point3, vec3, Deg, InnerSpace, Matrix4};
use learn_opengl::geometry::{CUBE_POSITIONS, CUBE_VERTICES, TEXTURED_CUBE};
use learn_opengl::graphics::{
    Program, Texture, TextureOptions, VertexArrayObject, VertexBufferObject, VertexLayout,
};
use learn_opengl::{
    assets, Camera, CameraSettings, Exercise, FrameTime, KeyboardState, Result, WindowConfig,
};

const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

struct CameraExercise {
    program: Program,
    container: Texture,
    face: Texture,
    vao: VertexArrayObject,
    _vbo: VertexBufferObject,
    camera: Camera,
    aspect_ratio: f32,
}

impl Exercise for CameraExercise {
    fn init(config: &WindowConfig) -> Result<Self> {
        unsafe {
            gl::Enable(gl::DEPTH_TEST);

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
            let vbo = VertexBufferObject::new(&TEXTURED_CUBE);
            VertexArrayObject::apply_layout(&VertexLayout::new(&[3, 2]));
            VertexArrayObject::unbind();
            VertexBufferObject::unbind();

            let program = Program::from_files(
                &assets::shader("camera/shader.vert"),
                &assets::shader("camera/shader.frag"),
            )?;
            Program::bind(&program);
            program.set_int("texture1", 0)?;
            program.set_int("texture2", 1)?;

            let settings = CameraSettings {
                fov_deg: 45.0,
                fov_max: 45.0,
                ..CameraSettings::default()
            };
            Ok(Self {
                program,
                container,
                face,
                vao,
                _vbo: vbo,
                camera: Camera::new(point3(0.0, 0.0, 3.0), settings),
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
        unsafe {
            gl::ClearColor(0.2, 0.3, 0.3, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);

            Texture::bind_to_unit(&self.container, 0);
            Texture::bind_to_unit(&self.face, 1);

            Program::bind(&self.program);
            let projection = self
                .camera
                .projection_matrix(self.aspect_ratio, NEAR_PLANE, FAR_PLANE);
            self.program.set_mat4("projection", &projection)?;
            self.program.set_mat4("view", &self.camera.view_matrix())?;

            VertexArrayObject::bind(&self.vao);
            let axis = vec3(1.0, 0.3, 0.5).normalize();
            for (i, &position) in CUBE_POSITIONS.iter().enumerate() {
                let model = Matrix4::from_translation(position.into())
                    * Matrix4::from_axis_angle(axis, Deg(20.0 * i as f32));
                self.program.set_mat4("model", &model)?;
                gl::DrawArrays(gl::TRIANGLES, 0, CUBE_VERTICES as i32);
            }
        }
        Ok(())
    }
}

fn main() {
    learn_opengl::logging::init();
    learn_opengl::run::<CameraExercise>(WindowConfig::default().with_captured_cursor(true))
}

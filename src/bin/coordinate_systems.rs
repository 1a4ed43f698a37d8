//! Ten rotated cubes seen through an adjustable perspective projection.
//!
//! Q/A widen/narrow the aspect ratio and 1 resets it, W/S widen/narrow the
//! field of view and 2 resets it.
use cgmath::{perspective, vec3, Deg, InnerSpace, Matrix4, Vector3};
use learn_opengl::geometry::{CUBE_POSITIONS, CUBE_VERTICES, TEXTURED_CUBE};
use learn_opengl::graphics::{
    Program, Texture, TextureOptions, VertexArrayObject, VertexBufferObject, VertexLayout,
};
use learn_opengl::{
    assets, Exercise, FrameTime, KeyboardState, Result, VirtualKeyCode, WindowConfig,
};

const INIT_FOV: f32 = 45.0;
const FOV_RANGE: (f32, f32) = (1.0, 179.0);
const MIN_ASPECT_RATIO: f32 = 0.05;
const NEAR_PLANE: f32 = 0.1;
const FAR_PLANE: f32 = 100.0;

/// Field of view and aspect ratio tweaked from the keyboard, one step per frame.
/// Both stay in the range `perspective` accepts
#[derive(Debug, Clone, PartialEq)]
struct Projection {
    fov: f32,
    aspect_ratio: f32,
    init_aspect_ratio: f32,
}

impl Projection {
    fn new(aspect_ratio: f32) -> Self {
        Self {
            fov: INIT_FOV,
            aspect_ratio,
            init_aspect_ratio: aspect_ratio,
        }
    }

    fn update(&mut self, keys: &KeyboardState) {
        if keys.is_pressed(VirtualKeyCode::Q) {
            self.aspect_ratio += 0.05;
        } else if keys.is_pressed(VirtualKeyCode::A) {
            self.aspect_ratio = (self.aspect_ratio - 0.05).max(MIN_ASPECT_RATIO);
        } else if keys.is_pressed(VirtualKeyCode::Key1) {
            self.aspect_ratio = self.init_aspect_ratio;
        }

        if keys.is_pressed(VirtualKeyCode::W) {
            self.fov = (self.fov + 1.0).min(FOV_RANGE.1);
        } else if keys.is_pressed(VirtualKeyCode::S) {
            self.fov = (self.fov - 1.0).max(FOV_RANGE.0);
        } else if keys.is_pressed(VirtualKeyCode::Key2) {
            self.fov = INIT_FOV;
        }
    }

    fn matrix(&self) -> Matrix4<f32> {
        perspective(Deg(self.fov), self.aspect_ratio, NEAR_PLANE, FAR_PLANE)
    }
}

/// Model matrix of the `index`th cube: tilted by 20 degrees per index
fn model(index: usize, position: Vector3<f32>) -> Matrix4<f32> {
    let axis = vec3(1.0, 0.3, 0.5).normalize();
    Matrix4::from_translation(position) * Matrix4::from_axis_angle(axis, Deg(20.0 * index as f32))
}

struct CoordinateSystems {
    program: Program,
    container: Texture,
    face: Texture,
    vao: VertexArrayObject,
    _vbo: VertexBufferObject,
    projection: Projection,
}

impl Exercise for CoordinateSystems {
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
            // position, texture coords
            VertexArrayObject::apply_layout(&VertexLayout::new(&[3, 2]));
            VertexArrayObject::unbind();
            VertexBufferObject::unbind();

            let program = Program::from_files(
                &assets::shader("coordinate_systems/shader.vert"),
                &assets::shader("coordinate_systems/shader.frag"),
            )?;
            Program::bind(&program);
            program.set_int("texture1", 0)?;
            program.set_int("texture2", 1)?;
            let view = Matrix4::from_translation(vec3(0.0, 0.0, -3.0));
            program.set_mat4("view", &view)?;

            Ok(Self {
                program,
                container,
                face,
                vao,
                _vbo: vbo,
                projection: Projection::new(config.aspect_ratio()),
            })
        }
    }

    fn process_input(&mut self, keys: &KeyboardState, _: FrameTime) {
        self.projection.update(keys);
        log::debug!(
            "aspect_ratio: {} fov: {}",
            self.projection.aspect_ratio,
            self.projection.fov
        );
    }

    fn render(&mut self, _: FrameTime) -> Result<()> {
        unsafe {
            gl::ClearColor(0.2, 0.3, 0.3, 1.0);
            gl::Clear(gl::COLOR_BUFFER_BIT | gl::DEPTH_BUFFER_BIT);

            Texture::bind_to_unit(&self.container, 0);
            Texture::bind_to_unit(&self.face, 1);

            Program::bind(&self.program);
            self.program.set_mat4("projection", &self.projection.matrix())?;

            VertexArrayObject::bind(&self.vao);
            for (i, &position) in CUBE_POSITIONS.iter().enumerate() {
                self.program.set_mat4("model", &model(i, position.into()))?;
                gl::DrawArrays(gl::TRIANGLES, 0, CUBE_VERTICES as i32);
            }
        }
        Ok(())
    }
}

fn main() {
    learn_opengl::logging::init();
    learn_opengl::run::<CoordinateSystems>(WindowConfig::default())
}

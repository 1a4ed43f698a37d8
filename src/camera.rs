//! First-person camera driven by yaw/pitch angles
use crate::input::KeyboardState;
use cgmath::{perspective, vec3, Deg, InnerSpace, Matrix4, Point3, Vector3};
use glutin::event::VirtualKeyCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
    Left,
    Right,
}

/// Camera parameters, angles are in degrees
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraSettings {
    pub fov_deg: f32,
    pub fov_min: f32,
    pub fov_max: f32,
    /// World units per second
    pub move_speed: f32,
    /// Degrees per pixel of mouse movement
    pub mouse_sensitivity: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    pub world_up: Vector3<f32>,
    pub pitch_deg: f32,
    pub yaw_deg: f32,
}

impl Default for CameraSettings {
    fn default() -> Self {
        Self {
            fov_deg: 70.0,
            fov_min: 1.0,
            fov_max: 70.0,
            move_speed: 2.5,
            mouse_sensitivity: 0.05,
            pitch_min: -89.0,
            pitch_max: 89.0,
            world_up: Vector3::unit_y(),
            pitch_deg: 0.0,
            // looking down -Z
            yaw_deg: -90.0,
        }
    }
}

#[derive(Debug, Clone)]
pub struct Camera {
    pub move_speed: f32,
    pub mouse_sensitivity: f32,
    pub pitch_min: f32,
    pub pitch_max: f32,
    pub fov_min: f32,
    pub fov_max: f32,

    position: Point3<f32>,
    front: Vector3<f32>,
    up: Vector3<f32>,
    right: Vector3<f32>,
    world_up: Vector3<f32>,
    fov_deg: f32,
    pitch_deg: f32,
    yaw_deg: f32,
}

impl Camera {
    pub fn new(position: Point3<f32>, settings: CameraSettings) -> Self {
        let mut camera = Self {
            move_speed: settings.move_speed,
            mouse_sensitivity: settings.mouse_sensitivity,
            pitch_min: settings.pitch_min,
            pitch_max: settings.pitch_max,
            fov_min: settings.fov_min,
            fov_max: settings.fov_max,
            position,
            front: vec3(0.0, 0.0, -1.0),
            up: settings.world_up,
            right: Vector3::unit_x(),
            world_up: settings.world_up,
            fov_deg: settings.fov_deg,
            pitch_deg: settings.pitch_deg,
            yaw_deg: settings.yaw_deg,
        };
        camera.update_vectors();
        camera
    }

    pub fn fov_deg(&self) -> f32 {
        self.fov_deg
    }

    pub fn fov_rad(&self) -> f32 {
        self.fov_deg.to_radians()
    }

    pub fn yaw_deg(&self) -> f32 {
        self.yaw_deg
    }

    pub fn pitch_deg(&self) -> f32 {
        self.pitch_deg
    }

    pub fn position(&self) -> Point3<f32> {
        self.position
    }

    pub fn front(&self) -> Vector3<f32> {
        self.front
    }

    pub fn up(&self) -> Vector3<f32> {
        self.up
    }

    pub fn right(&self) -> Vector3<f32> {
        self.right
    }

    pub fn view_matrix(&self) -> Matrix4<f32> {
        Matrix4::look_at_rh(self.position, self.position + self.front, self.up)
    }

    pub fn projection_matrix(&self, aspect_ratio: f32, near: f32, far: f32) -> Matrix4<f32> {
        perspective(Deg(self.fov_deg), aspect_ratio, near, far)
    }

    pub fn move_to_direction(&mut self, direction: Direction, delta_time: f32) {
        let distance = self.move_speed * delta_time;
        match direction {
            Direction::Forward => self.position += self.front * distance,
            Direction::Backward => self.position -= self.front * distance,
            Direction::Left => self.position -= self.right * distance,
            Direction::Right => self.position += self.right * distance,
        }
    }

    /// WASD fly controls. W wins over S and A wins over D
    pub fn process_keyboard(&mut self, keys: &KeyboardState, delta_time: f32) {
        if keys.is_pressed(VirtualKeyCode::W) {
            self.move_to_direction(Direction::Forward, delta_time);
        } else if keys.is_pressed(VirtualKeyCode::S) {
            self.move_to_direction(Direction::Backward, delta_time);
        }

        if keys.is_pressed(VirtualKeyCode::A) {
            self.move_to_direction(Direction::Left, delta_time);
        } else if keys.is_pressed(VirtualKeyCode::D) {
            self.move_to_direction(Direction::Right, delta_time);
        }
    }

    /// Offsets are in screen pixels, y grows downward
    pub fn process_mouse_move(&mut self, offset_x: f32, offset_y: f32, constrain_pitch: bool) {
        self.yaw_deg += offset_x * self.mouse_sensitivity;
        self.pitch_deg -= offset_y * self.mouse_sensitivity;

        if constrain_pitch {
            self.pitch_deg = self.pitch_deg.max(self.pitch_min).min(self.pitch_max);
        }

        self.update_vectors();
    }

    pub fn process_mouse_scroll(&mut self, offset_y: f32) {
        self.fov_deg = (self.fov_deg - offset_y).max(self.fov_min).min(self.fov_max);
    }

    fn update_vectors(&mut self) {
        let (yaw_sin, yaw_cos) = self.yaw_deg.to_radians().sin_cos();
        let (pitch_sin, pitch_cos) = self.pitch_deg.to_radians().sin_cos();
        self.front = vec3(yaw_cos * pitch_cos, pitch_sin, yaw_sin * pitch_cos).normalize();
        self.right = self.front.cross(self.world_up).normalize();
        self.up = self.right.cross(self.front).normalize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cgmath::{point3, Transform};

    const EPS: f32 = 1e-5;

    fn assert_vec_eq(a: Vector3<f32>, b: Vector3<f32>) {
        assert!((a - b).magnitude() < EPS, "{:?} != {:?}", a, b);
    }

    fn camera() -> Camera {
        Camera::new(point3(0.0, 0.0, 3.0), CameraSettings::default())
    }

    #[test]
    fn starts_looking_down_negative_z() {
        let camera = camera();
        assert_vec_eq(camera.front(), vec3(0.0, 0.0, -1.0));
        assert_vec_eq(camera.right(), vec3(1.0, 0.0, 0.0));
        assert_vec_eq(camera.up(), vec3(0.0, 1.0, 0.0));
    }

    #[test]
    fn vectors_stay_orthonormal() {
        let mut camera = camera();
        camera.process_mouse_move(137.0, -42.0, true);
        for v in [camera.front(), camera.right(), camera.up()] {
            assert!((v.magnitude() - 1.0).abs() < EPS);
        }
        assert!(camera.front().dot(camera.right()).abs() < EPS);
        assert!(camera.front().dot(camera.up()).abs() < EPS);
        assert!(camera.right().dot(camera.up()).abs() < EPS);
    }

    #[test]
    fn mouse_move_scales_by_sensitivity() {
        let mut camera = camera();
        camera.process_mouse_move(100.0, 20.0, true);
        assert!((camera.yaw_deg() - -85.0).abs() < EPS);
        // moving the mouse down looks down
        assert!((camera.pitch_deg() - -1.0).abs() < EPS);
    }

    #[test]
    fn pitch_is_clamped_only_when_asked() {
        let mut camera = camera();
        camera.process_mouse_move(0.0, -10_000.0, true);
        assert_eq!(camera.pitch_deg(), 89.0);
        camera.process_mouse_move(0.0, 10_000.0, true);
        assert_eq!(camera.pitch_deg(), -89.0);

        let mut free = self::camera();
        free.process_mouse_move(0.0, -2_000.0, false);
        assert!((free.pitch_deg() - 100.0).abs() < EPS);
    }

    #[test]
    fn scroll_zooms_within_limits() {
        let mut camera = camera();
        camera.process_mouse_scroll(10.0);
        assert_eq!(camera.fov_deg(), 60.0);
        camera.process_mouse_scroll(-50.0);
        assert_eq!(camera.fov_deg(), 70.0);
        camera.process_mouse_scroll(500.0);
        assert_eq!(camera.fov_deg(), 1.0);
        assert!((camera.fov_rad() - 1f32.to_radians()).abs() < EPS);
    }

    #[test]
    fn moves_along_front_and_right() {
        let mut camera = camera();
        camera.move_to_direction(Direction::Forward, 0.4);
        assert_vec_eq(camera.position() - point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 2.0));
        camera.move_to_direction(Direction::Right, 2.0);
        assert_vec_eq(camera.position() - point3(0.0, 0.0, 0.0), vec3(5.0, 0.0, 2.0));
        camera.move_to_direction(Direction::Left, 2.0);
        camera.move_to_direction(Direction::Backward, 0.4);
        assert_vec_eq(camera.position() - point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 3.0));
    }

    #[test]
    fn keyboard_moves_one_way_per_axis() {
        use glutin::event::ElementState::Pressed;

        let mut keys = KeyboardState::default();
        keys.set(VirtualKeyCode::W, Pressed);
        keys.set(VirtualKeyCode::S, Pressed);
        keys.set(VirtualKeyCode::D, Pressed);

        let mut camera = camera();
        camera.process_keyboard(&keys, 0.4);
        assert_vec_eq(camera.position() - point3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 2.0));

        camera.process_keyboard(&KeyboardState::default(), 0.4);
        assert_vec_eq(camera.position() - point3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 2.0));
    }

    #[test]
    fn view_matrix_puts_the_camera_at_the_origin() {
        let camera = camera();
        let view = camera.view_matrix();
        let eye = view.transform_point(camera.position());
        assert_vec_eq(eye - point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, 0.0));
        // the point in front of the camera ends up on -Z
        let ahead = view.transform_point(camera.position() + camera.front());
        assert_vec_eq(ahead - point3(0.0, 0.0, 0.0), vec3(0.0, 0.0, -1.0));
    }
}

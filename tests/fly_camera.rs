use cgmath::{point3, vec3, InnerSpace};
use glutin::event::ElementState;
use learn_opengl::{Camera, CameraSettings, KeyboardState, MouseTracker, VirtualKeyCode};

fn eq(a: cgmath::Vector3<f32>, b: cgmath::Vector3<f32>) -> bool {
    (a - b).magnitude() < 1e-4
}

#[test]
fn turning_right_then_walking_forward() {
    let mut camera = Camera::new(point3(0.0, 0.0, 3.0), CameraSettings::default());
    let mut mouse = MouseTracker::new(800, 600);
    let mut keys = KeyboardState::default();

    // cursor enters the window: no rotation
    let (dx, dy) = mouse.offset(400.0, 300.0);
    camera.process_mouse_move(dx, dy, true);
    assert_eq!(camera.yaw_deg(), -90.0);

    // 1800 pixels right at 0.05 degrees per pixel is a quarter turn
    let (dx, dy) = mouse.offset(2200.0, 300.0);
    camera.process_mouse_move(dx, dy, true);
    assert!(eq(camera.front(), vec3(1.0, 0.0, 0.0)));

    keys.set(VirtualKeyCode::W, ElementState::Pressed);
    for _ in 0..10 {
        camera.process_keyboard(&keys, 0.04);
    }
    // 10 frames * 0.04 s * 2.5 units/s
    assert!(eq(camera.position() - point3(0.0, 0.0, 0.0), vec3(1.0, 0.0, 3.0)));
}

#[test]
fn zoom_and_projection() {
    let mut camera = Camera::new(point3(0.0, 0.0, 0.0), CameraSettings::default());
    camera.process_mouse_scroll(25.0);
    assert_eq!(camera.fov_deg(), 45.0);

    let projection = camera.projection_matrix(800.0 / 600.0, 0.1, 100.0);
    let focal = 1.0 / (45f32.to_radians() / 2.0).tan();
    assert!((projection.y.y - focal).abs() < 1e-4);
    assert!((projection.x.x - focal * 600.0 / 800.0).abs() < 1e-4);
}

use learn_opengl::assets;
use learn_opengl::graphics::{read_source, PixelFormat, TextureImage};

#[test]
fn every_exercise_program_is_present() {
    let programs = [
        ("shader_offset/shader.vert", "shader_offset/shader.frag"),
        ("textures/shader.vert", "textures/shader.frag"),
        ("transformations/shader.vert", "transformations/shader.frag"),
        ("coordinate_systems/shader.vert", "coordinate_systems/shader.frag"),
        ("camera/shader.vert", "camera/shader.frag"),
        ("lighting/shader.vert", "lighting/shader.frag"),
        ("lighting/shader.vert", "lighting/lamp.frag"),
    ];
    for (vert, frag) in programs {
        let vert = read_source(&assets::shader(vert)).unwrap();
        let frag = read_source(&assets::shader(frag)).unwrap();
        assert!(vert.contains("gl_Position"));
        assert!(frag.contains("frag_color"));
    }
}

#[test]
fn uniforms_set_by_the_exercises_are_declared() {
    let expect = |path: &str, names: &[&str]| {
        let source = read_source(&assets::shader(path)).unwrap();
        for name in names {
            let declared = source.lines().any(|line| {
                line.trim_start().starts_with("uniform ")
                    && line.trim_end().ends_with(&format!(" {};", name))
            });
            assert!(
                declared,
                "{} does not declare {}",
                path,
                name
            );
        }
    };
    expect("shader_offset/shader.vert", &["horizontal_offset"]);
    expect("textures/shader.frag", &["texture1", "texture2"]);
    expect("transformations/shader.vert", &["transform"]);
    expect("coordinate_systems/shader.vert", &["model", "view", "projection"]);
    expect("coordinate_systems/shader.frag", &["texture1", "texture2"]);
    expect("camera/shader.vert", &["model", "view", "projection"]);
    expect("camera/shader.frag", &["texture1", "texture2"]);
    expect("lighting/shader.vert", &["model", "view", "projection"]);
    expect("lighting/shader.frag", &["object_color", "light_color"]);
}

#[test]
fn textures_decode() {
    let container = TextureImage::load(&assets::texture("container.png")).unwrap();
    assert_eq!(container.format, PixelFormat::Rgb);
    assert_eq!((container.width, container.height), (256, 256));

    let face = TextureImage::load(&assets::texture("awesomeface.png")).unwrap();
    assert_eq!(face.format, PixelFormat::Rgba);
    // the corners are transparent
    assert_eq!(face.pixels[3], 0);
}

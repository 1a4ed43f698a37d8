//! Static vertex data used by the exercises

/// Rectangle corners, positions only: top right, bottom right, bottom left, top left
#[rustfmt::skip]
pub const RECTANGLE: [f32; 12] = [
     0.5,  0.5, 0.0,
     0.5, -0.5, 0.0,
    -0.5, -0.5, 0.0,
    -0.5,  0.5, 0.0,
];

/// Two triangles sharing the rectangle diagonal
#[rustfmt::skip]
pub const RECTANGLE_INDICES: [u32; 6] = [
    0, 1, 3,
    1, 2, 3,
];

/// Triangle with a color per corner: position, color
#[rustfmt::skip]
pub const COLORED_TRIANGLE: [f32; 18] = [
     0.5, -0.5, 0.0,  1.0, 0.0, 0.0, // right
    -0.5, -0.5, 0.0,  0.0, 1.0, 0.0, // left
     0.0,  0.5, 0.0,  0.0, 0.0, 1.0, // top
];

/// Rectangle with position, color, texture coords going up to 2.0 so the
/// wrap mode shows. Indexed by [`RECTANGLE_INDICES`]
#[rustfmt::skip]
pub const COLORED_TEXTURED_RECTANGLE: [f32; 32] = [
     0.5,  0.5, 0.0,  1.0, 0.0, 0.0,  2.0, 2.0, // top right
     0.5, -0.5, 0.0,  0.0, 1.0, 0.0,  2.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,  0.0, 0.0, 1.0,  0.0, 0.0, // bottom left
    -0.5,  0.5, 0.0,  1.0, 1.0, 0.0,  0.0, 2.0, // top left
];

/// Rectangle with position, texture coords. Indexed by [`RECTANGLE_INDICES`]
#[rustfmt::skip]
pub const TEXTURED_RECTANGLE: [f32; 20] = [
     0.5,  0.5, 0.0,  1.0, 1.0, // top right
     0.5, -0.5, 0.0,  1.0, 0.0, // bottom right
    -0.5, -0.5, 0.0,  0.0, 0.0, // bottom left
    -0.5,  0.5, 0.0,  0.0, 1.0, // top left
];

/// Unit cube as 36 unindexed vertices: position, texture coords
#[rustfmt::skip]
pub const TEXTURED_CUBE: [f32; 180] = [
    -0.5, -0.5, -0.5,  0.0, 0.0,
     0.5, -0.5, -0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 0.0,

    -0.5, -0.5,  0.5,  0.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 1.0,
    -0.5,  0.5,  0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,

    -0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5, -0.5,  1.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5,  0.5,  1.0, 0.0,

     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5,  0.5,  0.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,

    -0.5, -0.5, -0.5,  0.0, 1.0,
     0.5, -0.5, -0.5,  1.0, 1.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
     0.5, -0.5,  0.5,  1.0, 0.0,
    -0.5, -0.5,  0.5,  0.0, 0.0,
    -0.5, -0.5, -0.5,  0.0, 1.0,

    -0.5,  0.5, -0.5,  0.0, 1.0,
     0.5,  0.5, -0.5,  1.0, 1.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
     0.5,  0.5,  0.5,  1.0, 0.0,
    -0.5,  0.5,  0.5,  0.0, 0.0,
    -0.5,  0.5, -0.5,  0.0, 1.0,
];

/// Vertices of [`TEXTURED_CUBE`]
pub const CUBE_VERTICES: usize = 36;

/// Where the ten cubes of the 3D exercises are placed
pub const CUBE_POSITIONS: [[f32; 3]; 10] = [
    [0.0, 0.0, 0.0],
    [2.0, 5.0, -15.0],
    [-1.5, -2.2, -2.5],
    [-3.8, -2.0, -12.3],
    [2.4, -0.4, -3.5],
    [-1.7, 3.0, -7.5],
    [1.3, -2.0, -2.5],
    [1.5, 2.0, -2.5],
    [1.5, 0.2, -1.5],
    [-1.3, 1.0, -1.5],
];

/// Positions of [`TEXTURED_CUBE`], dropping the texture coords
pub fn cube_positions() -> Vec<f32> {
    TEXTURED_CUBE
        .chunks_exact(5)
        .flat_map(|vertex| vertex[..3].iter().copied())
        .collect()
}

/// A triangle with its base at y = -0.5 between `left_x` and `right_x` and
/// its apex at y = 0.5, halfway between them
pub fn triangle(left_x: f32, right_x: f32) -> [f32; 9] {
    let top_x = (right_x - left_x) / 2.0 + left_x;
    #[rustfmt::skip]
    let vertices = [
        left_x, -0.5, 0.0,
        right_x, -0.5, 0.0,
        top_x, 0.5, 0.0,
    ];
    vertices
}

use crate::math::Vec2;

/// One tick of player input, sampled by the engine adapter.
///
/// Axes are nominally in `[-1, 1]`; the locomotion step clamps each 2D vector to unit length
/// so diagonal or over-driven input cannot exceed full speed. Vectors are planar: `x` is world
/// X, `y` is world Z.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputSample {
    /// Desired facing direction (world XZ).
    pub look: Vec2,
    /// Desired run direction (world XZ).
    pub run: Vec2,
    pub jump: bool,
    /// Enter or leave the nearest vehicle.
    pub interact: bool,
}

impl InputSample {
    pub fn new(look_x: f32, look_z: f32, run_x: f32, run_z: f32, jump: bool) -> Self {
        Self {
            look: Vec2::new(look_x, look_z),
            run: Vec2::new(run_x, run_z),
            jump,
            interact: false,
        }
    }

    /// Run-only sample with no look input.
    pub fn run(run_x: f32, run_z: f32) -> Self {
        Self::new(0.0, 0.0, run_x, run_z, false)
    }
}

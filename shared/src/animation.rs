use crate::math::{Quat, Vec3};

/// Named signals exported to the animation layer.
///
/// Booleans and floats are levels, sampled every render frame. `EnterCar` is a one-shot
/// trigger: it stays set until the animation layer consumes it.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct AnimationSignals {
    pub grounded: bool,
    /// Sideways velocity ratio in the player's local frame (1.0 = full speed right).
    pub run_x: f32,
    /// Forward velocity ratio in the player's local frame (1.0 = full speed forward).
    pub run_z: f32,
    pub in_car: bool,
    enter_car: bool,
}

impl AnimationSignals {
    pub fn fire_enter_car(&mut self) {
        self.enter_car = true;
    }

    /// Returns the `EnterCar` trigger and clears it.
    pub fn take_enter_car(&mut self) -> bool {
        std::mem::take(&mut self.enter_car)
    }

    /// Refresh the run ratios from the body's world velocity and facing.
    pub fn set_run_from_velocity(&mut self, rotation: Quat, velocity: Vec3, speed: f32) {
        let (x, z) = local_run_ratio(rotation, velocity, speed);
        self.run_x = x;
        self.run_z = z;
    }
}

/// `inverse(rotation) * (velocity / speed)`, returned as its local `(x, z)`.
#[inline]
pub fn local_run_ratio(rotation: Quat, velocity: Vec3, speed: f32) -> (f32, f32) {
    if speed <= 0.0 {
        return (0.0, 0.0);
    }
    let local = rotation.inverse_transform_vector(&(velocity / speed));
    (local.x, local.z)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn running_forward_reads_as_positive_run_z() {
        // Facing +X, running along +X.
        let facing = Quat::from_axis_angle(&Vec3::y_axis(), FRAC_PI_2);
        let (x, z) = local_run_ratio(facing, Vec3::new(10.0, -3.0, 0.0), 10.0);
        assert!(x.abs() < 1.0e-5);
        assert!((z - 1.0).abs() < 1.0e-5);
    }

    #[test]
    fn strafing_reads_as_run_x() {
        let (x, z) = local_run_ratio(Quat::identity(), Vec3::new(-5.0, 0.0, 0.0), 10.0);
        assert!((x + 0.5).abs() < 1.0e-6);
        assert!(z.abs() < 1.0e-6);
    }

    #[test]
    fn enter_car_trigger_is_consumed_once() {
        let mut signals = AnimationSignals::default();
        signals.fire_enter_car();
        assert!(signals.take_enter_car());
        assert!(!signals.take_enter_car());
    }
}

use crate::{
    body::PhysicsBody,
    constants::{JUMP_FORCE, LOOK_EPS, SPEED},
    grounding::GroundSensor,
    input::InputSample,
    math::{Quat, Vec3, clamp_unit, yaw_from_xz},
};

/// Locomotion tuning. Defaults come from [`crate::constants`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MovementTuning {
    /// Horizontal speed at full run input (m/s).
    pub speed: f32,
    /// Vertical velocity set by a jump (m/s).
    pub jump_force: f32,
    /// Look input at or below this magnitude keeps the previous facing.
    pub look_eps: f32,
    pub ground_sensor: GroundSensor,
}

impl Default for MovementTuning {
    fn default() -> Self {
        Self {
            speed: SPEED,
            jump_force: JUMP_FORCE,
            look_eps: LOOK_EPS,
            ground_sensor: GroundSensor::default(),
        }
    }
}

/// Output of a single `step_locomotion()` tick.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LocomotionResult {
    /// Velocity written to the body (after any jump).
    pub velocity: Vec3,
    /// Facing written to the body.
    pub facing: Quat,
    pub grounded: bool,
    pub jumped: bool,
}

/// Horizontal velocity for this tick: clamped run input times speed, vertical preserved.
#[inline]
pub fn run_velocity(tuning: &MovementTuning, input: &InputSample, current: Vec3) -> Vec3 {
    let run = clamp_unit(input.run);
    Vec3::new(run.x * tuning.speed, current.y, run.y * tuning.speed)
}

/// Facing for this tick.
///
/// Recomputed from the clamped look vector when it is long enough; otherwise the previous
/// facing persists (no snap back to a default heading).
#[inline]
pub fn look_facing(tuning: &MovementTuning, input: &InputSample, previous: Quat) -> Quat {
    let look = clamp_unit(input.look);
    if look.norm() > tuning.look_eps {
        Quat::from_axis_angle(&Vec3::y_axis(), yaw_from_xz(look))
    } else {
        previous
    }
}

/// Perform one locomotion tick against `body`.
///
/// Order
/// 1. Write run velocity (vertical preserved).
/// 2. Update the retained facing and apply it.
/// 3. Sense grounded.
/// 4. Jump: only when grounded and requested; vertical velocity is *set* to `jump_force`.
///
/// `facing` is the controller's retained look rotation and is updated in place.
pub fn step_locomotion<B: PhysicsBody + ?Sized>(
    body: &mut B,
    tuning: &MovementTuning,
    input: &InputSample,
    facing: &mut Quat,
) -> LocomotionResult {
    let mut velocity = run_velocity(tuning, input, body.linear_velocity());
    body.set_linear_velocity(velocity);

    *facing = look_facing(tuning, input, *facing);
    body.set_rotation(*facing);

    let grounded = tuning.ground_sensor.is_grounded(&*body);

    let jumped = input.jump && grounded;
    if jumped {
        velocity.y = tuning.jump_force;
        body.set_linear_velocity(velocity);
    }

    LocomotionResult {
        velocity,
        facing: *facing,
        grounded,
        jumped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{math::Vec2, test_support::ScriptedBody};

    fn step(body: &mut ScriptedBody, input: InputSample, facing: &mut Quat) -> LocomotionResult {
        step_locomotion(body, &MovementTuning::default(), &input, facing)
    }

    #[test]
    fn over_driven_run_input_never_exceeds_speed() {
        let inputs = [
            Vec2::new(1.0, 1.0),
            Vec2::new(5.0, 0.0),
            Vec2::new(-3.0, 4.0),
            Vec2::new(0.9, -0.9),
        ];
        for run in inputs {
            let mut body = ScriptedBody::grounded();
            let mut facing = Quat::identity();
            let out = step(&mut body, InputSample::run(run.x, run.y), &mut facing);
            let horizontal = Vec2::new(out.velocity.x, out.velocity.z).norm();
            assert!(horizontal <= SPEED + 1.0e-4, "{run:?} -> {horizontal}");
        }
    }

    #[test]
    fn run_sets_horizontal_velocity_and_keeps_vertical() {
        let mut body = ScriptedBody::grounded();
        body.velocity = Vec3::new(0.0, -2.0, 0.0);
        let mut facing = Quat::identity();

        let out = step(&mut body, InputSample::run(1.0, 0.0), &mut facing);

        assert_eq!(body.velocity, Vec3::new(SPEED, -2.0, 0.0));
        assert!(out.grounded);
        assert!(!out.jumped);
    }

    #[test]
    fn small_look_input_keeps_previous_facing() {
        let mut body = ScriptedBody::grounded();
        let mut facing = Quat::identity();

        step(&mut body, InputSample::new(1.0, 0.0, 0.0, 0.0, false), &mut facing);
        let turned = facing;
        assert!(turned.angle() > 1.0);

        for look in [Vec2::zeros(), Vec2::new(0.005, 0.005), Vec2::new(0.0, -0.009)] {
            step(
                &mut body,
                InputSample::new(look.x, look.y, 0.3, 0.0, false),
                &mut facing,
            );
            assert_eq!(facing, turned);
            assert_eq!(body.pose.rotation, turned);
        }
    }

    #[test]
    fn jump_requires_ground_and_overwrites_vertical_velocity() {
        let mut facing = Quat::identity();

        let mut grounded = ScriptedBody::grounded();
        grounded.velocity = Vec3::new(0.0, -3.0, 0.0);
        let out = step(
            &mut grounded,
            InputSample::new(0.0, 0.0, 0.0, 0.0, true),
            &mut facing,
        );
        assert!(out.jumped);
        assert_eq!(grounded.velocity.y, JUMP_FORCE);

        let mut airborne = ScriptedBody::airborne();
        airborne.velocity = Vec3::new(0.0, 1.5, 0.0);
        let out = step(
            &mut airborne,
            InputSample::new(0.0, 0.0, 0.0, 0.0, true),
            &mut facing,
        );
        assert!(!out.jumped);
        assert_eq!(airborne.velocity.y, 1.5);
    }

    #[test]
    fn jump_is_not_additive() {
        let mut body = ScriptedBody::grounded();
        body.velocity = Vec3::new(0.0, 4.0, 0.0);
        let mut facing = Quat::identity();
        step(
            &mut body,
            InputSample::new(0.0, 0.0, 1.0, 0.0, true),
            &mut facing,
        );
        assert_eq!(body.velocity, Vec3::new(SPEED, JUMP_FORCE, 0.0));
    }
}

//! The physics-engine seam.
//!
//! The controller never integrates motion itself. It writes velocities and poses into a
//! [`PhysicsBody`] and lets the engine step. `physics::RapierBody` is the in-tree
//! implementation; tests use a scripted body.

use crate::math::{Pose, Quat, Vec3};

/// Mutable view of a player's rigid body plus the scene queries the controller needs.
pub trait PhysicsBody {
    fn pose(&self) -> Pose;
    fn set_pose(&mut self, pose: Pose);

    fn position(&self) -> Vec3 {
        self.pose().translation
    }

    fn rotation(&self) -> Quat {
        self.pose().rotation
    }

    fn set_rotation(&mut self, rotation: Quat) {
        let translation = self.position();
        self.set_pose(Pose::new(translation, rotation));
    }

    fn linear_velocity(&self) -> Vec3;
    fn set_linear_velocity(&mut self, velocity: Vec3);

    fn gravity_enabled(&self) -> bool;
    fn set_gravity_enabled(&mut self, enabled: bool);

    /// Whether the body's main collision volume participates in contacts.
    fn collider_enabled(&self) -> bool;
    fn set_collider_enabled(&mut self, enabled: bool);

    /// Hand the body over to the physics engine as a ragdoll.
    ///
    /// The main collider is switched off and the ragdoll collider takes its place. The body
    /// stays dynamic under gravity, rotations are unlocked and `knockback` is added to the
    /// current velocity. One-way.
    fn activate_ragdoll(&mut self, knockback: Vec3);

    fn ragdoll_active(&self) -> bool;

    /// Number of colliders on `layer_mask` overlapping a sphere at `center`.
    ///
    /// Includes this body's own collider when it overlaps the sphere and is enabled.
    fn overlap_sphere_count(&self, center: Vec3, radius: f32, layer_mask: u32) -> usize;
}

//! Scripted stand-ins for engine collaborators, used by unit tests.

use std::cell::Cell;

use crate::{
    body::PhysicsBody,
    math::{Pose, Quat, Vec3},
};

/// A rigid body with no integration: it reports exactly what was last written to it.
///
/// `other_overlaps` is how many non-self colliders the overlap query reports. The body's own
/// collider is added when it is enabled.
#[derive(Debug)]
pub struct ScriptedBody {
    pub pose: Pose,
    pub velocity: Vec3,
    pub gravity: bool,
    pub collider: bool,
    pub other_overlaps: usize,
    pub ragdoll: bool,
    query: Cell<Option<(f32, u32)>>,
}

impl ScriptedBody {
    pub fn grounded() -> Self {
        Self {
            pose: Pose::default(),
            velocity: Vec3::zeros(),
            gravity: true,
            collider: true,
            other_overlaps: 1,
            ragdoll: false,
            query: Cell::new(None),
        }
    }

    pub fn airborne() -> Self {
        Self {
            other_overlaps: 0,
            ..Self::grounded()
        }
    }

    pub fn at(mut self, translation: Vec3) -> Self {
        self.pose.translation = translation;
        self
    }

    /// Radius and mask of the most recent overlap query.
    pub fn last_query(&self) -> Option<(f32, u32)> {
        self.query.get()
    }
}

impl PhysicsBody for ScriptedBody {
    fn pose(&self) -> Pose {
        self.pose
    }

    fn set_pose(&mut self, pose: Pose) {
        self.pose = pose;
    }

    fn set_rotation(&mut self, rotation: Quat) {
        self.pose.rotation = rotation;
    }

    fn linear_velocity(&self) -> Vec3 {
        self.velocity
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.velocity = velocity;
    }

    fn gravity_enabled(&self) -> bool {
        self.gravity
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        self.gravity = enabled;
    }

    fn collider_enabled(&self) -> bool {
        self.collider
    }

    fn set_collider_enabled(&mut self, enabled: bool) {
        self.collider = enabled;
    }

    fn activate_ragdoll(&mut self, knockback: Vec3) {
        self.ragdoll = true;
        self.collider = false;
        self.gravity = true;
        self.velocity += knockback;
    }

    fn ragdoll_active(&self) -> bool {
        self.ragdoll
    }

    fn overlap_sphere_count(&self, _center: Vec3, radius: f32, layer_mask: u32) -> usize {
        self.query.set(Some((radius, layer_mask)));
        self.other_overlaps + usize::from(self.collider)
    }
}

//! Rapier-backed physics world for player bodies.
//!
//! Static level geometry is described by [`WorldStaticDef`] (schema-agnostic, typically mapped
//! from DB rows or level data) and inserted once. Players are dynamic capsules with locked
//! rotations; the controller drives them through [`RapierBody`], which implements
//! [`PhysicsBody`] on top of the rigid-body and collider sets.
//!
//! Layers
//! - Each collider carries a layer bitmask in `user_data`. Overlap queries only count
//!   colliders whose layers intersect the query mask.
//! - Disabled colliders never count.
//! - Player capsules sit on the ground layer. Each player also carries a ragdoll collider on
//!   [`RAGDOLL_LAYER_MASK`], disabled until the ragdoll takes over.
//!
//! Determinism: statics are inserted sorted by `id`, so the same inputs build identical sets.

use rapier3d::na::Translation3;
use rapier3d::prelude::*;

use crate::{
    body::PhysicsBody,
    constants::{GROUND_LAYER_MASK, RAGDOLL_LAYER_MASK},
    math::{Iso, Pose, Quat, Vec3},
};

/// Standard gravity (m/s^2), pointing down -Y.
pub const GRAVITY: f32 = 9.81;

/// Player capsule radius (meters).
pub const PLAYER_CAPSULE_RADIUS: f32 = 0.3;

/// Half the length of the player capsule's cylindrical segment (meters).
pub const PLAYER_CAPSULE_HALF_HEIGHT: f32 = 0.6;

/// Half-extents of the collapsed-body box used while ragdolled (meters).
pub const RAGDOLL_HALF_EXTENTS: [f32; 3] = [0.3, 0.15, 0.75];

/// Handle of static geometry in a [`RapierPhysics`] world.
pub type StaticHandle = RigidBodyHandle;

/// Canonical definition of an immutable world collider.
#[derive(Clone, Debug)]
pub struct WorldStaticDef {
    /// Stable unique identifier used to ensure deterministic insertion order.
    pub id: u32,
    pub translation: Vec3,
    pub rotation: Quat,
    pub shape: ColliderShapeDef,
    /// Layer bitmask matched against query masks.
    pub layers: u32,
}

impl WorldStaticDef {
    /// Horizontal ground plane through `height`, on the ground layer.
    pub fn ground_plane(id: u32, height: f32) -> Self {
        Self {
            id,
            translation: Vec3::new(0.0, height, 0.0),
            rotation: Quat::identity(),
            shape: ColliderShapeDef::Plane {
                offset_along_normal: 0.0,
            },
            layers: GROUND_LAYER_MASK,
        }
    }
}

/// Supported static collider shapes.
#[derive(Clone, Debug)]
pub enum ColliderShapeDef {
    /// Infinite plane (half-space). The normal is `rotation * +Y`.
    Plane {
        /// Offset along the plane normal (meters).
        offset_along_normal: f32,
    },

    /// Oriented cuboid with given half-extents (meters).
    Cuboid { half_extents: Vec3 },

    /// Sphere/ball (meters).
    Sphere { radius: f32 },

    /// Y-aligned capsule (meters).
    CapsuleY { radius: f32, half_height: f32 },
}

/// Build a Rapier collider from a [`WorldStaticDef`].
///
/// Shapes other than the plane use the parent rigid-body pose and an identity local
/// transform.
pub fn collider_from_def(def: &WorldStaticDef) -> Collider {
    let builder = match &def.shape {
        ColliderShapeDef::Plane {
            offset_along_normal,
        } => {
            // The half-space is expressed relative to its fixed parent body, so only the
            // offset along the (local) +Y normal is applied here.
            ColliderBuilder::halfspace(Vector::y_axis())
                .translation(Vector::y() * *offset_along_normal)
        }

        ColliderShapeDef::Cuboid { half_extents } => {
            ColliderBuilder::cuboid(half_extents.x, half_extents.y, half_extents.z)
        }

        ColliderShapeDef::Sphere { radius } => ColliderBuilder::ball(*radius),

        ColliderShapeDef::CapsuleY {
            radius,
            half_height,
        } => ColliderBuilder::capsule_y(*half_height, *radius),
    };

    builder.user_data(u128::from(def.layers)).build()
}

/// Handles for one player's rigid body and its two colliders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PlayerBodyHandle {
    pub body: RigidBodyHandle,
    pub collider: ColliderHandle,
    pub ragdoll: ColliderHandle,
}

/// Full dynamics world: statics plus dynamic player bodies.
pub struct RapierPhysics {
    pub gravity: Vector<f32>,
    pub integration_parameters: IntegrationParameters,
    pub bodies: RigidBodySet,
    pub colliders: ColliderSet,
    pipeline: PhysicsPipeline,
    islands: IslandManager,
    broad_phase: BroadPhaseBvh,
    narrow_phase: NarrowPhase,
    impulse_joints: ImpulseJointSet,
    multibody_joints: MultibodyJointSet,
    ccd_solver: CCDSolver,
}

impl Default for RapierPhysics {
    fn default() -> Self {
        Self::new()
    }
}

impl RapierPhysics {
    pub fn new() -> Self {
        Self {
            gravity: Vector::new(0.0, -GRAVITY, 0.0),
            integration_parameters: IntegrationParameters::default(),
            bodies: RigidBodySet::new(),
            colliders: ColliderSet::new(),
            pipeline: PhysicsPipeline::new(),
            islands: IslandManager::new(),
            broad_phase: BroadPhaseBvh::new(),
            narrow_phase: NarrowPhase::new(),
            impulse_joints: ImpulseJointSet::new(),
            multibody_joints: MultibodyJointSet::new(),
            ccd_solver: CCDSolver::new(),
        }
    }

    /// Build a world from static level geometry.
    pub fn with_statics(mut defs: Vec<WorldStaticDef>) -> Self {
        defs.sort_by_key(|d| d.id);

        let mut world = Self::new();
        for def in &defs {
            world.insert_static(def);
        }
        world
    }

    pub fn insert_static(&mut self, def: &WorldStaticDef) -> StaticHandle {
        let iso = Iso::from_parts(Translation3::from(def.translation), def.rotation);
        let handle = self.bodies.insert(RigidBodyBuilder::fixed().pose(iso).build());
        self.colliders
            .insert_with_parent(collider_from_def(def), handle, &mut self.bodies);
        handle
    }

    /// Spawn a player capsule whose bottom rests on the pivot at `pose`.
    pub fn spawn_player(&mut self, pose: Pose) -> PlayerBodyHandle {
        let body = RigidBodyBuilder::dynamic()
            .pose(pose.iso())
            .lock_rotations()
            .build();
        let body = self.bodies.insert(body);

        let collider =
            ColliderBuilder::capsule_y(PLAYER_CAPSULE_HALF_HEIGHT, PLAYER_CAPSULE_RADIUS)
                .translation(Vector::new(
                    0.0,
                    PLAYER_CAPSULE_HALF_HEIGHT + PLAYER_CAPSULE_RADIUS,
                    0.0,
                ))
                .user_data(u128::from(GROUND_LAYER_MASK))
                .build();
        let collider = self
            .colliders
            .insert_with_parent(collider, body, &mut self.bodies);

        let [hx, hy, hz] = RAGDOLL_HALF_EXTENTS;
        let ragdoll = ColliderBuilder::cuboid(hx, hy, hz)
            .translation(Vector::new(0.0, hy, 0.0))
            .user_data(u128::from(RAGDOLL_LAYER_MASK))
            .enabled(false)
            .build();
        let ragdoll = self
            .colliders
            .insert_with_parent(ragdoll, body, &mut self.bodies);

        PlayerBodyHandle {
            body,
            collider,
            ragdoll,
        }
    }

    /// Remove a player body together with both of its colliders.
    pub fn remove_player(&mut self, handle: PlayerBodyHandle) {
        self.remove_body(handle.body);
    }

    /// Remove static geometry added with [`Self::insert_static`].
    pub fn remove_static(&mut self, handle: StaticHandle) {
        self.remove_body(handle);
    }

    fn remove_body(&mut self, handle: RigidBodyHandle) {
        self.bodies.remove(
            handle,
            &mut self.islands,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            true,
        );
    }

    /// Controller view of one player body. `None` if the body was removed.
    pub fn body_mut(&mut self, handle: PlayerBodyHandle) -> Option<RapierBody<'_>> {
        if !self.bodies.contains(handle.body) || !self.colliders.contains(handle.collider) {
            return None;
        }
        Some(RapierBody {
            physics: self,
            handle,
        })
    }

    pub fn body_pose(&self, handle: PlayerBodyHandle) -> Option<Pose> {
        self.bodies.get(handle.body).map(|rb| pose_of(rb.position()))
    }

    /// Advance the simulation by `dt_s` simulated seconds.
    pub fn step(&mut self, dt_s: f32) {
        self.integration_parameters.dt = dt_s;
        self.pipeline.step(
            &self.gravity,
            &self.integration_parameters,
            &mut self.islands,
            &mut self.broad_phase,
            &mut self.narrow_phase,
            &mut self.bodies,
            &mut self.colliders,
            &mut self.impulse_joints,
            &mut self.multibody_joints,
            &mut self.ccd_solver,
            &(),
            &(),
        );
    }

    /// Number of enabled colliders on `layer_mask` intersecting a ball at `center`.
    ///
    /// Uses the broad phase as of the last [`RapierPhysics::step`].
    pub fn overlap_sphere_count(&self, center: Vec3, radius: f32, layer_mask: u32) -> usize {
        let query = self.broad_phase.as_query_pipeline(
            self.narrow_phase.query_dispatcher(),
            &self.bodies,
            &self.colliders,
            QueryFilter::default(),
        );
        let ball = Ball::new(radius);
        let at = Iso::translation(center.x, center.y, center.z);

        query
            .intersect_shape(at, &ball)
            .filter(|(_, collider)| {
                collider.is_enabled() && (collider.user_data as u32) & layer_mask != 0
            })
            .count()
    }
}

fn pose_of(iso: &Iso) -> Pose {
    Pose::new(iso.translation.vector, iso.rotation)
}

/// Mutable controller view of one player body.
pub struct RapierBody<'a> {
    physics: &'a mut RapierPhysics,
    handle: PlayerBodyHandle,
}

impl RapierBody<'_> {
    fn rb(&self) -> &RigidBody {
        &self.physics.bodies[self.handle.body]
    }

    fn rb_mut(&mut self) -> &mut RigidBody {
        &mut self.physics.bodies[self.handle.body]
    }

    fn collider_is_enabled(&self, handle: ColliderHandle) -> bool {
        self.physics
            .colliders
            .get(handle)
            .is_some_and(|c| c.is_enabled())
    }

    fn enable_collider(&mut self, handle: ColliderHandle, enabled: bool) {
        if let Some(collider) = self.physics.colliders.get_mut(handle) {
            collider.set_enabled(enabled);
        }
    }
}

impl PhysicsBody for RapierBody<'_> {
    fn pose(&self) -> Pose {
        pose_of(self.rb().position())
    }

    fn set_pose(&mut self, pose: Pose) {
        self.rb_mut().set_position(pose.iso(), true);
    }

    fn linear_velocity(&self) -> Vec3 {
        *self.rb().linvel()
    }

    fn set_linear_velocity(&mut self, velocity: Vec3) {
        self.rb_mut().set_linvel(velocity, true);
    }

    fn gravity_enabled(&self) -> bool {
        self.rb().gravity_scale() != 0.0
    }

    fn set_gravity_enabled(&mut self, enabled: bool) {
        let scale = if enabled { 1.0 } else { 0.0 };
        self.rb_mut().set_gravity_scale(scale, true);
    }

    fn collider_enabled(&self) -> bool {
        self.collider_is_enabled(self.handle.collider)
    }

    fn set_collider_enabled(&mut self, enabled: bool) {
        self.enable_collider(self.handle.collider, enabled);
    }

    fn activate_ragdoll(&mut self, knockback: Vec3) {
        self.enable_collider(self.handle.collider, false);
        self.enable_collider(self.handle.ragdoll, true);

        let rb = self.rb_mut();
        rb.set_body_type(RigidBodyType::Dynamic, true);
        rb.set_gravity_scale(1.0, true);
        rb.lock_rotations(false, true);
        let velocity = *rb.linvel() + knockback;
        rb.set_linvel(velocity, true);
    }

    fn ragdoll_active(&self) -> bool {
        self.collider_is_enabled(self.handle.ragdoll)
    }

    fn overlap_sphere_count(&self, center: Vec3, radius: f32, layer_mask: u32) -> usize {
        self.physics.overlap_sphere_count(center, radius, layer_mask)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::FIXED_DT_S, grounding::GroundSensor, player::PlayerController,
        vehicle::VehicleRegistry,
    };

    fn level() -> RapierPhysics {
        RapierPhysics::with_statics(vec![WorldStaticDef::ground_plane(1, 0.0)])
    }

    #[test]
    fn standing_on_the_ground_counts_ground_and_self() {
        let mut physics = level();
        let player = physics.spawn_player(Pose::default());
        physics.step(FIXED_DT_S);

        let body = physics.body_mut(player).unwrap();
        let pivot = body.position();
        assert_eq!(body.overlap_sphere_count(pivot, 0.3, GROUND_LAYER_MASK), 2);
        assert!(GroundSensor::default().is_grounded(&body));
    }

    #[test]
    fn mid_air_counts_only_self() {
        let mut physics = level();
        let player = physics.spawn_player(Pose::new(Vec3::new(0.0, 5.0, 0.0), Quat::identity()));
        physics.step(FIXED_DT_S);

        let body = physics.body_mut(player).unwrap();
        let pivot = body.position();
        assert_eq!(body.overlap_sphere_count(pivot, 0.3, GROUND_LAYER_MASK), 1);
        assert!(!GroundSensor::default().is_grounded(&body));
    }

    #[test]
    fn disabled_collider_is_not_counted() {
        let mut physics = level();
        let player = physics.spawn_player(Pose::default());
        physics.step(FIXED_DT_S);

        let mut body = physics.body_mut(player).unwrap();
        body.set_collider_enabled(false);
        assert!(!body.collider_enabled());
        let pivot = body.position();
        assert_eq!(body.overlap_sphere_count(pivot, 0.3, GROUND_LAYER_MASK), 1);
    }

    #[test]
    fn layer_mask_filters_colliders() {
        let mut physics = level();
        let player = physics.spawn_player(Pose::default());
        physics.step(FIXED_DT_S);

        let body = physics.body_mut(player).unwrap();
        assert_eq!(body.overlap_sphere_count(body.position(), 0.3, 1 << 4), 0);
    }

    #[test]
    fn gravity_toggle_stops_falling() {
        let mut physics = level();
        let player = physics.spawn_player(Pose::new(Vec3::new(0.0, 5.0, 0.0), Quat::identity()));
        physics.body_mut(player).unwrap().set_gravity_enabled(false);

        for _ in 0..10 {
            physics.step(FIXED_DT_S);
        }

        let pose = physics.body_pose(player).unwrap();
        assert!((pose.translation.y - 5.0).abs() < 1.0e-4);
        assert!(!physics.body_mut(player).unwrap().gravity_enabled());
    }

    #[test]
    fn removed_body_has_no_view() {
        let mut physics = level();
        let player = physics.spawn_player(Pose::default());
        physics.remove_player(player);
        assert!(physics.body_mut(player).is_none());
    }

    #[test]
    fn removed_static_no_longer_counts_as_ground() {
        let mut physics = RapierPhysics::new();
        let block = physics.insert_static(&WorldStaticDef {
            id: 7,
            translation: Vec3::new(0.0, -0.5, 0.0),
            rotation: Quat::identity(),
            shape: ColliderShapeDef::Cuboid {
                half_extents: Vec3::new(1.0, 0.5, 1.0),
            },
            layers: GROUND_LAYER_MASK,
        });
        physics.step(FIXED_DT_S);
        assert_eq!(physics.overlap_sphere_count(Vec3::zeros(), 0.3, GROUND_LAYER_MASK), 1);

        physics.remove_static(block);
        physics.step(FIXED_DT_S);
        assert_eq!(physics.overlap_sphere_count(Vec3::zeros(), 0.3, GROUND_LAYER_MASK), 0);
    }

    #[test]
    fn ragdoll_collider_starts_disabled() {
        let mut physics = level();
        let player = physics.spawn_player(Pose::default());
        physics.step(FIXED_DT_S);

        let body = physics.body_mut(player).unwrap();
        assert!(body.collider_enabled());
        assert!(!body.ragdoll_active());
    }

    #[test]
    fn hit_in_mid_air_falls_to_the_ground_as_a_ragdoll() {
        let mut physics = level();
        let mut vehicles = VehicleRegistry::new();
        let handle = physics.spawn_player(Pose::new(Vec3::new(0.0, 3.0, 0.0), Quat::identity()));
        let mut player = PlayerController::new(4);
        physics.step(FIXED_DT_S);

        let hit = player.apply_hit(physics.body_mut(handle).as_mut(), &mut vehicles, Vec3::x());
        assert!(hit);

        for _ in 0..200 {
            physics.step(FIXED_DT_S);
        }

        let pose = physics.body_pose(handle).unwrap();
        assert!(pose.translation.y < 1.0, "ragdoll stuck at y = {}", pose.translation.y);
        assert!(pose.translation.y > -0.5, "ragdoll fell through at y = {}", pose.translation.y);
        assert!(pose.translation.x > 0.0);

        let body = physics.body_mut(handle).unwrap();
        assert!(body.ragdoll_active());
        assert!(!body.collider_enabled());
        assert!(body.gravity_enabled());
        assert!(physics.bodies[handle.body].is_dynamic());
    }

    #[test]
    fn ragdoll_is_not_ground_for_other_players() {
        let mut physics = level();
        let fallen = physics.spawn_player(Pose::new(Vec3::new(0.0, 0.0, 0.0), Quat::identity()));
        physics
            .body_mut(fallen)
            .unwrap()
            .activate_ragdoll(Vec3::zeros());
        for _ in 0..25 {
            physics.step(FIXED_DT_S);
        }

        let top = physics.body_pose(fallen).unwrap().translation + Vec3::new(0.0, 0.3, 0.0);
        assert_eq!(physics.overlap_sphere_count(top, 0.2, GROUND_LAYER_MASK), 0);
        assert_eq!(physics.overlap_sphere_count(top, 0.2, RAGDOLL_LAYER_MASK), 1);
    }
}

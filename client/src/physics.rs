//! The player physics world, stepped on the fixed schedule.

use bevy::prelude::*;
use underdog_shared::{RapierPhysics, WorldStaticDef};

use crate::SimulationSet;

#[derive(Resource, Deref, DerefMut)]
pub struct Physics(pub RapierPhysics);

impl Default for Physics {
    fn default() -> Self {
        Self(RapierPhysics::with_statics(vec![WorldStaticDef::ground_plane(
            GROUND_ID, 0.0,
        )]))
    }
}

/// Static id of the ground plane. Level geometry uses ids above it.
pub const GROUND_ID: u32 = 1;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Physics>();
    app.add_systems(FixedUpdate, step.in_set(SimulationSet::Physics));
}

fn step(mut physics: ResMut<Physics>, time: Res<Time>) {
    physics.step(time.delta_secs());
}

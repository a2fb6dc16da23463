//! Maps the simulation rate onto Bevy's virtual clock.
//!
//! Fixed ticks keep their step size; while a rate override is alive they arrive less often
//! in real time, which slows everything driven by virtual time.

use bevy::prelude::*;
use underdog_shared::SimulationRate;

#[derive(Resource, Clone, Debug, Default, Deref)]
pub struct Rate(pub SimulationRate);

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Rate>();
    app.add_systems(First, apply_rate);
}

fn apply_rate(rate: Res<Rate>, mut time: ResMut<Time<Virtual>>) {
    let scale = rate.scale();
    if time.relative_speed() != scale {
        debug!("virtual time speed {} -> {scale}", time.relative_speed());
        time.set_relative_speed(scale);
    }
}

//! Exports controller signals to the render side and poses the player model from them.
//!
//! There is no skeletal animation; the model leans with its run ratios, sinks when seated
//! and lies down as a ragdoll. After posing, the model's local offset is reset so no
//! translation leaks from animation into the player's root.

use bevy::prelude::*;

use crate::{physics::Physics, player::Player};

/// Per-frame snapshot of the named animation signals.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct AnimationState {
    pub grounded: bool,
    pub run_x: f32,
    pub run_z: f32,
    pub in_car: bool,
    pub ragdoll: bool,
    /// Seconds since the last `EnterCar` trigger fired, if it ever did.
    pub since_enter_car: Option<f32>,
}

/// Visual child of a player entity.
#[derive(Component, Debug)]
pub struct PlayerModel;

const MAX_LEAN: f32 = 0.25;

pub(super) fn plugin(app: &mut App) {
    app.add_systems(Update, (export_signals, pose_models, reset_model_offset).chain());
}

fn export_signals(
    mut players: Query<(&mut Player, &mut AnimationState)>,
    mut physics: ResMut<Physics>,
    time: Res<Time>,
) {
    for (mut player, mut state) in &mut players {
        let body = physics.body_mut(player.body);
        player.controller.update_animation(body.as_ref());

        let ragdoll = player.controller.is_ragdoll();
        let signals = player.controller.signals_mut();
        let fired = signals.take_enter_car();

        state.grounded = signals.grounded;
        state.run_x = signals.run_x;
        state.run_z = signals.run_z;
        state.in_car = signals.in_car;
        state.ragdoll = ragdoll;
        state.since_enter_car = if fired {
            debug!("player {}: EnterCar", player.controller.id());
            Some(0.0)
        } else {
            state.since_enter_car.map(|t| t + time.delta_secs())
        };
    }
}

fn pose_models(
    players: Query<&AnimationState>,
    mut models: Query<(&ChildOf, &mut Transform), With<PlayerModel>>,
) {
    for (child_of, mut transform) in &mut models {
        let Ok(state) = players.get(child_of.parent()) else {
            continue;
        };
        transform.rotation = if state.ragdoll {
            Quat::from_rotation_x(-std::f32::consts::FRAC_PI_2)
        } else {
            // Lean into the run direction, in the player's local frame.
            Quat::from_euler(
                EulerRot::XYZ,
                state.run_z.clamp(-1.0, 1.0) * MAX_LEAN,
                0.0,
                -state.run_x.clamp(-1.0, 1.0) * MAX_LEAN,
            )
        };
        transform.scale = if state.in_car {
            Vec3::new(1.0, 0.7, 1.0)
        } else {
            Vec3::ONE
        };
    }
}

fn reset_model_offset(mut models: Query<&mut Transform, With<PlayerModel>>) {
    for mut transform in &mut models {
        if transform.translation != Vec3::ZERO {
            transform.translation = Vec3::ZERO;
        }
    }
}

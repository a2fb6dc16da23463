// Support configuring Bevy lints within code.
#![cfg_attr(bevy_lint, feature(register_tool), register_tool(bevy))]
// Disable console on Windows for non-dev builds.
#![cfg_attr(not(feature = "dev"), windows_subsystem = "windows")]

#[cfg(feature = "dev_native")]
mod debug_tools;

mod animation;
mod camera;
mod convert;
mod input;
mod level;
mod module_bindings;
mod network;
mod physics;
mod player;
mod server;
mod time_scale;
mod vehicle;

use bevy::prelude::*;
use underdog_shared::FIXED_TICK_HZ;

fn main() -> AppExit {
    App::new().add_plugins(AppPlugin).run()
}

/// Order of the simulation inside one fixed tick.
#[derive(SystemSet, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SimulationSet {
    /// Delivered hits are applied before anyone moves.
    Network,
    Players,
    Physics,
}

pub struct AppPlugin;
impl Plugin for AppPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Window {
                title: "Underdog".to_string(),
                fit_canvas_to_parent: true,
                ..default()
            }
            .into(),
            ..default()
        }));

        app.insert_resource(Time::<Fixed>::from_hz(FIXED_TICK_HZ));
        app.configure_sets(
            FixedUpdate,
            (
                SimulationSet::Network,
                SimulationSet::Players,
                SimulationSet::Physics,
            )
                .chain(),
        );

        app.add_plugins((
            server::plugin,
            physics::plugin,
            time_scale::plugin,
            input::plugin,
            level::plugin,
            vehicle::plugin,
            player::plugin,
            animation::plugin,
            network::plugin,
            camera::plugin,
        ));

        #[cfg(feature = "dev_native")]
        app.add_plugins(debug_tools::plugin);
    }
}

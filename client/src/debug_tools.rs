//! Debug tooling for native dev builds.
//!
//! Logs frame and entity diagnostics and draws vehicle trigger volumes and anchors.

use bevy::diagnostic::{
    EntityCountDiagnosticsPlugin, FrameTimeDiagnosticsPlugin, LogDiagnosticsPlugin,
};
use bevy::prelude::*;

use crate::{convert::to_vec3, vehicle::Vehicles};

pub(super) fn plugin(app: &mut App) {
    app.add_plugins((
        FrameTimeDiagnosticsPlugin::default(),
        EntityCountDiagnosticsPlugin::default(),
        LogDiagnosticsPlugin::default(),
    ));

    app.add_systems(Update, draw_vehicle_gizmos);
}

fn draw_vehicle_gizmos(vehicles: Res<Vehicles>, mut gizmos: Gizmos) {
    for vehicle in vehicles.iter() {
        let center = vehicle.pose.translation + vehicle.pose.rotation * vehicle.trigger.local_center;
        let trigger_color = if vehicle.occupancy.occupant().is_some() {
            Color::srgb(0.9, 0.3, 0.2)
        } else {
            Color::srgb(0.2, 0.9, 0.4)
        };
        gizmos.sphere(
            Isometry3d::from_translation(to_vec3(&center)),
            vehicle.trigger.radius,
            trigger_color,
        );

        let enter = vehicle.enter_anchor_pose();
        let seat = vehicle.seat_anchor_pose();
        gizmos.line(
            to_vec3(&enter.translation),
            to_vec3(&seat.translation),
            Color::srgb(0.9, 0.8, 0.2),
        );
    }
}

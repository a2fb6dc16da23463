//! Vehicle layout seeded at module init.
//!
//! Layout comes from the shared vehicle definition so server rows and locally simulated
//! vehicles agree on anchors and trigger size.

use crate::{
    schema::{vehicle, Vehicle},
    types::{DbQuat, DbVec3},
};
use spacetimedb::{ReducerContext, Table};
use underdog_shared::{Pose, Vec3};

/// `(id, x, z, yaw)` of every parked car.
const PARKED_CARS: &[(u32, f32, f32, f32)] = &[(1, 6.0, 4.0, 0.0), (2, -8.0, 10.0, 1.2)];

/// Drop and re-insert every vehicle row.
pub fn recreate_vehicles(ctx: &ReducerContext) {
    let stale: Vec<u32> = ctx.db.vehicle().iter().map(|v| v.id).collect();
    for id in stale {
        ctx.db.vehicle().id().delete(id);
    }

    for &(id, x, z, yaw) in PARKED_CARS {
        let layout = underdog_shared::Vehicle::with_driver_door(
            id,
            Pose::from_yaw(Vec3::new(x, 0.0, z), yaw),
        );
        ctx.db.vehicle().insert(row_from_layout(&layout));
    }

    log::info!("Seeded {} vehicles", PARKED_CARS.len());
}

fn row_from_layout(layout: &underdog_shared::Vehicle) -> Vehicle {
    Vehicle {
        id: layout.id,
        translation: DbVec3::from(layout.pose.translation),
        rotation: DbQuat::from(layout.pose.rotation),
        enter_anchor_translation: DbVec3::from(layout.enter_anchor.translation),
        enter_anchor_rotation: DbQuat::from(layout.enter_anchor.rotation),
        seat_anchor_translation: DbVec3::from(layout.seat_anchor.translation),
        seat_anchor_rotation: DbQuat::from(layout.seat_anchor.rotation),
        trigger_radius: layout.trigger.radius,
        occupant: None,
    }
}

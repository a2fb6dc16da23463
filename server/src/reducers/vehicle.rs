//! Authoritative vehicle occupancy.
//!
//! The seat is a compare-and-set cell: `request_enter_vehicle` succeeds only on a free
//! vehicle for a living player, and only the occupant can `request_exit_vehicle`. When two clients race for the
//! same car, the reducer that runs first wins and the other gets an error back.
//!
//! Clients drive the enter/exit choreography locally and call these reducers when the
//! sequence starts, so remote peers see the seat change immediately.

use crate::schema::*;
use spacetimedb::{Identity, ReducerContext};
use underdog_shared::Occupancy;

#[spacetimedb::reducer]
pub fn request_enter_vehicle(ctx: &ReducerContext, vehicle_id: u32) -> Result<(), String> {
    let Some(mut player) = ctx.db.player().identity().find(ctx.sender) else {
        return Err("Player not found".into());
    };
    may_take_seat(player.dead, player.vehicle_id)?;

    let Some(mut vehicle) = ctx.db.vehicle().id().find(vehicle_id) else {
        return Err(format!("Vehicle {vehicle_id} not found"));
    };

    let mut seat = Occupancy::new(vehicle.occupant);
    seat.try_occupy(ctx.sender).map_err(|e| e.to_string())?;
    vehicle.occupant = seat.occupant();
    ctx.db.vehicle().id().update(vehicle);

    player.vehicle_id = Some(vehicle_id);
    ctx.db.player().identity().update(player);

    log::debug!("{:?} entered vehicle {vehicle_id}", ctx.sender);
    Ok(())
}

#[spacetimedb::reducer]
pub fn request_exit_vehicle(ctx: &ReducerContext) -> Result<(), String> {
    let Some(mut player) = ctx.db.player().identity().find(ctx.sender) else {
        return Err("Player not found".into());
    };
    let Some(vehicle_id) = player.vehicle_id else {
        return Err("Not in a vehicle".into());
    };

    release_seat(ctx, vehicle_id, ctx.sender)?;

    player.vehicle_id = None;
    ctx.db.player().identity().update(player);

    log::debug!("{:?} exited vehicle {vehicle_id}", ctx.sender);
    Ok(())
}

fn may_take_seat(dead: bool, current: Option<u32>) -> Result<(), String> {
    if dead {
        return Err("Dead players cannot enter vehicles".into());
    }
    if let Some(current) = current {
        return Err(format!("Already in vehicle {current}"));
    }
    Ok(())
}

/// Free `vehicle_id` if `occupant` holds it. A vanished vehicle counts as released.
pub fn release_seat(ctx: &ReducerContext, vehicle_id: u32, occupant: Identity) -> Result<(), String> {
    let Some(mut vehicle) = ctx.db.vehicle().id().find(vehicle_id) else {
        return Ok(());
    };

    let mut seat = Occupancy::new(vehicle.occupant);
    seat.release(occupant).map_err(|e| e.to_string())?;
    vehicle.occupant = seat.occupant();
    ctx.db.vehicle().id().update(vehicle);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dead_players_are_refused_a_seat() {
        assert!(may_take_seat(true, None).is_err());
        assert!(may_take_seat(false, Some(2)).is_err());
        assert_eq!(may_take_seat(false, None), Ok(()));
    }
}

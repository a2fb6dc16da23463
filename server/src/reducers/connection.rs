//! Connection lifecycle reducers.
//!
//! Behavior
//! - On connect: ensure a `Player` row exists for the caller and mark it online.
//! - On disconnect: release any vehicle the caller occupies and mark it offline.
//!
//! Replicated properties survive disconnects; a dead player stays dead.

use crate::{reducers::vehicle::release_seat, schema::*};
use spacetimedb::{ReducerContext, Table};

#[spacetimedb::reducer(client_connected)]
pub fn identity_connected(ctx: &ReducerContext) {
    log::info!("Client connected: {:?}", ctx.sender);

    if let Some(player) = ctx.db.player().identity().find(ctx.sender) {
        ctx.db.player().identity().update(Player {
            online: true,
            last_connected_at: ctx.timestamp,
            ..player
        });
    } else {
        let player = ctx.db.player().insert(Player {
            identity: ctx.sender,
            id: 0,
            online: true,
            dead: false,
            vehicle_id: None,
            last_connected_at: ctx.timestamp,
        });
        log::info!("New player {} for {:?}", player.id, ctx.sender);
    }
}

#[spacetimedb::reducer(client_disconnected)]
pub fn identity_disconnected(ctx: &ReducerContext) {
    log::info!("Client disconnected: {:?}", ctx.sender);

    let Some(mut player) = ctx.db.player().identity().find(ctx.sender) else {
        return;
    };

    if let Some(vehicle_id) = player.vehicle_id.take() {
        if let Err(reason) = release_seat(ctx, vehicle_id, ctx.sender) {
            log::warn!("Disconnect of {:?}: {reason}", ctx.sender);
        }
    }

    player.online = false;
    ctx.db.player().identity().update(player);
}

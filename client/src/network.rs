//! Hit replication and seat requests over the SpacetimeDB module.
//!
//! - `notify_hit` inserts a `hit_event` row that reaches every subscriber, this client
//!   included. Inserted rows queue up here and are applied on the next fixed tick.
//! - The death record goes through `set_player_property`; `player_property` rows are
//!   mirrored into a [`ReplicatedProperties`] so reads stay local.
//! - Local seat changes become `request_enter_vehicle` / `request_exit_vehicle` calls. A
//!   refused enter cancels the local sequence.

use std::collections::VecDeque;

use bevy::prelude::*;
use bevy_spacetimedb::{ReadInsertMessage, ReadReducerMessage, ReadUpdateMessage, StdbConnection};
use leafwing_input_manager::prelude::ActionState;
use spacetimedb_sdk::{Identity, Status};
use underdog_shared::{
    HitRpc, HitTransport, PeerId, PlayerId, PropertyStore, ReplicatedProperties,
    ReplicationAdapter, ReplicationError, SenderInfo, Vec3 as SimVec3, VehicleId,
};

use crate::{
    SimulationSet,
    convert::from_vec3,
    input::PlayerAction,
    module_bindings::{
        DbConnection, HitEvent, PlayerProperty, PlayerTableAccess, notify_hit,
        request_enter_vehicle, request_exit_vehicle, set_player_property,
    },
    physics::Physics,
    player::{LocalPlayer, Player},
    server::{
        SpacetimeDB,
        reducers::{RequestEnterVehicle, RequestExitVehicle},
    },
    vehicle::Vehicles,
};

/// Maximum distance to the player being hit (meters).
const HIT_RANGE: f32 = 4.0;

#[derive(Resource, Default)]
pub struct Network {
    /// Known once the local player's row arrives.
    pub adapter: Option<ReplicationAdapter>,
    pub properties: ReplicatedProperties,
    inbox: VecDeque<HitRpc>,
}

/// A seat change of the local player, reported to the module.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeatRequest {
    Enter(VehicleId),
    Exit,
}

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Network>();
    app.add_message::<SeatRequest>();
    app.add_systems(
        Update,
        (
            send_hit,
            queue_hit_events,
            mirror_inserted_properties,
            mirror_updated_properties,
            send_seat_requests,
            on_enter_result,
            on_exit_result,
        ),
    );
    app.add_systems(FixedUpdate, deliver_hits.in_set(SimulationSet::Network));
}

/// [`HitTransport`] and [`PropertyStore`] backed by the module's reducers.
pub struct StdbTransport<'a> {
    stdb: &'a StdbConnection<DbConnection>,
    local_peer: PeerId,
    mirror: &'a mut ReplicatedProperties,
}

impl<'a> StdbTransport<'a> {
    pub fn new(
        stdb: &'a StdbConnection<DbConnection>,
        local_peer: PeerId,
        mirror: &'a mut ReplicatedProperties,
    ) -> Self {
        Self {
            stdb,
            local_peer,
            mirror,
        }
    }
}

impl HitTransport for StdbTransport<'_> {
    fn broadcast_hit(&mut self, rpc: HitRpc) -> Result<(), ReplicationError> {
        if rpc.sender.peer != self.local_peer {
            return Err(ReplicationError::UnknownPeer(rpc.sender.peer));
        }
        self.stdb
            .reducers()
            .notify_hit(rpc.subject, rpc.direction.into())
            .map_err(|err| ReplicationError::Transport(err.to_string()))
    }
}

impl PropertyStore for StdbTransport<'_> {
    fn set_property(
        &mut self,
        peer: PeerId,
        key: &str,
        value: &str,
    ) -> Result<(), ReplicationError> {
        if peer != self.local_peer {
            return Err(ReplicationError::ForeignRecord(peer));
        }
        if self.mirror.property(peer, key) == Some(value) {
            return Ok(());
        }
        self.stdb
            .reducers()
            .set_player_property(key.to_owned(), value.to_owned())
            .map_err(|err| ReplicationError::Transport(err.to_string()))?;
        self.mirror.set_property(peer, key, value)
    }

    fn property(&self, peer: PeerId, key: &str) -> Option<&str> {
        self.mirror.property(peer, key)
    }
}

fn player_id_of(stdb: &StdbConnection<DbConnection>, identity: &Identity) -> Option<PlayerId> {
    stdb.db().player().identity().find(identity).map(|row| row.id)
}

fn send_hit(
    actions: Res<ActionState<PlayerAction>>,
    players: Query<(&Player, &Transform, Has<LocalPlayer>)>,
    mut network: ResMut<Network>,
    stdb: SpacetimeDB,
    time: Res<Time<Real>>,
) {
    if !actions.just_pressed(&PlayerAction::Hit) {
        return;
    }
    let Some(adapter) = network.adapter else {
        debug!("hit: not connected yet");
        return;
    };
    let Some(origin) = players
        .iter()
        .find_map(|(_, transform, is_local)| is_local.then_some(transform.translation))
    else {
        return;
    };

    let target = players
        .iter()
        .filter(|(player, _, is_local)| !is_local && !player.controller.is_ragdoll())
        .map(|(player, transform, _)| (player.controller.id(), transform.translation))
        .filter(|(_, at)| at.distance(origin) <= HIT_RANGE)
        .min_by(|a, b| {
            a.1.distance_squared(origin)
                .total_cmp(&b.1.distance_squared(origin))
        });
    let Some((subject, at)) = target else {
        debug!("hit: nobody in range");
        return;
    };

    let direction = from_vec3((at - origin).normalize_or_zero());
    let sent_at = time.elapsed().as_micros() as i64;
    let mut transport = StdbTransport::new(&stdb, adapter.local_peer(), &mut network.properties);
    if let Err(err) = adapter.notify_hit(&mut transport, subject, direction, sent_at) {
        warn!("hit on player {subject} not sent: {err}");
    }
}

fn queue_hit_events(
    mut msgs: ReadInsertMessage<HitEvent>,
    mut network: ResMut<Network>,
    stdb: SpacetimeDB,
) {
    for msg in msgs.read() {
        let row = &msg.row;
        let Some(peer) = player_id_of(&stdb, &row.sender) else {
            debug!("hit event {} from an unknown sender", row.id);
            continue;
        };
        network.inbox.push_back(HitRpc {
            subject: row.subject,
            direction: SimVec3::from(row.direction.clone()),
            sender: SenderInfo {
                peer,
                sent_at_micros: row.sent_at.to_micros_since_unix_epoch(),
            },
        });
    }
}

fn deliver_hits(
    mut network: ResMut<Network>,
    mut players: Query<&mut Player>,
    mut physics: ResMut<Physics>,
    mut vehicles: ResMut<Vehicles>,
    stdb: SpacetimeDB,
) {
    let Network {
        adapter,
        properties,
        inbox,
    } = &mut *network;
    let Some(adapter) = adapter else {
        return;
    };

    for rpc in inbox.drain(..) {
        let Some(mut player) = players
            .iter_mut()
            .find(|player| player.controller.id() == rpc.subject)
        else {
            debug!("hit for player {} with no replica", rpc.subject);
            continue;
        };

        // Every player owns its own record.
        let owner = rpc.subject;
        let mut body = physics.body_mut(player.body);
        let mut transport = StdbTransport::new(&stdb, adapter.local_peer(), properties);
        match adapter.handle_hit(
            &rpc,
            &mut player.controller,
            owner,
            body.as_mut(),
            &mut vehicles,
            &mut transport,
        ) {
            Ok(true) => info!("player {} is down", rpc.subject),
            Ok(false) => {}
            Err(err) => warn!("hit on player {} not applied: {err}", rpc.subject),
        }
    }
}

fn mirror_property(network: &mut Network, stdb: &StdbConnection<DbConnection>, row: &PlayerProperty) {
    let Some(peer) = player_id_of(stdb, &row.owner) else {
        debug!("property {} for an unknown player", row.record_key);
        return;
    };
    if let Err(err) = network.properties.set_property(peer, &row.key, &row.value) {
        warn!("property {} not mirrored: {err}", row.record_key);
    }
}

fn mirror_inserted_properties(
    mut msgs: ReadInsertMessage<PlayerProperty>,
    mut network: ResMut<Network>,
    stdb: SpacetimeDB,
) {
    for msg in msgs.read() {
        mirror_property(&mut network, &stdb, &msg.row);
    }
}

fn mirror_updated_properties(
    mut msgs: ReadUpdateMessage<PlayerProperty>,
    mut network: ResMut<Network>,
    stdb: SpacetimeDB,
) {
    for msg in msgs.read() {
        mirror_property(&mut network, &stdb, &msg.new);
    }
}

fn send_seat_requests(mut requests: MessageReader<SeatRequest>, stdb: SpacetimeDB) {
    for request in requests.read() {
        let sent = match *request {
            SeatRequest::Enter(vehicle_id) => stdb.reducers().request_enter_vehicle(vehicle_id),
            SeatRequest::Exit => stdb.reducers().request_exit_vehicle(),
        };
        if let Err(err) = sent {
            warn!("{request:?} not sent: {err}");
        }
    }
}

/// A refused enter means someone else holds the seat: give up the local sequence.
fn on_enter_result(
    mut msgs: ReadReducerMessage<RequestEnterVehicle>,
    mut local: Query<&mut Player, With<LocalPlayer>>,
    mut physics: ResMut<Physics>,
    mut vehicles: ResMut<Vehicles>,
    stdb: SpacetimeDB,
) {
    for msg in msgs.read() {
        let result = &msg.result;
        if result.event.caller_identity != stdb.identity() {
            continue;
        }
        let reason = match &result.event.status {
            Status::Committed => {
                debug!("seat in vehicle {} confirmed", result.vehicle_id);
                continue;
            }
            Status::Failed(reason) => reason.to_string(),
            other => format!("{other:?}"),
        };
        warn!("enter vehicle {} refused: {reason}", result.vehicle_id);

        let Ok(mut player) = local.single_mut() else {
            continue;
        };
        if player.controller.mounted_vehicle() != Some(result.vehicle_id) {
            continue;
        }
        let handle = player.body;
        if let Some(mut body) = physics.body_mut(handle) {
            player.controller.cancel(&mut body, &mut vehicles);
        }
    }
}

fn on_exit_result(mut msgs: ReadReducerMessage<RequestExitVehicle>, stdb: SpacetimeDB) {
    for msg in msgs.read() {
        let event = &msg.result.event;
        if event.caller_identity != stdb.identity() {
            continue;
        }
        if let Status::Failed(reason) = &event.status {
            warn!("exit vehicle refused: {reason}");
        }
    }
}

//! Player entities, one per online `player` row, each a [`PlayerController`] driving one
//! rapier body.
//!
//! The row carrying this connection's identity is the local player: it reads [`TickInput`]
//! and reports its seat changes to the module. The others stand where they spawned with an
//! empty sample.

use bevy::{platform::collections::HashMap, prelude::*};
use bevy_spacetimedb::{ReadDeleteMessage, ReadInsertMessage, ReadUpdateMessage};
use underdog_shared::{
    InputSample, PlayerBodyHandle, PlayerController, PlayerId, PlayerState, Pose,
    ReplicationAdapter, TriggerTracker, Vec3 as SimVec3, VehicleRegistry,
    physics::{PLAYER_CAPSULE_HALF_HEIGHT, PLAYER_CAPSULE_RADIUS},
};

use crate::{
    SimulationSet,
    animation::{AnimationState, PlayerModel},
    convert::to_transform,
    input::TickInput,
    module_bindings::Player as PlayerRow,
    network::{Network, SeatRequest},
    physics::Physics,
    server::SpacetimeDB,
    time_scale::Rate,
    vehicle::Vehicles,
};

#[derive(Component)]
pub struct Player {
    pub controller: PlayerController,
    pub body: PlayerBodyHandle,
    triggers: TriggerTracker,
}

#[derive(Component)]
pub struct LocalPlayer;

struct Spawned {
    entity: Entity,
    body: PlayerBodyHandle,
}

/// Row id to the entity and body spawned for it.
#[derive(Resource, Default)]
struct PlayerEntities(HashMap<PlayerId, Spawned>);

#[derive(Resource)]
struct PlayerAssets {
    capsule: Handle<Mesh>,
    local_color: Handle<StandardMaterial>,
    other_color: Handle<StandardMaterial>,
}

const SPAWN_RING_RADIUS: f32 = 3.0;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<PlayerEntities>();
    app.add_systems(Startup, load_assets);
    app.add_systems(
        Update,
        (on_player_inserted, on_player_updated, on_player_deleted),
    );
    app.add_systems(
        FixedUpdate,
        (track_triggers, drive_players)
            .chain()
            .in_set(SimulationSet::Players),
    );
    app.add_systems(Update, sync_transforms);
}

fn load_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(PlayerAssets {
        capsule: meshes.add(Capsule3d::new(
            PLAYER_CAPSULE_RADIUS,
            PLAYER_CAPSULE_HALF_HEIGHT * 2.0,
        )),
        local_color: materials.add(Color::srgb(0.2, 0.45, 0.9)),
        other_color: materials.add(Color::srgb(0.55, 0.55, 0.6)),
    });
}

/// Players spread over a ring around the origin, in join order.
fn spawn_point(id: PlayerId) -> Pose {
    let angle = id as f32 * std::f32::consts::TAU / 7.0;
    let (sin, cos) = angle.sin_cos();
    Pose::from_yaw(
        SimVec3::new(SPAWN_RING_RADIUS * sin, 0.0, SPAWN_RING_RADIUS * cos),
        angle + std::f32::consts::PI,
    )
}

fn on_player_inserted(
    mut msgs: ReadInsertMessage<PlayerRow>,
    mut commands: Commands,
    mut entities: ResMut<PlayerEntities>,
    mut players: Query<&mut Player>,
    mut physics: ResMut<Physics>,
    mut vehicles: ResMut<Vehicles>,
    mut network: ResMut<Network>,
    assets: Res<PlayerAssets>,
    stdb: SpacetimeDB,
) {
    for msg in msgs.read() {
        let row = &msg.row;
        if !row.online {
            continue;
        }
        let is_local = row.identity == stdb.identity();
        spawn_player(
            &mut commands,
            &mut entities,
            &mut physics,
            &mut vehicles,
            &assets,
            row,
            is_local,
        );
        if is_local {
            network.adapter = Some(ReplicationAdapter::new(row.id));
        }
        apply_dead_flag(&entities, &mut players, &mut physics, &mut vehicles, row);
    }
}

fn on_player_updated(
    mut msgs: ReadUpdateMessage<PlayerRow>,
    mut commands: Commands,
    mut entities: ResMut<PlayerEntities>,
    mut players: Query<&mut Player>,
    mut physics: ResMut<Physics>,
    mut vehicles: ResMut<Vehicles>,
    mut network: ResMut<Network>,
    assets: Res<PlayerAssets>,
    stdb: SpacetimeDB,
) {
    for msg in msgs.read() {
        let row = &msg.new;
        let is_local = row.identity == stdb.identity();
        if !row.online {
            despawn_player(
                &mut commands,
                &mut entities,
                &mut players,
                &mut physics,
                &mut vehicles,
                row.id,
            );
            if is_local {
                network.adapter = None;
            }
            continue;
        }
        spawn_player(
            &mut commands,
            &mut entities,
            &mut physics,
            &mut vehicles,
            &assets,
            row,
            is_local,
        );
        if is_local && network.adapter.is_none() {
            network.adapter = Some(ReplicationAdapter::new(row.id));
        }
        apply_dead_flag(&entities, &mut players, &mut physics, &mut vehicles, row);
    }
}

fn on_player_deleted(
    mut msgs: ReadDeleteMessage<PlayerRow>,
    mut commands: Commands,
    mut entities: ResMut<PlayerEntities>,
    mut players: Query<&mut Player>,
    mut physics: ResMut<Physics>,
    mut vehicles: ResMut<Vehicles>,
) {
    for msg in msgs.read() {
        despawn_player(
            &mut commands,
            &mut entities,
            &mut players,
            &mut physics,
            &mut vehicles,
            msg.row.id,
        );
    }
}

/// Spawn the replica of `row` unless it already exists. A dead row spawns as a ragdoll.
fn spawn_player(
    commands: &mut Commands,
    entities: &mut PlayerEntities,
    physics: &mut Physics,
    vehicles: &mut VehicleRegistry,
    assets: &PlayerAssets,
    row: &PlayerRow,
    is_local: bool,
) {
    if entities.0.contains_key(&row.id) {
        return;
    }

    let pose = spawn_point(row.id);
    let body = physics.spawn_player(pose);
    let mut controller = PlayerController::new(row.id);
    if row.dead {
        controller.apply_hit(physics.body_mut(body).as_mut(), vehicles, SimVec3::zeros());
    }

    let mut entity = commands.spawn((
        Name::new(format!("Player {}", row.id)),
        Player {
            controller,
            body,
            triggers: TriggerTracker::default(),
        },
        AnimationState::default(),
        to_transform(&pose),
        Visibility::default(),
        children![(
            PlayerModel,
            Transform::default(),
            Visibility::default(),
            children![(
                Mesh3d(assets.capsule.clone()),
                MeshMaterial3d(if is_local {
                    assets.local_color.clone()
                } else {
                    assets.other_color.clone()
                }),
                Transform::from_xyz(0.0, PLAYER_CAPSULE_HALF_HEIGHT + PLAYER_CAPSULE_RADIUS, 0.0),
            )],
        )],
    ));
    if is_local {
        entity.insert(LocalPlayer);
    }

    info!(
        "spawned {} player {}",
        if is_local { "local" } else { "remote" },
        row.id
    );
    entities.0.insert(
        row.id,
        Spawned {
            entity: entity.id(),
            body,
        },
    );
}

/// The module marks a player dead on the first hit; replicas that missed the hit event
/// catch up here.
fn apply_dead_flag(
    entities: &PlayerEntities,
    players: &mut Query<&mut Player>,
    physics: &mut Physics,
    vehicles: &mut VehicleRegistry,
    row: &PlayerRow,
) {
    if !row.dead {
        return;
    }
    let Some(spawned) = entities.0.get(&row.id) else {
        return;
    };
    let Ok(mut player) = players.get_mut(spawned.entity) else {
        return;
    };
    let mut body = physics.body_mut(spawned.body);
    if player
        .controller
        .apply_hit(body.as_mut(), vehicles, SimVec3::zeros())
    {
        info!("player {} is dead on the server", row.id);
    }
}

fn despawn_player(
    commands: &mut Commands,
    entities: &mut PlayerEntities,
    players: &mut Query<&mut Player>,
    physics: &mut Physics,
    vehicles: &mut VehicleRegistry,
    id: PlayerId,
) {
    let Some(spawned) = entities.0.remove(&id) else {
        return;
    };
    if let Ok(mut player) = players.get_mut(spawned.entity) {
        let mut body = physics.body_mut(spawned.body);
        player.controller.despawn(body.as_mut(), vehicles);
    }
    physics.remove_player(spawned.body);
    commands.entity(spawned.entity).despawn();
    info!("despawned player {id}");
}

fn track_triggers(
    mut players: Query<&mut Player>,
    physics: Res<Physics>,
    vehicles: Res<Vehicles>,
) {
    for mut player in &mut players {
        let Some(pose) = physics.body_pose(player.body) else {
            continue;
        };
        let player = &mut *player;
        let events = player.triggers.update(&vehicles, pose.translation);
        player.controller.apply_trigger_events(&events);
    }
}

fn drive_players(
    mut players: Query<(&mut Player, Has<LocalPlayer>)>,
    mut physics: ResMut<Physics>,
    mut vehicles: ResMut<Vehicles>,
    rate: Res<Rate>,
    mut tick_input: ResMut<TickInput>,
    mut seat_requests: MessageWriter<SeatRequest>,
    time: Res<Time>,
) {
    let local_input = tick_input.take();
    let dt = time.delta_secs();

    for (mut player, is_local) in &mut players {
        let input = if is_local {
            local_input
        } else {
            InputSample::default()
        };
        let before = player.controller.state();
        let mut body = physics.body_mut(player.body);
        player
            .controller
            .fixed_update(body.as_mut(), &input, &mut vehicles, &rate, dt);

        if is_local && let Some(request) = seat_request(before, &player.controller) {
            debug!("player {}: {request:?}", player.controller.id());
            seat_requests.write(request);
        }
    }
}

/// Seat change the module has to hear about after one tick of the local player.
///
/// Unwinding out of a seat (hit, refused seat, vanished car) is not reported: the module
/// already freed the seat or never granted it.
fn seat_request(before: PlayerState, controller: &PlayerController) -> Option<SeatRequest> {
    match (before, controller.state()) {
        (PlayerState::Normal, PlayerState::Transition) => {
            controller.mounted_vehicle().map(SeatRequest::Enter)
        }
        (PlayerState::InCar, PlayerState::Transition) if controller.choreography().is_some() => {
            Some(SeatRequest::Exit)
        }
        _ => None,
    }
}

fn sync_transforms(physics: Res<Physics>, mut players: Query<(&Player, &mut Transform)>) {
    for (player, mut transform) in &mut players {
        if let Some(pose) = physics.body_pose(player.body) {
            *transform = to_transform(&pose);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use underdog_shared::{RapierPhysics, SimulationRate, Vehicle};

    #[test]
    fn spawn_points_do_not_overlap() {
        let points: Vec<_> = (1..=6).map(|id| spawn_point(id).translation).collect();
        for (i, a) in points.iter().enumerate() {
            assert!((a.norm() - SPAWN_RING_RADIUS).abs() < 1.0e-4);
            for b in &points[i + 1..] {
                assert!((a - b).norm() > 1.0);
            }
        }
    }

    #[test]
    fn entering_a_car_asks_for_the_seat_and_a_cancel_does_not() {
        let mut physics = RapierPhysics::new();
        let mut vehicles = VehicleRegistry::new();
        vehicles.insert(Vehicle::with_driver_door(2, Pose::default()));
        let handle = physics.spawn_player(Pose::default());
        let mut controller = PlayerController::new(1);
        controller.on_trigger_enter(2);

        let mut body = physics.body_mut(handle).unwrap();
        controller
            .request_enter(&mut body, &mut vehicles, &SimulationRate::default())
            .unwrap();
        assert_eq!(
            seat_request(PlayerState::Normal, &controller),
            Some(SeatRequest::Enter(2))
        );
        assert_eq!(seat_request(PlayerState::Transition, &controller), None);

        controller.cancel(&mut body, &mut vehicles);
        assert_eq!(controller.state(), PlayerState::Normal);
        assert_eq!(seat_request(PlayerState::Transition, &controller), None);
        assert_eq!(vehicles.get(2).unwrap().occupancy.occupant(), None);
    }
}

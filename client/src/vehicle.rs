//! Cars from the `vehicle` table: simulation registry, static colliders and visuals.
//!
//! The module decides who sits where. Row updates overwrite the local occupancy, except for
//! a seat the local player has just taken and the module has not confirmed yet.

use bevy::{platform::collections::HashMap, prelude::*};
use bevy_spacetimedb::{ReadDeleteMessage, ReadInsertMessage, ReadUpdateMessage, StdbConnection};
use spacetimedb_sdk::Identity;
use underdog_shared::{
    ColliderShapeDef, Occupancy, PlayerId, Pose, Vec3 as SimVec3, Vehicle, VehicleId,
    VehicleRegistry, WorldStaticDef, constants::GROUND_LAYER_MASK,
    physics::{RapierPhysics, StaticHandle},
};

use crate::{
    convert::to_transform,
    module_bindings::{DbConnection, PlayerTableAccess, Vehicle as VehicleRow},
    physics::{GROUND_ID, Physics},
    player::{LocalPlayer, Player},
    server::SpacetimeDB,
};

#[derive(Resource, Debug, Default, Deref, DerefMut)]
pub struct Vehicles(pub VehicleRegistry);

#[derive(Component, Debug)]
pub struct CarBody(pub VehicleId);

/// Driver door, hinged at its front edge.
#[derive(Component, Debug)]
pub struct CarDoor(pub VehicleId);

struct SpawnedCar {
    entity: Entity,
    collider: StaticHandle,
}

#[derive(Resource, Default)]
struct VehicleEntities(HashMap<VehicleId, SpawnedCar>);

#[derive(Resource)]
struct CarAssets {
    body: Handle<Mesh>,
    door: Handle<Mesh>,
    paint: Handle<StandardMaterial>,
    door_paint: Handle<StandardMaterial>,
}

const BODY_HALF_EXTENTS: Vec3 = Vec3::new(0.9, 0.6, 2.0);
/// Front edge of the driver door, vehicle-local. The panel extends backwards from it.
const DOOR_HINGE: Vec3 = Vec3::new(-0.9, 0.6, 1.0);
const DOOR_OPEN_YAW: f32 = -1.1;
const DOOR_SWING_RATE: f32 = 12.0;

pub(super) fn plugin(app: &mut App) {
    app.init_resource::<Vehicles>();
    app.init_resource::<VehicleEntities>();
    app.add_systems(Startup, load_assets);
    app.add_systems(
        Update,
        (
            on_vehicle_inserted,
            on_vehicle_updated,
            on_vehicle_deleted,
            sync_bodies,
            swing_doors,
        ),
    );
}

fn load_assets(
    mut commands: Commands,
    mut meshes: ResMut<Assets<Mesh>>,
    mut materials: ResMut<Assets<StandardMaterial>>,
) {
    commands.insert_resource(CarAssets {
        body: meshes.add(Cuboid::from_size(BODY_HALF_EXTENTS * 2.0)),
        door: meshes.add(Cuboid::new(0.08, 0.7, 1.1)),
        paint: materials.add(StandardMaterial {
            base_color: Color::srgb(0.72, 0.12, 0.1),
            perceptual_roughness: 0.4,
            ..default()
        }),
        door_paint: materials.add(Color::srgb(0.55, 0.08, 0.07)),
    });
}

/// Car body collider, standing on the vehicle's root pose.
fn body_collider(vehicle: &Vehicle) -> WorldStaticDef {
    WorldStaticDef {
        id: GROUND_ID + 100 + vehicle.id,
        translation: vehicle.pose.translation + SimVec3::new(0.0, BODY_HALF_EXTENTS.y, 0.0),
        rotation: vehicle.pose.rotation,
        shape: ColliderShapeDef::Cuboid {
            half_extents: SimVec3::new(
                BODY_HALF_EXTENTS.x,
                BODY_HALF_EXTENTS.y,
                BODY_HALF_EXTENTS.z,
            ),
        },
        layers: GROUND_LAYER_MASK,
    }
}

fn occupant_id(stdb: &StdbConnection<DbConnection>, occupant: Option<Identity>) -> Option<PlayerId> {
    let identity = occupant?;
    stdb.db().player().identity().find(&identity).map(|row| row.id)
}

/// Take the module's occupant unless the local player holds a seat it has not heard back
/// about yet.
fn reconcile_occupant(vehicle: &mut Vehicle, authority: Option<PlayerId>, local_pending: Option<PlayerId>) {
    let local = vehicle.occupancy.occupant();
    if authority.is_none() && local.is_some() && local == local_pending {
        return;
    }
    if local != authority {
        debug!(
            "vehicle {}: occupant {local:?} -> {authority:?}",
            vehicle.id
        );
        vehicle.occupancy = Occupancy::new(authority);
    }
}

/// The local player, if it is in the middle of taking or holding a seat in `vehicle`.
fn local_pending(local: &Query<&Player, With<LocalPlayer>>, vehicle: VehicleId) -> Option<PlayerId> {
    let player = local.single().ok()?;
    (player.controller.mounted_vehicle() == Some(vehicle)).then(|| player.controller.id())
}

fn on_vehicle_inserted(
    mut msgs: ReadInsertMessage<VehicleRow>,
    mut commands: Commands,
    mut vehicles: ResMut<Vehicles>,
    mut entities: ResMut<VehicleEntities>,
    mut physics: ResMut<Physics>,
    assets: Res<CarAssets>,
    stdb: SpacetimeDB,
) {
    for msg in msgs.read() {
        let row = &msg.row;
        if entities.0.contains_key(&row.id) {
            continue;
        }
        let mut vehicle = row.to_vehicle();
        vehicle.occupancy = Occupancy::new(occupant_id(&stdb, row.occupant));

        let collider = physics.insert_static(&body_collider(&vehicle));
        let entity = spawn_car(&mut commands, &assets, &vehicle);
        entities.0.insert(row.id, SpawnedCar { entity, collider });

        info!("spawned vehicle {}", row.id);
        vehicles.insert(vehicle);
    }
}

fn on_vehicle_updated(
    mut msgs: ReadUpdateMessage<VehicleRow>,
    mut vehicles: ResMut<Vehicles>,
    mut entities: ResMut<VehicleEntities>,
    mut physics: ResMut<Physics>,
    local: Query<&Player, With<LocalPlayer>>,
    stdb: SpacetimeDB,
) {
    for msg in msgs.read() {
        let row = &msg.new;
        let Some(vehicle) = vehicles.get_mut(row.id) else {
            debug!("update for unknown vehicle {}", row.id);
            continue;
        };

        let pose = row.root_pose();
        if pose != vehicle.pose {
            vehicle.pose = pose;
            if let Some(spawned) = entities.0.get_mut(&row.id) {
                move_collider(&mut physics, &mut spawned.collider, vehicle);
            }
        }

        let authority = occupant_id(&stdb, row.occupant);
        reconcile_occupant(vehicle, authority, local_pending(&local, row.id));
    }
}

fn move_collider(
    physics: &mut RapierPhysics,
    collider: &mut StaticHandle,
    vehicle: &Vehicle,
) {
    physics.remove_static(*collider);
    *collider = physics.insert_static(&body_collider(vehicle));
}

fn on_vehicle_deleted(
    mut msgs: ReadDeleteMessage<VehicleRow>,
    mut commands: Commands,
    mut vehicles: ResMut<Vehicles>,
    mut entities: ResMut<VehicleEntities>,
    mut physics: ResMut<Physics>,
) {
    for msg in msgs.read() {
        vehicles.remove(msg.row.id);
        let Some(spawned) = entities.0.remove(&msg.row.id) else {
            continue;
        };
        physics.remove_static(spawned.collider);
        commands.entity(spawned.entity).despawn();
        info!("removed vehicle {}", msg.row.id);
    }
}

fn spawn_car(commands: &mut Commands, assets: &CarAssets, vehicle: &Vehicle) -> Entity {
    let id = vehicle.id;
    commands
        .spawn((
            Name::new(format!("Car {id}")),
            CarBody(id),
            to_transform(&vehicle.pose),
            Visibility::default(),
            children![
                (
                    Mesh3d(assets.body.clone()),
                    MeshMaterial3d(assets.paint.clone()),
                    Transform::from_xyz(0.0, BODY_HALF_EXTENTS.y, 0.0),
                ),
                (
                    CarDoor(id),
                    Transform::from_translation(DOOR_HINGE),
                    Visibility::default(),
                    children![(
                        Mesh3d(assets.door.clone()),
                        MeshMaterial3d(assets.door_paint.clone()),
                        Transform::from_xyz(-0.05, 0.0, -0.55),
                    )],
                ),
            ],
        ))
        .id()
}

fn sync_bodies(vehicles: Res<Vehicles>, mut bodies: Query<(&CarBody, &mut Transform)>) {
    for (car, mut transform) in &mut bodies {
        if let Some(vehicle) = vehicles.get(car.0) {
            *transform = to_transform(&vehicle.pose);
        }
    }
}

/// Drives the `Open` signal into the door's hinge rotation.
fn swing_doors(
    vehicles: Res<Vehicles>,
    mut doors: Query<(&CarDoor, &mut Transform)>,
    time: Res<Time>,
) {
    for (door, mut transform) in &mut doors {
        let open = vehicles.get(door.0).is_some_and(|v| v.door_open);
        let target = Quat::from_rotation_y(if open { DOOR_OPEN_YAW } else { 0.0 });
        transform
            .rotation
            .smooth_nudge(&target, DOOR_SWING_RATE, time.delta_secs());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car() -> Vehicle {
        Vehicle::with_driver_door(1, Pose::default())
    }

    #[test]
    fn authority_occupant_replaces_the_local_one() {
        let mut vehicle = car();
        reconcile_occupant(&mut vehicle, Some(8), None);
        assert_eq!(vehicle.occupancy.occupant(), Some(8));

        reconcile_occupant(&mut vehicle, None, None);
        assert_eq!(vehicle.occupancy.occupant(), None);
    }

    #[test]
    fn unconfirmed_local_seat_survives_a_stale_update() {
        let mut vehicle = car();
        vehicle.occupancy.try_occupy(3).unwrap();

        reconcile_occupant(&mut vehicle, None, Some(3));
        assert_eq!(vehicle.occupancy.occupant(), Some(3));

        reconcile_occupant(&mut vehicle, Some(5), Some(3));
        assert_eq!(vehicle.occupancy.occupant(), Some(5));
    }

    #[test]
    fn body_collider_sits_on_the_root_pose() {
        let vehicle = Vehicle::with_driver_door(2, Pose::from_yaw(SimVec3::new(4.0, 0.0, 1.0), 0.3));
        let def = body_collider(&vehicle);
        assert_eq!(def.translation, SimVec3::new(4.0, BODY_HALF_EXTENTS.y, 1.0));
        assert!(def.id > GROUND_ID);
    }
}

//! Vehicles as seen by the player controller.
//!
//! A vehicle owns its occupancy. Players never hold a vehicle strongly: they cache a
//! [`VehicleId`] and resolve it against the [`VehicleRegistry`] whenever they need the
//! vehicle, so a vehicle can disappear at any time without leaving dangling state behind.
//!
//! Occupancy is a compare-and-set cell. Two players racing for the same seat are arbitrated
//! by whichever `try_occupy` runs first; the loser gets [`OccupancyError::Occupied`].

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::{
    constants::{DRIVER_ENTER_OFFSET, DRIVER_SEAT_OFFSET, VEHICLE_TRIGGER_RADIUS},
    math::{Pose, Quat, Vec3},
};

pub type VehicleId = u32;
pub type PlayerId = u64;

/// Coarse occupancy state exported to gameplay and animation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum VehicleState {
    #[default]
    Free,
    Occupied,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum OccupancyError {
    #[error("vehicle is already occupied")]
    Occupied,
    #[error("vehicle is not occupied")]
    NotOccupied,
    #[error("vehicle is occupied by someone else")]
    NotOccupant,
}

/// Compare-and-set occupancy cell.
///
/// Generic over the occupant key so the authoritative server can store its own identity
/// type while local peers use [`PlayerId`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Occupancy<O> {
    occupant: Option<O>,
}

impl<O> Default for Occupancy<O> {
    fn default() -> Self {
        Self { occupant: None }
    }
}

impl<O: Copy + Eq> Occupancy<O> {
    pub fn new(occupant: Option<O>) -> Self {
        Self { occupant }
    }

    pub fn occupant(&self) -> Option<O> {
        self.occupant
    }

    pub fn state(&self) -> VehicleState {
        match self.occupant {
            Some(_) => VehicleState::Occupied,
            None => VehicleState::Free,
        }
    }

    /// `FREE -> OCCUPIED(who)`. Fails if anyone already holds the vehicle, including `who`.
    pub fn try_occupy(&mut self, who: O) -> Result<(), OccupancyError> {
        if self.occupant.is_some() {
            return Err(OccupancyError::Occupied);
        }
        self.occupant = Some(who);
        Ok(())
    }

    /// `OCCUPIED(who) -> FREE`. Only the current occupant may release.
    pub fn release(&mut self, who: O) -> Result<(), OccupancyError> {
        match self.occupant {
            None => Err(OccupancyError::NotOccupied),
            Some(current) if current != who => Err(OccupancyError::NotOccupant),
            Some(_) => {
                self.occupant = None;
                Ok(())
            }
        }
    }
}

/// Spherical, non-colliding proximity region.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TriggerVolume {
    /// Center relative to the vehicle's root pose.
    pub local_center: Vec3,
    pub radius: f32,
}

impl Default for TriggerVolume {
    fn default() -> Self {
        Self {
            local_center: Vec3::zeros(),
            radius: VEHICLE_TRIGGER_RADIUS,
        }
    }
}

#[derive(Clone, Debug)]
pub struct Vehicle {
    pub id: VehicleId,
    /// Root pose of the vehicle; anchors are expressed relative to it.
    pub pose: Pose,
    /// Where a player stands to get in (vehicle-local).
    pub enter_anchor: Pose,
    /// Where a seated player sits (vehicle-local).
    pub seat_anchor: Pose,
    pub trigger: TriggerVolume,
    pub occupancy: Occupancy<PlayerId>,
    /// Animation signal: driver door open.
    pub door_open: bool,
}

impl Vehicle {
    pub fn new(id: VehicleId, pose: Pose, enter_anchor: Pose, seat_anchor: Pose) -> Self {
        Self {
            id,
            pose,
            enter_anchor,
            seat_anchor,
            trigger: TriggerVolume::default(),
            occupancy: Occupancy::default(),
            door_open: false,
        }
    }

    /// Standard car layout: driver door on the left (-X), both anchors facing forward.
    pub fn with_driver_door(id: VehicleId, pose: Pose) -> Self {
        Self::new(
            id,
            pose,
            Pose::new(Vec3::from(DRIVER_ENTER_OFFSET), Quat::identity()),
            Pose::new(Vec3::from(DRIVER_SEAT_OFFSET), Quat::identity()),
        )
    }

    pub fn state(&self) -> VehicleState {
        self.occupancy.state()
    }

    /// World-space enter anchor.
    pub fn enter_anchor_pose(&self) -> Pose {
        compose(&self.pose, &self.enter_anchor)
    }

    /// World-space seat anchor.
    pub fn seat_anchor_pose(&self) -> Pose {
        compose(&self.pose, &self.seat_anchor)
    }

    pub fn trigger_contains(&self, point: Vec3) -> bool {
        let center = self.pose.translation + self.pose.rotation * self.trigger.local_center;
        (point - center).norm_squared() <= self.trigger.radius * self.trigger.radius
    }
}

fn compose(parent: &Pose, local: &Pose) -> Pose {
    Pose::new(
        parent.translation + parent.rotation * local.translation,
        parent.rotation * local.rotation,
    )
}

/// Every vehicle currently alive in the simulation.
#[derive(Clone, Debug, Default)]
pub struct VehicleRegistry {
    vehicles: BTreeMap<VehicleId, Vehicle>,
}

impl VehicleRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, vehicle: Vehicle) {
        self.vehicles.insert(vehicle.id, vehicle);
    }

    /// Despawn a vehicle. Players referencing it observe the loss on their next tick.
    pub fn remove(&mut self, id: VehicleId) -> Option<Vehicle> {
        self.vehicles.remove(&id)
    }

    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.get(&id)
    }

    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.get_mut(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Vehicle> {
        self.vehicles.values()
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }
}

/// Non-owning cache of the vehicle whose trigger the player entered first.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NearestVehicle(Option<VehicleId>);

impl NearestVehicle {
    pub fn id(&self) -> Option<VehicleId> {
        self.0
    }

    /// Trigger entered. The first vehicle detected wins until it is cleared.
    pub fn on_trigger_enter(&mut self, id: VehicleId) {
        if self.0.is_none() {
            self.0 = Some(id);
        }
    }

    /// Trigger exited. Only the cached vehicle can clear the cache.
    pub fn on_trigger_exit(&mut self, id: VehicleId) {
        if self.0 == Some(id) {
            self.0 = None;
        }
    }

    pub fn clear(&mut self) {
        self.0 = None;
    }

    /// Resolve the handle, returning the vehicle only if it still exists and `position` is
    /// still inside its trigger volume.
    pub fn resolve<'a>(&self, vehicles: &'a VehicleRegistry, position: Vec3) -> Option<&'a Vehicle> {
        let vehicle = vehicles.get(self.0?)?;
        vehicle.trigger_contains(position).then_some(vehicle)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TriggerEvent {
    Enter(VehicleId),
    Exit(VehicleId),
}

/// Derives trigger enter/exit events from per-tick positions.
///
/// Engines that report trigger events natively can skip this and call the
/// `NearestVehicle` hooks directly.
#[derive(Clone, Debug, Default)]
pub struct TriggerTracker {
    inside: BTreeSet<VehicleId>,
}

impl TriggerTracker {
    pub fn update(&mut self, vehicles: &VehicleRegistry, position: Vec3) -> Vec<TriggerEvent> {
        let mut events = Vec::new();

        // Exits first (including vehicles that no longer exist) so a hand-over between two
        // overlapping triggers frees the cache before the next enter.
        self.inside.retain(|id| {
            let still_inside = vehicles
                .get(*id)
                .is_some_and(|v| v.trigger_contains(position));
            if !still_inside {
                events.push(TriggerEvent::Exit(*id));
            }
            still_inside
        });

        for vehicle in vehicles.iter() {
            if vehicle.trigger_contains(position) && self.inside.insert(vehicle.id) {
                events.push(TriggerEvent::Enter(vehicle.id));
            }
        }

        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn car(id: VehicleId, x: f32) -> Vehicle {
        Vehicle::new(
            id,
            Pose::from_yaw(Vec3::new(x, 0.0, 0.0), 0.0),
            Pose::from_yaw(Vec3::new(-1.5, 0.0, 0.0), 0.0),
            Pose::from_yaw(Vec3::new(-0.4, 0.5, 0.2), 0.0),
        )
    }

    #[test]
    fn occupy_is_compare_and_set() {
        let mut occupancy = Occupancy::<PlayerId>::default();
        assert_eq!(occupancy.state(), VehicleState::Free);

        assert_eq!(occupancy.try_occupy(1), Ok(()));
        assert_eq!(occupancy.try_occupy(2), Err(OccupancyError::Occupied));
        assert_eq!(occupancy.try_occupy(1), Err(OccupancyError::Occupied));
        assert_eq!(occupancy.occupant(), Some(1));
        assert_eq!(occupancy.state(), VehicleState::Occupied);
    }

    #[test]
    fn only_the_occupant_can_release() {
        let mut occupancy = Occupancy::<PlayerId>::default();
        assert_eq!(occupancy.release(1), Err(OccupancyError::NotOccupied));

        occupancy.try_occupy(1).unwrap();
        assert_eq!(occupancy.release(2), Err(OccupancyError::NotOccupant));
        assert_eq!(occupancy.state(), VehicleState::Occupied);

        assert_eq!(occupancy.release(1), Ok(()));
        assert_eq!(occupancy.state(), VehicleState::Free);
    }

    #[test]
    fn driver_door_layout_puts_the_anchor_inside_the_trigger() {
        let vehicle = Vehicle::with_driver_door(1, Pose::from_yaw(Vec3::new(4.0, 0.0, 0.0), 1.0));
        assert!(vehicle.trigger_contains(vehicle.enter_anchor_pose().translation));
        assert_eq!(vehicle.state(), VehicleState::Free);
    }

    #[test]
    fn anchors_follow_the_vehicle_pose() {
        let mut vehicle = car(1, 10.0);
        assert!((vehicle.enter_anchor_pose().translation - Vec3::new(8.5, 0.0, 0.0)).norm() < 1e-6);

        vehicle.pose = Pose::from_yaw(Vec3::new(0.0, 0.0, 0.0), std::f32::consts::PI);
        let seat = vehicle.seat_anchor_pose().translation;
        assert!((seat - Vec3::new(0.4, 0.5, -0.2)).norm() < 1e-5);
    }

    #[test]
    fn first_vehicle_detected_wins_until_cleared() {
        let mut nearest = NearestVehicle::default();
        nearest.on_trigger_enter(1);
        nearest.on_trigger_enter(2);
        assert_eq!(nearest.id(), Some(1));

        nearest.on_trigger_exit(2);
        assert_eq!(nearest.id(), Some(1));

        nearest.on_trigger_exit(1);
        assert_eq!(nearest.id(), None);
    }

    #[test]
    fn resolve_checks_existence_and_volume() {
        let mut vehicles = VehicleRegistry::new();
        vehicles.insert(car(1, 0.0));

        let mut nearest = NearestVehicle::default();
        nearest.on_trigger_enter(1);

        assert!(nearest.resolve(&vehicles, Vec3::new(1.0, 0.0, 0.0)).is_some());
        assert!(nearest.resolve(&vehicles, Vec3::new(50.0, 0.0, 0.0)).is_none());

        vehicles.remove(1);
        assert!(nearest.resolve(&vehicles, Vec3::new(1.0, 0.0, 0.0)).is_none());
    }

    #[test]
    fn tracker_reports_one_enter_and_one_exit_per_pass() {
        let mut vehicles = VehicleRegistry::new();
        vehicles.insert(car(7, 0.0));
        let mut tracker = TriggerTracker::default();

        let mut events = Vec::new();
        for step in -10..=10 {
            events.extend(tracker.update(&vehicles, Vec3::new(step as f32, 0.0, 0.0)));
        }

        assert_eq!(events, vec![TriggerEvent::Enter(7), TriggerEvent::Exit(7)]);
    }

    #[test]
    fn tracker_reports_exit_when_vehicle_vanishes() {
        let mut vehicles = VehicleRegistry::new();
        vehicles.insert(car(3, 0.0));
        let mut tracker = TriggerTracker::default();

        assert_eq!(
            tracker.update(&vehicles, Vec3::zeros()),
            vec![TriggerEvent::Enter(3)]
        );
        vehicles.remove(3);
        assert_eq!(
            tracker.update(&vehicles, Vec3::zeros()),
            vec![TriggerEvent::Exit(3)]
        );
    }
}

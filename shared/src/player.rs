//! The player controller: one state machine per player entity.
//!
//! Per fixed tick the controller reads an [`InputSample`] and, depending on [`PlayerState`],
//! hands the body to exactly one pose writer:
//! - `Normal`: [`step_locomotion`] (velocity, facing, grounded, jump).
//! - `Transition`: the active [`Choreography`].
//! - `InCar`: the mounted vehicle's seat anchor.
//!
//! Requests that fail their guard change nothing and return a [`TransitionRejected`] reason.
//! Callers are free to ignore it; a player trying to enter an occupied car simply stays put.
//!
//! Every state write goes through one checked helper, so the observed sequence of states
//! only ever follows edges of [`PlayerState::can_transition_to`].
//!
//! Cancellation
//! - If the vehicle disappears, the seat is released and gravity and the main collider are
//!   restored. From `Transition` the player returns to `Normal` at once. From `InCar` it
//!   unwinds through `Transition` (with no sequence) and reaches `Normal` on the next tick.
//! - [`PlayerController::despawn`], [`PlayerController::cancel`] and a hit cancel the same
//!   way.
//! - The simulation-rate guard lives inside the choreography, so every path that drops the
//!   choreography also restores the rate.

use thiserror::Error;

use crate::{
    animation::AnimationSignals,
    body::PhysicsBody,
    choreography::{Choreography, ChoreographyKind, ChoreographyTuning},
    input::InputSample,
    locomotion::{MovementTuning, step_locomotion},
    constants::RAGDOLL_KNOCKBACK_SPEED,
    math::{Quat, Vec3},
    state::PlayerState,
    time_scale::SimulationRate,
    vehicle::{
        NearestVehicle, OccupancyError, PlayerId, TriggerEvent, VehicleId, VehicleRegistry,
    },
};

/// Which of the two mutually exclusive bodies is active.
///
/// The move to `Ragdoll` is one-way for the lifetime of the player.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Representation {
    /// Animated body driven by the controller. `controller_attached` is false once the input
    /// source has been detached.
    Animated { controller_attached: bool },
    /// Passive physically simulated ragdoll. Takes no input.
    Ragdoll,
}

#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum TransitionRejected {
    #[error("player is dead")]
    Dead,
    #[error("player is {current:?}, request needs {required:?}")]
    WrongState {
        current: PlayerState,
        required: PlayerState,
    },
    #[error("no vehicle in range")]
    NoVehicleInRange,
    #[error("vehicle {0} no longer exists")]
    VehicleGone(VehicleId),
    #[error(transparent)]
    Occupancy(#[from] OccupancyError),
}

#[derive(Debug)]
pub struct PlayerController {
    id: PlayerId,
    state: PlayerState,
    representation: Representation,
    /// Retained look rotation; persists while look input is idle.
    facing: Quat,
    grounded: bool,
    nearest: NearestVehicle,
    /// Vehicle this player holds a seat in (during `Transition` and `InCar`).
    mounted: Option<VehicleId>,
    choreography: Option<Choreography>,
    signals: AnimationSignals,
    movement: MovementTuning,
    sequence_tuning: ChoreographyTuning,
}

impl PlayerController {
    pub fn new(id: PlayerId) -> Self {
        Self::with_tuning(id, MovementTuning::default(), ChoreographyTuning::default())
    }

    pub fn with_tuning(
        id: PlayerId,
        movement: MovementTuning,
        sequence_tuning: ChoreographyTuning,
    ) -> Self {
        Self {
            id,
            state: PlayerState::Normal,
            representation: Representation::Animated {
                controller_attached: true,
            },
            facing: Quat::identity(),
            grounded: true,
            nearest: NearestVehicle::default(),
            mounted: None,
            choreography: None,
            signals: AnimationSignals::default(),
            movement,
            sequence_tuning,
        }
    }

    pub fn id(&self) -> PlayerId {
        self.id
    }

    pub fn state(&self) -> PlayerState {
        self.state
    }

    pub fn representation(&self) -> Representation {
        self.representation
    }

    pub fn is_ragdoll(&self) -> bool {
        self.representation == Representation::Ragdoll
    }

    pub fn controller_attached(&self) -> bool {
        matches!(
            self.representation,
            Representation::Animated {
                controller_attached: true
            }
        )
    }

    pub fn facing(&self) -> Quat {
        self.facing
    }

    pub fn grounded(&self) -> bool {
        self.grounded
    }

    pub fn nearest_vehicle(&self) -> Option<VehicleId> {
        self.nearest.id()
    }

    pub fn mounted_vehicle(&self) -> Option<VehicleId> {
        self.mounted
    }

    pub fn choreography(&self) -> Option<&Choreography> {
        self.choreography.as_ref()
    }

    pub fn signals(&self) -> &AnimationSignals {
        &self.signals
    }

    pub fn signals_mut(&mut self) -> &mut AnimationSignals {
        &mut self.signals
    }

    pub fn movement(&self) -> &MovementTuning {
        &self.movement
    }

    pub fn on_trigger_enter(&mut self, vehicle: VehicleId) {
        self.nearest.on_trigger_enter(vehicle);
    }

    pub fn on_trigger_exit(&mut self, vehicle: VehicleId) {
        self.nearest.on_trigger_exit(vehicle);
    }

    pub fn apply_trigger_events(&mut self, events: &[TriggerEvent]) {
        for event in events {
            match *event {
                TriggerEvent::Enter(id) => self.on_trigger_enter(id),
                TriggerEvent::Exit(id) => self.on_trigger_exit(id),
            }
        }
    }

    /// Stop reading input. The animated body stays active.
    pub fn detach_controller(&mut self) {
        if let Representation::Animated {
            controller_attached,
        } = &mut self.representation
        {
            *controller_attached = false;
        }
    }

    /// Run one fixed simulation tick.
    ///
    /// A missing body (e.g. not spawned yet) skips the tick. Ragdolls are not driven, but
    /// still finish unwinding out of a cancelled seat.
    pub fn fixed_update<B: PhysicsBody + ?Sized>(
        &mut self,
        body: Option<&mut B>,
        input: &InputSample,
        vehicles: &mut VehicleRegistry,
        rate: &SimulationRate,
        dt_s: f32,
    ) {
        if self.is_ragdoll() {
            self.finish_unwind();
            return;
        }
        let Some(body) = body else {
            log::trace!("player {}: no physics body, skipping tick", self.id);
            return;
        };

        let input = if self.controller_attached() {
            *input
        } else {
            InputSample::default()
        };

        if input.interact {
            if let Err(reason) = self.interact(body, vehicles, rate) {
                log::debug!("player {}: interact ignored: {reason}", self.id);
            }
        }

        match self.state {
            state if state.accepts_locomotion() => {
                let out = step_locomotion(body, &self.movement, &input, &mut self.facing);
                self.grounded = out.grounded;
                self.signals.grounded = out.grounded;
            }
            PlayerState::InCar => self.hold_seat(body, vehicles),
            _ => self.step_choreography(body, vehicles, dt_s),
        }
    }

    /// Render-rate refresh of the exported run ratios.
    pub fn update_animation<B: PhysicsBody + ?Sized>(&mut self, body: Option<&B>) {
        if self.is_ragdoll() {
            return;
        }
        let Some(body) = body else {
            return;
        };
        self.signals
            .set_run_from_velocity(body.rotation(), body.linear_velocity(), self.movement.speed);
    }

    /// Enter the nearest vehicle if in `Normal` and it is free.
    pub fn request_enter<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &mut B,
        vehicles: &mut VehicleRegistry,
        rate: &SimulationRate,
    ) -> Result<(), TransitionRejected> {
        self.require(PlayerState::Normal)?;

        let vehicle_id = self
            .nearest
            .resolve(vehicles, body.position())
            .map(|v| v.id)
            .ok_or(TransitionRejected::NoVehicleInRange)?;
        let vehicle = vehicles
            .get_mut(vehicle_id)
            .ok_or(TransitionRejected::VehicleGone(vehicle_id))?;

        vehicle.occupancy.try_occupy(self.id)?;

        self.choreography = Some(Choreography::enter(vehicle, self.sequence_tuning, rate));
        self.mounted = Some(vehicle_id);
        self.set_state(PlayerState::Transition);

        self.signals.in_car = true;
        self.signals.fire_enter_car();
        body.set_gravity_enabled(false);
        body.set_collider_enabled(false);
        body.set_linear_velocity(Vec3::zeros());

        log::debug!("player {}: entering vehicle {vehicle_id}", self.id);
        Ok(())
    }

    /// Leave the mounted vehicle if seated and still its occupant.
    pub fn request_exit<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &mut B,
        vehicles: &mut VehicleRegistry,
    ) -> Result<(), TransitionRejected> {
        self.require(PlayerState::InCar)?;

        let vehicle_id = self.mounted.ok_or(TransitionRejected::NoVehicleInRange)?;
        let vehicle = vehicles
            .get_mut(vehicle_id)
            .ok_or(TransitionRejected::VehicleGone(vehicle_id))?;

        vehicle.occupancy.release(self.id)?;

        self.choreography = Some(Choreography::exit(vehicle, self.sequence_tuning));
        self.set_state(PlayerState::Transition);
        self.signals.in_car = false;
        body.set_linear_velocity(Vec3::zeros());

        log::debug!("player {}: exiting vehicle {vehicle_id}", self.id);
        Ok(())
    }

    /// Single "use vehicle" action: enter when on foot, exit when seated.
    pub fn interact<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &mut B,
        vehicles: &mut VehicleRegistry,
        rate: &SimulationRate,
    ) -> Result<(), TransitionRejected> {
        match self.state {
            PlayerState::Normal => self.request_enter(body, vehicles, rate),
            PlayerState::InCar => self.request_exit(body, vehicles),
            PlayerState::Transition => Err(TransitionRejected::WrongState {
                current: PlayerState::Transition,
                required: PlayerState::Normal,
            }),
        }
    }

    /// Local half of the hit RPC: hand the body to the physics engine and detach input.
    ///
    /// Any running sequence is cancelled and a held seat is released first. The ragdoll
    /// keeps falling under gravity and is pushed along `direction`. Returns `false` when the
    /// player was already a ragdoll, in which case nothing changes.
    pub fn apply_hit<B: PhysicsBody + ?Sized>(
        &mut self,
        body: Option<&mut B>,
        vehicles: &mut VehicleRegistry,
        direction: Vec3,
    ) -> bool {
        if self.is_ragdoll() {
            log::trace!("player {}: already a ragdoll", self.id);
            return false;
        }

        self.cancel_sequence(vehicles);
        if let Some(body) = body {
            body.activate_ragdoll(direction * RAGDOLL_KNOCKBACK_SPEED);
        }

        self.representation = Representation::Ragdoll;
        self.grounded = false;
        self.signals = AnimationSignals::default();

        log::info!(
            "player {}: ragdoll (hit from [{:.2}, {:.2}, {:.2}])",
            self.id,
            direction.x,
            direction.y,
            direction.z
        );
        true
    }

    /// Abandon whatever seat or sequence the player holds, e.g. after the authority refused
    /// the seat. Gravity and the main collider come back; a seated player unwinds through
    /// `Transition` on the next tick.
    pub fn cancel<B: PhysicsBody + ?Sized>(&mut self, body: &mut B, vehicles: &mut VehicleRegistry) {
        if self.is_ragdoll() {
            return;
        }
        if self.cancel_sequence(vehicles) {
            restore_body(body);
            log::debug!("player {}: sequence cancelled", self.id);
        }
    }

    /// Tear the player down, leaving gravity, collider, rate and seat consistent.
    pub fn despawn<B: PhysicsBody + ?Sized>(
        &mut self,
        body: Option<&mut B>,
        vehicles: &mut VehicleRegistry,
    ) {
        let was_busy = self.cancel_sequence(vehicles);
        if let Some(body) = body {
            if was_busy && !self.is_ragdoll() {
                restore_body(body);
            }
        }
        log::debug!("player {}: despawned", self.id);
    }

    fn require(&self, required: PlayerState) -> Result<(), TransitionRejected> {
        if self.is_ragdoll() {
            return Err(TransitionRejected::Dead);
        }
        if self.state != required {
            return Err(TransitionRejected::WrongState {
                current: self.state,
                required,
            });
        }
        Ok(())
    }

    fn step_choreography<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &mut B,
        vehicles: &mut VehicleRegistry,
        dt_s: f32,
    ) {
        let Some(sequence) = self.choreography.as_mut() else {
            restore_body(body);
            self.finish_unwind();
            return;
        };
        let Some(vehicle) = vehicles.get_mut(sequence.vehicle_id()) else {
            log::warn!(
                "player {}: vehicle {} vanished mid-sequence",
                self.id,
                sequence.vehicle_id()
            );
            self.abort_sequence(body, vehicles);
            return;
        };

        let frame = sequence.advance(vehicle, dt_s);
        vehicle.door_open = frame.door_open;
        body.set_pose(frame.pose);
        body.set_linear_velocity(Vec3::zeros());

        if !frame.finished {
            return;
        }

        let kind = sequence.kind();
        self.choreography = None;
        match kind {
            ChoreographyKind::Enter => {
                self.set_state(PlayerState::InCar);
                log::debug!("player {}: seated", self.id);
            }
            ChoreographyKind::Exit => {
                restore_body(body);
                self.mounted = None;
                self.set_state(PlayerState::Normal);
                log::debug!("player {}: back on foot", self.id);
            }
        }
    }

    fn hold_seat<B: PhysicsBody + ?Sized>(&mut self, body: &mut B, vehicles: &mut VehicleRegistry) {
        let Some(vehicle) = self.mounted.and_then(|id| vehicles.get(id)) else {
            log::warn!("player {}: seated vehicle vanished", self.id);
            self.abort_sequence(body, vehicles);
            return;
        };
        body.set_pose(vehicle.seat_anchor_pose());
        body.set_linear_velocity(Vec3::zeros());
    }

    fn abort_sequence<B: PhysicsBody + ?Sized>(
        &mut self,
        body: &mut B,
        vehicles: &mut VehicleRegistry,
    ) {
        self.cancel_sequence(vehicles);
        restore_body(body);
    }

    /// Drop any sequence (and its rate guard) and release a held seat.
    ///
    /// `Transition` returns to `Normal`. `InCar` moves to `Transition` with no sequence,
    /// which [`Self::finish_unwind`] completes on the next tick. Returns whether there was
    /// anything to cancel.
    fn cancel_sequence(&mut self, vehicles: &mut VehicleRegistry) -> bool {
        let had_sequence = self.choreography.take().is_some();
        let mounted = self.mounted.take();

        if let Some(vehicle) = mounted.and_then(|id| vehicles.get_mut(id)) {
            match vehicle.occupancy.release(self.id) {
                Ok(()) => log::debug!("player {}: released vehicle {}", self.id, vehicle.id),
                // An exit already freed the seat, or the authority handed it to someone else.
                Err(OccupancyError::NotOccupied | OccupancyError::NotOccupant) => {}
                Err(err) => log::debug!(
                    "player {}: seat release on vehicle {} failed: {err}",
                    self.id,
                    vehicle.id
                ),
            }
            vehicle.door_open = false;
        }

        let busy = had_sequence || mounted.is_some() || self.state != PlayerState::Normal;
        match self.state {
            PlayerState::InCar => {
                self.set_state(PlayerState::Transition);
            }
            PlayerState::Transition => {
                self.set_state(PlayerState::Normal);
            }
            PlayerState::Normal => {}
        }
        self.signals.in_car = false;
        busy
    }

    /// Second half of a cancel from `InCar`.
    fn finish_unwind(&mut self) {
        if self.state == PlayerState::Transition && self.choreography.is_none() {
            self.set_state(PlayerState::Normal);
            log::debug!("player {}: back on foot", self.id);
        }
    }

    /// The only place `state` is written. Edges outside the state graph are refused.
    fn set_state(&mut self, next: PlayerState) -> bool {
        if !self.state.can_transition_to(next) {
            log::error!(
                "player {}: refused state change {:?} -> {:?}",
                self.id,
                self.state,
                next
            );
            return false;
        }
        self.state = next;
        true
    }
}

fn restore_body<B: PhysicsBody + ?Sized>(body: &mut B) {
    body.set_gravity_enabled(true);
    body.set_collider_enabled(true);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        constants::{CHOREOGRAPHY_DURATION_S, FIXED_DT_S, SPEED},
        math::Pose,
        test_support::ScriptedBody,
        vehicle::{Vehicle, VehicleState},
    };

    const CAR: VehicleId = 9;

    fn ticks_per_sequence() -> usize {
        (CHOREOGRAPHY_DURATION_S / FIXED_DT_S).round() as usize
    }

    fn world() -> VehicleRegistry {
        let mut vehicles = VehicleRegistry::new();
        vehicles.insert(Vehicle::new(
            CAR,
            Pose::from_yaw(Vec3::new(0.0, 0.0, 0.0), 0.0),
            Pose::from_yaw(Vec3::new(-1.5, 0.0, 0.0), 0.0),
            Pose::from_yaw(Vec3::new(-0.4, 0.6, 0.2), 0.0),
        ));
        vehicles
    }

    fn player_near_car() -> (PlayerController, ScriptedBody) {
        let mut player = PlayerController::new(1);
        player.on_trigger_enter(CAR);
        (player, ScriptedBody::grounded().at(Vec3::new(-1.5, 0.0, 0.0)))
    }

    fn tick(
        player: &mut PlayerController,
        body: &mut ScriptedBody,
        vehicles: &mut VehicleRegistry,
        rate: &SimulationRate,
        input: InputSample,
    ) {
        player.fixed_update(Some(body), &input, vehicles, rate, FIXED_DT_S);
    }

    fn idle(
        player: &mut PlayerController,
        body: &mut ScriptedBody,
        vehicles: &mut VehicleRegistry,
        rate: &SimulationRate,
        ticks: usize,
    ) {
        for _ in 0..ticks {
            tick(player, body, vehicles, rate, InputSample::default());
        }
    }

    #[test]
    fn enter_reaches_in_car_after_exactly_the_sequence_length() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        assert_eq!(player.state(), PlayerState::Transition);
        assert_eq!(vehicles.get(CAR).unwrap().state(), VehicleState::Occupied);
        assert!(rate.is_overridden());
        assert!(!body.gravity && !body.collider);

        idle(&mut player, &mut body, &mut vehicles, &rate, ticks_per_sequence() - 1);
        assert_eq!(player.state(), PlayerState::Transition);

        idle(&mut player, &mut body, &mut vehicles, &rate, 1);
        assert_eq!(player.state(), PlayerState::InCar);
        assert!(!rate.is_overridden());

        let seat = vehicles.get(CAR).unwrap().seat_anchor_pose();
        assert!((body.pose.translation - seat.translation).norm() < 1.0e-5);
    }

    #[test]
    fn exit_reaches_normal_and_round_trip_restores_flags() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        idle(&mut player, &mut body, &mut vehicles, &rate, ticks_per_sequence());
        assert_eq!(player.state(), PlayerState::InCar);

        player.request_exit(&mut body, &mut vehicles).unwrap();
        assert_eq!(player.state(), PlayerState::Transition);
        assert_eq!(vehicles.get(CAR).unwrap().state(), VehicleState::Free);

        idle(&mut player, &mut body, &mut vehicles, &rate, ticks_per_sequence());
        assert_eq!(player.state(), PlayerState::Normal);
        assert!(body.gravity);
        assert!(body.collider);
        assert_eq!(rate.scale(), 1.0);
        assert_eq!(player.mounted_vehicle(), None);

        let enter = vehicles.get(CAR).unwrap().enter_anchor_pose();
        assert!((body.pose.translation - enter.translation).norm() < 1.0e-5);
    }

    #[test]
    fn entering_an_occupied_vehicle_is_a_no_op() {
        let mut vehicles = world();
        vehicles.get_mut(CAR).unwrap().occupancy.try_occupy(77).unwrap();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        let result = player.request_enter(&mut body, &mut vehicles, &rate);

        assert_eq!(
            result,
            Err(TransitionRejected::Occupancy(OccupancyError::Occupied))
        );
        assert_eq!(player.state(), PlayerState::Normal);
        assert!(body.gravity && body.collider);
        assert!(!rate.is_overridden());
    }

    #[test]
    fn exiting_on_foot_is_a_no_op() {
        let mut vehicles = world();
        let (mut player, mut body) = player_near_car();

        let result = player.request_exit(&mut body, &mut vehicles);

        assert!(matches!(
            result,
            Err(TransitionRejected::WrongState { .. })
        ));
        assert_eq!(player.state(), PlayerState::Normal);
        assert_eq!(vehicles.get(CAR).unwrap().state(), VehicleState::Free);
    }

    #[test]
    fn entering_without_a_nearby_vehicle_is_rejected() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let mut player = PlayerController::new(1);
        let mut body = ScriptedBody::grounded();

        assert_eq!(
            player.request_enter(&mut body, &mut vehicles, &rate),
            Err(TransitionRejected::NoVehicleInRange)
        );

        // A stale cache (walked out without an exit event) is rejected as well.
        player.on_trigger_enter(CAR);
        body.pose.translation = Vec3::new(40.0, 0.0, 0.0);
        assert_eq!(
            player.request_enter(&mut body, &mut vehicles, &rate),
            Err(TransitionRejected::NoVehicleInRange)
        );
    }

    #[test]
    fn same_tick_race_has_exactly_one_winner() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut first, mut first_body) = player_near_car();
        let mut second = PlayerController::new(2);
        second.on_trigger_enter(CAR);
        let mut second_body = ScriptedBody::grounded().at(Vec3::new(-1.2, 0.0, 0.3));

        let a = first.request_enter(&mut first_body, &mut vehicles, &rate);
        let b = second.request_enter(&mut second_body, &mut vehicles, &rate);

        assert!(a.is_ok());
        assert_eq!(b, Err(TransitionRejected::Occupancy(OccupancyError::Occupied)));
        assert_eq!(first.state(), PlayerState::Transition);
        assert_eq!(second.state(), PlayerState::Normal);
        assert_eq!(vehicles.get(CAR).unwrap().occupancy.occupant(), Some(1));
    }

    #[test]
    fn vehicle_vanishing_mid_enter_restores_everything() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        idle(&mut player, &mut body, &mut vehicles, &rate, 10);
        vehicles.remove(CAR);
        idle(&mut player, &mut body, &mut vehicles, &rate, 1);

        assert_eq!(player.state(), PlayerState::Normal);
        assert!(body.gravity && body.collider);
        assert_eq!(rate.scale(), 1.0);
        assert!(player.choreography().is_none());
        assert!(!player.signals().in_car);
    }

    #[test]
    fn vehicle_vanishing_while_seated_unwinds_through_transition() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        idle(&mut player, &mut body, &mut vehicles, &rate, ticks_per_sequence());
        vehicles.remove(CAR);

        idle(&mut player, &mut body, &mut vehicles, &rate, 1);
        assert_eq!(player.state(), PlayerState::Transition);
        assert!(player.choreography().is_none());
        assert!(body.gravity && body.collider);

        idle(&mut player, &mut body, &mut vehicles, &rate, 1);
        assert_eq!(player.state(), PlayerState::Normal);
        assert_eq!(player.mounted_vehicle(), None);
    }

    #[test]
    fn hit_while_seated_frees_the_seat_and_unwinds() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        idle(&mut player, &mut body, &mut vehicles, &rate, ticks_per_sequence());
        assert_eq!(player.state(), PlayerState::InCar);

        assert!(player.apply_hit(Some(&mut body), &mut vehicles, Vec3::z()));
        assert_eq!(player.state(), PlayerState::Transition);
        assert_eq!(vehicles.get(CAR).unwrap().state(), VehicleState::Free);

        idle(&mut player, &mut body, &mut vehicles, &rate, 1);
        assert_eq!(player.state(), PlayerState::Normal);
        assert!(player.is_ragdoll());
    }

    #[test]
    fn every_observed_state_change_is_an_edge() {
        fn record(trace: &mut Vec<PlayerState>, player: &PlayerController) {
            if trace.last() != Some(&player.state()) {
                trace.push(player.state());
            }
        }

        let rate = SimulationRate::default();
        let press = InputSample {
            interact: true,
            ..InputSample::default()
        };
        let mut traces = Vec::new();

        // Full round trip through the interact button.
        {
            let mut vehicles = world();
            let (mut player, mut body) = player_near_car();
            let mut trace = vec![player.state()];
            tick(&mut player, &mut body, &mut vehicles, &rate, press);
            record(&mut trace, &player);
            for _ in 0..ticks_per_sequence() {
                tick(&mut player, &mut body, &mut vehicles, &rate, InputSample::default());
                record(&mut trace, &player);
            }
            tick(&mut player, &mut body, &mut vehicles, &rate, press);
            record(&mut trace, &player);
            for _ in 0..ticks_per_sequence() {
                tick(&mut player, &mut body, &mut vehicles, &rate, InputSample::default());
                record(&mut trace, &player);
            }
            assert_eq!(player.state(), PlayerState::Normal);
            traces.push(trace);
        }

        // Seated, then the car vanishes; seated, then a hit; mid-enter cancel.
        for scenario in 0..3 {
            let mut vehicles = world();
            let (mut player, mut body) = player_near_car();
            let mut trace = vec![player.state()];
            player
                .request_enter(&mut body, &mut vehicles, &rate)
                .unwrap();
            record(&mut trace, &player);
            let ticks = if scenario == 2 { 4 } else { ticks_per_sequence() };
            for _ in 0..ticks {
                tick(&mut player, &mut body, &mut vehicles, &rate, InputSample::default());
                record(&mut trace, &player);
            }
            match scenario {
                0 => {
                    vehicles.remove(CAR);
                }
                1 => {
                    player.apply_hit(Some(&mut body), &mut vehicles, Vec3::x());
                }
                _ => player.cancel(&mut body, &mut vehicles),
            }
            record(&mut trace, &player);
            for _ in 0..3 {
                tick(&mut player, &mut body, &mut vehicles, &rate, InputSample::default());
                record(&mut trace, &player);
            }
            assert_eq!(player.state(), PlayerState::Normal, "scenario {scenario}");
            traces.push(trace);
        }

        for trace in traces {
            for pair in trace.windows(2) {
                assert!(
                    pair[0].can_transition_to(pair[1]),
                    "{:?} -> {:?} in {trace:?}",
                    pair[0],
                    pair[1]
                );
            }
        }
    }

    #[test]
    fn cancel_mid_enter_restores_the_player() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        idle(&mut player, &mut body, &mut vehicles, &rate, 4);
        player.cancel(&mut body, &mut vehicles);

        assert_eq!(player.state(), PlayerState::Normal);
        assert_eq!(vehicles.get(CAR).unwrap().state(), VehicleState::Free);
        assert!(body.gravity && body.collider);
        assert!(!rate.is_overridden());
    }

    #[test]
    fn cancel_keeps_a_seat_the_authority_gave_away() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        let car = vehicles.get_mut(CAR).unwrap();
        car.occupancy = crate::vehicle::Occupancy::new(Some(8));
        player.cancel(&mut body, &mut vehicles);

        assert_eq!(vehicles.get(CAR).unwrap().occupancy.occupant(), Some(8));
        assert_eq!(player.state(), PlayerState::Normal);
    }

    #[test]
    fn despawn_mid_enter_frees_the_seat_and_the_rate() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        idle(&mut player, &mut body, &mut vehicles, &rate, 5);
        player.despawn(Some(&mut body), &mut vehicles);

        assert_eq!(vehicles.get(CAR).unwrap().state(), VehicleState::Free);
        assert!(!vehicles.get(CAR).unwrap().door_open);
        assert_eq!(rate.scale(), 1.0);
        assert!(body.gravity && body.collider);
    }

    #[test]
    fn input_is_ignored_outside_normal() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        tick(
            &mut player,
            &mut body,
            &mut vehicles,
            &rate,
            InputSample::new(1.0, 0.0, 1.0, 1.0, true),
        );
        assert_eq!(body.velocity, Vec3::zeros());
    }

    #[test]
    fn seat_follows_a_moving_vehicle() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        idle(&mut player, &mut body, &mut vehicles, &rate, ticks_per_sequence());

        vehicles.get_mut(CAR).unwrap().pose.translation = Vec3::new(20.0, 0.0, 5.0);
        idle(&mut player, &mut body, &mut vehicles, &rate, 1);

        let seat = vehicles.get(CAR).unwrap().seat_anchor_pose();
        assert!((body.pose.translation - seat.translation).norm() < 1.0e-5);
    }

    #[test]
    fn interact_toggles_between_enter_and_exit() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();
        let press = InputSample {
            interact: true,
            ..InputSample::default()
        };

        tick(&mut player, &mut body, &mut vehicles, &rate, press);
        assert_eq!(player.state(), PlayerState::Transition);

        // Pressing again mid-sequence does nothing.
        tick(&mut player, &mut body, &mut vehicles, &rate, press);
        assert_eq!(player.state(), PlayerState::Transition);

        idle(&mut player, &mut body, &mut vehicles, &rate, ticks_per_sequence());
        assert_eq!(player.state(), PlayerState::InCar);

        tick(&mut player, &mut body, &mut vehicles, &rate, press);
        assert_eq!(player.state(), PlayerState::Transition);
        assert!(!player.signals().in_car);
    }

    #[test]
    fn enter_fires_the_animation_trigger_once() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        assert!(player.signals().in_car);
        assert!(player.signals_mut().take_enter_car());
        assert!(!player.signals_mut().take_enter_car());
    }

    #[test]
    fn run_right_for_one_tick_while_grounded() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let mut player = PlayerController::new(1);
        let mut body = ScriptedBody::grounded().at(Vec3::new(30.0, 0.0, 0.0));
        body.velocity = Vec3::new(0.0, -0.5, 0.0);

        tick(
            &mut player,
            &mut body,
            &mut vehicles,
            &rate,
            InputSample::run(1.0, 0.0),
        );

        assert_eq!(body.velocity, Vec3::new(SPEED, -0.5, 0.0));
        assert!(player.grounded());
        assert!(player.signals().grounded);
    }

    #[test]
    fn missing_body_skips_the_tick() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let mut player = PlayerController::new(1);

        player.fixed_update(
            None::<&mut ScriptedBody>,
            &InputSample::run(1.0, 0.0),
            &mut vehicles,
            &rate,
            FIXED_DT_S,
        );
        assert_eq!(player.state(), PlayerState::Normal);
    }

    #[test]
    fn hit_is_terminal_and_idempotent() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        assert!(player.apply_hit(Some(&mut body), &mut vehicles, Vec3::x()));
        let after_one = (player.representation(), body.collider, body.gravity, body.velocity);
        assert!(body.ragdoll && body.gravity && !body.collider);
        assert_eq!(body.velocity, Vec3::x() * RAGDOLL_KNOCKBACK_SPEED);

        assert!(!player.apply_hit(Some(&mut body), &mut vehicles, Vec3::x()));
        assert_eq!(
            (player.representation(), body.collider, body.gravity, body.velocity),
            after_one
        );
        assert!(player.is_ragdoll());
        assert!(!player.controller_attached());

        // Dead players neither move nor enter vehicles.
        body.velocity = Vec3::zeros();
        tick(
            &mut player,
            &mut body,
            &mut vehicles,
            &rate,
            InputSample::run(1.0, 0.0),
        );
        assert_eq!(body.velocity, Vec3::zeros());
        assert_eq!(
            player.request_enter(&mut body, &mut vehicles, &rate),
            Err(TransitionRejected::Dead)
        );
    }

    #[test]
    fn hit_mid_enter_releases_seat_and_rate() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let (mut player, mut body) = player_near_car();

        player
            .request_enter(&mut body, &mut vehicles, &rate)
            .unwrap();
        idle(&mut player, &mut body, &mut vehicles, &rate, 3);
        player.apply_hit(Some(&mut body), &mut vehicles, -Vec3::z());

        assert_eq!(vehicles.get(CAR).unwrap().state(), VehicleState::Free);
        assert_eq!(rate.scale(), 1.0);
        assert!(player.is_ragdoll());
    }

    #[test]
    fn detached_controller_reads_no_input() {
        let mut vehicles = world();
        let rate = SimulationRate::default();
        let mut player = PlayerController::new(1);
        let mut body = ScriptedBody::grounded().at(Vec3::new(30.0, 0.0, 0.0));
        player.detach_controller();

        tick(
            &mut player,
            &mut body,
            &mut vehicles,
            &rate,
            InputSample::run(1.0, 0.0),
        );
        assert_eq!(body.velocity, Vec3::zeros());
        assert!(!player.is_ragdoll());
    }
}

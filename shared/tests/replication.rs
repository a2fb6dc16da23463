//! Three peers sharing one loopback transport, each simulating its own replica of every
//! player on a rapier world.

use std::collections::BTreeMap;

use underdog_shared::{
    DeathRecordTarget, FIXED_DT_S, InputSample, LoopbackNetwork, PeerId, PlayerBodyHandle,
    PlayerController, PlayerId, PlayerState, Pose, PropertyStore, Quat, RapierPhysics,
    ReplicationAdapter, SimulationRate, Vec3, Vehicle, VehicleRegistry, VehicleState,
    WorldStaticDef,
    constants::{DEAD_PROPERTY_VALUE, STATE_PROPERTY_KEY},
};

const PEERS: [PeerId; 3] = [1, 2, 3];
const CAR: u32 = 5;

/// Player `peer * 10` is owned by `peer`.
fn owner_of(player: PlayerId) -> PeerId {
    player / 10
}

struct Replica {
    adapter: ReplicationAdapter,
    physics: RapierPhysics,
    vehicles: VehicleRegistry,
    rate: SimulationRate,
    players: BTreeMap<PlayerId, (PlayerController, PlayerBodyHandle)>,
}

impl Replica {
    fn new(peer: PeerId, target: DeathRecordTarget) -> Self {
        let mut physics = RapierPhysics::with_statics(vec![WorldStaticDef::ground_plane(1, 0.0)]);
        let mut vehicles = VehicleRegistry::new();
        vehicles.insert(Vehicle::new(
            CAR,
            Pose::from_yaw(Vec3::new(0.0, 0.0, 0.0), 0.0),
            Pose::from_yaw(Vec3::new(-1.5, 0.0, 0.0), 0.0),
            Pose::from_yaw(Vec3::new(-0.4, 0.6, 0.2), 0.0),
        ));

        let mut players = BTreeMap::new();
        for (i, owner) in PEERS.iter().enumerate() {
            let id: PlayerId = *owner * 10;
            let spawn = Pose::new(Vec3::new(-1.5, 0.0, i as f32 * 0.5), Quat::identity());
            let handle = physics.spawn_player(spawn);
            players.insert(id, (PlayerController::new(id), handle));
        }
        physics.step(FIXED_DT_S);

        Self {
            adapter: ReplicationAdapter::with_target(peer, target),
            physics,
            vehicles,
            rate: SimulationRate::default(),
            players,
        }
    }

    fn tick(&mut self, inputs: &BTreeMap<PlayerId, InputSample>) {
        for (id, (player, handle)) in &mut self.players {
            let input = inputs.get(id).copied().unwrap_or_default();
            let mut body = self.physics.body_mut(*handle);
            player.fixed_update(
                body.as_mut(),
                &input,
                &mut self.vehicles,
                &self.rate,
                FIXED_DT_S,
            );
        }
        self.physics.step(FIXED_DT_S);
    }

    fn deliver(&mut self, net: &mut LoopbackNetwork) -> usize {
        let mut applied = 0;
        for rpc in net.drain(self.adapter.local_peer()) {
            let Some((player, handle)) = self.players.get_mut(&rpc.subject) else {
                continue;
            };
            let mut body = self.physics.body_mut(*handle);
            let changed = self
                .adapter
                .handle_hit(
                    &rpc,
                    player,
                    owner_of(rpc.subject),
                    body.as_mut(),
                    &mut self.vehicles,
                    net,
                )
                .unwrap();
            applied += usize::from(changed);
        }
        applied
    }

    fn player(&self, id: PlayerId) -> &PlayerController {
        &self.players[&id].0
    }
}

fn connected() -> LoopbackNetwork {
    let mut net = LoopbackNetwork::new();
    for peer in PEERS {
        net.connect(peer);
    }
    net
}

#[test]
fn hit_ragdolls_the_subject_on_every_peer() {
    let mut net = connected();
    let mut replicas: Vec<Replica> = PEERS
        .iter()
        .map(|&p| Replica::new(p, DeathRecordTarget::default()))
        .collect();

    replicas[0]
        .adapter
        .notify_hit(&mut net, 30, Vec3::new(0.0, 0.0, 1.0), 12_345)
        .unwrap();

    for replica in &mut replicas {
        assert_eq!(replica.deliver(&mut net), 1);
        assert!(replica.player(30).is_ragdoll());
        assert!(!replica.player(30).controller_attached());
        assert!(!replica.player(10).is_ragdoll());
        assert!(!replica.player(20).is_ragdoll());
    }

    // Each handling peer marks its own record.
    for peer in PEERS {
        assert_eq!(
            net.property(peer, STATE_PROPERTY_KEY),
            Some(DEAD_PROPERTY_VALUE)
        );
    }
}

#[test]
fn subject_owner_target_marks_only_the_owner() {
    let mut net = connected();
    let mut replicas: Vec<Replica> = PEERS
        .iter()
        .map(|&p| Replica::new(p, DeathRecordTarget::SubjectOwner))
        .collect();

    replicas[1]
        .adapter
        .notify_hit(&mut net, 30, Vec3::new(1.0, 0.0, 0.0), 0)
        .unwrap();
    for replica in &mut replicas {
        replica.deliver(&mut net);
    }

    assert_eq!(net.property(1, STATE_PROPERTY_KEY), None);
    assert_eq!(net.property(2, STATE_PROPERTY_KEY), None);
    assert_eq!(
        net.property(3, STATE_PROPERTY_KEY),
        Some(DEAD_PROPERTY_VALUE)
    );
}

#[test]
fn duplicate_delivery_is_harmless() {
    let mut net = connected();
    let mut replica = Replica::new(2, DeathRecordTarget::default());

    for _ in 0..3 {
        replica
            .adapter
            .notify_hit(&mut net, 10, Vec3::new(0.0, 0.0, -1.0), 0)
            .unwrap();
    }

    assert_eq!(replica.deliver(&mut net), 1);
    assert!(replica.player(10).is_ragdoll());
    assert_eq!(net.properties().record(2).map(BTreeMap::len), Some(1));
}

#[test]
fn hit_mid_enter_frees_the_vehicle_and_the_rate() {
    let mut net = connected();
    let mut replica = Replica::new(1, DeathRecordTarget::default());

    let press = BTreeMap::from([(
        10,
        InputSample {
            interact: true,
            ..InputSample::default()
        },
    )]);

    // Trigger events would normally come from the tracker; the spawn is inside the volume.
    replica.players.get_mut(&10).unwrap().0.on_trigger_enter(CAR);
    replica.tick(&press);
    assert_eq!(replica.player(10).state(), PlayerState::Transition);
    assert_eq!(replica.vehicles.get(CAR).unwrap().state(), VehicleState::Occupied);
    assert!(replica.rate.is_overridden());

    replica
        .adapter
        .notify_hit(&mut net, 10, Vec3::new(0.0, 0.0, 1.0), 0)
        .unwrap();
    assert_eq!(replica.deliver(&mut net), 1);

    assert_eq!(replica.vehicles.get(CAR).unwrap().state(), VehicleState::Free);
    assert!(!replica.rate.is_overridden());
    assert_eq!(replica.player(10).state(), PlayerState::Normal);

    // Ragdolls ignore further input.
    replica.tick(&press);
    assert!(replica.player(10).is_ragdoll());
    assert_eq!(replica.vehicles.get(CAR).unwrap().state(), VehicleState::Free);
}

//! Hit broadcast and replicated player properties.
//!
//! A hit is announced once by whoever detected it and delivered reliably to every peer,
//! the origin included. Each peer then applies the ragdoll transition to its own replica of
//! the subject and records the death as a replicated `state = "dead"` property.
//!
//! Delivery may repeat. A second hit on an already-ragdolled replica changes nothing, and
//! property writes are upserts, so handlers never need to de-duplicate.

use std::collections::{BTreeMap, VecDeque};

use thiserror::Error;

use crate::{
    body::PhysicsBody,
    constants::{DEAD_PROPERTY_VALUE, STATE_PROPERTY_KEY},
    math::Vec3,
    player::PlayerController,
    vehicle::{PlayerId, VehicleRegistry},
};

pub type PeerId = u64;

/// Who sent an RPC, and when (transport clock, microseconds).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SenderInfo {
    pub peer: PeerId,
    pub sent_at_micros: i64,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct HitRpc {
    pub subject: PlayerId,
    pub direction: Vec3,
    pub sender: SenderInfo,
}

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ReplicationError {
    #[error("peer {0} is not connected")]
    UnknownPeer(PeerId),
    #[error("hit for player {rpc} delivered to the replica of player {replica}")]
    SubjectMismatch { rpc: PlayerId, replica: PlayerId },
    /// Records are written only by the peer that owns them.
    #[error("peer {0}'s record is owned by another peer")]
    ForeignRecord(PeerId),
    #[error("transport failure: {0}")]
    Transport(String),
}

/// Reliable delivery of hit RPCs to all peers, including the sender.
pub trait HitTransport {
    fn broadcast_hit(&mut self, rpc: HitRpc) -> Result<(), ReplicationError>;
}

/// Per-peer key/value facts readable by every peer.
pub trait PropertyStore {
    /// Upsert `key = value` on `peer`'s record.
    fn set_property(&mut self, peer: PeerId, key: &str, value: &str)
    -> Result<(), ReplicationError>;

    fn property(&self, peer: PeerId, key: &str) -> Option<&str>;
}

/// Which record the death fact lands on.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DeathRecordTarget {
    /// Every peer that handles the hit marks its own record. This is how the game has
    /// always behaved, so a hit marks the handling peers dead, not just the subject.
    #[default]
    InvokingPeer,
    /// Only the peer owning the subject writes, to its own record.
    SubjectOwner,
}

/// In-memory [`PropertyStore`].
#[derive(Clone, Debug, Default)]
pub struct ReplicatedProperties {
    records: BTreeMap<PeerId, BTreeMap<String, String>>,
}

impl ReplicatedProperties {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, peer: PeerId) -> Option<&BTreeMap<String, String>> {
        self.records.get(&peer)
    }
}

impl PropertyStore for ReplicatedProperties {
    fn set_property(
        &mut self,
        peer: PeerId,
        key: &str,
        value: &str,
    ) -> Result<(), ReplicationError> {
        let record = self.records.entry(peer).or_default();
        if record.get(key).map(String::as_str) != Some(value) {
            record.insert(key.to_owned(), value.to_owned());
        }
        Ok(())
    }

    fn property(&self, peer: PeerId, key: &str) -> Option<&str> {
        self.records.get(&peer)?.get(key).map(String::as_str)
    }
}

/// One peer's side of the hit protocol.
#[derive(Clone, Copy, Debug)]
pub struct ReplicationAdapter {
    local_peer: PeerId,
    target: DeathRecordTarget,
}

impl ReplicationAdapter {
    pub fn new(local_peer: PeerId) -> Self {
        Self::with_target(local_peer, DeathRecordTarget::default())
    }

    pub fn with_target(local_peer: PeerId, target: DeathRecordTarget) -> Self {
        Self { local_peer, target }
    }

    pub fn local_peer(&self) -> PeerId {
        self.local_peer
    }

    pub fn target(&self) -> DeathRecordTarget {
        self.target
    }

    /// Announce that `subject` was hit from `direction`.
    pub fn notify_hit<T: HitTransport + ?Sized>(
        &self,
        transport: &mut T,
        subject: PlayerId,
        direction: Vec3,
        sent_at_micros: i64,
    ) -> Result<(), ReplicationError> {
        transport.broadcast_hit(HitRpc {
            subject,
            direction,
            sender: SenderInfo {
                peer: self.local_peer,
                sent_at_micros,
            },
        })
    }

    /// Apply a delivered hit to the local replica of its subject.
    ///
    /// Returns `Ok(false)` when the replica was already a ragdoll.
    pub fn handle_hit<B, S>(
        &self,
        rpc: &HitRpc,
        subject: &mut PlayerController,
        subject_owner: PeerId,
        body: Option<&mut B>,
        vehicles: &mut VehicleRegistry,
        store: &mut S,
    ) -> Result<bool, ReplicationError>
    where
        B: PhysicsBody + ?Sized,
        S: PropertyStore + ?Sized,
    {
        if subject.id() != rpc.subject {
            return Err(ReplicationError::SubjectMismatch {
                rpc: rpc.subject,
                replica: subject.id(),
            });
        }

        log::info!(
            "peer {}: hit on player {} from peer {} (sent at {}us)",
            self.local_peer,
            rpc.subject,
            rpc.sender.peer,
            rpc.sender.sent_at_micros
        );

        if !subject.apply_hit(body, vehicles, rpc.direction) {
            return Ok(false);
        }

        let writes = match self.target {
            DeathRecordTarget::InvokingPeer => true,
            DeathRecordTarget::SubjectOwner => subject_owner == self.local_peer,
        };
        if writes {
            store.set_property(self.local_peer, STATE_PROPERTY_KEY, DEAD_PROPERTY_VALUE)?;
        }
        Ok(true)
    }
}

/// In-process transport for tests: every connected peer has an inbox, and all peers share one
/// property store.
#[derive(Clone, Debug, Default)]
pub struct LoopbackNetwork {
    inboxes: BTreeMap<PeerId, VecDeque<HitRpc>>,
    properties: ReplicatedProperties,
}

impl LoopbackNetwork {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn connect(&mut self, peer: PeerId) {
        self.inboxes.entry(peer).or_default();
        log::debug!("loopback: peer {peer} connected");
    }

    pub fn disconnect(&mut self, peer: PeerId) {
        self.inboxes.remove(&peer);
        log::debug!("loopback: peer {peer} disconnected");
    }

    pub fn peers(&self) -> impl Iterator<Item = PeerId> + '_ {
        self.inboxes.keys().copied()
    }

    /// Take every RPC delivered to `peer`, in send order.
    pub fn drain(&mut self, peer: PeerId) -> Vec<HitRpc> {
        self.inboxes
            .get_mut(&peer)
            .map(|inbox| inbox.drain(..).collect())
            .unwrap_or_default()
    }

    pub fn properties(&self) -> &ReplicatedProperties {
        &self.properties
    }

    pub fn properties_mut(&mut self) -> &mut ReplicatedProperties {
        &mut self.properties
    }
}

impl HitTransport for LoopbackNetwork {
    fn broadcast_hit(&mut self, rpc: HitRpc) -> Result<(), ReplicationError> {
        if !self.inboxes.contains_key(&rpc.sender.peer) {
            return Err(ReplicationError::UnknownPeer(rpc.sender.peer));
        }
        for inbox in self.inboxes.values_mut() {
            inbox.push_back(rpc);
        }
        Ok(())
    }
}

impl PropertyStore for LoopbackNetwork {
    fn set_property(
        &mut self,
        peer: PeerId,
        key: &str,
        value: &str,
    ) -> Result<(), ReplicationError> {
        if !self.inboxes.contains_key(&peer) {
            return Err(ReplicationError::UnknownPeer(peer));
        }
        self.properties.set_property(peer, key, value)
    }

    fn property(&self, peer: PeerId, key: &str) -> Option<&str> {
        self.properties.property(peer, key)
    }
}

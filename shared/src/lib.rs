pub mod animation;
pub mod body;
pub mod choreography;
pub mod constants;
pub mod grounding;
pub mod input;
pub mod locomotion;
pub mod math;
pub mod physics;
pub mod player;
pub mod replication;
pub mod state;
pub mod time_scale;
pub mod vehicle;

#[cfg(test)]
mod test_support;

pub use animation::AnimationSignals;
pub use body::PhysicsBody;
pub use choreography::{Choreography, ChoreographyFrame, ChoreographyKind, ChoreographyTuning};
pub use constants::{FIXED_DT_S, FIXED_TICK_HZ};
pub use grounding::GroundSensor;
pub use input::InputSample;
pub use locomotion::{LocomotionResult, MovementTuning, step_locomotion};
pub use math::{Pose, Quat, Vec2, Vec3};
pub use physics::{ColliderShapeDef, PlayerBodyHandle, RapierBody, RapierPhysics, WorldStaticDef};
pub use player::{PlayerController, Representation, TransitionRejected};
pub use replication::{
    DeathRecordTarget, HitRpc, HitTransport, LoopbackNetwork, PeerId, PropertyStore,
    ReplicatedProperties, ReplicationAdapter, ReplicationError, SenderInfo,
};
pub use state::PlayerState;
pub use time_scale::{RateOverride, SimulationRate};
pub use vehicle::{
    NearestVehicle, Occupancy, OccupancyError, PlayerId, TriggerEvent, TriggerTracker, Vehicle,
    VehicleId, VehicleRegistry, VehicleState,
};

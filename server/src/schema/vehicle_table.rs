use crate::types::*;
use spacetimedb::*;

/// Vehicles in the world and who sits in them.
///
/// Anchors are vehicle-local; clients compose them with the root pose. `occupant` is the
/// authoritative seat: reducers change it only through a compare-and-set (see
/// `reducers::vehicle`).
#[table(name = vehicle, public)]
pub struct Vehicle {
    #[primary_key]
    pub id: u32,

    /// Root pose.
    pub translation: DbVec3,
    pub rotation: DbQuat,

    /// Where a player stands to get in (vehicle-local).
    pub enter_anchor_translation: DbVec3,
    pub enter_anchor_rotation: DbQuat,

    /// Where a seated player sits (vehicle-local).
    pub seat_anchor_translation: DbVec3,
    pub seat_anchor_rotation: DbQuat,

    /// Radius of the proximity trigger around the root (meters).
    pub trigger_radius: f32,

    pub occupant: Option<Identity>,
}

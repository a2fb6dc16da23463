use crate::types::*;
use spacetimedb::*;

/// Reliable hit broadcast.
///
/// Every subscribed client receives each inserted row, the sender included, and applies the
/// hit to its own replica of `subject`. Rows are pruned once every client has had time to
/// see them.
#[table(name = hit_event, public)]
pub struct HitEvent {
    #[primary_key]
    #[auto_inc]
    pub id: u64,

    /// `player.id` of the player that was hit.
    #[index(btree)]
    pub subject: u64,

    /// Direction the hit came from (world space).
    pub direction: DbVec3,

    pub sender: Identity,
    pub sent_at: Timestamp,
}

use spacetimedb::*;

/// One row per identity that has ever connected.
///
/// `id` is the gameplay-side player id: it is what hit events name as their subject and
/// what clients key their replicas by.
#[table(name = player, public)]
pub struct Player {
    #[primary_key]
    pub identity: Identity,

    #[unique]
    #[auto_inc]
    pub id: u64,

    pub online: bool,

    /// Set by the first hit on this player. Dead players cannot take a seat.
    pub dead: bool,

    /// Vehicle this player currently occupies, if any.
    #[index(btree)]
    pub vehicle_id: Option<u32>,

    pub last_connected_at: Timestamp,
}

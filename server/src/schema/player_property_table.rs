use spacetimedb::*;

/// Replicated per-player key/value facts (e.g. `state = "dead"`).
///
/// A client may only write its own record. Writes are upserts and there is no removal path.
#[table(name = player_property, public)]
pub struct PlayerProperty {
    /// Stable unique key: "{owner}::{key}".
    #[primary_key]
    pub record_key: String,

    #[index(btree)]
    pub owner: Identity,

    pub key: String,
    pub value: String,

    pub updated_at: Timestamp,
}

impl PlayerProperty {
    pub fn record_key(owner: &Identity, key: &str) -> String {
        format!("{owner}::{key}")
    }
}

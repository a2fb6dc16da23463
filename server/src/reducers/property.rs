//! Replicated player properties.

use crate::schema::*;
use spacetimedb::{ReducerContext, Table};

const MAX_KEY_LEN: usize = 32;
const MAX_VALUE_LEN: usize = 128;

/// Upsert `key = value` on the caller's own record. Rewriting the same value is a no-op.
#[spacetimedb::reducer]
pub fn set_player_property(ctx: &ReducerContext, key: String, value: String) -> Result<(), String> {
    validate_property(&key, &value)?;
    if ctx.db.player().identity().find(ctx.sender).is_none() {
        return Err("Player not found".into());
    }

    let record_key = PlayerProperty::record_key(&ctx.sender, &key);
    match ctx.db.player_property().record_key().find(&record_key) {
        Some(existing) if existing.value == value => {}
        Some(existing) => {
            ctx.db.player_property().record_key().update(PlayerProperty {
                value,
                updated_at: ctx.timestamp,
                ..existing
            });
        }
        None => {
            log::debug!("{:?} set {key} = {value}", ctx.sender);
            ctx.db.player_property().insert(PlayerProperty {
                record_key,
                owner: ctx.sender,
                key,
                value,
                updated_at: ctx.timestamp,
            });
        }
    }
    Ok(())
}

fn validate_property(key: &str, value: &str) -> Result<(), String> {
    if key.is_empty() {
        return Err("Property key must not be empty".into());
    }
    if key.len() > MAX_KEY_LEN {
        return Err(format!("Property key longer than {MAX_KEY_LEN} bytes"));
    }
    if key.contains("::") {
        return Err("Property key must not contain `::`".into());
    }
    if value.len() > MAX_VALUE_LEN {
        return Err(format!("Property value longer than {MAX_VALUE_LEN} bytes"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn death_record_is_a_valid_property() {
        use underdog_shared::constants::{DEAD_PROPERTY_VALUE, STATE_PROPERTY_KEY};
        assert_eq!(validate_property(STATE_PROPERTY_KEY, DEAD_PROPERTY_VALUE), Ok(()));
    }

    #[test]
    fn malformed_keys_are_rejected() {
        assert!(validate_property("", "x").is_err());
        assert!(validate_property("a::b", "x").is_err());
        assert!(validate_property(&"k".repeat(MAX_KEY_LEN + 1), "x").is_err());
        assert!(validate_property("state", &"v".repeat(MAX_VALUE_LEN + 1)).is_err());
    }
}

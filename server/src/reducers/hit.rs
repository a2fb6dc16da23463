//! Hit broadcast.
//!
//! `notify_hit` inserts a `hit_event` row. SpacetimeDB delivers each row to every
//! subscribed client, the sender included, which is the reliable all-peers RPC the ragdoll
//! transition needs. Each client applies the hit to its own replica and writes its
//! `state = "dead"` property via `set_player_property`.
//!
//! Rows are kept for `HIT_EVENT_TTL_MICROS` so late subscribers still see recent deaths,
//! then pruned by a scheduled reducer.

use crate::{reducers::vehicle::release_seat, schema::*, types::DbVec3};
use spacetimedb::{ReducerContext, ScheduleAt, Table, TimeDuration};

const HIT_EVENT_TTL_MICROS: i64 = 10_000_000;
const PRUNE_INTERVAL_MICROS: i64 = 1_000_000;

#[spacetimedb::table(name = hit_event_prune_timer, scheduled(prune_hit_events))]
pub struct HitEventPruneTimer {
    #[primary_key]
    #[auto_inc]
    pub scheduled_id: u64,

    pub scheduled_at: ScheduleAt,
}

/// Schedule the hit event prune job. Called from the crate `init` reducer.
pub fn init_hit_event_prune(ctx: &ReducerContext) {
    ctx.db.hit_event_prune_timer().scheduled_id().delete(1);
    ctx.db.hit_event_prune_timer().insert(HitEventPruneTimer {
        scheduled_id: 1,
        scheduled_at: ScheduleAt::Interval(TimeDuration::from_micros(PRUNE_INTERVAL_MICROS)),
    });
}

#[spacetimedb::reducer]
pub fn notify_hit(ctx: &ReducerContext, subject: u64, direction: DbVec3) -> Result<(), String> {
    let Some(direction) = direction.direction() else {
        return Err("Hit direction must be finite and non-zero".into());
    };
    if ctx.db.player().identity().find(ctx.sender).is_none() {
        return Err("Player not found".into());
    }
    let Some(mut target) = ctx.db.player().id().find(subject) else {
        return Err(format!("Hit subject {subject} not found"));
    };

    // A hit ends any vehicle sequence; the seat goes back to the pool.
    if let Some(vehicle_id) = target.vehicle_id.take() {
        if let Err(reason) = release_seat(ctx, vehicle_id, target.identity) {
            log::warn!("Hit on player {subject}: {reason}");
        }
    }
    target.dead = true;
    ctx.db.player().identity().update(target);

    let event = ctx.db.hit_event().insert(HitEvent {
        id: 0,
        subject,
        direction,
        sender: ctx.sender,
        sent_at: ctx.timestamp,
    });
    log::info!(
        "Hit event {} on player {subject} from {:?}",
        event.id,
        ctx.sender
    );
    Ok(())
}

#[spacetimedb::reducer]
pub fn prune_hit_events(ctx: &ReducerContext, _timer: HitEventPruneTimer) -> Result<(), String> {
    // Only the server (module identity) may invoke scheduled reducers.
    if ctx.sender != ctx.identity() {
        return Err("`prune_hit_events` may not be invoked by clients.".into());
    }

    let stale: Vec<u64> = ctx
        .db
        .hit_event()
        .iter()
        .filter(|event| {
            ctx.timestamp
                .time_duration_since(event.sent_at)
                .is_some_and(|age| age.to_micros() > HIT_EVENT_TTL_MICROS)
        })
        .map(|event| event.id)
        .collect();

    for id in &stale {
        ctx.db.hit_event().id().delete(id);
    }
    if !stale.is_empty() {
        log::debug!("Pruned {} hit events", stale.len());
    }
    Ok(())
}

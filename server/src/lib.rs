mod reducers {
    mod connection;
    pub mod hit;
    pub mod property;
    pub mod vehicle;
}
pub mod schema;
pub mod types;
mod world;

use reducers::hit::init_hit_event_prune;
use spacetimedb::*;

#[reducer(init)]
pub fn init(ctx: &ReducerContext) {
    world::recreate_vehicles(ctx);
    init_hit_event_prune(ctx);
}

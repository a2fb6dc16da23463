mod hit_event_table;
mod player_property_table;
mod player_table;
mod vehicle_table;

pub use hit_event_table::*;
pub use player_property_table::*;
pub use player_table::*;
pub use vehicle_table::*;

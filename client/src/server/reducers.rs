use crate::module_bindings::{
    DbConnection, DbVec3, Reducer, RemoteModule, RemoteReducers,
    notify_hit_reducer::notify_hit, request_enter_vehicle_reducer::request_enter_vehicle,
    request_exit_vehicle_reducer::request_exit_vehicle,
    set_player_property_reducer::set_player_property,
};
use bevy_spacetimedb::RegisterReducerMessage;
use spacetimedb_sdk::ReducerEvent;

#[derive(Debug, RegisterReducerMessage)]
pub struct NotifyHit {
    pub event: ReducerEvent<Reducer>,
    pub subject: u64,
    pub direction: DbVec3,
}

#[derive(Debug, RegisterReducerMessage)]
pub struct SetPlayerProperty {
    pub event: ReducerEvent<Reducer>,
    pub key: String,
    pub value: String,
}

#[derive(Debug, RegisterReducerMessage)]
pub struct RequestEnterVehicle {
    pub event: ReducerEvent<Reducer>,
    pub vehicle_id: u32,
}

#[derive(Debug, RegisterReducerMessage)]
pub struct RequestExitVehicle {
    pub event: ReducerEvent<Reducer>,
}

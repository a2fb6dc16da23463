pub mod reducers;
pub mod types;

use crate::module_bindings::{
    DbConnection, HitEventTableAccess, PlayerPropertyTableAccess, PlayerTableAccess, RemoteTables,
    VehicleTableAccess,
};
use bevy::prelude::*;
use bevy_spacetimedb::{ReadStdbConnectedMessage, StdbConnection, StdbPlugin};
use reducers::*;

pub type SpacetimeDB<'a> = Res<'a, StdbConnection<DbConnection>>;

const DEFAULT_URI: &str = "http://127.0.0.1:3000";
const DEFAULT_MODULE: &str = "underdog";

pub(super) fn plugin(app: &mut App) {
    let token = read_token_from_cli_env();
    let uri = std::env::var("STDB_URI").unwrap_or_else(|_| DEFAULT_URI.to_string());
    let module = std::env::var("STDB_MODULE").unwrap_or_else(|_| DEFAULT_MODULE.to_string());
    info!("Connecting to SpacetimeDB module `{module}` at {uri}");

    let stdb_plugin = StdbPlugin::default()
        .with_uri(uri)
        .with_module_name(module);

    let stdb_plugin = if let Some(tok) = token {
        info!("Using JWT from CLI/ENV for SpacetimeDB connection.");
        stdb_plugin.with_token(tok)
    } else {
        warn!("No JWT provided via CLI/ENV; identity will be ephemeral for this run.");
        stdb_plugin
    };

    app.add_plugins(
        stdb_plugin
            // --------------------------------
            // Register all reducers
            // --------------------------------
            .add_reducer::<NotifyHit>()
            .add_reducer::<SetPlayerProperty>()
            .add_reducer::<RequestEnterVehicle>()
            .add_reducer::<RequestExitVehicle>()
            // --------------------------------
            // Register all tables
            // --------------------------------
            .add_table(RemoteTables::player)
            .add_table(RemoteTables::vehicle)
            .add_table(RemoteTables::hit_event)
            .add_table(RemoteTables::player_property)
            .with_run_fn(DbConnection::run_threaded),
    );
    app.add_systems(Update, on_connect);
}

fn on_connect(mut messages: ReadStdbConnectedMessage, stdb: SpacetimeDB) {
    for message in messages.read() {
        info!("SpacetimeDB module connected: {:?}", message.identity);

        stdb.subscription_builder().subscribe(vec![
            "SELECT * FROM player",
            "SELECT * FROM vehicle",
            "SELECT * FROM hit_event",
            "SELECT * FROM player_property",
        ]);
    }
}

/// Returns a JWT token from CLI args or environment if present.
///
/// Supported:
///   --token <JWT>
///   --token=<JWT>
///   --token-file <path>
///   --token-file=<path>
///   STDB_TOKEN or STDB_JWT environment variables
fn read_token_from_cli_env() -> Option<String> {
    token_from_args(std::env::args().skip(1)).or_else(|| {
        std::env::var("STDB_TOKEN")
            .or_else(|_| std::env::var("STDB_JWT"))
            .ok()
    })
}

fn token_from_args(args: impl Iterator<Item = String>) -> Option<String> {
    let read_file = |path: &str| {
        std::fs::read_to_string(path)
            .map(|s| s.trim().to_string())
            .map_err(|err| warn!("Cannot read token file {path}: {err}"))
            .ok()
    };

    let mut args = args.peekable();
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--token" | "-t" => return args.next(),
            "--token-file" => return args.next().and_then(|path| read_file(&path)),
            _ => {}
        }
        if let Some(val) = arg.strip_prefix("--token=") {
            return Some(val.to_string());
        }
        if let Some(path) = arg.strip_prefix("--token-file=") {
            return read_file(path);
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args(list: &[&str]) -> impl Iterator<Item = String> {
        list.iter().map(|s| s.to_string()).collect::<Vec<_>>().into_iter()
    }

    #[test]
    fn token_is_read_from_either_flag_form() {
        assert_eq!(token_from_args(args(&["--token", "abc"])), Some("abc".into()));
        assert_eq!(token_from_args(args(&["-v", "--token=xyz"])), Some("xyz".into()));
        assert_eq!(token_from_args(args(&["--token"])), None);
        assert_eq!(token_from_args(args(&["--fullscreen"])), None);
    }
}

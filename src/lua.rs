//! Lua bridge: snapshots become plain string tables, and the builders are
//! exposed to scripts through a global `api` table.
//!
//! Every `api` function takes a key and returns a table. Unknown keys give an
//! empty table (or an empty array for the list-returning calls), never nil
//! and never a Lua error.

use std::sync::Arc;

use mlua::{IntoLua, Lua, Value};

use crate::builder::Snapshots;
use crate::config::SnapshotConfig;
use crate::directory::{Channels, Clans, Connections, Games, Teams};
use crate::entity::{ChannelId, ClanId, GameId, TeamId};
use crate::snapshot::Snapshot;

impl IntoLua for Snapshot {
    fn into_lua(self, lua: &Lua) -> mlua::Result<Value> {
        let tbl = lua.create_table()?;
        for (k, v) in self {
            tbl.raw_set(k, v)?;
        }
        Ok(Value::Table(tbl))
    }
}

macro_rules! api_fn {
    ($lua:expr, $api:expr, $dir:expr, $config:expr, $name:literal,
     |$s:ident, $arg:ident: $ty:ty| $body:expr) => {{
        let dir = Arc::clone(&$dir);
        let config = $config.clone();
        $api.set(
            $name,
            $lua.create_function(move |_, $arg: $ty| {
                let $s = Snapshots::with_config(&*dir, config.clone());
                Ok($body)
            })?,
        )?;
    }};
}

/// Install the global `api` table on `lua`.
pub fn register<W>(lua: &Lua, dir: Arc<W>, config: SnapshotConfig) -> mlua::Result<()>
where
    W: Connections + Games + Channels + Clans + Teams + 'static,
{
    let api = lua.create_table()?;

    api_fn!(lua, api, dir, config, "account_get_by_name",
        |s, name: String| s.account_by_name(&name));
    api_fn!(lua, api, dir, config, "account_get_friends",
        |s, name: String| s.account_friends(s.directory().account_by_name(&name)));
    api_fn!(lua, api, dir, config, "account_get_teams",
        |s, name: String| s.account_teams(s.directory().account_by_name(&name)));
    api_fn!(lua, api, dir, config, "game_get_by_id",
        |s, id: u32| s.game_by_id(GameId(id)));
    api_fn!(lua, api, dir, config, "channel_get_by_id",
        |s, id: u32| s.channel_by_id(ChannelId(id)));
    api_fn!(lua, api, dir, config, "clan_get_by_id",
        |s, id: u32| s.clan_by_id(ClanId(id)));
    api_fn!(lua, api, dir, config, "clan_get_members",
        |s, id: u32| s.clan_members(s.directory().clan(ClanId(id))));
    api_fn!(lua, api, dir, config, "team_get_by_id",
        |s, id: u32| s.team_by_id(TeamId(id)));

    lua.globals().set("api", api)?;
    tracing::debug!("[lua] api table registered");
    Ok(())
}

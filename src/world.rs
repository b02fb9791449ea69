//! In-memory server state implementing every directory trait.
//!
//! Loaded from YAML fixtures for the `snapshot_dump` tool and tests.

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::directory::{Accounts, Channels, Clans, Connections, Games, Teams};
use crate::entity::{
    Account, AccountId, Channel, ChannelId, Clan, ClanId, Connection, ConnectionId, Game, GameId,
    Team, TeamId,
};

#[derive(Debug, thiserror::Error)]
pub enum WorldError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("Duplicate {kind} id={id}")]
    DuplicateId { kind: &'static str, id: u32 },

    #[error("Duplicate account name: {0}")]
    DuplicateName(String),
}

/// Fixture file layout: one list per entity kind.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct WorldFile {
    accounts: Vec<Account>,
    connections: Vec<Connection>,
    games: Vec<Game>,
    channels: Vec<Channel>,
    clans: Vec<Clan>,
    teams: Vec<Team>,
}

#[derive(Debug, Default)]
pub struct World {
    accounts: HashMap<AccountId, Account>,
    /// Lowercased name → uid.
    names: HashMap<String, AccountId>,
    connections: HashMap<ConnectionId, Connection>,
    games: HashMap<GameId, Game>,
    channels: HashMap<ChannelId, Channel>,
    clans: HashMap<ClanId, Clan>,
    teams: HashMap<TeamId, Team>,
}

fn insert_unique<K, V>(
    map: &mut HashMap<K, V>,
    key: K,
    value: V,
    kind: &'static str,
    id: u32,
) -> Result<(), WorldError>
where
    K: std::hash::Hash + Eq,
{
    if map.contains_key(&key) {
        return Err(WorldError::DuplicateId { kind, id });
    }
    map.insert(key, value);
    Ok(())
}

impl World {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_yaml_str(contents: &str) -> Result<Self, WorldError> {
        if contents.trim().is_empty() {
            return Ok(Self::new());
        }
        let file: WorldFile = serde_yaml::from_str(contents)?;
        Self::from_parts(file)
    }

    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WorldError> {
        let contents = fs::read_to_string(path.as_ref())?;
        let world = Self::from_yaml_str(&contents)?;
        tracing::info!(
            "[world] loaded {} accounts={} games={} channels={}",
            path.as_ref().display(),
            world.accounts.len(),
            world.games.len(),
            world.channels.len(),
        );
        Ok(world)
    }

    fn from_parts(file: WorldFile) -> Result<Self, WorldError> {
        let mut world = Self::new();
        for a in file.accounts {
            world.insert_account(a)?;
        }
        for c in file.connections {
            world.insert_connection(c)?;
        }
        for g in file.games {
            world.insert_game(g)?;
        }
        for c in file.channels {
            world.insert_channel(c)?;
        }
        for c in file.clans {
            world.insert_clan(c)?;
        }
        for t in file.teams {
            world.insert_team(t)?;
        }
        Ok(world)
    }

    /// Account names are unique ignoring ASCII case.
    pub fn insert_account(&mut self, account: Account) -> Result<(), WorldError> {
        let key = account.name.to_ascii_lowercase();
        if self.names.contains_key(&key) {
            return Err(WorldError::DuplicateName(account.name));
        }
        let uid = account.uid;
        insert_unique(&mut self.accounts, uid, account, "account", uid.0)?;
        self.names.insert(key, uid);
        Ok(())
    }

    pub fn insert_connection(&mut self, conn: Connection) -> Result<(), WorldError> {
        let id = conn.id;
        insert_unique(&mut self.connections, id, conn, "connection", id.0)
    }

    pub fn insert_game(&mut self, game: Game) -> Result<(), WorldError> {
        let id = game.id;
        insert_unique(&mut self.games, id, game, "game", id.0)
    }

    pub fn insert_channel(&mut self, channel: Channel) -> Result<(), WorldError> {
        let id = channel.id;
        insert_unique(&mut self.channels, id, channel, "channel", id.0)
    }

    pub fn insert_clan(&mut self, clan: Clan) -> Result<(), WorldError> {
        let id = clan.id;
        insert_unique(&mut self.clans, id, clan, "clan", id.0)
    }

    pub fn insert_team(&mut self, team: Team) -> Result<(), WorldError> {
        let id = team.id;
        insert_unique(&mut self.teams, id, team, "team", id.0)
    }
}

impl Accounts for World {
    fn account(&self, uid: AccountId) -> Option<&Account> {
        self.accounts.get(&uid)
    }

    fn account_by_name(&self, name: &str) -> Option<&Account> {
        let uid = self.names.get(&name.to_ascii_lowercase())?;
        self.accounts.get(uid)
    }
}

impl Connections for World {
    fn connection(&self, id: ConnectionId) -> Option<&Connection> {
        self.connections.get(&id)
    }
}

impl Games for World {
    fn game(&self, id: GameId) -> Option<&Game> {
        self.games.get(&id)
    }
}

impl Channels for World {
    fn channel(&self, id: ChannelId) -> Option<&Channel> {
        self.channels.get(&id)
    }
}

impl Clans for World {
    fn clan(&self, id: ClanId) -> Option<&Clan> {
        self.clans.get(&id)
    }
}

impl Teams for World {
    fn team(&self, id: TeamId) -> Option<&Team> {
        self.teams.get(&id)
    }
}

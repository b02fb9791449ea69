//! Accounts, their live connections, and friend relationships.

use serde::{Deserialize, Serialize};

use super::{AccountId, ChannelId, ClanId, ConnectionId, GameId, TeamId};
use crate::tag::ClientTag;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub uid: AccountId,
    pub name: String,
    #[serde(default)]
    pub email: String,
    /// Bitmask of command groups the account may use.
    #[serde(default = "default_command_groups")]
    pub command_groups: u32,
    #[serde(default)]
    pub locked: bool,
    #[serde(default)]
    pub muted: bool,
    /// Set only while the account is online.
    #[serde(default)]
    pub connection: Option<ConnectionId>,
    /// Clan the account holds a membership record in.
    #[serde(default)]
    pub clan: Option<ClanId>,
    #[serde(default)]
    pub friends: Vec<Friend>,
    #[serde(default)]
    pub teams: Vec<TeamId>,
}

fn default_command_groups() -> u32 {
    1
}

impl Account {
    pub fn new(uid: u32, name: impl Into<String>) -> Self {
        Self {
            uid: AccountId(uid),
            name: name.into(),
            email: String::new(),
            command_groups: default_command_groups(),
            locked: false,
            muted: false,
            connection: None,
            clan: None,
            friends: Vec::new(),
            teams: Vec::new(),
        }
    }
}

/// A live client session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Connection {
    pub id: ConnectionId,
    /// Authenticated account, if login has completed.
    #[serde(default)]
    pub account: Option<AccountId>,
    #[serde(default)]
    pub country: String,
    #[serde(default)]
    pub clientver: String,
    #[serde(default)]
    pub latency: u32,
    #[serde(default)]
    pub clienttag: Option<ClientTag>,
    #[serde(default)]
    pub game: Option<GameId>,
    #[serde(default)]
    pub channel: Option<ChannelId>,
}

impl Connection {
    pub fn new(id: u32) -> Self {
        Self {
            id: ConnectionId(id),
            account: None,
            country: String::new(),
            clientver: String::new(),
            latency: 0,
            clienttag: None,
            game: None,
            channel: None,
        }
    }
}

/// Mutual-status of a friend entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Mutual {
    /// Marks entries dropped by a friend-list reload.
    Unloaded,
    #[default]
    NotMutual,
    Mutual,
}

impl Mutual {
    pub fn code(self) -> i32 {
        match self {
            Mutual::Unloaded => -1,
            Mutual::NotMutual => 0,
            Mutual::Mutual => 1,
        }
    }
}

/// One entry in an account's friend list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Friend {
    pub account: AccountId,
    #[serde(default)]
    pub mutual: Mutual,
}

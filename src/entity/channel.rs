//! Chat channels.

use serde::{Deserialize, Serialize};

use super::{ChannelId, ConnectionId};
use crate::tag::ClientTag;

/// One node of a channel's member list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ChannelMember {
    pub connection: ConnectionId,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Channel {
    pub id: ChannelId,
    pub name: String,
    #[serde(default)]
    pub shortname: Option<String>,
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub flags: u32,
    /// `-1` means unlimited.
    #[serde(default = "unlimited")]
    pub max_members: i32,
    #[serde(default)]
    pub curr_members: u32,
    #[serde(default)]
    pub clienttag: ClientTag,
    #[serde(default)]
    pub realmname: Option<String>,
    #[serde(default)]
    pub logname: Option<String>,

    // Westwood Online extensions
    #[serde(default)]
    pub min_members: u32,
    #[serde(default)]
    pub game_type: u32,
    #[serde(default)]
    pub game_extension: Option<String>,

    /// Members in join order, head first.
    #[serde(default)]
    pub members: Vec<ChannelMember>,
    /// Banned names; `None` entries are corrupt and get skipped.
    #[serde(default)]
    pub banlist: Vec<Option<String>>,
}

fn unlimited() -> i32 {
    -1
}

impl Channel {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: ChannelId(id),
            name: name.into(),
            shortname: None,
            country: None,
            flags: 0,
            max_members: unlimited(),
            curr_members: 0,
            clienttag: ClientTag::NONE,
            realmname: None,
            logname: None,
            min_members: 0,
            game_type: 0,
            game_extension: None,
            members: Vec::new(),
            banlist: Vec::new(),
        }
    }

    /// Forward iteration over the member list, head to tail.
    pub fn members(&self) -> impl Iterator<Item = &ChannelMember> {
        self.members.iter()
    }

    /// Forward iteration over raw ban-list payloads.
    pub fn bans(&self) -> impl Iterator<Item = Option<&str>> {
        self.banlist.iter().map(Option::as_deref)
    }
}

//! Clans and their membership records.

use serde::{Deserialize, Serialize};

use super::{AccountId, ClanId};
use crate::tag::ClanTag;

/// Clan channel visibility.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChannelPrivacy {
    #[default]
    Public = 0,
    Private = 1,
}

impl ChannelPrivacy {
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Rank of a clan member.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClanStatus {
    #[default]
    New = 0,
    Peon = 1,
    Grunt = 2,
    Shaman = 3,
    Chieftain = 4,
}

impl ClanStatus {
    pub fn code(self) -> u8 {
        self as u8
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClanMember {
    pub account: AccountId,
    #[serde(default)]
    pub status: ClanStatus,
    pub clan: ClanId,
    #[serde(default)]
    pub join_time: i64,
    /// `false` while the member is only invited.
    #[serde(default)]
    pub fullmember: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Clan {
    pub id: ClanId,
    pub tag: ClanTag,
    pub name: String,
    /// Positive once creation has completed; zero or negative while the
    /// founding invitations are still pending.
    #[serde(default)]
    pub created: i32,
    #[serde(default)]
    pub creation_time: i64,
    #[serde(default)]
    pub motd: String,
    #[serde(default)]
    pub channel_type: ChannelPrivacy,
    /// Roster in join order.
    #[serde(default)]
    pub members: Vec<ClanMember>,
}

impl Clan {
    pub fn new(id: u32, tag: &str, name: impl Into<String>) -> Self {
        Self {
            id: ClanId(id),
            tag: ClanTag::from_str_lossy(tag),
            name: name.into(),
            created: 1,
            creation_time: 0,
            motd: String::new(),
            channel_type: ChannelPrivacy::Public,
            members: Vec::new(),
        }
    }
}

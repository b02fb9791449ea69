//! Games hosted through the server.

use std::net::Ipv4Addr;

use serde::{Deserialize, Serialize};

use super::{AccountId, ConnectionId, GameId};
use crate::tag::ClientTag;

/// Game type, rendered by its numeric code.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameType {
    #[default]
    None = 0,
    All,
    TopVsBottom,
    Melee,
    FreeForAll,
    OneOnOne,
    CaptureTheFlag,
    Greed,
    Slaughter,
    SuddenDeath,
    Ladder,
    Ironman,
    Mapset,
    TeamMelee,
    TeamFreeForAll,
    TeamCaptureTheFlag,
    Pgl,
    UseMapSettings,
    Diablo,
    Diablo2Open,
    Diablo2Closed,
    Anongame,
}

impl GameType {
    pub fn code(self) -> u32 {
        self as u32
    }
}

#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GameStatus {
    Started = 0,
    Full,
    #[default]
    Open,
    Loaded,
    Done,
}

impl GameStatus {
    pub fn code(self) -> u32 {
        self as u32
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Game {
    pub id: GameId,
    pub name: String,
    #[serde(default)]
    pub pass: String,
    #[serde(default)]
    pub info: String,
    #[serde(default)]
    pub game_type: GameType,
    #[serde(default)]
    pub flag: u32,
    pub addr: Ipv4Addr,
    #[serde(default)]
    pub port: u16,
    #[serde(default)]
    pub status: GameStatus,
    /// Players currently in the game; bounds the walk over `players`.
    #[serde(default)]
    pub current_players: u32,
    /// Players that ever joined; bounds the walk over `results`.
    #[serde(default)]
    pub total_players: u32,
    #[serde(default)]
    pub max_players: u32,
    #[serde(default)]
    pub mapname: String,
    #[serde(default)]
    pub option: u32,
    #[serde(default)]
    pub maptype: u32,
    #[serde(default)]
    pub tileset: u32,
    #[serde(default)]
    pub speed: u32,
    #[serde(default)]
    pub mapsize_x: u32,
    #[serde(default)]
    pub mapsize_y: u32,
    #[serde(default)]
    pub owner: Option<ConnectionId>,
    /// Player slots; an empty slot is `None`.
    #[serde(default)]
    pub players: Vec<Option<AccountId>>,
    /// Per-player result codes, allocated once results are reported.
    #[serde(default)]
    pub results: Option<Vec<i32>>,
    /// Results were reported inconsistently and should be disregarded.
    #[serde(default)]
    pub bad: bool,
    #[serde(default)]
    pub create_time: i64,
    #[serde(default)]
    pub start_time: i64,
    #[serde(default)]
    pub lastaccess_time: i64,
    #[serde(default)]
    pub difficulty: u32,
    /// Packed client version number.
    #[serde(default)]
    pub version: u32,
    #[serde(default)]
    pub startver: u32,
    #[serde(default)]
    pub clienttag: Option<ClientTag>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub realmname: Option<String>,
}

impl Game {
    pub fn new(id: u32, name: impl Into<String>) -> Self {
        Self {
            id: GameId(id),
            name: name.into(),
            pass: String::new(),
            info: String::new(),
            game_type: GameType::default(),
            flag: 0,
            addr: Ipv4Addr::UNSPECIFIED,
            port: 0,
            status: GameStatus::default(),
            current_players: 0,
            total_players: 0,
            max_players: 0,
            mapname: String::new(),
            option: 0,
            maptype: 0,
            tileset: 0,
            speed: 0,
            mapsize_x: 0,
            mapsize_y: 0,
            owner: None,
            players: Vec::new(),
            results: None,
            bad: false,
            create_time: 0,
            start_time: 0,
            lastaccess_time: 0,
            difficulty: 0,
            version: 0,
            startver: 0,
            clienttag: None,
            description: None,
            realmname: None,
        }
    }
}

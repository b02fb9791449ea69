//! Arranged teams.

use serde::{Deserialize, Serialize};

use super::{AccountId, TeamId};
use crate::tag::ClientTag;

/// Number of member slots every team carries.
pub const MAX_TEAMSIZE: usize = 4;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Team {
    pub id: TeamId,
    #[serde(default)]
    pub size: u8,
    #[serde(default)]
    pub clienttag: ClientTag,
    #[serde(default)]
    pub lastgame: i64,
    #[serde(default)]
    pub wins: u32,
    #[serde(default)]
    pub losses: u32,
    #[serde(default)]
    pub xp: u32,
    #[serde(default)]
    pub level: u32,
    #[serde(default)]
    pub rank: u32,
    /// Fixed slot array; `None` until the team roster is loaded.
    #[serde(default)]
    pub members: Option<[Option<AccountId>; MAX_TEAMSIZE]>,
}

impl Team {
    pub fn new(id: u32) -> Self {
        Self {
            id: TeamId(id),
            size: 0,
            clienttag: ClientTag::NONE,
            lastgame: 0,
            wins: 0,
            losses: 0,
            xp: 0,
            level: 0,
            rank: 0,
            members: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slots_from_yaml() {
        let t: Team = serde_yaml::from_str("id: 2\nsize: 2\nmembers: [1, 2, null, null]\n").unwrap();
        let slots = t.members.unwrap();
        assert_eq!(slots[0], Some(AccountId(1)));
        assert_eq!(slots[3], None);
    }

    #[test]
    fn wrong_slot_count_is_rejected() {
        assert!(serde_yaml::from_str::<Team>("id: 2\nmembers: [1, 2]\n").is_err());
    }
}

//! Read-only source entities.
//!
//! These model the server's live object graph. Cross-entity links are typed
//! ids resolved through the [`crate::directory`] traits, and every optional
//! substructure is an `Option` rather than a null pointer.

pub mod account;
pub mod channel;
pub mod clan;
pub mod game;
pub mod team;

pub use account::{Account, Connection, Friend, Mutual};
pub use channel::{Channel, ChannelMember};
pub use clan::{ChannelPrivacy, Clan, ClanMember, ClanStatus};
pub use game::{Game, GameStatus, GameType};
pub use team::{Team, MAX_TEAMSIZE};

macro_rules! entity_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        #[derive(serde::Serialize, serde::Deserialize)]
        #[serde(transparent)]
        pub struct $name(pub u32);

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                self.0.fmt(f)
            }
        }
    };
}

entity_id!(
    /// Account uid.
    AccountId
);
entity_id!(
    /// Live connection handle.
    ConnectionId
);
entity_id!(GameId);
entity_id!(ChannelId);
entity_id!(ClanId);
entity_id!(TeamId);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_display_as_plain_numbers() {
        assert_eq!(AccountId(42).to_string(), "42");
        assert_eq!(ChannelId(0).to_string(), "0");
    }

    #[test]
    fn ids_deserialize_from_bare_integers() {
        let id: GameId = serde_yaml::from_str("17").unwrap();
        assert_eq!(id, GameId(17));
    }
}

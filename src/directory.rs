//! Lookup collaborators the snapshot builders read through.
//!
//! Each trait covers one server-side list. Implementors hand out shared
//! references; the builders never keep them past a single call.

use crate::entity::{
    Account, AccountId, Channel, ChannelId, Clan, ClanId, Connection, ConnectionId, Game, GameId,
    Team, TeamId,
};

pub trait Accounts {
    fn account(&self, uid: AccountId) -> Option<&Account>;

    fn account_by_name(&self, name: &str) -> Option<&Account>;

    /// Name of the account in `slot`.
    ///
    /// Total over empty and dangling slots: both yield `""` and a warning,
    /// so callers may pass raw slot values without guarding them.
    fn account_name(&self, slot: Option<AccountId>) -> String {
        match slot {
            Some(uid) => match self.account(uid) {
                Some(account) => account.name.clone(),
                None => {
                    tracing::warn!("[directory] no account with uid={uid}");
                    String::new()
                }
            },
            None => {
                tracing::warn!("[directory] got NULL account");
                String::new()
            }
        }
    }
}

pub trait Connections: Accounts {
    fn connection(&self, id: ConnectionId) -> Option<&Connection>;

    /// Account authenticated on `id`, if any.
    fn connection_account(&self, id: ConnectionId) -> Option<&Account> {
        let uid = self.connection(id)?.account?;
        self.account(uid)
    }
}

pub trait Games {
    fn game(&self, id: GameId) -> Option<&Game>;
}

pub trait Channels {
    fn channel(&self, id: ChannelId) -> Option<&Channel>;
}

pub trait Clans {
    fn clan(&self, id: ClanId) -> Option<&Clan>;
}

pub trait Teams {
    fn team(&self, id: TeamId) -> Option<&Team>;
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Pair {
        accounts: Vec<Account>,
        conns: Vec<Connection>,
    }

    impl Accounts for Pair {
        fn account(&self, uid: AccountId) -> Option<&Account> {
            self.accounts.iter().find(|a| a.uid == uid)
        }
        fn account_by_name(&self, name: &str) -> Option<&Account> {
            self.accounts.iter().find(|a| a.name == name)
        }
    }

    impl Connections for Pair {
        fn connection(&self, id: ConnectionId) -> Option<&Connection> {
            self.conns.iter().find(|c| c.id == id)
        }
    }

    fn pair() -> Pair {
        let mut authed = Connection::new(10);
        authed.account = Some(AccountId(1));
        Pair {
            accounts: vec![Account::new(1, "alice")],
            conns: vec![authed, Connection::new(11)],
        }
    }

    #[test]
    fn account_name_is_total() {
        let p = pair();
        assert_eq!(p.account_name(Some(AccountId(1))), "alice");
        assert_eq!(p.account_name(Some(AccountId(99))), "");
        assert_eq!(p.account_name(None), "");
    }

    #[test]
    fn connection_account_requires_login() {
        let p = pair();
        assert_eq!(p.connection_account(ConnectionId(10)).map(|a| a.name.as_str()), Some("alice"));
        assert!(p.connection_account(ConnectionId(11)).is_none());
        assert!(p.connection_account(ConnectionId(12)).is_none());
    }
}

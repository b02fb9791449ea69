use super::Snapshots;
use crate::directory::{Accounts, Connections, Teams};
use crate::entity::{Account, Friend};
use crate::snapshot::Snapshot;
use crate::tag::bool_text;

impl<D: Connections + ?Sized> Snapshots<'_, D> {
    pub fn account_by_name(&self, name: &str) -> Snapshot {
        self.account(self.dir.account_by_name(name))
    }

    /// Identity and authorization always; session fields only while the
    /// account is online; `clan_id` only with a membership record.
    ///
    /// Friends and teams are not embedded, see [`Self::account_friends`] and
    /// [`Self::account_teams`].
    pub fn account(&self, account: Option<&Account>) -> Snapshot {
        let mut o = Snapshot::new();
        let Some(account) = account else { return o };

        o.set("id", account.uid.to_string());
        o.set("name", account.name.as_str());
        o.set("email", account.email.as_str());
        o.set("commandgroups", account.command_groups.to_string());
        o.set("locked", bool_text(account.locked));
        o.set("muted", bool_text(account.muted));

        if let Some(c) = account.connection.and_then(|id| self.dir.connection(id)) {
            o.set("country", c.country.as_str());
            o.set("clientver", c.clientver.as_str());
            o.set("latency", c.latency.to_string());
            o.set_opt("clienttag", c.clienttag.filter(|t| !t.is_none()).map(|t| t.as_text()));
            o.set_opt("game_id", c.game.map(|id| id.to_string()));
            o.set_opt("channel_id", c.channel.map(|id| id.to_string()));
        }

        o.set_opt("clan_id", account.clan.map(|id| id.to_string()));

        o
    }
}

impl<D: Accounts + ?Sized> Snapshots<'_, D> {
    pub fn friend(&self, friend: Option<&Friend>) -> Snapshot {
        let mut o = Snapshot::new();
        let Some(friend) = friend else { return o };

        o.set("username", self.dir.account_name(Some(friend.account)));
        o.set("mutual", friend.mutual.code().to_string());

        o
    }

    /// One snapshot per friend-list entry, in list order.
    pub fn account_friends(&self, account: Option<&Account>) -> Vec<Snapshot> {
        account
            .map(|a| a.friends.iter().map(|f| self.friend(Some(f))).collect())
            .unwrap_or_default()
    }
}

impl<D: Connections + Teams + ?Sized> Snapshots<'_, D> {
    /// One snapshot per team the account belongs to. Team ids that no longer
    /// resolve are skipped.
    pub fn account_teams(&self, account: Option<&Account>) -> Vec<Snapshot> {
        let Some(account) = account else { return Vec::new() };
        account
            .teams
            .iter()
            .filter_map(|&id| self.dir.team(id))
            .map(|t| self.team(Some(t)))
            .collect()
    }
}

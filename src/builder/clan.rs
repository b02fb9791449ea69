use super::Snapshots;
use crate::directory::{Accounts, Clans};
use crate::entity::{Clan, ClanId, ClanMember};
use crate::snapshot::Snapshot;
use crate::tag::flag_text;

impl<D: Clans + ?Sized> Snapshots<'_, D> {
    pub fn clan_by_id(&self, id: ClanId) -> Snapshot {
        self.clan(self.dir.clan(id))
    }
}

impl<D: ?Sized> Snapshots<'_, D> {
    /// Members are not embedded, see [`Self::clan_members`].
    pub fn clan(&self, clan: Option<&Clan>) -> Snapshot {
        let mut o = Snapshot::new();
        let Some(clan) = clan else { return o };

        o.set("id", clan.id.to_string());
        o.set("tag", clan.tag.as_text());
        o.set("clanname", clan.name.as_str());
        o.set("created", clan.created.to_string());
        o.set("creation_time", clan.creation_time.to_string());
        o.set("clan_motd", clan.motd.as_str());
        o.set("channel_type", clan.channel_type.code().to_string());

        o
    }
}

impl<D: Accounts + ?Sized> Snapshots<'_, D> {
    pub fn clan_member(&self, member: Option<&ClanMember>) -> Snapshot {
        let mut o = Snapshot::new();
        let Some(member) = member else { return o };

        o.set("username", self.dir.account_name(Some(member.account)));
        o.set("status", member.status.code().to_string());
        o.set("clan_id", member.clan.to_string());
        o.set("join_time", member.join_time.to_string());
        o.set("fullmember", flag_text(member.fullmember));

        o
    }

    /// One snapshot per roster entry, in join order.
    pub fn clan_members(&self, clan: Option<&Clan>) -> Vec<Snapshot> {
        clan.map(|c| c.members.iter().map(|m| self.clan_member(Some(m))).collect())
            .unwrap_or_default()
    }
}

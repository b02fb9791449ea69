use super::Snapshots;
use crate::directory::{Accounts, Teams};
use crate::entity::{Team, TeamId};
use crate::snapshot::Snapshot;

impl<D: Accounts + Teams + ?Sized> Snapshots<'_, D> {
    pub fn team_by_id(&self, id: TeamId) -> Snapshot {
        self.team(self.dir.team(id))
    }
}

impl<D: Accounts + ?Sized> Snapshots<'_, D> {
    pub fn team(&self, team: Option<&Team>) -> Snapshot {
        let mut o = Snapshot::new();
        let Some(team) = team else { return o };

        o.set("id", team.id.to_string());
        o.set("size", team.size.to_string());

        o.set("clienttag", team.clienttag.as_text());
        o.set("lastgame", team.lastgame.to_string());
        o.set("wins", team.wins.to_string());
        o.set("losses", team.losses.to_string());
        o.set("xp", team.xp.to_string());
        o.set("level", team.level.to_string());
        o.set("rank", team.rank.to_string());

        // Every slot goes through name resolution, empty ones included.
        let members = match &team.members {
            Some(slots) => self.join(slots.iter().map(|&slot| self.dir.account_name(slot))),
            None => String::new(),
        };
        o.set("members", members);

        o
    }
}

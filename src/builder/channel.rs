use super::Snapshots;
use crate::config::BanlistMode;
use crate::directory::{Channels, Connections};
use crate::entity::{Channel, ChannelId};
use crate::snapshot::Snapshot;

impl<D: Connections + Channels + ?Sized> Snapshots<'_, D> {
    pub fn channel_by_id(&self, id: ChannelId) -> Snapshot {
        self.channel(self.dir.channel(id))
    }
}

impl<D: Connections + ?Sized> Snapshots<'_, D> {
    pub fn channel(&self, channel: Option<&Channel>) -> Snapshot {
        let mut o = Snapshot::new();
        let Some(channel) = channel else { return o };

        o.set("id", channel.id.to_string());
        o.set("name", channel.name.as_str());
        o.set_opt("shortname", channel.shortname.as_deref());
        o.set_opt("country", channel.country.as_deref());
        o.set("flags", channel.flags.to_string());
        o.set("maxmembers", channel.max_members.to_string());
        o.set("currmembers", channel.curr_members.to_string());

        o.set("clienttag", channel.clienttag.as_text());
        o.set_opt("realmname", channel.realmname.as_deref());
        o.set_opt("logname", channel.logname.as_deref());

        // Westwood Online extensions
        o.set("minmembers", channel.min_members.to_string());
        o.set("gameType", channel.game_type.to_string());
        o.set_opt("gameExtension", channel.game_extension.as_deref());

        // Members without a logged-in account contribute nothing.
        let mut members: Vec<&str> = channel
            .members()
            .filter_map(|m| self.dir.connection_account(m.connection))
            .map(|a| a.name.as_str())
            .collect();
        o.set("memberlist", self.join(&members));

        let mut bans: Vec<&str> = Vec::new();
        for entry in channel.bans() {
            let Some(name) = entry else {
                tracing::error!("[channel] found NULL name in banlist of channel id={}", channel.id);
                continue;
            };
            match self.config.banlist {
                // memberlist is already emitted, so this never reaches output
                // and banlist stays empty.
                BanlistMode::Legacy => members.push(name),
                BanlistMode::Separate => bans.push(name),
            }
        }
        o.set("banlist", self.join(&bans));

        o
    }
}

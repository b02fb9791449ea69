use super::Snapshots;
use crate::directory::{Connections, Games};
use crate::entity::{Game, GameId};
use crate::snapshot::Snapshot;
use crate::tag::{addr_to_text, flag_text, vernum_to_text};

impl<D: Connections + Games + ?Sized> Snapshots<'_, D> {
    pub fn game_by_id(&self, id: GameId) -> Snapshot {
        self.game(self.dir.game(id))
    }
}

impl<D: Connections + ?Sized> Snapshots<'_, D> {
    pub fn game(&self, game: Option<&Game>) -> Snapshot {
        let mut o = Snapshot::new();
        let Some(game) = game else { return o };

        o.set("id", game.id.to_string());
        o.set("name", game.name.as_str());
        o.set("pass", game.pass.as_str());
        o.set("info", game.info.as_str());
        o.set("type", game.game_type.code().to_string());
        o.set("flag", game.flag.to_string());

        o.set("address", addr_to_text(game.addr));
        o.set("port", game.port.to_string());
        o.set("status", game.status.code().to_string());
        o.set("currentplayers", game.current_players.to_string());
        o.set("totalplayers", game.total_players.to_string());
        o.set("maxplayers", game.max_players.to_string());
        o.set("mapname", game.mapname.as_str());
        o.set("option", game.option.to_string());
        o.set("maptype", game.maptype.to_string());
        o.set("tileset", game.tileset.to_string());
        o.set("speed", game.speed.to_string());
        o.set("mapsize_x", game.mapsize_x.to_string());
        o.set("mapsize_y", game.mapsize_y.to_string());
        o.set_opt(
            "owner",
            game.owner
                .and_then(|c| self.dir.connection_account(c))
                .map(|a| a.name.as_str()),
        );

        // Empty slots are skipped, so the list may be shorter than the count.
        let players = game
            .players
            .iter()
            .take(game.current_players as usize)
            .flatten()
            .filter_map(|&uid| self.dir.account(uid))
            .map(|a| a.name.as_str());
        o.set("players", self.join(players));

        // Consumers must honor `bad` themselves; results are emitted anyway
        // unless suppression is configured.
        o.set("bad", flag_text(game.bad));
        let results = match &game.results {
            Some(_) if game.bad && self.config.suppress_bad_results => String::new(),
            Some(results) => self.join(
                results
                    .iter()
                    .take(game.total_players as usize)
                    .map(|r| r.to_string()),
            ),
            None => String::new(),
        };
        o.set("results", results);

        o.set("create_time", game.create_time.to_string());
        o.set("start_time", game.start_time.to_string());
        o.set("lastaccess_time", game.lastaccess_time.to_string());

        o.set("difficulty", game.difficulty.to_string());
        o.set("version", vernum_to_text(game.version));
        o.set("startver", game.startver.to_string());

        o.set_opt("clienttag", game.clienttag.filter(|t| !t.is_none()).map(|t| t.as_text()));

        o.set_opt("description", game.description.as_deref());
        o.set_opt("realmname", game.realmname.as_deref());

        o
    }
}

#[cfg(test)]
mod tests {
    use std::net::Ipv4Addr;

    use super::*;
    use crate::builder::fake::FakeDir;
    use crate::config::SnapshotConfig;
    use crate::entity::{AccountId, ConnectionId, GameStatus, GameType};
    use crate::tag::ClientTag;

    fn lobby() -> (FakeDir, Game) {
        let dir = FakeDir::with_online(&["A", "B", "C"]);
        let mut g = Game::new(12, "lobby");
        g.addr = Ipv4Addr::new(192, 168, 1, 20);
        g.port = 6112;
        g.game_type = GameType::Melee;
        g.status = GameStatus::Started;
        g.current_players = 2;
        g.total_players = 2;
        g.max_players = 8;
        g.players = vec![Some(AccountId(1)), Some(AccountId(2))];
        g.version = 0x0101_1C00;
        (dir, g)
    }

    #[test]
    fn null_and_unknown_are_empty() {
        let (mut dir, g) = lobby();
        dir.games.push(g);
        let s = Snapshots::new(&dir);
        assert!(s.game(None).is_empty());
        assert!(s.game_by_id(GameId(404)).is_empty());
        assert!(!s.game_by_id(GameId(12)).is_empty());
    }

    #[test]
    fn scalar_fields() {
        let (dir, g) = lobby();
        let o = Snapshots::new(&dir).game(Some(&g));
        assert_eq!(o.get("id"), Some("12"));
        assert_eq!(o.get("name"), Some("lobby"));
        assert_eq!(o.get("pass"), Some(""));
        assert_eq!(o.get("type"), Some("3"));
        assert_eq!(o.get("address"), Some("192.168.1.20"));
        assert_eq!(o.get("port"), Some("6112"));
        assert_eq!(o.get("status"), Some("0"));
        assert_eq!(o.get("currentplayers"), Some("2"));
        assert_eq!(o.get("maxplayers"), Some("8"));
        assert_eq!(o.get("version"), Some("1.1.28.0"));
        assert_eq!(o.get("bad"), Some("0"));
        assert_eq!(o.get("results"), Some(""));
        for key in ["owner", "clienttag", "description", "realmname"] {
            assert!(!o.contains_key(key), "{key} should be absent");
        }
    }

    #[test]
    fn players_in_slot_order() {
        let (dir, g) = lobby();
        let o = Snapshots::new(&dir).game(Some(&g));
        assert_eq!(o.get("players"), Some("A,B"));
    }

    #[test]
    fn no_players_still_emits_key() {
        let (dir, mut g) = lobby();
        g.current_players = 0;
        let o = Snapshots::new(&dir).game(Some(&g));
        assert_eq!(o.get("players"), Some(""));
    }

    #[test]
    fn empty_slot_is_skipped_not_padded() {
        let (dir, mut g) = lobby();
        g.players = vec![None, Some(AccountId(2))];
        let o = Snapshots::new(&dir).game(Some(&g));
        assert_eq!(o.get("players"), Some("B"));
    }

    #[test]
    fn slots_past_current_count_are_ignored() {
        let (dir, mut g) = lobby();
        g.players.push(Some(AccountId(3)));
        let o = Snapshots::new(&dir).game(Some(&g));
        assert_eq!(o.get("players"), Some("A,B"));
    }

    #[test]
    fn owner_needs_logged_in_connection() {
        let (mut dir, mut g) = lobby();
        g.owner = Some(ConnectionId(101));
        let o = Snapshots::new(&dir).game(Some(&g));
        assert_eq!(o.get("owner"), Some("A"));

        dir.conns[0].account = None;
        let o = Snapshots::new(&dir).game(Some(&g));
        assert!(!o.contains_key("owner"));
    }

    #[test]
    fn results_are_raw_and_bounded_by_total() {
        let (dir, mut g) = lobby();
        g.results = Some(vec![1, 2, 7]);
        let o = Snapshots::new(&dir).game(Some(&g));
        assert_eq!(o.get("results"), Some("1,2"));
    }

    #[test]
    fn bad_results_are_still_emitted_by_default() {
        let (dir, mut g) = lobby();
        g.results = Some(vec![1, 2]);
        g.bad = true;
        let o = Snapshots::new(&dir).game(Some(&g));
        assert_eq!(o.get("bad"), Some("1"));
        assert_eq!(o.get("results"), Some("1,2"));

        let config = SnapshotConfig { suppress_bad_results: true, ..SnapshotConfig::default() };
        let o = Snapshots::with_config(&dir, config).game(Some(&g));
        assert_eq!(o.get("results"), Some(""));
    }

    #[test]
    fn optional_text_fields() {
        let (dir, mut g) = lobby();
        g.clienttag = Some(ClientTag::from_str_lossy("W2BN"));
        g.description = Some("no rush".into());
        g.realmname = Some("USEast".into());
        let o = Snapshots::new(&dir).game(Some(&g));
        assert_eq!(o.get("clienttag"), Some("W2BN"));
        assert_eq!(o.get("description"), Some("no rush"));
        assert_eq!(o.get("realmname"), Some("USEast"));
    }

    #[test]
    fn custom_delimiter() {
        let (dir, g) = lobby();
        let config = SnapshotConfig { list_delimiter: ';', ..SnapshotConfig::default() };
        let o = Snapshots::with_config(&dir, config).game(Some(&g));
        assert_eq!(o.get("players"), Some("A;B"));
    }
}

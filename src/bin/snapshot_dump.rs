use std::sync::Arc;

use anyhow::{anyhow, bail, Context, Result};
use bnet_snapshot::config::SnapshotConfig;
use bnet_snapshot::entity::{ChannelId, ClanId, GameId, TeamId};
use bnet_snapshot::world::World;
use bnet_snapshot::{Snapshot, Snapshots};

const USAGE: &str = "Usage: snapshot_dump [--conf FILE] --world FILE \
<account NAME | game ID | channel ID | clan ID | team ID | script FILE>";

fn parse_id(kind: &str, key: &str) -> Result<u32> {
    key.parse()
        .with_context(|| format!("{kind} id must be a number, got {key:?}"))
}

fn main() -> Result<()> {
    let mut conf_file: Option<String> = None;
    let mut world_file: Option<String> = None;
    let mut positional: Vec<String> = Vec::new();

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--help" | "--h" | "--?" | "/?" => {
                println!("{USAGE}");
                return Ok(());
            }
            "--conf" => {
                if i + 1 < args.len() {
                    i += 1;
                    conf_file = Some(args[i].clone());
                } else {
                    eprintln!("Error: --conf requires a FILE argument");
                    return Ok(());
                }
            }
            "--world" => {
                if i + 1 < args.len() {
                    i += 1;
                    world_file = Some(args[i].clone());
                } else {
                    eprintln!("Error: --world requires a FILE argument");
                    return Ok(());
                }
            }
            other => positional.push(other.to_string()),
        }
        i += 1;
    }

    let config = match &conf_file {
        Some(path) => SnapshotConfig::from_file(path)
            .with_context(|| format!("Cannot load config: {path}"))?,
        None => SnapshotConfig::default(),
    };

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt()
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .with_writer(std::io::stderr)
        .with_env_filter(filter)
        .init();

    let Some(world_file) = world_file else {
        bail!("--world is required\n{USAGE}");
    };
    let world = World::from_file(&world_file)
        .with_context(|| format!("Cannot load world: {world_file}"))?;

    let [kind, key] = positional.as_slice() else {
        bail!("expected <kind> <key>\n{USAGE}");
    };

    if kind == "script" {
        return run_script(world, config, key);
    }

    let snapshots = Snapshots::with_config(&world, config);
    let snapshot: Snapshot = match kind.as_str() {
        "account" => snapshots.account_by_name(key),
        "game" => snapshots.game_by_id(GameId(parse_id(kind, key)?)),
        "channel" => snapshots.channel_by_id(ChannelId(parse_id(kind, key)?)),
        "clan" => snapshots.clan_by_id(ClanId(parse_id(kind, key)?)),
        "team" => snapshots.team_by_id(TeamId(parse_id(kind, key)?)),
        other => bail!("unknown kind {other:?}\n{USAGE}"),
    };

    if snapshot.is_empty() {
        tracing::warn!("[dump] {kind} {key:?} not found");
    }
    print!("{}", serde_yaml::to_string(&snapshot).context("Failed to render snapshot")?);
    Ok(())
}

fn run_script(world: World, config: SnapshotConfig, path: &str) -> Result<()> {
    let src = std::fs::read_to_string(path)
        .with_context(|| format!("Cannot read script: {path}"))?;

    // mlua::Error is not Send + Sync without the `send` feature, so it
    // cannot go through `?` into anyhow directly.
    let lua = mlua::Lua::new();
    bnet_snapshot::lua::register(&lua, Arc::new(world), config)
        .map_err(|e| anyhow!("Cannot install api table: {e}"))?;
    lua.load(src.as_str())
        .set_name(path)
        .exec()
        .map_err(|e| anyhow!("Script failed: {path}: {e}"))?;
    Ok(())
}

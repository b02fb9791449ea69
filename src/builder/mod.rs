//! Snapshot builders, one `impl` block per entity kind.
//!
//! Every entry point comes in two shapes: resolve-by-key, which looks the
//! entity up through a directory and delegates, and build-from-entity, which
//! takes `Option<&T>`. Both return an empty [`Snapshot`](crate::snapshot::Snapshot) when there is
//! nothing to project, so callers can always iterate the result.

mod account;
mod channel;
mod clan;
mod game;
mod team;

use crate::config::SnapshotConfig;
use crate::join::join;

/// Builds snapshots against one set of directories.
///
/// Holds no state between calls: the same entity yields the same snapshot
/// every time.
pub struct Snapshots<'a, D: ?Sized> {
    dir: &'a D,
    config: SnapshotConfig,
}

impl<'a, D: ?Sized> Snapshots<'a, D> {
    pub fn new(dir: &'a D) -> Self {
        Self::with_config(dir, SnapshotConfig::default())
    }

    pub fn with_config(dir: &'a D, config: SnapshotConfig) -> Self {
        Self { dir, config }
    }

    /// The directories this builder reads through.
    pub fn directory(&self) -> &'a D {
        self.dir
    }

    fn join<I, S>(&self, items: I) -> String
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        join(items, self.config.list_delimiter)
    }
}

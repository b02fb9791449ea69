//! bnet-snapshot - live-state snapshot adapter
//!
//! Projects the server's linked entity graph (accounts, games, channels,
//! clans, clan members, teams, friends) into flat string-keyed maps that a
//! scripting layer can consume without touching the live objects.

// ============================================
// Core Modules
// ============================================

/// Snapshot configuration (YAML)
pub mod config;
/// Read-only entity model
pub mod entity;
/// Lookup collaborators
pub mod directory;
/// Per-entity snapshot builders
pub mod builder;
/// Delimited list rendering
pub mod join;
/// Owned field-name → text map
pub mod snapshot;
/// Packed tag / version / address formatting
pub mod tag;

// ============================================
// Consumers
// ============================================

/// In-memory directories loaded from YAML fixtures
pub mod world;
/// Lua `api` table
pub mod lua;

pub use builder::Snapshots;
pub use snapshot::Snapshot;

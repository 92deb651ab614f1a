//! Swiss-system tournament tracking: players, match results, standings and
//! next-round pairings over a pluggable store.

pub mod data;
pub mod db;
pub mod error;
pub mod pairing;
pub mod standings;
pub mod store;
pub mod tournament;

pub use data::{Match, Pairing, Player, PlayerId, StandingEntry};
pub use db::SqliteStore;
pub use error::{Result, TournamentError};
pub use store::{MemoryStore, Store};
pub use tournament::Tournament;

use thiserror::Error;

use crate::data::PlayerId;

pub type Result<T> = std::result::Result<T, TournamentError>;

#[derive(Debug, Error)]
pub enum TournamentError {
	/// The backing store could not be reached or a query failed.
	#[error("storage unavailable: {0}")]
	StorageUnavailable(#[from] rusqlite::Error),

	/// A match named an unknown player, or the same player twice.
	#[error("invalid player reference: winner {winner}, loser {loser}")]
	InvalidReference { winner: PlayerId, loser: PlayerId },

	#[error("cannot pair an odd number of players ({0})")]
	OddPlayerCount(usize),

	#[error("player name is empty")]
	EmptyName,

	#[error("could not read match file: {0}")]
	Import(#[from] csv::Error),
}

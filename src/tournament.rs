use std::io::Read;

use log::{debug, info, warn};
use serde::Deserialize;

use crate::data::{sanitize_name, Match, Pairing, PlayerId, StandingEntry};
use crate::error::{Result, TournamentError};
use crate::pairing;
use crate::standings::rank;
use crate::store::Store;

/// A Swiss-system tournament over an injected store.
pub struct Tournament<S> {
	store: S,
}

#[derive(Debug, Deserialize)]
struct ImportedMatch {
	winner: i64,
	loser: i64,
}

impl<S: Store> Tournament<S> {
	pub fn new(store: S) -> Self {
		Self { store }
	}

	/// Registers a player under its sanitized name. Names need not be unique.
	pub fn register_player(&mut self, name: &str) -> Result<PlayerId> {
		let name = sanitize_name(name);
		if name.is_empty() {
			warn!("rejected registration with empty name");
			return Err(TournamentError::EmptyName);
		}

		let id = self.store.insert_player(&name)?;
		info!("registered player {id} ({name})");

		Ok(id)
	}

	/// Removes all players, and with them all matches.
	pub fn delete_players(&mut self) -> Result<()> {
		self.store.delete_all_players()?;
		info!("deleted all players and matches");

		Ok(())
	}

	pub fn delete_matches(&mut self) -> Result<()> {
		self.store.delete_all_matches()?;
		info!("deleted all matches");

		Ok(())
	}

	pub fn count_players(&self) -> Result<usize> {
		self.store.count_players()
	}

	/// Records one result. Both players must exist and differ; nothing is
	/// written otherwise. Reporting the same pair twice records two matches.
	pub fn report_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<()> {
		if winner == loser || !self.store.has_player(winner)? || !self.store.has_player(loser)? {
			warn!("rejected match with winner {winner} and loser {loser}");
			return Err(TournamentError::InvalidReference { winner, loser });
		}

		self.store.insert_match(winner, loser)?;
		info!("recorded match: {winner} beat {loser}");

		Ok(())
	}

	/// Reports every `winner,loser` row of a CSV file, in order. Rows before
	/// the first bad one stay recorded.
	pub fn import_matches<R: Read>(&mut self, reader: R) -> Result<usize> {
		let mut reader = csv::ReaderBuilder::new().trim(csv::Trim::All).from_reader(reader);
		let mut count = 0;

		for record in reader.deserialize::<ImportedMatch>() {
			let record = record?;
			self.report_match(PlayerId(record.winner), PlayerId(record.loser))?;
			count += 1;
		}

		info!("imported {count} matches");
		Ok(count)
	}

	/// Every player with wins and matches played, most wins first, ties by
	/// ascending id.
	pub fn player_standings(&self) -> Result<Vec<StandingEntry>> {
		let mut standings = self.store.query_standings()?;
		rank(&mut standings);
		debug!("computed standings for {} players", standings.len());

		Ok(standings)
	}

	/// Pairings for the next round, built from the current standings.
	pub fn swiss_pairings(&self) -> Result<Vec<Pairing>> {
		let standings = self.player_standings()?;
		let pairings = pairing::swiss_pairings(&standings)?;
		debug!("paired {} matches", pairings.len());

		Ok(pairings)
	}

	pub fn match_history(&self) -> Result<Vec<Match>> {
		self.store.matches()
	}
}

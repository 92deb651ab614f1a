use chrono::Utc;

use crate::data::{Match, Player, PlayerId, StandingEntry};
use crate::error::Result;
use crate::standings::tally;

/// Durable record of players and match results.
///
/// Every method is a single atomic operation against the backend; nothing
/// spans calls.
pub trait Store {
	/// Stores a new player and returns its freshly assigned id. Ids are never
	/// reused, even after `delete_all_players`.
	fn insert_player(&mut self, name: &str) -> Result<PlayerId>;

	/// Removes every player together with every match.
	fn delete_all_players(&mut self) -> Result<()>;

	fn delete_all_matches(&mut self) -> Result<()>;

	fn count_players(&self) -> Result<usize>;

	fn has_player(&self, id: PlayerId) -> Result<bool>;

	fn insert_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<()>;

	/// One entry per registered player with its win and match counts.
	fn query_standings(&self) -> Result<Vec<StandingEntry>>;

	/// All recorded matches, oldest first.
	fn matches(&self) -> Result<Vec<Match>>;
}

/// Store kept entirely in memory. Standings are a fold over the match log.
#[derive(Debug, Default)]
pub struct MemoryStore {
	players: Vec<Player>,
	matches: Vec<Match>,
	last_player_id: i64,
	last_match_id: i64,
}

impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}
}

impl Store for MemoryStore {
	fn insert_player(&mut self, name: &str) -> Result<PlayerId> {
		self.last_player_id += 1;
		let id = PlayerId(self.last_player_id);
		self.players.push(Player {
			id,
			name: name.to_owned(),
		});

		Ok(id)
	}

	fn delete_all_players(&mut self) -> Result<()> {
		self.matches.clear();
		self.players.clear();
		Ok(())
	}

	fn delete_all_matches(&mut self) -> Result<()> {
		self.matches.clear();
		Ok(())
	}

	fn count_players(&self) -> Result<usize> {
		Ok(self.players.len())
	}

	fn has_player(&self, id: PlayerId) -> Result<bool> {
		Ok(self.players.iter().any(|p| p.id == id))
	}

	fn insert_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<()> {
		self.last_match_id += 1;
		self.matches.push(Match {
			id: self.last_match_id,
			winner,
			loser,
			played_at: Utc::now().naive_utc(),
		});

		Ok(())
	}

	fn query_standings(&self) -> Result<Vec<StandingEntry>> {
		Ok(tally(&self.players, &self.matches))
	}

	fn matches(&self) -> Result<Vec<Match>> {
		Ok(self.matches.clone())
	}
}

use crate::data::{Pairing, StandingEntry};
use crate::error::{Result, TournamentError};

/// Pairs each player with the next one down the standings: positions
/// (0, 1), (2, 3), and so on. Expects ranked input.
pub fn swiss_pairings(standings: &[StandingEntry]) -> Result<Vec<Pairing>> {
	if standings.len() % 2 != 0 {
		return Err(TournamentError::OddPlayerCount(standings.len()));
	}

	Ok(standings
		.chunks_exact(2)
		.map(|pair| Pairing {
			id1: pair[0].id,
			name1: pair[0].name.clone(),
			id2: pair[1].id,
			name2: pair[1].name.clone(),
		})
		.collect())
}

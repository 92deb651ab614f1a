use std::collections::HashMap;

use crate::data::{Match, Player, PlayerId, StandingEntry};

/// Folds the match log into one entry per player, including players who
/// have not played yet. The result is ranked.
pub fn tally(players: &[Player], matches: &[Match]) -> Vec<StandingEntry> {
	let mut records: HashMap<PlayerId, (u32, u32)> = HashMap::new();

	for m in matches {
		let winner = records.entry(m.winner).or_default();
		winner.0 += 1;
		winner.1 += 1;
		records.entry(m.loser).or_default().1 += 1;
	}

	let mut standings: Vec<StandingEntry> = players
		.iter()
		.map(|player| {
			let (wins, matches) = records.get(&player.id).copied().unwrap_or_default();
			StandingEntry {
				wins,
				matches,
				..StandingEntry::new(player)
			}
		})
		.collect();

	rank(&mut standings);
	standings
}

/// Orders by wins, most first. Equal wins fall back to ascending id so the
/// same history always yields the same order.
pub fn rank(standings: &mut [StandingEntry]) {
	standings.sort_by(|a, b| b.wins.cmp(&a.wins).then(a.id.cmp(&b.id)));
}

#[cfg(test)]
mod tests {
	use chrono::NaiveDateTime;

	use super::*;

	fn player(id: i64, name: &str) -> Player {
		Player {
			id: PlayerId(id),
			name: name.to_owned(),
		}
	}

	fn result(id: i64, winner: i64, loser: i64) -> Match {
		Match {
			id,
			winner: PlayerId(winner),
			loser: PlayerId(loser),
			played_at: NaiveDateTime::default(),
		}
	}

	fn summary(standings: &[StandingEntry]) -> Vec<(i64, u32, u32)> {
		standings.iter().map(|s| (s.id.0, s.wins, s.matches)).collect()
	}

	#[test]
	fn players_without_matches_are_listed() {
		let players = [player(1, "Alice"), player(2, "Bob")];
		let standings = tally(&players, &[]);

		assert_eq!(summary(&standings), vec![(1, 0, 0), (2, 0, 0)]);
		assert_eq!(standings[0].name, "Alice");
	}

	#[test]
	fn wins_and_matches_are_counted_once_per_result() {
		let players = [player(1, "Alice"), player(2, "Bob"), player(3, "Carol")];
		let matches = [result(1, 2, 1), result(2, 2, 3), result(3, 1, 3)];

		assert_eq!(
			summary(&tally(&players, &matches)),
			vec![(2, 2, 2), (1, 1, 2), (3, 0, 2)]
		);
	}

	#[test]
	fn equal_wins_break_by_id() {
		let mut standings = vec![
			StandingEntry {
				wins: 1,
				matches: 1,
				..StandingEntry::new(&player(9, "Zed"))
			},
			StandingEntry::new(&player(4, "Dave")),
			StandingEntry {
				wins: 1,
				matches: 1,
				..StandingEntry::new(&player(3, "Carol"))
			},
			StandingEntry::new(&player(2, "Bob")),
		];
		rank(&mut standings);

		assert_eq!(
			summary(&standings),
			vec![(3, 1, 1), (9, 1, 1), (2, 0, 0), (4, 0, 0)]
		);
	}
}

use serde::Serialize;

use swiss::{Match, Pairing, StandingEntry};

pub fn standings_string(standings: &[StandingEntry]) -> String {
	let mut string = String::from("# Standings\n```");

	for (rank, entry) in standings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) {}/{}",
			rank + 1,
			entry.name,
			entry.id,
			entry.wins,
			entry.matches
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn pairings_string(pairings: &[Pairing]) -> String {
	let mut string = String::from("# Pairings\n```");

	for (table, pairing) in pairings.iter().enumerate() {
		string.push_str(&format!(
			"\n{}: {} (#{}) vs {} (#{})",
			table + 1,
			pairing.name1,
			pairing.id1,
			pairing.name2,
			pairing.id2
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn matches_string(matches: &[Match]) -> String {
	let mut string = String::from("# Matches\n```");

	for m in matches {
		string.push_str(&format!(
			"\n{}: #{} beat #{} at {}",
			m.id,
			m.winner,
			m.loser,
			m.played_at.format("%Y-%m-%d %H:%M:%S")
		));
	}

	string.push_str("\n```\n");
	string
}

pub fn json_string<T: Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
	let mut string = serde_json::to_string_pretty(value)?;
	string.push('\n');
	Ok(string)
}

#[cfg(test)]
mod tests {
	use super::*;
	use swiss::PlayerId;

	#[test]
	fn standings_are_numbered_from_one() {
		let standings = [
			StandingEntry {
				id: PlayerId(2),
				name: "Bob".into(),
				wins: 1,
				matches: 1,
			},
			StandingEntry {
				id: PlayerId(1),
				name: "Alice".into(),
				wins: 0,
				matches: 1,
			},
		];

		assert_eq!(
			standings_string(&standings),
			"# Standings\n```\n1: Bob (#2) 1/1\n2: Alice (#1) 0/1\n```\n"
		);
	}

	#[test]
	fn pairings_render_both_sides() {
		let pairings = [Pairing {
			id1: PlayerId(3),
			name1: "Carol".into(),
			id2: PlayerId(4),
			name2: "Dave".into(),
		}];

		assert_eq!(
			pairings_string(&pairings),
			"# Pairings\n```\n1: Carol (#3) vs Dave (#4)\n```\n"
		);
	}

	#[test]
	fn json_uses_plain_ids() {
		let pairings = [Pairing {
			id1: PlayerId(3),
			name1: "Carol".into(),
			id2: PlayerId(4),
			name2: "Dave".into(),
		}];
		let json = json_string(&pairings[..]).unwrap();

		assert!(json.contains("\"id1\": 3"));
		assert!(json.ends_with("]\n"));
	}
}

use std::fmt;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store when a player registers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PlayerId(pub i64);

impl fmt::Display for PlayerId {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		self.0.fmt(f)
	}
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Player {
	pub id: PlayerId,
	pub name: String,
}

/// One recorded result. Never updated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
	pub id: i64,
	pub winner: PlayerId,
	pub loser: PlayerId,
	pub played_at: NaiveDateTime,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StandingEntry {
	pub id: PlayerId,
	pub name: String,
	pub wins: u32,
	pub matches: u32,
}

impl StandingEntry {
	pub fn new(player: &Player) -> Self {
		Self {
			id: player.id,
			name: player.name.clone(),
			wins: 0,
			matches: 0,
		}
	}
}

/// Two adjacent standings entries, higher-ranked first.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Pairing {
	pub id1: PlayerId,
	pub name1: String,
	pub id2: PlayerId,
	pub name2: String,
}

/// Strips surrounding whitespace, control characters and markup brackets
/// from a name supplied by the caller.
pub fn sanitize_name(raw: &str) -> String {
	raw.trim()
		.chars()
		.filter(|c| !c.is_control() && *c != '<' && *c != '>')
		.collect()
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn sanitize_keeps_ordinary_names() {
		assert_eq!(sanitize_name("Ana María O'Neil"), "Ana María O'Neil");
	}

	#[test]
	fn sanitize_drops_control_and_markup() {
		assert_eq!(sanitize_name("  <b>Bob</b>\n"), "bBob/b");
		assert_eq!(sanitize_name("Car\u{7}ol\t"), "Carol");
	}

	#[test]
	fn sanitize_can_leave_nothing() {
		assert_eq!(sanitize_name(" \r\n<> "), "");
	}
}

use std::path::Path;

use chrono::{NaiveDateTime, Utc};
use log::debug;
use rusqlite::{params, Connection};

use crate::data::{Match, PlayerId, StandingEntry};
use crate::error::Result;
use crate::store::Store;

pub fn create_schema(conn: &mut Connection) -> rusqlite::Result<()> {
	let tx = conn.transaction()?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS players (
			id     INTEGER PRIMARY KEY AUTOINCREMENT,
			name   TEXT    NOT NULL
		);",
		[],
	)?;

	tx.execute(
		"CREATE TABLE IF NOT EXISTS matches (
			id        INTEGER PRIMARY KEY AUTOINCREMENT,
			winner_id INTEGER REFERENCES players (id) ON DELETE CASCADE
							  NOT NULL,
			loser_id  INTEGER REFERENCES players (id) ON DELETE CASCADE
							  NOT NULL,
			played_at         NOT NULL,
			CHECK (winner_id <> loser_id)
		);",
		[],
	)?;

	tx.commit()
}

/// SQLite-backed store. Standings come from a join/aggregate query.
pub struct SqliteStore {
	conn: Connection,
}

impl SqliteStore {
	pub fn open(path: &Path) -> Result<Self> {
		debug!("opening database at {}", path.display());
		Self::with_connection(Connection::open(path)?)
	}

	pub fn open_in_memory() -> Result<Self> {
		Self::with_connection(Connection::open_in_memory()?)
	}

	fn with_connection(mut conn: Connection) -> Result<Self> {
		conn.execute_batch("PRAGMA foreign_keys = ON;")?;
		create_schema(&mut conn)?;

		Ok(Self { conn })
	}
}

impl Store for SqliteStore {
	fn insert_player(&mut self, name: &str) -> Result<PlayerId> {
		let mut stmt = self.conn.prepare("INSERT INTO players (name) VALUES (?1);")?;
		let id = stmt.insert([name])?;

		Ok(PlayerId(id))
	}

	fn delete_all_players(&mut self) -> Result<()> {
		let tx = self.conn.transaction()?;
		tx.execute("DELETE FROM matches;", [])?;
		tx.execute("DELETE FROM players;", [])?;
		tx.commit()?;

		Ok(())
	}

	fn delete_all_matches(&mut self) -> Result<()> {
		self.conn.execute("DELETE FROM matches;", [])?;
		Ok(())
	}

	fn count_players(&self) -> Result<usize> {
		let count = self
			.conn
			.query_row("SELECT COUNT(*) FROM players;", [], |row| row.get(0))?;

		Ok(count)
	}

	fn has_player(&self, id: PlayerId) -> Result<bool> {
		let exists = self.conn.query_row(
			"SELECT EXISTS (SELECT 1 FROM players WHERE id = ?1);",
			[id.0],
			|row| row.get(0),
		)?;

		Ok(exists)
	}

	fn insert_match(&mut self, winner: PlayerId, loser: PlayerId) -> Result<()> {
		let mut stmt = self.conn.prepare(
			"INSERT INTO matches (winner_id, loser_id, played_at)
			 VALUES (?1, ?2, ?3);",
		)?;
		stmt.execute(params![winner.0, loser.0, Utc::now().naive_utc()])?;

		Ok(())
	}

	fn query_standings(&self) -> Result<Vec<StandingEntry>> {
		let mut stmt = self.conn.prepare(
			"SELECT
				p.id,
				p.name,
				COUNT(CASE WHEN m.winner_id = p.id THEN 1 END) AS wins,
				COUNT(m.id)                                    AS matches
			 FROM players AS p
			 LEFT JOIN matches AS m
			   ON p.id = m.winner_id OR p.id = m.loser_id
			 GROUP BY p.id, p.name
			 ORDER BY wins DESC, p.id ASC;",
		)?;

		let standings = stmt
			.query_map([], |row| {
				Ok(StandingEntry {
					id: PlayerId(row.get(0)?),
					name: row.get(1)?,
					wins: row.get(2)?,
					matches: row.get(3)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(standings)
	}

	fn matches(&self) -> Result<Vec<Match>> {
		let mut stmt = self
			.conn
			.prepare("SELECT id, winner_id, loser_id, played_at FROM matches ORDER BY id;")?;

		let matches = stmt
			.query_map([], |row| {
				Ok(Match {
					id: row.get(0)?,
					winner: PlayerId(row.get(1)?),
					loser: PlayerId(row.get(2)?),
					played_at: row.get::<usize, NaiveDateTime>(3)?,
				})
			})?
			.collect::<rusqlite::Result<Vec<_>>>()?;

		Ok(matches)
	}
}

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(author, version, about = "Track a Swiss-system tournament", long_about = None)]
pub struct Cli {
	/// SQLite database file
	#[arg(short, long, value_name = "FILE")]
	pub database: Option<PathBuf>,

	/// TOML config file
	#[arg(short, long, value_name = "FILE", default_value = "tournament.toml")]
	pub config: PathBuf,

	/// Print JSON instead of a table
	#[arg(long)]
	pub json: bool,

	#[command(subcommand)]
	pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
	/// Register one or more players
	Register {
		#[arg(required = true)]
		names: Vec<String>,
	},
	/// Record that WINNER beat LOSER
	Report {
		winner: i64,
		loser: i64,
	},
	/// Record every result in a CSV file with `winner,loser` columns
	Import {
		#[arg(value_name = "FILE")]
		matches: PathBuf,
	},
	Standings,
	Pairings,
	Count,
	/// List recorded matches
	Matches,
	/// Remove all matches, keeping players
	DeleteMatches,
	/// Remove all players and their matches
	DeletePlayers,
}

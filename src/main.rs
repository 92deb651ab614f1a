mod cli;
mod config;
mod output;

use std::{
	fs::File,
	io::{self, Write},
};

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use config::load_config;
use log::LevelFilter;
use swiss::{PlayerId, SqliteStore, Tournament};

fn main() -> Result<()> {
	env_logger::Builder::new()
		.filter_level(LevelFilter::Warn)
		.parse_default_env()
		.init();

	let cli = Cli::parse();
	let config = load_config(&cli.config)?;

	let database = cli.database.clone().unwrap_or_else(|| config.database());
	let json = cli.json || config.json.unwrap_or(false);

	let store = SqliteStore::open(&database)
		.with_context(|| format!("could not open database {}", database.display()))?;
	let mut tournament = Tournament::new(store);

	let string = run(&mut tournament, cli.command, json)?;
	io::stdout()
		.write_all(string.as_bytes())
		.context("could not write output")?;

	Ok(())
}

fn run(tournament: &mut Tournament<SqliteStore>, command: Commands, json: bool) -> Result<String> {
	let string = match command {
		Commands::Register { names } => {
			let mut ids = Vec::with_capacity(names.len());
			for name in &names {
				ids.push(tournament.register_player(name)?);
			}
			if json {
				output::json_string(&ids)?
			} else {
				ids.iter().map(|id| format!("{id}\n")).collect()
			}
		}
		Commands::Report { winner, loser } => {
			tournament.report_match(PlayerId(winner), PlayerId(loser))?;
			String::new()
		}
		Commands::Import { matches } => {
			let file = File::open(&matches)
				.with_context(|| format!("could not open {}", matches.display()))?;
			let count = tournament.import_matches(file)?;
			format!("{count}\n")
		}
		Commands::Standings => {
			let standings = tournament.player_standings()?;
			if json {
				output::json_string(&standings)?
			} else {
				output::standings_string(&standings)
			}
		}
		Commands::Pairings => {
			let pairings = tournament.swiss_pairings()?;
			if json {
				output::json_string(&pairings)?
			} else {
				output::pairings_string(&pairings)
			}
		}
		Commands::Count => format!("{}\n", tournament.count_players()?),
		Commands::Matches => {
			let matches = tournament.match_history()?;
			if json {
				output::json_string(&matches)?
			} else {
				output::matches_string(&matches)
			}
		}
		Commands::DeleteMatches => {
			tournament.delete_matches()?;
			String::new()
		}
		Commands::DeletePlayers => {
			tournament.delete_players()?;
			String::new()
		}
	};

	Ok(string)
}

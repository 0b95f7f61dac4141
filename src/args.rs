#![allow(clippy::module_name_repetitions)]

use std::path::PathBuf;
use std::str::FromStr;

use argh::FromArgs;
use thiserror::Error;

use permword::Search;

/// Find the arrangements of a word's letters that are themselves words.
#[derive(FromArgs, Debug)]
pub struct Args {
	/// path to the word list, one uppercase word per line
	#[argh(option, short = 'W', default = r#""words.txt".into()"#)]
	pub word_list: PathBuf,
	/// uppercase the word list entries when loading
	#[argh(switch)]
	pub fold_case: bool,
	/// search each candidate length on its own thread
	#[argh(switch, short = 'j')]
	pub parallel: bool,
	/// report each match only once
	#[argh(switch)]
	pub unique: bool,
	/// report every candidate with whether it matched
	#[argh(switch)]
	pub all: bool,
	/// refuse words with more candidates than this
	#[argh(option)]
	pub max_candidates: Option<u64>,
	/// output format: lines or json
	#[argh(option, default = "<_>::default()")]
	pub format: Format,
	/// log debug output to stderr
	#[argh(switch, short = 'v')]
	pub verbose: bool,
	/// words to search; read from stdin, one per line, when absent
	#[argh(positional)]
	pub words: Vec<String>,
}

impl Args {
	pub fn search(&self) -> Search {
		Search::new()
			.max_candidates(self.max_candidates)
			.unique(self.unique)
			.parallel(self.parallel)
	}
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	#[default]
	Lines,
	Json,
}

#[derive(Debug, Error)]
#[error("unrecognized output format; supported are: lines, json")]
pub struct FormatFromStrError;

impl FromStr for Format {
	type Err = FormatFromStrError;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		Ok(match s {
			"lines" => Self::Lines,
			"json" => Self::Json,
			_ => return Err(FormatFromStrError),
		})
	}
}

pub fn load() -> Args {
	argh::from_env()
}

use std::io::{self, BufRead as _, Write};

use anyhow::Context as _;
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use permword::permute::{self, Checked, Search};
use permword::WordList;

use crate::args::{Args, Format};

mod args;

#[derive(Debug, Serialize)]
#[serde(rename_all = "snake_case")]
enum Found {
	Matches(Vec<String>),
	Checked(Vec<Checked>),
}

#[derive(Debug, Serialize)]
struct Report<'a> {
	word: &'a str,
	candidates: u64,
	#[serde(flatten)]
	found: Found,
}

fn search_word<'a>(
	args: &Args,
	search: &Search,
	word_list: &WordList,
	word: &'a str,
) -> Result<Report<'a>, permute::Error> {
	let candidates = search.admit(word)?;
	let found = if args.all {
		Found::Checked(search.run_checked(word, word_list)?)
	} else {
		Found::Matches(search.run(word, word_list)?)
	};
	Ok(Report {
		word,
		candidates,
		found,
	})
}

fn write_report(format: Format, report: &Report<'_>, out: &mut impl Write) -> io::Result<()> {
	match format {
		Format::Lines => match &report.found {
			Found::Matches(matches) => {
				for word in matches {
					writeln!(out, "{word}")?;
				}
			}
			Found::Checked(checked) => {
				for Checked { candidate, matched } in checked {
					writeln!(out, "{candidate}\t{matched}")?;
				}
			}
		},
		Format::Json => {
			serde_json::to_writer(&mut *out, report)?;
			writeln!(out)?;
		}
	}
	Ok(())
}

fn init_logging(verbose: bool) {
	let default = if verbose { "debug" } else { "warn" };
	let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
	tracing_subscriber::fmt()
		.with_env_filter(filter)
		.with_writer(io::stderr)
		.init();
}

fn main() -> anyhow::Result<()> {
	let args = args::load();
	init_logging(args.verbose);

	let word_list = WordList::load(&args.word_list, args.fold_case)?;
	if word_list.is_empty() {
		tracing::warn!(path = %args.word_list.display(), "word list is empty");
	}
	let search = args.search();

	let words = if args.words.is_empty() {
		io::stdin()
			.lock()
			.lines()
			.map(|line| line.map(|line| line.trim().to_owned()))
			.filter(|line| !matches!(line, Ok(line) if line.is_empty()))
			.collect::<Result<Vec<_>, _>>()
			.context("reading words from stdin")?
	} else {
		args.words.clone()
	};

	let mut out = io::stdout().lock();
	let mut failed = 0usize;

	for word in &words {
		match search_word(&args, &search, &word_list, word) {
			Ok(report) => write_report(args.format, &report, &mut out).context("writing to stdout")?,
			Err(error) => {
				tracing::error!(word = word.as_str(), %error, "skipping word");
				failed += 1;
			}
		}
	}

	out.flush().context("writing to stdout")?;
	anyhow::ensure!(failed == 0, "{failed} of {} words could not be searched", words.len());
	Ok(())
}

use std::collections::HashSet;
use std::convert::Infallible;
use std::path::Path;
use std::str::FromStr;

use anyhow::Context as _;

#[derive(Debug, Clone, Default)]
pub struct WordList {
	words: HashSet<Box<str>>,
}

impl WordList {
	/// Reads a newline-separated word list. With `fold_case`, entries are uppercased so that a
	/// lowercase dictionary still matches uppercased candidates.
	pub fn load(path: &Path, fold_case: bool) -> anyhow::Result<Self> {
		let raw = std::fs::read_to_string(path).with_context(|| format!("reading from {path:?}"))?;
		let mut this = match raw.parse::<Self>() {
			Ok(this) => this,
			Err(never) => match never {},
		};
		if fold_case {
			this = this.folded();
		}
		tracing::info!(path = %path.display(), words = this.len(), "loaded word list");
		Ok(this)
	}

	#[must_use]
	pub fn folded(self) -> Self {
		self
			.words
			.iter()
			.map(|word| word.to_uppercase())
			.collect()
	}

	pub fn contains(&self, word: &str) -> bool {
		self.words.contains(word)
	}

	pub fn len(&self) -> usize {
		self.words.len()
	}

	pub fn is_empty(&self) -> bool {
		self.words.is_empty()
	}
}

impl FromStr for WordList {
	type Err = Infallible;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		let words = s
			.lines()
			.map(str::trim)
			.filter(|line| !line.is_empty())
			.map(Box::<str>::from)
			.collect();
		Ok(Self { words })
	}
}

impl<S: Into<Box<str>>> FromIterator<S> for WordList {
	fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
		let words = iter.into_iter().map(Into::into).collect();
		Self { words }
	}
}

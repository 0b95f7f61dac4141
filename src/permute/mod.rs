use std::collections::{BTreeSet, HashSet};
use std::hash::BuildHasher;

use itertools::{Either, Itertools as _};
use rayon::prelude::*;
use serde::Serialize;
use thiserror::Error;

pub use self::count::{candidate_count, total_candidates};

mod count;

// Public API:

/// Case-sensitive membership oracle. Entries are expected to be uppercase.
pub trait WordList {
	fn contains(&self, word: &str) -> bool;
}

impl WordList for crate::word_list::WordList {
	fn contains(&self, word: &str) -> bool {
		self.contains(word)
	}
}

impl<S: BuildHasher> WordList for HashSet<String, S> {
	fn contains(&self, word: &str) -> bool {
		HashSet::contains(self, word)
	}
}

impl<S: BuildHasher> WordList for HashSet<Box<str>, S> {
	fn contains(&self, word: &str) -> bool {
		HashSet::contains(self, word)
	}
}

impl<S: BuildHasher> WordList for HashSet<&str, S> {
	fn contains(&self, word: &str) -> bool {
		HashSet::contains(self, word)
	}
}

impl WordList for BTreeSet<String> {
	fn contains(&self, word: &str) -> bool {
		BTreeSet::contains(self, word)
	}
}

impl WordList for [&str] {
	fn contains(&self, word: &str) -> bool {
		self.iter().any(|entry| *entry == word)
	}
}

impl<T: WordList + ?Sized> WordList for &T {
	fn contains(&self, word: &str) -> bool {
		(**self).contains(word)
	}
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
	#[error("invalid argument: {0}")]
	InvalidArgument(String),
	#[error("{candidates} candidates exceed the budget of {budget}")]
	BudgetExceeded { candidates: u64, budget: u64 },
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Checked {
	pub candidate: String,
	pub matched: bool,
}

pub fn check_word<W: WordList + ?Sized>(candidate: String, word_list: &W) -> Checked {
	let matched = word_list.contains(&candidate.to_uppercase());
	Checked { candidate, matched }
}

/// Every arrangement of every subset of `word`'s character positions, shortest first.
///
/// Positions are permuted, not letters, so repeated letters produce repeated candidates.
pub fn candidates(word: &str) -> impl Iterator<Item = String> {
	let chars = word.chars().collect::<Vec<_>>();
	(0..=chars.len()).flat_map(move |size| candidates_of_len(chars.clone(), size))
}

pub fn checked_permutations<'a, W: WordList + ?Sized>(
	word: &str,
	word_list: &'a W,
) -> impl Iterator<Item = Checked> + 'a {
	candidates(word).map(move |candidate| check_word(candidate, word_list))
}

pub fn valid_permutations<W: WordList + ?Sized>(
	word: &str,
	word_list: &W,
) -> Result<Vec<String>, Error> {
	Search::new().admit(word)?;
	Ok(serial_matches(word, word_list))
}

/// Same output as [`valid_permutations`], with each candidate length searched on its own worker.
pub fn par_valid_permutations<W: WordList + Sync + ?Sized>(
	word: &str,
	word_list: &W,
) -> Result<Vec<String>, Error> {
	Search::new().parallel(true).run(word, word_list)
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Search {
	max_candidates: Option<u64>,
	unique: bool,
	parallel: bool,
}

impl Search {
	pub fn new() -> Self {
		Self::default()
	}

	#[must_use]
	pub fn max_candidates(mut self, budget: Option<u64>) -> Self {
		self.max_candidates = budget;
		self
	}

	/// Drop repeated matches, keeping the first occurrence of each.
	#[must_use]
	pub fn unique(mut self, unique: bool) -> Self {
		self.unique = unique;
		self
	}

	#[must_use]
	pub fn parallel(mut self, parallel: bool) -> Self {
		self.parallel = parallel;
		self
	}

	/// Checks the word against the budget without enumerating anything.
	pub fn admit(&self, word: &str) -> Result<u64, Error> {
		let len = word.chars().count();
		let candidates = total_candidates(len).ok_or_else(|| {
			Error::InvalidArgument(format!(
				"a word of {len} characters has too many arrangements to enumerate"
			))
		})?;
		if let Some(budget) = self.max_candidates {
			if candidates > budget {
				return Err(Error::BudgetExceeded { candidates, budget });
			}
		}
		Ok(candidates)
	}

	pub fn run<W: WordList + Sync + ?Sized>(
		&self,
		word: &str,
		word_list: &W,
	) -> Result<Vec<String>, Error> {
		let candidates = self.admit(word)?;
		tracing::debug!(word, candidates, parallel = self.parallel, "searching");

		let matches = if self.parallel {
			parallel_matches(word, word_list)
		} else {
			serial_matches(word, word_list)
		};

		Ok(if self.unique {
			dedup(matches, |word| word)
		} else {
			matches
		})
	}

	/// Like [`Search::run`], but keeps every candidate along with whether it matched.
	pub fn run_checked<W: WordList + Sync + ?Sized>(
		&self,
		word: &str,
		word_list: &W,
	) -> Result<Vec<Checked>, Error> {
		let candidates = self.admit(word)?;
		tracing::debug!(word, candidates, parallel = self.parallel, "checking");

		let checked = if self.parallel {
			parallel_checked(word, word_list)
		} else {
			checked_permutations(word, word_list).collect()
		};

		Ok(if self.unique {
			dedup(checked, |checked| &checked.candidate)
		} else {
			checked
		})
	}
}

// Implementation:

fn candidates_of_len(chars: Vec<char>, size: usize) -> impl Iterator<Item = String> {
	if size == 0 {
		Either::Left(std::iter::once(String::new()))
	} else {
		Either::Right(
			chars
				.into_iter()
				.permutations(size)
				.map(|chosen| chosen.into_iter().collect()),
		)
	}
}

fn serial_matches<W: WordList + ?Sized>(word: &str, word_list: &W) -> Vec<String> {
	checked_permutations(word, word_list)
		.filter_map(|checked| checked.matched.then_some(checked.candidate))
		.collect()
}

fn parallel_matches<W: WordList + Sync + ?Sized>(word: &str, word_list: &W) -> Vec<String> {
	let chars = word.chars().collect::<Vec<_>>();
	(0..=chars.len())
		.into_par_iter()
		.map(|size| {
			let found = matches_of_len(chars.clone(), size, word_list);
			tracing::trace!(size, matches = found.len(), "length done");
			found
		})
		.collect::<Vec<_>>()
		.concat()
}

fn parallel_checked<W: WordList + Sync + ?Sized>(word: &str, word_list: &W) -> Vec<Checked> {
	let chars = word.chars().collect::<Vec<_>>();
	(0..=chars.len())
		.into_par_iter()
		.map(|size| {
			candidates_of_len(chars.clone(), size)
				.map(|candidate| check_word(candidate, word_list))
				.collect::<Vec<_>>()
		})
		.collect::<Vec<_>>()
		.concat()
}

fn matches_of_len<W: WordList + ?Sized>(chars: Vec<char>, size: usize, word_list: &W) -> Vec<String> {
	candidates_of_len(chars, size)
		.map(|candidate| check_word(candidate, word_list))
		.filter_map(|checked| checked.matched.then_some(checked.candidate))
		.collect()
}

fn dedup<T>(items: Vec<T>, candidate: impl Fn(&T) -> &String) -> Vec<T> {
	let mut seen = HashSet::with_capacity(items.len());
	items
		.into_iter()
		.filter(|item| seen.insert(candidate(item).clone()))
		.collect()
}

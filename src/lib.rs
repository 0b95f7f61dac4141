//! Find the arrangements of a word's letters that are themselves words.

pub mod permute;
pub mod word_list;

pub use self::permute::{par_valid_permutations, valid_permutations, Search};
pub use self::word_list::WordList;

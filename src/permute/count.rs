/// Number of ordered arrangements of `size` positions out of `len`, i.e. `len! / (len - size)!`.
///
/// `None` if the count does not fit in a `u64`.
pub fn candidate_count(len: usize, size: usize) -> Option<u64> {
	if size > len {
		return Some(0);
	}
	((len - size + 1)..=len).try_fold(1u64, |acc, factor| {
		acc.checked_mul(u64::try_from(factor).ok()?)
	})
}

/// Candidates over every size from `0` to `len` inclusive.
pub fn total_candidates(len: usize) -> Option<u64> {
	(0..=len).try_fold(0u64, |acc, size| acc.checked_add(candidate_count(len, size)?))
}

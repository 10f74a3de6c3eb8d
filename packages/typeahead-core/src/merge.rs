use ahash::AHashSet;

use crate::record::{FieldAccess, Record};

/// Unions result batches from independent searches into one capped sequence.
///
/// Batches concatenate in first-seen order; duplicates (by identifier) keep
/// only their first occurrence, which is the tie-break rule; the survivors
/// sort ascending by `sort_field` and truncate to `[0, limit)`. The sort is
/// stable, so equal sort keys stay in first-seen order.
pub fn merge_batches<R: Record>(batches: Vec<Vec<R>>, sort_field: &str, limit: u32) -> Vec<R> {
	let mut seen = AHashSet::new();
	let mut merged: Vec<R> = batches
		.into_iter()
		.flatten()
		.filter(|record| seen.insert(record.id()))
		.collect();

	merged.sort_by(|a, b| a.get(sort_field).cmp(&b.get(sort_field)));
	merged.truncate(limit as usize);

	merged
}

#[cfg(test)]
mod tests {
	use crate::record::MapRecord;

	use super::*;

	fn person(id: i64, first_name: &str) -> MapRecord {
		MapRecord::new(id).with_field("first_name", first_name)
	}

	#[test]
	fn dedups_by_identifier_keeping_the_first_occurrence() {
		let batches = vec![
			vec![person(1, "Alice"), person(2, "Bob")],
			vec![person(2, "Bob"), person(3, "Carol")],
		];
		let merged = merge_batches(batches, "first_name", 10);
		let names: Vec<String> =
			merged.iter().map(|record| record.get("first_name").to_string()).collect();

		assert_eq!(names, vec!["Alice", "Bob", "Carol"]);
	}

	#[test]
	fn merging_a_batch_with_itself_is_idempotent() {
		let batch = vec![person(1, "Alice"), person(2, "Bob")];
		let once = merge_batches(vec![batch.clone()], "first_name", 10);
		let twice = merge_batches(vec![batch.clone(), batch], "first_name", 10);

		assert_eq!(once, twice);
	}

	#[test]
	fn truncates_to_the_sorted_prefix() {
		let batches =
			vec![vec![person(1, "Dave"), person(2, "Alice"), person(3, "Carol"), person(4, "Bob")]];
		let merged = merge_batches(batches, "first_name", 2);
		let names: Vec<String> =
			merged.iter().map(|record| record.get("first_name").to_string()).collect();

		assert_eq!(names, vec!["Alice", "Bob"]);
	}

	#[test]
	fn output_length_is_the_smaller_of_size_and_limit() {
		let batch = vec![person(1, "a"), person(2, "b"), person(3, "c")];

		assert_eq!(merge_batches(vec![batch.clone()], "first_name", 5).len(), 3);
		assert_eq!(merge_batches(vec![batch], "first_name", 2).len(), 2);
	}
}

use crate::record::{FieldAccess, Record};

/// In-memory collection filter: case-insensitive substring match on a single
/// field, ascending sort by that field, truncated to `[0, limit)`.
///
/// An empty query matches every record, so the result is simply the first
/// `limit` records in sort order.
pub fn filter_collection<R: Record + Clone>(
	records: &[R],
	filter_by: &str,
	query: &str,
	limit: u32,
) -> Vec<R> {
	let needle = query.to_lowercase();
	let mut matched: Vec<R> = records
		.iter()
		.filter(|record| record.get(filter_by).contains_lowered(&needle))
		.cloned()
		.collect();

	matched.sort_by(|a, b| a.get(filter_by).cmp(&b.get(filter_by)));
	matched.truncate(limit as usize);

	matched
}

#[cfg(test)]
mod tests {
	use crate::record::MapRecord;

	use super::*;

	fn tags() -> Vec<MapRecord> {
		vec![
			MapRecord::new(1_i64).with_field("name", "ruby"),
			MapRecord::new(2_i64).with_field("name", "rust"),
			MapRecord::new(3_i64).with_field("name", "rake"),
		]
	}

	#[test]
	fn matches_substrings_case_insensitively_and_sorts() {
		let matched = filter_collection(&tags(), "name", "RU", 10);
		let names: Vec<String> =
			matched.iter().map(|record| record.get("name").to_string()).collect();

		assert_eq!(names, vec!["ruby", "rust"]);
	}

	#[test]
	fn only_true_substrings_match() {
		let matched = filter_collection(&tags(), "name", "ra", 10);
		let names: Vec<String> =
			matched.iter().map(|record| record.get("name").to_string()).collect();

		assert_eq!(names, vec!["rake"]);
	}

	#[test]
	fn empty_query_keeps_everything_up_to_the_limit() {
		let matched = filter_collection(&tags(), "name", "", 2);
		let names: Vec<String> =
			matched.iter().map(|record| record.get("name").to_string()).collect();

		assert_eq!(names, vec!["rake", "ruby"]);
	}

	#[test]
	fn no_match_yields_an_empty_result() {
		assert!(filter_collection(&tags(), "name", "zzz", 10).is_empty());
	}
}

use std::collections::BTreeMap;

use typeahead_config::{EndpointConfig, FieldList};
use typeahead_core::record::MapRecord;
use typeahead_storage::MemoryStore;

/// Endpoint config with every option unset, ready for tests to mutate.
pub fn endpoint_config(entity: &str, fields: &[&str]) -> EndpointConfig {
	let fields = match fields {
		[field] => FieldList::One((*field).to_string()),
		_ => FieldList::Many(fields.iter().map(|field| field.to_string()).collect()),
	};

	EndpointConfig {
		entity: entity.to_string(),
		fields,
		name: None,
		limit: None,
		order: None,
		delimiter: None,
		associations: BTreeMap::new(),
		collection: None,
		collection_filter_by: None,
		full_text: None,
	}
}

/// A `tags` collection of three tag records: ruby(1), rust(2), rake(3).
pub fn tags_store() -> MemoryStore {
	let mut store = MemoryStore::new();

	store.insert_collection(
		"tags",
		vec![
			MapRecord::new(1_i64).with_field("name", "ruby"),
			MapRecord::new(2_i64).with_field("name", "rust"),
			MapRecord::new(3_i64).with_field("name", "rake"),
		],
	);

	store
}

/// A `users` entity with eight records, full-text indexed on both name
/// fields, inserted in id order.
pub fn users_store() -> MemoryStore {
	let mut store = MemoryStore::new();
	let users = [
		(1_i64, "Amy", "Adams"),
		(2, "Ben", "Brown"),
		(3, "Cal", "Carter"),
		(4, "Dee", "Dalton"),
		(5, "Eli", "Evans"),
		(6, "Fay", "Ford"),
		(7, "Gus", "Gray"),
		(8, "Hal", "Hunt"),
	];

	for (id, first_name, last_name) in users {
		store.insert(
			"users",
			MapRecord::new(id).with_field("first_name", first_name).with_field("last_name", last_name),
		);
	}

	store.index("users", vec!["first_name".to_string(), "last_name".to_string()]);

	store
}

/// A `posts` entity joined to `authors` through the `author` relation.
pub fn posts_store() -> MemoryStore {
	let mut store = MemoryStore::new();

	store.insert(
		"posts",
		MapRecord::new(1_i64)
			.with_field("title", "Borrow checker basics")
			.with_related("author", "name", "Jane"),
	);
	store.insert(
		"posts",
		MapRecord::new(2_i64)
			.with_field("title", "Async pitfalls")
			.with_related("author", "name", "Omar"),
	);
	store.define_relation("posts", "author", "authors");

	store
}

use serde_json::json;

use typeahead_core::{
	condition,
	condition::RelationResolver,
	plan::{Direction, OrderBy, QueryPlan},
	record::{FieldAccess, MapRecord, Record},
};
use typeahead_storage::{Error, MemoryStore, seed};

fn plan(fields: Vec<&str>, related: Vec<(&str, Vec<&str>)>) -> QueryPlan {
	QueryPlan {
		entity: "posts".to_string(),
		primary_fields: fields.iter().map(|field| field.to_string()).collect(),
		related_fields: related
			.into_iter()
			.map(|(relation, fields)| {
				(relation.to_string(), fields.into_iter().map(String::from).collect())
			})
			.collect(),
		delimiter: " ".to_string(),
		order_by: OrderBy { field: fields[0].to_string(), direction: Direction::Asc },
		limit: 10,
	}
}

fn store() -> MemoryStore {
	let mut store = MemoryStore::new();

	store.insert("posts", MapRecord::new(1_i64).with_field("title", "Rails tips"));
	store.insert("posts", MapRecord::new(2_i64).with_field("title", "Async Rust"));
	store.insert(
		"posts",
		MapRecord::new(3_i64)
			.with_field("title", "Borrow checker")
			.with_related("author", "name", "Rainer"),
	);
	store.define_relation("posts", "author", "authors");
	store.index("posts", vec!["title".to_string()]);

	store
}

#[test]
fn search_matches_any_predicate_and_sorts_ascending() {
	let store = store();
	let query =
		condition::build(&plan(vec!["title"], Vec::new()), &store, "ru").expect("query must build");
	let results = store.search(&query).expect("search must succeed");
	let titles: Vec<String> =
		results.iter().map(|record| record.get("title").to_string()).collect();

	assert_eq!(titles, vec!["Async Rust"]);
}

#[test]
fn search_reaches_related_fields_through_joins() {
	let store = store();
	let query = condition::build(
		&plan(vec!["title"], vec![("author", vec!["name"])]),
		&store,
		"rain",
	)
	.expect("query must build");
	let results = store.search(&query).expect("search must succeed");

	assert_eq!(results.len(), 1);
	assert_eq!(results[0].get("title").to_string(), "Borrow checker");
}

#[test]
fn search_orders_descending_when_asked() {
	let store = store();
	let mut query =
		condition::build(&plan(vec!["title"], Vec::new()), &store, "").expect("query must build");

	query.order_by.direction = Direction::Desc;

	let results = store.search(&query).expect("search must succeed");
	let titles: Vec<String> =
		results.iter().map(|record| record.get("title").to_string()).collect();

	assert_eq!(titles, vec!["Rails tips", "Borrow checker", "Async Rust"]);
}

#[test]
fn search_caps_at_the_limit() {
	let store = store();
	let mut query =
		condition::build(&plan(vec!["title"], Vec::new()), &store, "").expect("query must build");

	query.limit = 2;

	assert_eq!(store.search(&query).expect("search must succeed").len(), 2);
}

#[test]
fn search_on_an_unknown_entity_fails() {
	let store = MemoryStore::new();
	let query =
		condition::build(&plan(vec!["title"], Vec::new()), &store, "x").expect("query must build");

	assert!(matches!(store.search(&query), Err(Error::NotFound(_))));
}

#[test]
fn full_text_respects_the_field_constraint() {
	let store = store();
	let constrained =
		store.full_text("posts", "rust", Some("title"), 10).expect("scan must succeed");

	assert_eq!(constrained.len(), 1);

	let unconstrained = store.full_text("posts", "rust", None, 10).expect("scan must succeed");

	assert_eq!(unconstrained.len(), 1);
	// "rain" only appears on the related author, which the index does not cover.
	assert!(store.full_text("posts", "rain", None, 10).expect("scan must succeed").is_empty());
}

#[test]
fn full_text_keeps_insertion_order_up_to_the_limit() {
	let mut store = MemoryStore::new();

	for n in 0..5_i64 {
		store.insert("posts", MapRecord::new(n).with_field("title", format!("rust {n}")));
	}

	store.index("posts", vec!["title".to_string()]);

	let results = store.full_text("posts", "rust", None, 3).expect("scan must succeed");
	let ids: Vec<String> = results.iter().map(|record| record.id().to_string()).collect();

	assert_eq!(ids, vec!["0", "1", "2"]);
}

#[test]
fn seed_builds_entities_collections_and_relations() {
	let store = seed::store_from_json(&json!({
		"entities": {
			"posts": {
				"records": [
					{ "id": 1, "title": "Intro", "author": { "name": "Jane" } }
				],
				"relations": { "author": "authors" },
				"indexed": ["title"]
			}
		},
		"collections": {
			"tags": [
				{ "id": 1, "name": "ruby" },
				{ "id": 2, "name": "rust" }
			]
		}
	}))
	.expect("seed must load");

	assert_eq!(store.collection("tags").map(<[MapRecord]>::len), Some(2));
	assert_eq!(store.full_text("posts", "intro", None, 10).expect("scan must succeed").len(), 1);
	assert_eq!(store.resolve("posts", "author").expect("relation must resolve"), "authors");
}

#[test]
fn seed_rejects_records_without_an_id() {
	assert!(matches!(
		seed::record_from_json(&json!({ "name": "ruby" })),
		Err(Error::InvalidSeed(_))
	));
}

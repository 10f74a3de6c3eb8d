use std::collections::BTreeMap;

use typeahead_config::{EndpointConfig, Engine, FieldList};
use typeahead_core::{
	Error, condition,
	condition::{FieldRef, RelationResolver},
	merge, plan,
	plan::Strategy,
	record::{MapRecord, Record},
	render,
};

struct Relations;
impl RelationResolver for Relations {
	fn resolve(&self, entity: &str, relation: &str) -> typeahead_core::Result<String> {
		match relation {
			"author" => Ok("authors".to_string()),
			_ => Err(Error::UnknownRelation {
				entity: entity.to_string(),
				relation: relation.to_string(),
			}),
		}
	}
}

fn user_endpoint() -> EndpointConfig {
	EndpointConfig {
		entity: "users".to_string(),
		fields: FieldList::Many(vec!["first_name".to_string(), "last_name".to_string()]),
		name: None,
		limit: None,
		order: None,
		delimiter: Some(",".to_string()),
		associations: BTreeMap::new(),
		collection: None,
		collection_filter_by: None,
		full_text: None,
	}
}

#[test]
fn resolves_builds_and_renders_end_to_end() {
	let mut endpoint = user_endpoint();

	endpoint
		.associations
		.insert("author".to_string(), FieldList::One("name".to_string()));

	let (plan, strategy) = plan::resolve(&endpoint, &Engine::default()).expect("plan must resolve");

	assert_eq!(strategy, Strategy::Relational);

	let query = condition::build(&plan, &Relations, "Ja").expect("conditions must build");

	// Two primary predicates plus one related predicate, one parameter each.
	assert_eq!(query.or_contains.len(), 3);
	assert_eq!(query.params, vec!["%ja%".to_string(); 3]);
	assert_eq!(query.select[0], FieldRef::new("users", "id"));

	let record = MapRecord::new(42_i64)
		.with_field("first_name", "Jane")
		.with_field("last_name", "Doe")
		.with_related("author", "name", "Ann");

	assert_eq!(render::render_lines(&[record], &plan), "Jane,Doe,Ann|42");
}

#[test]
fn multi_batch_merge_dedups_then_sorts_then_truncates() {
	let a = MapRecord::new(1_i64).with_field("first_name", "Ann");
	let b = MapRecord::new(2_i64).with_field("first_name", "Bea");
	let c = MapRecord::new(3_i64).with_field("first_name", "Cam");
	// Field "first_name" returned [A, B]; field "last_name" returned [B, C].
	let merged = merge::merge_batches(vec![vec![a, b.clone()], vec![b, c]], "first_name", 10);
	let ids: Vec<String> = merged.iter().map(|record| record.id().to_string()).collect();

	assert_eq!(ids, vec!["1", "2", "3"]);
}

#[test]
fn merge_respects_the_limit_after_dedup() {
	let batch: Vec<MapRecord> = (0..8)
		.map(|n| MapRecord::new(n as i64).with_field("first_name", format!("user{n}")))
		.collect();
	let merged = merge::merge_batches(vec![batch.clone(), batch], "first_name", 5);

	assert_eq!(merged.len(), 5);
}

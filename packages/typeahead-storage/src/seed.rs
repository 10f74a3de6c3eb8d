use serde_json::Value;

use typeahead_core::{record::MapRecord, value::FieldValue};

use crate::{Error, MemoryStore, Result};

/// Builds a store from a JSON document of the shape:
///
/// ```json
/// {
///   "entities": {
///     "posts": {
///       "records": [{ "id": 1, "title": "Intro", "author": { "name": "Jane" } }],
///       "relations": { "author": "authors" },
///       "indexed": ["title"]
///     }
///   },
///   "collections": { "tags": [{ "id": 1, "name": "ruby" }] }
/// }
/// ```
///
/// Scalar keys become fields, the `id` key becomes the identifier, and
/// nested objects become related-entity sub-records.
pub fn store_from_json(value: &Value) -> Result<MemoryStore> {
	let mut store = MemoryStore::new();
	let root = value
		.as_object()
		.ok_or_else(|| Error::InvalidSeed("root must be an object.".to_string()))?;

	if let Some(entities) = root.get("entities") {
		let entities = entities
			.as_object()
			.ok_or_else(|| Error::InvalidSeed("entities must be an object.".to_string()))?;

		for (entity, entry) in entities {
			let entry = entry.as_object().ok_or_else(|| {
				Error::InvalidSeed(format!("entities.{entity} must be an object."))
			})?;

			for record in string_keyed_array(entry.get("records"), entity, "records")? {
				store.insert(entity.clone(), record_from_json(&record)?);
			}
			if let Some(relations) = entry.get("relations") {
				let relations = relations.as_object().ok_or_else(|| {
					Error::InvalidSeed(format!("entities.{entity}.relations must be an object."))
				})?;

				for (relation, table) in relations {
					let table = table.as_str().ok_or_else(|| {
						Error::InvalidSeed(format!(
							"entities.{entity}.relations.{relation} must be a string."
						))
					})?;

					store.define_relation(entity.clone(), relation.clone(), table.to_string());
				}
			}
			if let Some(indexed) = entry.get("indexed") {
				let fields = indexed
					.as_array()
					.ok_or_else(|| {
						Error::InvalidSeed(format!("entities.{entity}.indexed must be an array."))
					})?
					.iter()
					.map(|field| {
						field.as_str().map(String::from).ok_or_else(|| {
							Error::InvalidSeed(format!(
								"entities.{entity}.indexed must contain strings."
							))
						})
					})
					.collect::<Result<Vec<_>>>()?;

				store.index(entity.clone(), fields);
			}
		}
	}
	if let Some(collections) = root.get("collections") {
		let collections = collections
			.as_object()
			.ok_or_else(|| Error::InvalidSeed("collections must be an object.".to_string()))?;

		for (name, records) in collections {
			let records = records
				.as_array()
				.ok_or_else(|| {
					Error::InvalidSeed(format!("collections.{name} must be an array."))
				})?
				.iter()
				.map(record_from_json)
				.collect::<Result<Vec<_>>>()?;

			store.insert_collection(name.clone(), records);
		}
	}

	Ok(store)
}

pub fn record_from_json(value: &Value) -> Result<MapRecord> {
	let object = value
		.as_object()
		.ok_or_else(|| Error::InvalidSeed("record must be an object.".to_string()))?;
	let id = object
		.get("id")
		.ok_or_else(|| Error::InvalidSeed("record is missing an id.".to_string()))?;
	let mut record = MapRecord::new(scalar_from_json(id, "id")?);

	for (key, value) in object {
		if key == "id" {
			continue;
		}

		match value {
			Value::Object(related) =>
				for (field, value) in related {
					record = record.with_related(
						key.clone(),
						field.clone(),
						scalar_from_json(value, field)?,
					);
				},
			_ => record = record.with_field(key.clone(), scalar_from_json(value, key)?),
		}
	}

	Ok(record)
}

fn scalar_from_json(value: &Value, field: &str) -> Result<FieldValue> {
	match value {
		Value::Null => Ok(FieldValue::Null),
		Value::Bool(value) => Ok(FieldValue::Bool(*value)),
		Value::Number(number) => number
			.as_i64()
			.map(FieldValue::Integer)
			.or_else(|| number.as_f64().map(FieldValue::Float))
			.ok_or_else(|| Error::InvalidSeed(format!("field {field} has a non-finite number."))),
		Value::String(value) => Ok(FieldValue::Text(value.clone())),
		Value::Array(_) | Value::Object(_) =>
			Err(Error::InvalidSeed(format!("field {field} must be a scalar."))),
	}
}

fn string_keyed_array(value: Option<&Value>, entity: &str, key: &str) -> Result<Vec<Value>> {
	match value {
		None => Ok(Vec::new()),
		Some(value) => value
			.as_array()
			.cloned()
			.ok_or_else(|| Error::InvalidSeed(format!("entities.{entity}.{key} must be an array."))),
	}
}

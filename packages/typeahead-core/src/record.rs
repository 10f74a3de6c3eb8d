use std::collections::BTreeMap;

use crate::value::FieldValue;

/// Read a named field's value. Unknown fields read as `Null` rather than
/// failing, matching how a loosely-typed record would respond.
pub trait FieldAccess {
	fn get(&self, field: &str) -> FieldValue;
}

/// The two capabilities the engine needs from a retrieved entity: read a
/// field, and read the identifier. Related entities are reached through a
/// named relation accessor.
pub trait Record: FieldAccess {
	fn id(&self) -> FieldValue;

	fn related(&self, relation: &str) -> Option<&dyn FieldAccess>;
}

impl FieldAccess for BTreeMap<String, FieldValue> {
	fn get(&self, field: &str) -> FieldValue {
		BTreeMap::get(self, field).cloned().unwrap_or_default()
	}
}

/// Generic record backed by a field-name-to-value mapping, with optional
/// related-entity sub-maps keyed by relation name.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MapRecord {
	id: FieldValue,
	values: BTreeMap<String, FieldValue>,
	related: BTreeMap<String, BTreeMap<String, FieldValue>>,
}
impl MapRecord {
	pub fn new(id: impl Into<FieldValue>) -> Self {
		Self { id: id.into(), ..Self::default() }
	}

	pub fn with_field(mut self, field: impl Into<String>, value: impl Into<FieldValue>) -> Self {
		self.values.insert(field.into(), value.into());

		self
	}

	pub fn with_related(
		mut self,
		relation: impl Into<String>,
		field: impl Into<String>,
		value: impl Into<FieldValue>,
	) -> Self {
		self.related.entry(relation.into()).or_default().insert(field.into(), value.into());

		self
	}
}

impl FieldAccess for MapRecord {
	fn get(&self, field: &str) -> FieldValue {
		self.values.get(field).cloned().unwrap_or_default()
	}
}
impl Record for MapRecord {
	fn id(&self) -> FieldValue {
		self.id.clone()
	}

	fn related(&self, relation: &str) -> Option<&dyn FieldAccess> {
		self.related.get(relation).map(|fields| fields as &dyn FieldAccess)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn unknown_fields_read_as_null() {
		let record = MapRecord::new(1_i64).with_field("name", "ruby");

		assert_eq!(record.get("name"), FieldValue::from("ruby"));
		assert_eq!(record.get("missing"), FieldValue::Null);
		assert_eq!(record.id(), FieldValue::Integer(1));
	}

	#[test]
	fn related_fields_resolve_through_the_relation_accessor() {
		let record = MapRecord::new(7_i64)
			.with_field("title", "Intro")
			.with_related("author", "name", "Jane");

		let author = record.related("author").expect("author relation must exist");

		assert_eq!(author.get("name"), FieldValue::from("Jane"));
		assert!(record.related("editor").is_none());
	}
}

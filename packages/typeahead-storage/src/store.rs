use std::collections::HashMap;

use typeahead_core::{
	condition::{ConditionQuery, FieldRef, RelationResolver},
	plan::Direction,
	record::{FieldAccess, MapRecord, Record},
};

use crate::{Error, Result};

/// In-memory stand-in for the relational and full-text backends and for the
/// host's named collections. Built once during startup, then shared
/// read-only; insertion order is the backend's natural result order.
#[derive(Debug, Default)]
pub struct MemoryStore {
	entities: HashMap<String, Vec<MapRecord>>,
	collections: HashMap<String, Vec<MapRecord>>,
	/// (entity, relation) to the related table identifier.
	relations: HashMap<(String, String), String>,
	/// Fields covered by the full-text index, per entity.
	indexed: HashMap<String, Vec<String>>,
}
impl MemoryStore {
	pub fn new() -> Self {
		Self::default()
	}

	pub fn insert(&mut self, entity: impl Into<String>, record: MapRecord) {
		self.entities.entry(entity.into()).or_default().push(record);
	}

	pub fn insert_collection(&mut self, name: impl Into<String>, records: Vec<MapRecord>) {
		self.collections.insert(name.into(), records);
	}

	pub fn collection(&self, name: &str) -> Option<&[MapRecord]> {
		self.collections.get(name).map(Vec::as_slice)
	}

	pub fn define_relation(
		&mut self,
		entity: impl Into<String>,
		relation: impl Into<String>,
		table: impl Into<String>,
	) {
		self.relations.insert((entity.into(), relation.into()), table.into());
	}

	pub fn index(&mut self, entity: impl Into<String>, fields: Vec<String>) {
		self.indexed.insert(entity.into(), fields);
	}

	/// Evaluates an OR-combined contains query the way a SQL backend would:
	/// any predicate matching keeps the record, then order by, then cap.
	pub fn search(&self, query: &ConditionQuery) -> Result<Vec<MapRecord>> {
		let records = self
			.entities
			.get(&query.entity)
			.ok_or_else(|| Error::NotFound(format!("entity {}", query.entity)))?;
		let mut matched: Vec<MapRecord> = records
			.iter()
			.filter(|record| {
				query
					.or_contains
					.iter()
					.zip(&query.params)
					.any(|(target, param)| self.predicate_matches(record, query, target, param))
			})
			.cloned()
			.collect();

		matched.sort_by(|a, b| {
			let ordering = a.get(&query.order_by.field).cmp(&b.get(&query.order_by.field));

			match query.order_by.direction {
				Direction::Asc => ordering,
				Direction::Desc => ordering.reverse(),
			}
		});
		matched.truncate(query.limit as usize);

		Ok(matched)
	}

	/// Naive full-text scan: case-insensitive substring over one constrained
	/// field, or over every indexed field when unconstrained. Results keep
	/// insertion order, capped at `limit`.
	pub fn full_text(
		&self,
		entity: &str,
		query: &str,
		field: Option<&str>,
		limit: u32,
	) -> Result<Vec<MapRecord>> {
		let records =
			self.entities.get(entity).ok_or_else(|| Error::NotFound(format!("entity {entity}")))?;
		let needle = query.to_lowercase();
		let indexed = self.indexed.get(entity);
		let matched: Vec<MapRecord> = records
			.iter()
			.filter(|record| match field {
				Some(field) => record.get(field).contains_lowered(&needle),
				None => match indexed {
					Some(fields) =>
						fields.iter().any(|field| record.get(field).contains_lowered(&needle)),
					None => false,
				},
			})
			.take(limit as usize)
			.cloned()
			.collect();

		Ok(matched)
	}

	fn predicate_matches(
		&self,
		record: &MapRecord,
		query: &ConditionQuery,
		target: &FieldRef,
		param: &str,
	) -> bool {
		let needle =
			param.strip_prefix('%').and_then(|inner| inner.strip_suffix('%')).unwrap_or(param);

		if target.table == query.entity {
			return record.get(&target.column).contains_lowered(needle);
		}

		// A predicate on a joined table: find the relation that resolves to
		// it and read through the record's relation accessor.
		query.joins.iter().any(|relation| {
			self.relations
				.get(&(query.entity.clone(), relation.clone()))
				.map(|table| table == &target.table)
				.unwrap_or(false)
				&& record
					.related(relation)
					.map(|related| related.get(&target.column).contains_lowered(needle))
					.unwrap_or(false)
		})
	}
}

impl RelationResolver for MemoryStore {
	fn resolve(&self, entity: &str, relation: &str) -> typeahead_core::Result<String> {
		self.relations.get(&(entity.to_string(), relation.to_string())).cloned().ok_or_else(|| {
			typeahead_core::Error::UnknownRelation {
				entity: entity.to_string(),
				relation: relation.to_string(),
			}
		})
	}
}

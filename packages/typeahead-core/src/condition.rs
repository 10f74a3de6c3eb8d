use std::fmt::{Display, Formatter};

use crate::{
	Result,
	plan::{OrderBy, QueryPlan},
};

/// A column on the primary or a related table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldRef {
	pub table: String,
	pub column: String,
}
impl FieldRef {
	pub fn new(table: impl Into<String>, column: impl Into<String>) -> Self {
		Self { table: table.into(), column: column.into() }
	}
}
impl Display for FieldRef {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "{}.{}", self.table, self.column)
	}
}

/// Backend-agnostic search request: OR-combined case-insensitive contains
/// predicates, one bound parameter per predicate, plus the projection, join
/// list, ordering, and the hard result cap.
#[derive(Debug, Clone, PartialEq)]
pub struct ConditionQuery {
	pub entity: String,
	pub or_contains: Vec<FieldRef>,
	/// The lowercased, wildcard-wrapped query string, once per predicate.
	pub params: Vec<String>,
	/// Identifier column first, then every referenced column.
	pub select: Vec<FieldRef>,
	/// Relation names to join, in configured order.
	pub joins: Vec<String>,
	pub order_by: OrderBy,
	pub limit: u32,
}

/// Maps a relation name on an entity to the related table identifier.
pub trait RelationResolver {
	fn resolve(&self, entity: &str, relation: &str) -> Result<String>;
}

pub const ID_COLUMN: &str = "id";

/// Pure function of its inputs: the same plan and query string always
/// produce the same conditions and parameter list.
pub fn build(
	plan: &QueryPlan,
	relations: &dyn RelationResolver,
	query: &str,
) -> Result<ConditionQuery> {
	let pattern = format!("%{}%", query.to_lowercase());
	let mut or_contains = Vec::new();
	let mut select = vec![FieldRef::new(plan.entity.clone(), ID_COLUMN)];

	for field in &plan.primary_fields {
		or_contains.push(FieldRef::new(plan.entity.clone(), field.clone()));
		select.push(FieldRef::new(plan.entity.clone(), field.clone()));
	}

	let mut joins = Vec::new();

	for (relation, fields) in &plan.related_fields {
		let table = relations.resolve(&plan.entity, relation)?;

		for field in fields {
			or_contains.push(FieldRef::new(table.clone(), field.clone()));
			select.push(FieldRef::new(table.clone(), field.clone()));
		}

		joins.push(relation.clone());
	}

	let params = vec![pattern; or_contains.len()];

	Ok(ConditionQuery {
		entity: plan.entity.clone(),
		or_contains,
		params,
		select,
		joins,
		order_by: plan.order_by.clone(),
		limit: plan.limit,
	})
}

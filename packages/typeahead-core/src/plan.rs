use typeahead_config::{EndpointConfig, Engine, FullTextFields};

use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	Asc,
	Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderBy {
	pub field: String,
	pub direction: Direction,
}

/// Canonical form of one endpoint's search configuration. Resolved once at
/// registration and immutable afterwards.
#[derive(Debug, Clone)]
pub struct QueryPlan {
	pub entity: String,
	/// Non-empty, in configured order.
	pub primary_fields: Vec<String>,
	/// Relation name to its fields, in configured order. May be empty.
	pub related_fields: Vec<(String, Vec<String>)>,
	pub delimiter: String,
	pub order_by: OrderBy,
	pub limit: u32,
}
impl QueryPlan {
	/// The field results are re-sorted by after a multi-batch merge.
	pub fn sort_field(&self) -> &str {
		&self.primary_fields[0]
	}
}

/// Which of the three mutually exclusive search actions the endpoint runs.
/// Precedence is fixed: collection, else full-text, else relational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Strategy {
	Collection { source: String, filter_by: String },
	FullText(FullTextFields),
	Relational,
}

pub fn resolve(endpoint: &EndpointConfig, defaults: &Engine) -> Result<(QueryPlan, Strategy)> {
	let entity = endpoint.entity.trim().to_string();

	if entity.is_empty() {
		return Err(Error::Configuration("entity must be non-empty.".to_string()));
	}

	let primary_fields = endpoint.fields.to_vec();

	if primary_fields.is_empty() || primary_fields.iter().any(|field| field.trim().is_empty()) {
		return Err(Error::Configuration(format!(
			"entity {entity} must configure at least one non-empty field."
		)));
	}
	if endpoint.collection.is_some() && primary_fields.len() > 1 {
		return Err(Error::Configuration(format!(
			"entity {entity}: a collection source cannot be combined with a multi-field list."
		)));
	}
	if endpoint.collection.is_some() && endpoint.full_text.is_some() {
		return Err(Error::Configuration(format!(
			"entity {entity}: collection and full_text are mutually exclusive."
		)));
	}
	if let Some(FullTextFields::Fields(fields)) = &endpoint.full_text
		&& (fields.is_empty() || fields.iter().any(|field| field.trim().is_empty()))
	{
		return Err(Error::Configuration(format!(
			"entity {entity}: full_text must list at least one non-empty field."
		)));
	}

	let limit = endpoint.limit.unwrap_or(defaults.limit);

	if limit == 0 {
		return Err(Error::Configuration(format!(
			"entity {entity}: limit must be greater than zero."
		)));
	}

	let order_by = match &endpoint.order {
		Some(raw) => parse_order(raw)?,
		None => OrderBy { field: primary_fields[0].clone(), direction: Direction::Asc },
	};
	let related_fields = endpoint
		.associations
		.iter()
		.map(|(relation, fields)| (relation.clone(), fields.to_vec()))
		.collect();
	let plan = QueryPlan {
		entity,
		primary_fields,
		related_fields,
		delimiter: endpoint.delimiter.clone().unwrap_or_else(|| defaults.delimiter.clone()),
		order_by,
		limit,
	};
	let strategy = if let Some(source) = &endpoint.collection {
		let filter_by = endpoint
			.collection_filter_by
			.clone()
			.unwrap_or_else(|| plan.primary_fields[0].clone());

		Strategy::Collection { source: source.clone(), filter_by }
	} else if let Some(fields) = &endpoint.full_text {
		Strategy::FullText(fields.clone())
	} else {
		Strategy::Relational
	};

	Ok((plan, strategy))
}

/// Parses `"<field>"`, `"<field> ASC"`, or `"<field> DESC"`; the direction
/// token is case-insensitive.
pub fn parse_order(raw: &str) -> Result<OrderBy> {
	let mut parts = raw.split_whitespace();
	let field = parts
		.next()
		.ok_or_else(|| Error::Configuration("order must name a field.".to_string()))?
		.to_string();
	let direction = match parts.next() {
		None => Direction::Asc,
		Some(token) if token.eq_ignore_ascii_case("asc") => Direction::Asc,
		Some(token) if token.eq_ignore_ascii_case("desc") => Direction::Desc,
		Some(token) => {
			return Err(Error::Configuration(format!(
				"order direction must be ASC or DESC, got {token}."
			)));
		},
	};

	if parts.next().is_some() {
		return Err(Error::Configuration(format!("order has trailing tokens: {raw}.")));
	}

	Ok(OrderBy { field, direction })
}

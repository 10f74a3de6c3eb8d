use crate::{
	plan::QueryPlan,
	record::{FieldAccess, Record},
	value::FieldValue,
};

/// Renders one record per line: primary field values in configured order,
/// then related field values in configured order, joined with the plan's
/// delimiter, then `|` and the identifier.
pub fn render_lines<R: Record>(records: &[R], plan: &QueryPlan) -> String {
	records.iter().map(|record| render_line(record, plan)).collect::<Vec<_>>().join("\n")
}

pub fn render_line<R: Record>(record: &R, plan: &QueryPlan) -> String {
	let mut values = Vec::new();

	for field in &plan.primary_fields {
		values.push(record.get(field).to_string());
	}
	for (relation, fields) in &plan.related_fields {
		for field in fields {
			let value = record
				.related(relation)
				.map(|related| related.get(field))
				.unwrap_or(FieldValue::Null);

			values.push(value.to_string());
		}
	}

	format!("{}|{}", values.join(&plan.delimiter), record.id())
}

use typeahead_config::FullTextFields;
use typeahead_core::{condition, filter, merge, plan::Strategy, record::MapRecord, render};

use crate::{Endpoint, Registry, ServiceError, ServiceResult};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CompleteRequest {
	pub endpoint: String,
	/// Raw, untrusted search text. Empty is allowed and matches everything
	/// up to the endpoint's limit.
	#[serde(default)]
	pub query: String,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct CompleteResponse {
	/// Newline-joined rendered lines; the whole response body.
	pub body: String,
}

impl Registry {
	pub async fn complete(&self, req: CompleteRequest) -> ServiceResult<CompleteResponse> {
		let endpoint = self.endpoint(&req.endpoint).ok_or_else(|| ServiceError::Configuration {
			message: format!("endpoint {} is not registered.", req.endpoint),
		})?;
		let records = match &endpoint.strategy {
			Strategy::Collection { source, filter_by } =>
				self.complete_collection(endpoint, source, filter_by, &req.query).await?,
			Strategy::Relational => self.complete_relational(endpoint, &req.query).await?,
			Strategy::FullText(fields) =>
				self.complete_full_text(endpoint, fields, &req.query).await?,
		};
		let body = match &endpoint.transform {
			Some(transform) => transform(&records),
			None => render::render_lines(&records, &endpoint.plan),
		};

		Ok(CompleteResponse { body })
	}

	async fn complete_collection(
		&self,
		endpoint: &Endpoint,
		source: &str,
		filter_by: &str,
		query: &str,
	) -> ServiceResult<Vec<MapRecord>> {
		let Some(records) = self.backends.collections.fetch(source).await? else {
			tracing::warn!(collection = %source, "Collection source not found; returning no results.");

			return Ok(Vec::new());
		};

		Ok(filter::filter_collection(&records, filter_by, query, endpoint.plan.limit))
	}

	async fn complete_relational(
		&self,
		endpoint: &Endpoint,
		query: &str,
	) -> ServiceResult<Vec<MapRecord>> {
		let conditions =
			condition::build(&endpoint.plan, self.backends.relations.as_ref(), query)?;

		tracing::debug!(
			entity = %endpoint.plan.entity,
			predicates = conditions.or_contains.len(),
			"Dispatching relational search."
		);

		self.backends.search.search(&conditions).await
	}

	async fn complete_full_text(
		&self,
		endpoint: &Endpoint,
		fields: &FullTextFields,
		query: &str,
	) -> ServiceResult<Vec<MapRecord>> {
		let plan = &endpoint.plan;

		match fields {
			// One unconstrained query; results stay in backend order. The
			// merge/sort/truncate step applies only to multi-batch results.
			FullTextFields::All =>
				self.backends.full_text.search(&plan.entity, query, None, plan.limit).await,
			FullTextFields::Fields(fields) => {
				let mut batches = Vec::with_capacity(fields.len());

				for field in fields {
					batches.push(
						self.backends
							.full_text
							.search(&plan.entity, query, Some(field), plan.limit)
							.await?,
					);
				}

				if batches.len() > 1 {
					Ok(merge::merge_batches(batches, plan.sort_field(), plan.limit))
				} else {
					Ok(batches.pop().unwrap_or_default())
				}
			},
		}
	}
}

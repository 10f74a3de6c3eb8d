use std::{collections::HashMap, sync::Arc};

use typeahead_config::{Config, EndpointConfig, Engine};
use typeahead_core::{
	plan,
	plan::{QueryPlan, Strategy},
	record::MapRecord,
};

use crate::{Backends, ServiceError, ServiceResult};

/// Replaces default rendering wholesale: receives the final result sequence
/// and produces the entire response body.
pub type Transform = Arc<dyn Fn(&[MapRecord]) -> String + Send + Sync>;

pub struct Endpoint {
	pub plan: QueryPlan,
	pub strategy: Strategy,
	pub(crate) transform: Option<Transform>,
}

/// Binds endpoint names to resolved query plans. Built once by the host
/// during startup; immutable while serving.
pub struct Registry {
	defaults: Engine,
	pub(crate) backends: Backends,
	endpoints: HashMap<String, Endpoint>,
}
impl Registry {
	pub fn new(defaults: Engine, backends: Backends) -> Self {
		Self { defaults, backends, endpoints: HashMap::new() }
	}

	/// Registers every endpoint in the config, in order.
	pub fn from_config(cfg: &Config, backends: Backends) -> ServiceResult<Self> {
		let mut registry = Self::new(cfg.engine.clone(), backends);

		for endpoint in &cfg.endpoints {
			registry.register(endpoint)?;
		}

		Ok(registry)
	}

	/// Resolves the endpoint's plan and strategy and binds them under the
	/// configured name, or `<entity>_<fields joined with '_'>` by default.
	/// Incompatible options are rejected here, before any search can run.
	pub fn register(&mut self, endpoint: &EndpointConfig) -> ServiceResult<String> {
		self.register_endpoint(endpoint, None)
	}

	pub fn register_with_transform(
		&mut self,
		endpoint: &EndpointConfig,
		transform: Transform,
	) -> ServiceResult<String> {
		self.register_endpoint(endpoint, Some(transform))
	}

	pub fn endpoint_names(&self) -> Vec<&str> {
		let mut names: Vec<&str> = self.endpoints.keys().map(String::as_str).collect();

		names.sort_unstable();

		names
	}

	pub(crate) fn endpoint(&self, name: &str) -> Option<&Endpoint> {
		self.endpoints.get(name)
	}

	fn register_endpoint(
		&mut self,
		endpoint: &EndpointConfig,
		transform: Option<Transform>,
	) -> ServiceResult<String> {
		typeahead_config::validate_endpoint(endpoint)?;

		let (plan, strategy) = plan::resolve(endpoint, &self.defaults)?;
		let name = endpoint
			.name
			.clone()
			.unwrap_or_else(|| format!("{}_{}", plan.entity, plan.primary_fields.join("_")));

		if self.endpoints.contains_key(&name) {
			return Err(ServiceError::Configuration {
				message: format!("endpoint {name} is already registered."),
			});
		}

		tracing::debug!(endpoint = %name, entity = %plan.entity, "Registered autocomplete endpoint.");
		self.endpoints.insert(name.clone(), Endpoint { plan, strategy, transform });

		Ok(name)
	}
}

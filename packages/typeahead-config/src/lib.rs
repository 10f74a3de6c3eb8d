mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, EndpointConfig, Engine, FieldList, FullTextFields};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.engine.log_level.trim().is_empty() {
		return Err(Error::Validation { message: "engine.log_level must be non-empty.".to_string() });
	}
	if cfg.engine.limit == 0 {
		return Err(Error::Validation {
			message: "engine.limit must be greater than zero.".to_string(),
		});
	}

	for endpoint in &cfg.endpoints {
		validate_endpoint(endpoint)?;
	}

	Ok(())
}

pub fn validate_endpoint(endpoint: &EndpointConfig) -> Result<()> {
	let entity = endpoint.entity.trim();

	if entity.is_empty() {
		return Err(Error::Validation { message: "endpoint.entity must be non-empty.".to_string() });
	}
	if endpoint.fields.is_empty() {
		return Err(Error::Validation {
			message: format!("endpoint.fields must be non-empty for entity {entity}."),
		});
	}
	if endpoint.fields.to_vec().iter().any(|field| field.trim().is_empty()) {
		return Err(Error::Validation {
			message: format!("endpoint.fields must not contain empty names for entity {entity}."),
		});
	}
	if endpoint.collection.is_some() && endpoint.fields.len() > 1 {
		return Err(Error::Validation {
			message: format!(
				"endpoint.collection cannot be combined with a multi-field list for entity {entity}."
			),
		});
	}
	if endpoint.collection.is_some() && endpoint.full_text.is_some() {
		return Err(Error::Validation {
			message: format!(
				"endpoint.collection and endpoint.full_text are mutually exclusive for entity {entity}."
			),
		});
	}
	if let Some(FullTextFields::Fields(fields)) = &endpoint.full_text
		&& fields.is_empty()
	{
		return Err(Error::Validation {
			message: format!("endpoint.full_text field list must be non-empty for entity {entity}."),
		});
	}
	if endpoint.limit == Some(0) {
		return Err(Error::Validation {
			message: format!("endpoint.limit must be greater than zero for entity {entity}."),
		});
	}

	for (relation, fields) in &endpoint.associations {
		if relation.trim().is_empty() {
			return Err(Error::Validation {
				message: format!("endpoint.associations relation names must be non-empty for entity {entity}."),
			});
		}
		if fields.is_empty() {
			return Err(Error::Validation {
				message: format!(
					"endpoint.associations.{relation} must list at least one field for entity {entity}."
				),
			});
		}
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	for endpoint in &mut cfg.endpoints {
		if endpoint.name.as_deref().map(|name| name.trim().is_empty()).unwrap_or(false) {
			endpoint.name = None;
		}
		if endpoint.order.as_deref().map(|order| order.trim().is_empty()).unwrap_or(false) {
			endpoint.order = None;
		}
		if endpoint
			.collection_filter_by
			.as_deref()
			.map(|field| field.trim().is_empty())
			.unwrap_or(false)
		{
			endpoint.collection_filter_by = None;
		}
	}
}

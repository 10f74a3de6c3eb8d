use std::collections::BTreeMap;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Config {
	#[serde(default)]
	pub engine: Engine,
	#[serde(default, rename = "endpoint")]
	pub endpoints: Vec<EndpointConfig>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Engine {
	#[serde(default = "default_log_level")]
	pub log_level: String,
	#[serde(default = "default_limit")]
	pub limit: u32,
	#[serde(default = "default_delimiter")]
	pub delimiter: String,
}
impl Default for Engine {
	fn default() -> Self {
		Self {
			log_level: default_log_level(),
			limit: default_limit(),
			delimiter: default_delimiter(),
		}
	}
}

/// One autocomplete registration: an entity, the fields matched and rendered,
/// and the options that pick the search strategy.
#[derive(Debug, Clone, Deserialize)]
pub struct EndpointConfig {
	pub entity: String,
	pub fields: FieldList,
	/// Overrides the generated endpoint name (`<entity>_<fields joined with '_'>`).
	pub name: Option<String>,
	pub limit: Option<u32>,
	/// `"<field>"`, `"<field> ASC"`, or `"<field> DESC"`.
	pub order: Option<String>,
	pub delimiter: Option<String>,
	/// Relation name to the fields rendered from the related entity.
	#[serde(default)]
	pub associations: BTreeMap<String, FieldList>,
	/// Filter a named in-memory collection instead of querying a backend.
	pub collection: Option<String>,
	/// Field the collection filter matches on. Defaults to the first field.
	pub collection_filter_by: Option<String>,
	/// Full-text fields, or the `"all"` sentinel for every indexed field.
	pub full_text: Option<FullTextFields>,
}

/// A single field name or an ordered list of them.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(untagged)]
pub enum FieldList {
	One(String),
	Many(Vec<String>),
}
impl FieldList {
	pub fn to_vec(&self) -> Vec<String> {
		match self {
			Self::One(field) => vec![field.clone()],
			Self::Many(fields) => fields.clone(),
		}
	}

	pub fn len(&self) -> usize {
		match self {
			Self::One(_) => 1,
			Self::Many(fields) => fields.len(),
		}
	}

	pub fn is_empty(&self) -> bool {
		match self {
			Self::One(field) => field.trim().is_empty(),
			Self::Many(fields) => fields.is_empty(),
		}
	}

	pub fn first(&self) -> Option<&str> {
		match self {
			Self::One(field) => Some(field.as_str()),
			Self::Many(fields) => fields.first().map(String::as_str),
		}
	}
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FullTextFields {
	All,
	Fields(Vec<String>),
}
impl<'de> Deserialize<'de> for FullTextFields {
	fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
	where
		D: serde::Deserializer<'de>,
	{
		#[derive(Deserialize)]
		#[serde(untagged)]
		enum Raw {
			Sentinel(String),
			Fields(Vec<String>),
		}

		match Raw::deserialize(deserializer)? {
			Raw::Sentinel(value) if value == "all" => Ok(Self::All),
			Raw::Sentinel(value) => Err(serde::de::Error::custom(format!(
				"full_text must be a field list or the sentinel \"all\", got \"{value}\"."
			))),
			Raw::Fields(fields) => Ok(Self::Fields(fields)),
		}
	}
}

fn default_log_level() -> String {
	"info".to_string()
}

fn default_limit() -> u32 {
	10
}

fn default_delimiter() -> String {
	" ".to_string()
}

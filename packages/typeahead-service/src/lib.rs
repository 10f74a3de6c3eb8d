pub mod complete;
pub mod registry;

use std::{future::Future, pin::Pin, sync::Arc};

use typeahead_core::{
	condition::{ConditionQuery, RelationResolver},
	record::MapRecord,
};
use typeahead_storage::MemoryStore;

pub use complete::{CompleteRequest, CompleteResponse};
pub use registry::{Endpoint, Registry, Transform};

pub type ServiceResult<T> = Result<T, ServiceError>;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Executes a backend-agnostic condition query against the persistence
/// layer. Result order is whatever the backend guarantees.
pub trait SearchBackend
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		query: &'a ConditionQuery,
	) -> BoxFuture<'a, ServiceResult<Vec<MapRecord>>>;
}

/// Queries the full-text index, either constrained to one field or across
/// every indexed field, capped at `limit` results.
pub trait FullTextBackend
where
	Self: Send + Sync,
{
	fn search<'a>(
		&'a self,
		entity: &'a str,
		query: &'a str,
		field: Option<&'a str>,
		limit: u32,
	) -> BoxFuture<'a, ServiceResult<Vec<MapRecord>>>;
}

/// Looks up a named in-memory sequence. `None` means the sequence does not
/// exist, which the engine treats as zero results rather than an error.
pub trait CollectionSource
where
	Self: Send + Sync,
{
	fn fetch<'a>(&'a self, name: &'a str) -> BoxFuture<'a, ServiceResult<Option<Vec<MapRecord>>>>;
}

#[derive(Debug)]
pub enum ServiceError {
	Configuration { message: String },
	Backend { message: String },
}
impl std::fmt::Display for ServiceError {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Configuration { message } => write!(f, "Configuration error: {message}"),
			Self::Backend { message } => write!(f, "Backend error: {message}"),
		}
	}
}
impl std::error::Error for ServiceError {}

impl From<typeahead_core::Error> for ServiceError {
	fn from(err: typeahead_core::Error) -> Self {
		Self::Configuration { message: err.to_string() }
	}
}
impl From<typeahead_config::Error> for ServiceError {
	fn from(err: typeahead_config::Error) -> Self {
		Self::Configuration { message: err.to_string() }
	}
}
impl From<typeahead_storage::Error> for ServiceError {
	fn from(err: typeahead_storage::Error) -> Self {
		Self::Backend { message: err.to_string() }
	}
}

/// The collaborators one registry instance dispatches to.
#[derive(Clone)]
pub struct Backends {
	pub search: Arc<dyn SearchBackend>,
	pub full_text: Arc<dyn FullTextBackend>,
	pub collections: Arc<dyn CollectionSource>,
	pub relations: Arc<dyn RelationResolver + Send + Sync>,
}
impl Backends {
	pub fn new(
		search: Arc<dyn SearchBackend>,
		full_text: Arc<dyn FullTextBackend>,
		collections: Arc<dyn CollectionSource>,
		relations: Arc<dyn RelationResolver + Send + Sync>,
	) -> Self {
		Self { search, full_text, collections, relations }
	}

	/// Wires every collaborator to one shared in-memory store.
	pub fn memory(store: Arc<MemoryStore>) -> Self {
		let backend = Arc::new(MemoryBackends(store.clone()));

		Self {
			search: backend.clone(),
			full_text: backend.clone(),
			collections: backend,
			relations: store,
		}
	}
}

struct MemoryBackends(Arc<MemoryStore>);

impl SearchBackend for MemoryBackends {
	fn search<'a>(
		&'a self,
		query: &'a ConditionQuery,
	) -> BoxFuture<'a, ServiceResult<Vec<MapRecord>>> {
		Box::pin(async move { Ok(self.0.search(query)?) })
	}
}
impl FullTextBackend for MemoryBackends {
	fn search<'a>(
		&'a self,
		entity: &'a str,
		query: &'a str,
		field: Option<&'a str>,
		limit: u32,
	) -> BoxFuture<'a, ServiceResult<Vec<MapRecord>>> {
		Box::pin(async move { Ok(self.0.full_text(entity, query, field, limit)?) })
	}
}
impl CollectionSource for MemoryBackends {
	fn fetch<'a>(&'a self, name: &'a str) -> BoxFuture<'a, ServiceResult<Option<Vec<MapRecord>>>> {
		Box::pin(async move { Ok(self.0.collection(name).map(<[MapRecord]>::to_vec)) })
	}
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Not found: {0}")]
	NotFound(String),
	#[error("Invalid seed data: {0}")]
	InvalidSeed(String),
	#[error(transparent)]
	Relation(#[from] typeahead_core::Error),
}

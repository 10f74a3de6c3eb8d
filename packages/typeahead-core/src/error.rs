pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid configuration: {0}")]
	Configuration(String),
	#[error("Unknown relation {relation} on entity {entity}.")]
	UnknownRelation { entity: String, relation: String },
}

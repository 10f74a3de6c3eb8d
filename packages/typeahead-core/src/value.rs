use std::{
	cmp::Ordering,
	fmt::{Display, Formatter},
	hash::{Hash, Hasher},
};

/// A single field value read from a record.
///
/// Values form a total order so result sets can be sorted by any field:
/// nulls first, then booleans, then numbers (integers and floats compared
/// numerically), then text. Floats hash and compare for equality by bit
/// pattern so values can key dedup sets.
#[derive(Debug, Clone, Default)]
pub enum FieldValue {
	#[default]
	Null,
	Bool(bool),
	Integer(i64),
	Float(f64),
	Text(String),
}
impl FieldValue {
	/// Case-insensitive substring match against an already-lowercased needle.
	///
	/// An empty needle matches every value, including `Null`.
	pub fn contains_lowered(&self, needle: &str) -> bool {
		self.to_string().to_lowercase().contains(needle)
	}

	fn rank(&self) -> u8 {
		match self {
			Self::Null => 0,
			Self::Bool(_) => 1,
			Self::Integer(_) | Self::Float(_) => 2,
			Self::Text(_) => 3,
		}
	}
}

impl Display for FieldValue {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Null => Ok(()),
			Self::Bool(value) => write!(f, "{value}"),
			Self::Integer(value) => write!(f, "{value}"),
			Self::Float(value) => write!(f, "{value}"),
			Self::Text(value) => write!(f, "{value}"),
		}
	}
}

impl PartialEq for FieldValue {
	fn eq(&self, other: &Self) -> bool {
		match (self, other) {
			(Self::Null, Self::Null) => true,
			(Self::Bool(a), Self::Bool(b)) => a == b,
			(Self::Integer(a), Self::Integer(b)) => a == b,
			(Self::Float(a), Self::Float(b)) => a.to_bits() == b.to_bits(),
			(Self::Text(a), Self::Text(b)) => a == b,
			_ => false,
		}
	}
}
impl Eq for FieldValue {}

impl Hash for FieldValue {
	fn hash<H: Hasher>(&self, state: &mut H) {
		self.rank().hash(state);

		match self {
			Self::Null => {},
			Self::Bool(value) => value.hash(state),
			Self::Integer(value) => value.hash(state),
			Self::Float(value) => value.to_bits().hash(state),
			Self::Text(value) => value.hash(state),
		}
	}
}

impl Ord for FieldValue {
	fn cmp(&self, other: &Self) -> Ordering {
		match (self, other) {
			(Self::Bool(a), Self::Bool(b)) => a.cmp(b),
			(Self::Integer(a), Self::Integer(b)) => a.cmp(b),
			(Self::Float(a), Self::Float(b)) => a.total_cmp(b),
			// Numerically equal mixed numbers order by variant to stay
			// consistent with the bitwise equality above.
			(Self::Integer(a), Self::Float(b)) => (*a as f64).total_cmp(b).then(Ordering::Less),
			(Self::Float(a), Self::Integer(b)) => a.total_cmp(&(*b as f64)).then(Ordering::Greater),
			(Self::Text(a), Self::Text(b)) => a.cmp(b),
			_ => self.rank().cmp(&other.rank()),
		}
	}
}
impl PartialOrd for FieldValue {
	fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
		Some(self.cmp(other))
	}
}

impl From<&str> for FieldValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}
impl From<String> for FieldValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}
impl From<i64> for FieldValue {
	fn from(value: i64) -> Self {
		Self::Integer(value)
	}
}
impl From<f64> for FieldValue {
	fn from(value: f64) -> Self {
		Self::Float(value)
	}
}
impl From<bool> for FieldValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

pub mod condition;
pub mod filter;
pub mod merge;
pub mod plan;
pub mod record;
pub mod render;
pub mod value;

mod error;

pub use error::{Error, Result};

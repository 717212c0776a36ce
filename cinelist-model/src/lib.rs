//! Core data model definitions shared across cinelist crates.

pub mod error;
pub mod ids;
pub mod movie;
pub mod query;

pub use error::{ModelError, Result as ModelResult};
pub use ids::ImdbId;
pub use movie::Movie;
pub use query::MovieQuery;

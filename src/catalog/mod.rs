/// Project catalog module
///
/// Owns the relational model (projects, categories, technologies and their
/// join table), the SQLite bootstrap and the read-only repository.

pub mod database;
pub mod error;
pub mod repository;
pub mod seed;
pub mod types;

#[cfg(test)]
pub(crate) mod testing;

pub use error::RetrievalError;
pub use repository::ProjectRepository;
pub use types::{Category, MediaType, Project, ProjectStatus, Technology};

/// Client layer
///
/// Typed access to the catalog API for presentational code:
/// - `api`: reqwest-based client that unwraps the response envelope
/// - `hook`: per-consumer loading/error/data state container
/// - `view`: display-oriented project transform

pub mod api;
pub mod hook;
pub mod view;

pub use api::{ApiClient, ClientError};
pub use hook::{CatalogSource, CatalogState, ProjectsHook};
pub use view::{project_cards, ProjectCard};

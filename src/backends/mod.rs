pub mod errors;
pub mod tmdb;
pub mod traits;

pub use errors::CatalogError;
pub use tmdb::TmdbBackend;
pub use traits::CatalogClient;

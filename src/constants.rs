// Catalog endpoints
pub const DEFAULT_API_BASE_URL: &str = "https://api.themoviedb.org/3";
pub const DEFAULT_IMAGE_BASE_URL: &str = "https://image.tmdb.org/t/p";

/// Overrides `catalog.api_key` from the config file.
pub const API_KEY_ENV: &str = "MARQUEE_TMDB_API_KEY";

// Carousel layout
pub const DEFAULT_PAGE_SIZE: usize = 6;

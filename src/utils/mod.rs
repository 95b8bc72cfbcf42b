pub mod errors;
pub mod image_path;

pub use errors::AppError;
pub use image_path::{ImageSize, image_url};

//! Plain-text rendering of the pages for the terminal front end.

mod renderer;

pub use renderer::TextRenderer;

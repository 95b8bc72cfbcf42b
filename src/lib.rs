// Library entry shared by the terminal front end and the integration tests

pub mod backends;
pub mod config;
pub mod constants;
pub mod core;
pub mod models;
pub mod services;
pub mod ui;
pub mod utils;

#[cfg(test)]
mod test_utils;

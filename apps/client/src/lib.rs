pub mod api;
pub mod config;
pub mod errors;
pub mod models;
pub mod mutations;
pub mod state;
pub mod store;

#[cfg(test)]
mod test_support;

pub mod cache;
pub mod cli;
pub mod config;
pub mod discovery;
pub mod error;
pub mod extract;
pub mod graph;
pub mod lang;
pub mod lang_queries;
pub mod map;
pub mod tokens;
pub mod types;

pub use map::build_context;

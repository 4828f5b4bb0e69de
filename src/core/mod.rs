pub mod common;
pub mod config;
pub mod indexing;
pub use self::config::Config;

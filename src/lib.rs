//! Expand GitHub shorthand into repositories, issues, and paths.
//!
//! The core is [`shorthand::resolve`]; [`config`] supplies its tables and
//! [`alfred`] turns the result into launcher rows.

pub mod alfred;
pub mod config;
pub mod github;
pub mod shorthand;

pub use config::Config;
pub use shorthand::{resolve, Resolution};

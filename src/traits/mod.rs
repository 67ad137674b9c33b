//! Trait definitions for Postlane operations.
//!
//! Each entity type implements the traits it supports, encapsulating
//! endpoint paths and envelope shapes in the implementations.

mod create;
mod delete;
mod list;
mod update;

pub use create::{Create, CreateMany};
pub use delete::Delete;
pub use list::{List, DEFAULT_PAGE_SIZE};
pub use update::Update;

//! Postlane API model types.

mod contact;
mod email;
mod list;
mod portal;
mod property;

pub use contact::*;
pub use email::*;
pub use list::*;
pub use portal::*;
pub use property::*;

//! Data models
//!
//! Wire types of the tourism backend, shared by every client surface.

pub mod admin;
pub mod destination;
pub mod recommendor;
pub mod upload;

// Re-exports
pub use admin::*;
pub use destination::*;
pub use recommendor::*;
pub use upload::*;

//! Shared types for the tourism recommender
//!
//! Wire DTOs, the failure taxonomy and the region index used by every
//! client of the tourism backend.

pub mod client;
pub mod error;
pub mod models;
pub mod region;
pub mod response;
pub mod util;

// Re-exports
pub use http;
pub use serde::{Deserialize, Serialize};

pub use error::{ErrorBody, FailureCategory};
pub use response::{Envelope, ListQuery, Paginated};

//! Typed API wrappers
//!
//! Auth operations live directly on [`ApiClient`]; resources are reached
//! through borrowed handles:
//!
//! ```no_run
//! # async fn demo(client: tour_client::ApiClient) -> tour_client::ClientResult<()> {
//! use shared::ListQuery;
//!
//! let page = client.admin_recommendors().list(&ListQuery::page(1, 20)).await?;
//! for r in &page.data {
//!     println!("{} {}", r.id, r.name);
//! }
//! # Ok(())
//! # }
//! ```

mod auth;
mod destinations;
mod recommendors;
mod uploads;

pub use auth::LoginOutcome;
pub use destinations::{AdminDestinations, PublicDestinations};
pub use recommendors::{AdminRecommendors, PublicRecommendors};
pub use uploads::Uploads;

use crate::ApiClient;

impl ApiClient {
    /// `/admin/recommendors`
    pub fn admin_recommendors(&self) -> AdminRecommendors<'_> {
        AdminRecommendors::new(self)
    }

    /// `/admin/destinations`
    pub fn admin_destinations(&self) -> AdminDestinations<'_> {
        AdminDestinations::new(self)
    }

    /// `/recommendors`
    pub fn recommendors(&self) -> PublicRecommendors<'_> {
        PublicRecommendors::new(self)
    }

    /// `/destinations`
    pub fn destinations(&self) -> PublicDestinations<'_> {
        PublicDestinations::new(self)
    }

    /// `/v1/upload/*`
    pub fn uploads(&self) -> Uploads<'_> {
        Uploads::new(self)
    }
}

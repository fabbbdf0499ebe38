//! Recommendor API

use reqwest::Method;
use shared::models::{Destination, Recommendor, RecommendorPayload};
use shared::response::MessageBody;
use shared::{ListQuery, Paginated};

use crate::{ApiClient, ClientResult};

// =============================================================================
// Admin
// =============================================================================

/// Admin recommendor management, all statuses visible
#[derive(Debug, Clone, Copy)]
pub struct AdminRecommendors<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminRecommendors<'a> {
    const PATH: &'static str = "/admin/recommendors";

    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Paginated<Recommendor>> {
        let request = self.client.request(Method::GET, Self::PATH).query(query);
        self.client.execute(request, Some("获取推荐官列表失败")).await
    }

    pub async fn detail(&self, id: i64) -> ClientResult<Recommendor> {
        let request = self.client.request(Method::GET, &format!("{}/{}", Self::PATH, id));
        self.client.execute(request, Some("获取推荐官详情失败")).await
    }

    pub async fn create(&self, payload: &RecommendorPayload) -> ClientResult<Recommendor> {
        let request = self.client.request(Method::POST, Self::PATH).json(payload);
        let created: Recommendor = self.client.execute(request, Some("创建推荐官失败")).await?;
        tracing::info!(id = created.id, name = %created.name, "Recommendor created");
        self.client.notify_success("创建推荐官成功");
        Ok(created)
    }

    pub async fn update(&self, id: i64, payload: &RecommendorPayload) -> ClientResult<Recommendor> {
        let request = self
            .client
            .request(Method::PUT, &format!("{}/{}", Self::PATH, id))
            .json(payload);
        let updated = self.client.execute(request, Some("更新推荐官失败")).await?;
        self.client.notify_success("更新推荐官成功");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let request = self.client.request(Method::DELETE, &format!("{}/{}", Self::PATH, id));
        let _: MessageBody = self.client.execute(request, Some("删除推荐官失败")).await?;
        tracing::info!(id, "Recommendor deleted");
        self.client.notify_success("删除推荐官成功");
        Ok(())
    }

    /// Regenerates the web and mini-program QR codes
    pub async fn regenerate_qr_codes(&self, id: i64) -> ClientResult<Recommendor> {
        let request = self
            .client
            .request(Method::POST, &format!("{}/{}/qrcodes", Self::PATH, id));
        let recommendor = self.client.execute(request, Some("重新生成二维码失败")).await?;
        self.client.notify_success("二维码重新生成成功");
        Ok(recommendor)
    }
}

// =============================================================================
// Public
// =============================================================================

/// Public browsing, active recommendors only
#[derive(Debug, Clone, Copy)]
pub struct PublicRecommendors<'a> {
    client: &'a ApiClient,
}

impl<'a> PublicRecommendors<'a> {
    const PATH: &'static str = "/recommendors";

    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Paginated<Recommendor>> {
        let request = self.client.request(Method::GET, Self::PATH).query(query);
        self.client.execute(request, Some("获取推荐官列表失败")).await
    }

    pub async fn detail(&self, id: i64) -> ClientResult<Recommendor> {
        let request = self.client.request(Method::GET, &format!("{}/{}", Self::PATH, id));
        self.client.execute(request, Some("获取推荐官详情失败")).await
    }

    pub async fn destinations(
        &self,
        recommendor_id: i64,
        query: &ListQuery,
    ) -> ClientResult<Paginated<Destination>> {
        let request = self
            .client
            .request(Method::GET, &format!("{}/{}/destinations", Self::PATH, recommendor_id))
            .query(query);
        self.client
            .execute(request, Some("获取推荐官的目的地列表失败"))
            .await
    }
}

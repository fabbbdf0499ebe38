//! Destination API

use reqwest::Method;
use shared::models::{Destination, DestinationPayload};
use shared::response::MessageBody;
use shared::{ListQuery, Paginated};

use crate::{ApiClient, ClientResult};

/// Admin destination management
#[derive(Debug, Clone, Copy)]
pub struct AdminDestinations<'a> {
    client: &'a ApiClient,
}

impl<'a> AdminDestinations<'a> {
    const PATH: &'static str = "/admin/destinations";

    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Paginated<Destination>> {
        let request = self.client.request(Method::GET, Self::PATH).query(query);
        self.client.execute(request, Some("获取目的地列表失败")).await
    }

    pub async fn detail(&self, id: i64) -> ClientResult<Destination> {
        let request = self.client.request(Method::GET, &format!("{}/{}", Self::PATH, id));
        self.client.execute(request, Some("获取目的地详情失败")).await
    }

    pub async fn create(&self, payload: &DestinationPayload) -> ClientResult<Destination> {
        let request = self.client.request(Method::POST, Self::PATH).json(payload);
        let created: Destination = self.client.execute(request, Some("创建目的地失败")).await?;
        tracing::info!(id = created.id, name = %created.name, "Destination created");
        self.client.notify_success("创建目的地成功");
        Ok(created)
    }

    pub async fn update(&self, id: i64, payload: &DestinationPayload) -> ClientResult<Destination> {
        let request = self
            .client
            .request(Method::PUT, &format!("{}/{}", Self::PATH, id))
            .json(payload);
        let updated = self.client.execute(request, Some("更新目的地失败")).await?;
        self.client.notify_success("更新目的地成功");
        Ok(updated)
    }

    pub async fn delete(&self, id: i64) -> ClientResult<()> {
        let request = self.client.request(Method::DELETE, &format!("{}/{}", Self::PATH, id));
        let _: MessageBody = self.client.execute(request, Some("删除目的地失败")).await?;
        tracing::info!(id, "Destination deleted");
        self.client.notify_success("删除目的地成功");
        Ok(())
    }
}

/// Public browsing
#[derive(Debug, Clone, Copy)]
pub struct PublicDestinations<'a> {
    client: &'a ApiClient,
}

impl<'a> PublicDestinations<'a> {
    const PATH: &'static str = "/destinations";

    pub(crate) fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    pub async fn list(&self, query: &ListQuery) -> ClientResult<Paginated<Destination>> {
        let request = self.client.request(Method::GET, Self::PATH).query(query);
        self.client.execute(request, Some("获取目的地列表失败")).await
    }

    pub async fn detail(&self, id: i64) -> ClientResult<Destination> {
        let request = self.client.request(Method::GET, &format!("{}/{}", Self::PATH, id));
        self.client.execute(request, Some("获取目的地详情失败")).await
    }
}

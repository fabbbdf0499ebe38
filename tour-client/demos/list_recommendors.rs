//! Log in and list recommendors
//!
//! Reads `TOURISM_API_BASE_URL` etc. from the environment (or `.env`).
//!
//! Run: TOURISM_USERNAME=admin TOURISM_PASSWORD=... cargo run -p tour-client --example list_recommendors

use anyhow::{Context, bail};
use shared::ListQuery;
use tour_client::{ApiClient, AuthStatus, ClientConfig, LoginOutcome};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "tour_client=info".into()),
        )
        .init();

    let config = ClientConfig::from_env()?;
    let client = ApiClient::new(&config)?;

    if let AuthStatus::Anonymous(reason) = client.session().init_auth() {
        tracing::info!(?reason, "No stored session, logging in");
        let username = std::env::var("TOURISM_USERNAME").context("TOURISM_USERNAME not set")?;
        let password = std::env::var("TOURISM_PASSWORD").context("TOURISM_PASSWORD not set")?;
        if let LoginOutcome::Failure { message } = client.login(&username, &password).await? {
            bail!("login failed: {message}");
        }
    }

    let page = client
        .admin_recommendors()
        .list(&ListQuery::page(1, 20).sorted_by("created_at", true))
        .await?;

    println!("{} recommendors ({} pages)", page.total, page.total_pages);
    for r in &page.data {
        println!("  #{:<5} {:<10} {:<8} {}", r.id, r.name, r.status, r.region_address);
    }
    Ok(())
}

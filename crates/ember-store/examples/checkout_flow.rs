//! End-to-end walkthrough: one checkout on a weekend evening.
//!
//! Run with:
//! ```sh
//! RUST_LOG=debug cargo run --example checkout_flow
//! ```
//!
//! Prices a flavor, injects the session metadata, accrues loyalty, then
//! reads everything back the way the receipt/QR collaborators would.

use chrono::Utc;
use tracing::info;

use ember_core::{Money, TrustArc};
use ember_store::{Cursor, LoyaltyEngine, MetadataInjector, Reader, Store, StoreConfig, StoreResult, SurgeEngine};

#[tokio::main]
async fn main() -> StoreResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let store = Store::open(StoreConfig::on_disk("./ember-data")).await?;

    let surge = SurgeEngine::new(store.clone());
    let injector = MetadataInjector::new(store.clone());
    let loyalty = LoyaltyEngine::new(store.clone());
    let reader = Reader::new(store);

    // 1. Price the flavor for right now
    let now = Utc::now();
    let decision = surge.apply("Peach + Mint", Money::from_cents(1000), now).await?;
    info!(%decision, "surge decision");

    // 2. Record the session metadata for downstream renderers
    let injection = injector.inject("Peach + Mint", decision.weekend).await?;
    info!(%injection, "metadata written");

    // 3. Accrue loyalty for the paying user
    let outcome = loyalty
        .accrue("u-1042", Money::from_cents(2000), TrustArc::from_score(7.0), decision.weekend)
        .await?;
    info!(%outcome, milestone = outcome.milestone_reached(), "loyalty outcome");

    // 4. Read back what collaborators would see
    if let Some(metadata) = reader.checkout_metadata().await? {
        info!(combo = %metadata.flavor_combo, "current snapshot");
    }
    let balance = reader.loyalty_balance("u-1042").await?;
    info!(%balance, "ledger balance for u-1042");
    let decisions = reader.surge_history(Cursor::start()).await?;
    info!(count = decisions.len(), "surge decisions on record");

    Ok(())
}

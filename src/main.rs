use std::error::Error;
use std::sync::Arc;

use uuid::Uuid;
use visapath::api::router::memory_app_state;
use visapath::config::{self, CompletionConfig};
use visapath::models::Subscription;
use visapath::review::OpenAiClient;
use visapath::store::SubscriptionStore;

// Not #[tokio::main]: the completion client is blocking and must be
// constructed outside the async runtime, with review calls dispatched
// through spawn_blocking.
fn main() -> Result<(), Box<dyn Error>> {
    visapath::init_tracing();
    tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);

    let completion = CompletionConfig::from_env();
    let client = Arc::new(OpenAiClient::new(&completion)?);
    let (state, subscriptions) = memory_app_state(client);

    // The in-memory backend has no billing integration; seed an active
    // subscription for the configured demo user so reviews can run.
    if let Ok(raw) = std::env::var("VISAPATH_DEMO_USER") {
        let user_id = Uuid::parse_str(&raw)?;
        subscriptions.upsert_subscription(Subscription {
            user_id,
            status: "active".to_string(),
            current_period_end: None,
        })?;
        tracing::info!(%user_id, "seeded active subscription for demo user");
    }

    let addr = config::bind_addr();
    let runtime = tokio::runtime::Runtime::new()?;
    runtime.block_on(visapath::api::serve(&addr, state))?;
    Ok(())
}

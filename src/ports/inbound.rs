//! Inbound port. Webhook (adapter) calls into the application.

use crate::domain::ChatResponse;

/// Input port: the transport adapter hands over a resolved intent text and
/// always gets a renderable response back.
#[async_trait::async_trait]
pub trait QueryPort: Send + Sync {
    /// Dispatch an intent. Infallible from the caller's view: gateway faults
    /// and unrecognized intents map to user-facing fallback texts.
    async fn handle_intent(&self, intent: &str) -> ChatResponse;
}

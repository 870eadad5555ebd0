//! Application state shared across all request handlers.

use crate::config::SharedConfig;
use crate::delivery::WebhookNotifier;
use giftrelay_core::lifecycle::LifecycleManager;
use giftrelay_core::relay::Relay;
use std::sync::Arc;

/// Application state that is shared across all request handlers.
///
/// This is cloneable and cheap to pass around (everything is behind Arc).
/// The database pool lives inside the lifecycle manager; `main` keeps its
/// own handle for shutdown.
#[derive(Clone)]
pub struct AppState {
    /// Reloadable configuration sections (SIGHUP).
    pub config: SharedConfig,
    /// Event lifecycle engine.
    pub lifecycle: Arc<LifecycleManager>,
    /// Anonymous relay sharing the lifecycle's locks.
    pub relay: Arc<Relay>,
    /// Outbound notice delivery.
    pub notifier: Arc<WebhookNotifier>,
}

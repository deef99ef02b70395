// src/presentation/http/middleware/rate_limit.rs
use ::governor::middleware::NoOpMiddleware;
use axum::body::Body;
use tower_governor::{
    GovernorLayer, governor::GovernorConfigBuilder, key_extractor::SmartIpKeyExtractor,
};

pub type IpRateLimitLayer = GovernorLayer<SmartIpKeyExtractor, NoOpMiddleware, Body>;

/// Per-client token bucket. One token is replenished every
/// `replenish_every_secs` seconds, up to `burst_size` tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RateLimitSettings {
    pub replenish_every_secs: u64,
    pub burst_size: u32,
}

impl Default for RateLimitSettings {
    fn default() -> Self {
        Self {
            replenish_every_secs: 30,
            burst_size: 5,
        }
    }
}

/// Build a limiter keyed on the client IP (forwarding headers first, then
/// the peer address). Returns `None` when the settings are rejected by the
/// governor, e.g. a zero interval or burst.
pub fn rate_limit_layer(settings: RateLimitSettings) -> Option<IpRateLimitLayer> {
    let mut builder = GovernorConfigBuilder::default();
    builder.per_second(settings.replenish_every_secs);
    builder.burst_size(settings.burst_size);
    let Some(config) = builder.key_extractor(SmartIpKeyExtractor).finish() else {
        tracing::warn!(?settings, "invalid rate limit settings; limiter disabled");
        return None;
    };

    Some(GovernorLayer::new(config))
}

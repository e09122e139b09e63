//! Rate-limiting middleware
//!
//! Fixed-window request budget per client IP, applied to the scoring API
//! routes. Requests over budget get 429 with a Retry-After header.

use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::sync::Arc;
use std::time::{Duration, Instant};

use axum::{
    extract::{ConnectInfo, Request, State},
    middleware::Next,
    response::Response,
};
use parking_lot::Mutex;

use crate::{AppError, AppState};

/// Prune expired windows once the map grows past this many clients.
const PRUNE_ABOVE: usize = 4096;

/// Per-client request budget over a fixed time window.
///
/// Cloneable handle; clones share the same window map.
#[derive(Clone)]
pub struct RateLimiter {
    windows: Arc<Mutex<HashMap<IpAddr, Window>>>,
    window: Duration,
    max_requests: u32,
}

struct Window {
    started: Instant,
    count: u32,
}

impl RateLimiter {
    pub fn new(window_secs: u64, max_requests: u32) -> Self {
        Self {
            windows: Arc::new(Mutex::new(HashMap::new())),
            window: Duration::from_secs(window_secs),
            max_requests,
        }
    }

    /// Record one request for `client`. Over budget, returns the seconds
    /// left until the client's window resets.
    pub fn try_acquire(&self, client: IpAddr) -> Result<(), u64> {
        self.try_acquire_at(client, Instant::now())
    }

    fn try_acquire_at(&self, client: IpAddr, now: Instant) -> Result<(), u64> {
        let mut windows = self.windows.lock();

        if windows.len() > PRUNE_ABOVE {
            windows.retain(|_, w| now.duration_since(w.started) < self.window);
        }

        let w = windows.entry(client).or_insert(Window { started: now, count: 0 });

        if now.duration_since(w.started) >= self.window {
            w.started = now;
            w.count = 0;
        }

        if w.count >= self.max_requests {
            let remaining = self.window.saturating_sub(now.duration_since(w.started));
            return Err(remaining.as_secs().max(1));
        }

        w.count += 1;
        Ok(())
    }
}

/// Middleware: enforce the per-client request budget
pub async fn enforce(
    State(state): State<AppState>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let client = forwarded_ip(&req).unwrap_or_else(|| peer.ip());

    match state.limiter.try_acquire(client) {
        Ok(()) => Ok(next.run(req).await),
        Err(retry_after_secs) => {
            tracing::warn!("Rate limit exceeded for {}", client);
            Err(AppError::RateLimited { retry_after_secs })
        }
    }
}

/// Client identity behind a proxy: first X-Forwarded-For entry when present.
fn forwarded_ip(req: &Request) -> Option<IpAddr> {
    req.headers()
        .get("X-Forwarded-For")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.split(',').next())
        .and_then(|s| s.trim().parse().ok())
}

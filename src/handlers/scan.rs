//! URL scan handler

use axum::Json;
use serde::Deserialize;

use crate::logic::url_scan::{self, ScanResult};
use crate::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct ScanUrlRequest {
    /// Defaults to empty so a missing field gets the same rejection as an
    /// empty one.
    #[serde(default)]
    pub url: String,
}

/// Score a URL against the phishing rule tables
pub async fn url(Json(req): Json<ScanUrlRequest>) -> AppResult<Json<ScanResult>> {
    if req.url.trim().is_empty() {
        return Err(AppError::ValidationError("URL is required".to_string()));
    }

    let result = url_scan::scan_url(&req.url);
    tracing::debug!(
        "Scanned {} -> {} (confidence {})",
        result.url,
        result.risk_level,
        result.confidence
    );

    Ok(Json(result))
}

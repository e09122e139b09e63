//! Phone check handler

use axum::Json;
use serde::Deserialize;

use crate::logic::phone_check::{self, PhoneCheckResult};
use crate::{AppError, AppResult};

#[derive(Debug, Deserialize)]
pub struct CheckPhoneRequest {
    /// Defaults to empty so a missing field gets the same rejection as an
    /// empty one.
    #[serde(default)]
    pub phone: String,
}

/// Score a phone number against the spam rule tables
pub async fn check(Json(req): Json<CheckPhoneRequest>) -> AppResult<Json<PhoneCheckResult>> {
    if req.phone.trim().is_empty() {
        return Err(AppError::ValidationError("Phone number is required".to_string()));
    }

    let result = phone_check::check_phone(&req.phone);
    tracing::debug!(
        "Checked {} -> {} (confidence {})",
        result.phone,
        result.recommendation,
        result.confidence
    );

    Ok(Json(result))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::logic::phone_check::Recommendation;

    #[test]
    fn test_empty_phone_is_rejected_before_checking() {
        let res = tokio_test::block_on(check(Json(CheckPhoneRequest { phone: "".into() })));
        assert!(matches!(res, Err(AppError::ValidationError(_))));
    }

    #[test]
    fn test_check_response_round_trip() {
        let res = tokio_test::block_on(check(Json(CheckPhoneRequest {
            phone: "1111111111".into(),
        })))
        .unwrap();
        assert_eq!(res.0.recommendation, Recommendation::Block);
        assert!(res.0.is_spam);
    }
}

//! Lead-capture endpoints: newsletter signup and sponsorship quote
//! requests. Stateless acknowledgements; nothing is persisted here, the
//! submissions land in logs for manual follow-up.

use axum::response::IntoResponse;
use axum::Json;
use rand::distr::Alphanumeric;
use rand::Rng;
use serde::{Deserialize, Serialize};
use serde_json::json;
use sponsorhub_core::error::CoreError;
use sponsorhub_core::validation::is_valid_email;

use crate::error::{AppError, AppResult};

/// Length of generated quote identifiers.
const QUOTE_ID_LEN: usize = 8;

#[derive(Debug, Deserialize)]
pub struct EmailRequest {
    pub email: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub email: Option<String>,
    pub company_name: Option<String>,
    pub ad_slot_id: Option<String>,
    pub ad_slot_name: Option<String>,
    pub phone: Option<String>,
    pub budget: Option<String>,
    pub goals: Option<String>,
    pub timeline: Option<String>,
    pub requirements: Option<String>,
}

fn require_email(email: Option<String>) -> Result<String, AppError> {
    let email = email.ok_or_else(|| {
        AppError::Core(CoreError::Validation("Email is required".to_string()))
    })?;
    if !is_valid_email(&email) {
        return Err(AppError::Core(CoreError::Validation(
            "Invalid email address".to_string(),
        )));
    }
    Ok(email)
}

/// POST /newsletter/subscribe
pub async fn subscribe(Json(input): Json<EmailRequest>) -> AppResult<impl IntoResponse> {
    let email = require_email(input.email)?;

    tracing::info!(email = %email, "Newsletter subscription");

    Ok(Json(json!({
        "success": true,
        "message": "Thanks for subscribing!",
    })))
}

/// POST /newsletter/unsubscribe
pub async fn unsubscribe(Json(input): Json<EmailRequest>) -> AppResult<impl IntoResponse> {
    let email = require_email(input.email)?;

    tracing::info!(email = %email, "Newsletter unsubscription");

    Ok(Json(json!({
        "success": true,
        "message": "You have been unsubscribed.",
    })))
}

/// POST /quotes/request
///
/// Echoes the request back with a generated quote id so the frontend can
/// reference the enquiry.
pub async fn request_quote(Json(input): Json<QuoteRequest>) -> AppResult<impl IntoResponse> {
    if input.email.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Email is required".to_string(),
        )));
    }
    if input.company_name.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Company name is required".to_string(),
        )));
    }
    if input.ad_slot_id.is_none() {
        return Err(AppError::Core(CoreError::Validation(
            "Ad slot is required".to_string(),
        )));
    }

    // Presence established above; now check the syntax.
    let email = require_email(input.email.clone())?;

    let quote_id: String = rand::rng()
        .sample_iter(&Alphanumeric)
        .take(QUOTE_ID_LEN)
        .map(|c| (c as char).to_ascii_lowercase())
        .collect();

    tracing::info!(quote_id = %quote_id, email = %email, "Quote requested");

    let mut body = serde_json::to_value(&input).map_err(|e| {
        AppError::InternalError(format!("Failed to serialize quote request: {e}"))
    })?;
    if let Some(obj) = body.as_object_mut() {
        obj.insert("success".to_string(), json!(true));
        obj.insert("quoteId".to_string(), json!(quote_id));
    }

    Ok(Json(body))
}

use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use tracing::debug;

use crate::booking::slots::{available_slots, parse_day};
use crate::db::collections;
use crate::errors::AppError;
use crate::models::booking::{Appointment, ContactMessage};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct SlotsQuery {
    pub date: String,
    #[serde(default)]
    pub service_id: Option<String>,
    #[serde(default)]
    pub stylist_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct SlotsResponse {
    pub date: String,
    pub slots: Vec<String>,
}

/// GET /api/slots?date=YYYY-MM-DD&service_id=&stylist_id=
pub async fn get_slots(Query(params): Query<SlotsQuery>) -> Result<Json<SlotsResponse>, AppError> {
    let day = parse_day(&params.date).map_err(AppError::Validation)?;

    // service_id/stylist_id are accepted but not applied; the wire contract
    // reserves them for per-resource availability.
    debug!(
        service_id = ?params.service_id,
        stylist_id = ?params.stylist_id,
        "slot filters accepted but not applied"
    );

    Ok(Json(SlotsResponse {
        date: params.date,
        slots: available_slots(day),
    }))
}

/// POST /api/appointments
pub async fn create_appointment(
    State(state): State<AppState>,
    Json(appointment): Json<Appointment>,
) -> Result<Json<Value>, AppError> {
    appointment.validate().map_err(AppError::Validation)?;

    let record = serde_json::to_value(&appointment).map_err(anyhow::Error::from)?;
    let id = state
        .store
        .create_document(collections::APPOINTMENT, record)
        .await?;

    Ok(Json(json!({
        "status": "ok",
        "id": id,
        "calendar_synced": false
    })))
}

/// POST /api/contact
pub async fn create_contact_message(
    State(state): State<AppState>,
    Json(message): Json<ContactMessage>,
) -> Result<Json<Value>, AppError> {
    message.validate().map_err(AppError::Validation)?;

    let record = serde_json::to_value(&message).map_err(anyhow::Error::from)?;
    let id = state
        .store
        .create_document(collections::CONTACT_MESSAGE, record)
        .await?;

    Ok(Json(json!({
        "status": "ok",
        "id": id
    })))
}

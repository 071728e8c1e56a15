use axum::{extract::State, Json};
use serde_json::Value;

use crate::content::placeholders::{
    placeholder_faqs, placeholder_gallery, placeholder_promotions, placeholder_reviews,
    placeholder_services, placeholder_stylists,
};
use crate::content::resolver::resolve_collection;
use crate::db::collections;
use crate::state::AppState;

/// GET /api/services
pub async fn get_services(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(resolve_collection(&state.store, collections::SERVICE, placeholder_services).await)
}

/// GET /api/stylists
pub async fn get_stylists(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(resolve_collection(&state.store, collections::STYLIST, placeholder_stylists).await)
}

/// GET /api/reviews
pub async fn get_reviews(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(resolve_collection(&state.store, collections::REVIEW, placeholder_reviews).await)
}

/// GET /api/promotions
pub async fn get_promotions(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(resolve_collection(&state.store, collections::PROMOTION, placeholder_promotions).await)
}

/// GET /api/faqs
pub async fn get_faqs(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(resolve_collection(&state.store, collections::FAQ, placeholder_faqs).await)
}

/// GET /api/gallery
pub async fn get_gallery(State(state): State<AppState>) -> Json<Vec<Value>> {
    Json(resolve_collection(&state.store, collections::GALLERY_ITEM, placeholder_gallery).await)
}

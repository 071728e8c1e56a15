pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::booking::handlers as booking;
use crate::content::handlers as content;
use crate::quiz::handlers as quiz;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health::root_handler))
        .route("/test", get(health::test_database_handler))
        // Public content (read-only, placeholder-backed)
        .route("/api/services", get(content::get_services))
        .route("/api/stylists", get(content::get_stylists))
        .route("/api/reviews", get(content::get_reviews))
        .route("/api/promotions", get(content::get_promotions))
        .route("/api/faqs", get(content::get_faqs))
        .route("/api/gallery", get(content::get_gallery))
        // Booking & contact
        .route("/api/slots", get(booking::get_slots))
        .route("/api/appointments", post(booking::create_appointment))
        .route("/api/contact", post(booking::create_contact_message))
        // Hair quiz
        .route("/api/quiz", post(quiz::submit_quiz))
        .with_state(state)
}

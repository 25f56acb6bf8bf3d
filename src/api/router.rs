use axum::{
    Router,
    routing::{get, post, put},
};
use std::sync::Arc;
use tower_http::trace::TraceLayer;

use super::handlers::{
    AppState, complete_expired, create_booking, get_booking, list_bookings, purge_completed,
    update_booking_status,
};

/// Creates the API router with all booking endpoints
///
/// Interactive endpoints:
/// - POST /bookings - Create a new booking (teacher or admin)
/// - GET /bookings - List bookings scoped by role, optional status filter
/// - GET /bookings/:id - Get booking details
/// - PUT /bookings/:id/status - Change booking status (admin only)
///
/// Maintenance endpoints (invoked by an external scheduler; the cadence is a
/// deployment concern, not hardcoded here):
/// - POST /tasks/complete-expired - Mark expired approved bookings completed
/// - POST /tasks/purge-completed - Delete expired completed bookings
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health check endpoint
        .route("/health", get(health_check))
        // Interactive endpoints
        .route("/bookings", post(create_booking).get(list_bookings))
        .route("/bookings/:id", get(get_booking))
        .route("/bookings/:id/status", put(update_booking_status))
        // Scheduler-facing maintenance endpoints
        .route("/tasks/complete-expired", post(complete_expired))
        .route("/tasks/purge-completed", post(purge_completed))
        // Add tracing middleware
        .layer(TraceLayer::new_for_http())
        // Add application state
        .with_state(state)
}

/// Health check endpoint
async fn health_check() -> &'static str {
    "OK"
}

//! Route handlers for the dashboard API.

pub mod businesses;
pub mod calendar;
pub mod campaigns;
pub mod dashboard;
pub mod health;
pub mod interactions;
pub mod leads;
pub mod meta;

use axum::routing::{delete, get, post, put};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        // Health check
        .route("/health", get(health::health))
        // Static form metadata
        .route("/api/meta", get(meta::meta))
        // Dashboard overview
        .route("/api/dashboard", get(dashboard::overview))
        // Businesses
        .route(
            "/api/businesses",
            get(businesses::list).post(businesses::create),
        )
        .route(
            "/api/businesses/:id",
            put(businesses::update).delete(businesses::remove),
        )
        // Leads
        .route("/api/leads", get(leads::list).post(leads::create))
        .route("/api/leads/:id", put(leads::update).delete(leads::remove))
        .route("/api/leads/:id/status", put(leads::set_status))
        // Campaigns
        .route(
            "/api/campaigns",
            get(campaigns::list).post(campaigns::create),
        )
        .route("/api/campaigns/:id", delete(campaigns::remove))
        .route("/api/campaigns/:id/start", post(campaigns::start))
        .route("/api/campaigns/:id/pause", post(campaigns::pause))
        .route("/api/campaigns/:id/resume", post(campaigns::resume))
        .route("/api/campaigns/:id/complete", post(campaigns::complete))
        // Appointments and calendar views
        .route(
            "/api/appointments",
            get(calendar::list).post(calendar::create),
        )
        .route("/api/appointments/upcoming", get(calendar::upcoming))
        .route("/api/appointments/:id", delete(calendar::remove))
        .route("/api/appointments/:id/status", put(calendar::set_status))
        // Interaction log
        .route(
            "/api/interactions",
            get(interactions::list).post(interactions::create),
        )
}

//! Application state shared across handlers.

use std::sync::Arc;

use database::Database;
use outreach_core::{
    AppointmentRepository, BusinessRepository, CampaignRepository, InteractionRepository,
    LeadRepository,
};

/// Shared application state: one injected repository per entity.
#[derive(Clone)]
pub struct AppState {
    pub businesses: Arc<dyn BusinessRepository>,
    pub leads: Arc<dyn LeadRepository>,
    pub campaigns: Arc<dyn CampaignRepository>,
    pub appointments: Arc<dyn AppointmentRepository>,
    pub interactions: Arc<dyn InteractionRepository>,
}

impl AppState {
    /// Create application state from explicit repositories.
    pub fn new(
        businesses: Arc<dyn BusinessRepository>,
        leads: Arc<dyn LeadRepository>,
        campaigns: Arc<dyn CampaignRepository>,
        appointments: Arc<dyn AppointmentRepository>,
        interactions: Arc<dyn InteractionRepository>,
    ) -> Self {
        Self {
            businesses,
            leads,
            campaigns,
            appointments,
            interactions,
        }
    }

    /// Create application state with every repository backed by the database.
    pub fn from_database(db: Database) -> Self {
        let db = Arc::new(db);
        Self::new(
            db.clone(),
            db.clone(),
            db.clone(),
            db.clone(),
            db,
        )
    }
}

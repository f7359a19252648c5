//! Repository traits implemented by persistence backends.
//!
//! Each view loads the collections it needs through these traits, scoped to
//! the signed-in user, then computes derived views client-side (see
//! [`crate::views`]). Backends: `memory-store` (in-memory fake for tests) and
//! `database` (SQLite via SQLx).
//!
//! Listing order matches what each view expects from the server:
//! businesses, leads, campaigns, and interactions newest-first; appointments
//! ascending by `scheduled_at` so "upcoming" truncation works without a
//! client-side sort.

use async_trait::async_trait;

use crate::error::Result;
use crate::models::{
    Appointment, AppointmentStatus, Business, Campaign, CampaignStatus, Interaction, Lead,
    LeadStatus,
};

/// Access to business profiles.
#[async_trait]
pub trait BusinessRepository: Send + Sync {
    /// List all businesses owned by a user, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Business>>;

    /// Get a business by id.
    async fn get(&self, id: &str) -> Result<Business>;

    /// Create a new business.
    async fn create(&self, business: &Business) -> Result<()>;

    /// Update an existing business.
    async fn update(&self, business: &Business) -> Result<()>;

    /// Delete a business by id.
    ///
    /// Leads, campaigns, and appointments referencing it are left in place;
    /// their lookups degrade to a fallback label.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Access to leads.
#[async_trait]
pub trait LeadRepository: Send + Sync {
    /// List all leads owned by a user, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Lead>>;

    /// Get a lead by id.
    async fn get(&self, id: &str) -> Result<Lead>;

    /// Create a new lead.
    async fn create(&self, lead: &Lead) -> Result<()>;

    /// Update an existing lead.
    async fn update(&self, lead: &Lead) -> Result<()>;

    /// Set a lead's status, refreshing `updated_at`.
    async fn set_status(&self, id: &str, status: LeadStatus) -> Result<()>;

    /// Delete a lead by id.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Access to campaigns.
#[async_trait]
pub trait CampaignRepository: Send + Sync {
    /// List all campaigns owned by a user, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Campaign>>;

    /// Get a campaign by id.
    async fn get(&self, id: &str) -> Result<Campaign>;

    /// Create a new campaign.
    async fn create(&self, campaign: &Campaign) -> Result<()>;

    /// Set a campaign's status, refreshing `updated_at`.
    ///
    /// The repository accepts any valid status value; transition legality is
    /// enforced by [`crate::views::campaigns::apply`] before this is called.
    async fn set_status(&self, id: &str, status: CampaignStatus) -> Result<()>;

    /// Delete a campaign by id.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Access to appointments.
#[async_trait]
pub trait AppointmentRepository: Send + Sync {
    /// List all appointments owned by a user, ascending by `scheduled_at`.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Appointment>>;

    /// Get an appointment by id.
    async fn get(&self, id: &str) -> Result<Appointment>;

    /// Create a new appointment.
    async fn create(&self, appointment: &Appointment) -> Result<()>;

    /// Set an appointment's status.
    async fn set_status(&self, id: &str, status: AppointmentStatus) -> Result<()>;

    /// Delete an appointment by id.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// Access to the interaction log. Append-style: records are created and
/// listed, never updated.
#[async_trait]
pub trait InteractionRepository: Send + Sync {
    /// List all interactions owned by a user, newest first.
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Interaction>>;

    /// Append a new interaction.
    async fn create(&self, interaction: &Interaction) -> Result<()>;
}

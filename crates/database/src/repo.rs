//! Repository trait implementations backed by the SQLite pool.
//!
//! Each impl delegates to the per-entity modules and converts
//! `DatabaseError` into the core `StoreError` taxonomy.

use async_trait::async_trait;

use outreach_core::{
    Appointment, AppointmentRepository, AppointmentStatus, Business, BusinessRepository,
    Campaign, CampaignRepository, CampaignStatus, Interaction, InteractionRepository, Lead,
    LeadRepository, LeadStatus, Result,
};

use crate::{appointment, business, campaign, interaction, lead, Database};

#[async_trait]
impl BusinessRepository for Database {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Business>> {
        Ok(business::list_businesses(self.pool(), user_id).await?)
    }

    async fn get(&self, id: &str) -> Result<Business> {
        Ok(business::get_business(self.pool(), id).await?)
    }

    async fn create(&self, record: &Business) -> Result<()> {
        Ok(business::create_business(self.pool(), record).await?)
    }

    async fn update(&self, record: &Business) -> Result<()> {
        Ok(business::update_business(self.pool(), record).await?)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        Ok(business::delete_business(self.pool(), id).await?)
    }
}

#[async_trait]
impl LeadRepository for Database {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Lead>> {
        Ok(lead::list_leads(self.pool(), user_id).await?)
    }

    async fn get(&self, id: &str) -> Result<Lead> {
        Ok(lead::get_lead(self.pool(), id).await?)
    }

    async fn create(&self, record: &Lead) -> Result<()> {
        Ok(lead::create_lead(self.pool(), record).await?)
    }

    async fn update(&self, record: &Lead) -> Result<()> {
        Ok(lead::update_lead(self.pool(), record).await?)
    }

    async fn set_status(&self, id: &str, status: LeadStatus) -> Result<()> {
        Ok(lead::set_lead_status(self.pool(), id, status).await?)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        Ok(lead::delete_lead(self.pool(), id).await?)
    }
}

#[async_trait]
impl CampaignRepository for Database {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Campaign>> {
        Ok(campaign::list_campaigns(self.pool(), user_id).await?)
    }

    async fn get(&self, id: &str) -> Result<Campaign> {
        Ok(campaign::get_campaign(self.pool(), id).await?)
    }

    async fn create(&self, record: &Campaign) -> Result<()> {
        Ok(campaign::create_campaign(self.pool(), record).await?)
    }

    async fn set_status(&self, id: &str, status: CampaignStatus) -> Result<()> {
        Ok(campaign::set_campaign_status(self.pool(), id, status).await?)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        Ok(campaign::delete_campaign(self.pool(), id).await?)
    }
}

#[async_trait]
impl AppointmentRepository for Database {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Appointment>> {
        Ok(appointment::list_appointments(self.pool(), user_id).await?)
    }

    async fn get(&self, id: &str) -> Result<Appointment> {
        Ok(appointment::get_appointment(self.pool(), id).await?)
    }

    async fn create(&self, record: &Appointment) -> Result<()> {
        Ok(appointment::create_appointment(self.pool(), record).await?)
    }

    async fn set_status(&self, id: &str, status: AppointmentStatus) -> Result<()> {
        Ok(appointment::set_appointment_status(self.pool(), id, status).await?)
    }

    async fn delete(&self, id: &str) -> Result<()> {
        Ok(appointment::delete_appointment(self.pool(), id).await?)
    }
}

#[async_trait]
impl InteractionRepository for Database {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Interaction>> {
        Ok(interaction::list_interactions(self.pool(), user_id).await?)
    }

    async fn create(&self, record: &Interaction) -> Result<()> {
        Ok(interaction::create_interaction(self.pool(), record).await?)
    }
}

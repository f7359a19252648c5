//! HashMap-backed store implementing every repository trait.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::RwLock;

use outreach_core::{
    Appointment, AppointmentRepository, AppointmentStatus, Business, BusinessRepository,
    Campaign, CampaignRepository, CampaignStatus, Interaction, InteractionRepository, Lead,
    LeadRepository, LeadStatus, Result, StoreError,
};

#[derive(Default)]
struct Tables {
    businesses: HashMap<String, Business>,
    leads: HashMap<String, Lead>,
    campaigns: HashMap<String, Campaign>,
    appointments: HashMap<String, Appointment>,
    interactions: HashMap<String, Interaction>,
}

/// In-memory store for all five entity collections.
///
/// Cheap to clone; clones share the same tables.
#[derive(Clone, Default)]
pub struct MemoryStore {
    tables: Arc<RwLock<Tables>>,
}

impl MemoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

fn insert<T>(table: &mut HashMap<String, T>, entity: &'static str, id: &str, record: T) -> Result<()> {
    if table.contains_key(id) {
        return Err(StoreError::AlreadyExists {
            entity,
            id: id.to_string(),
        });
    }
    table.insert(id.to_string(), record);
    Ok(())
}

fn fetch<T: Clone>(table: &HashMap<String, T>, entity: &'static str, id: &str) -> Result<T> {
    table.get(id).cloned().ok_or_else(|| StoreError::NotFound {
        entity,
        id: id.to_string(),
    })
}

fn remove<T>(table: &mut HashMap<String, T>, entity: &'static str, id: &str) -> Result<()> {
    table.remove(id).map(|_| ()).ok_or_else(|| StoreError::NotFound {
        entity,
        id: id.to_string(),
    })
}

#[async_trait]
impl BusinessRepository for MemoryStore {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Business>> {
        let tables = self.tables.read().await;
        let mut businesses: Vec<Business> = tables
            .businesses
            .values()
            .filter(|b| b.user_id == user_id)
            .cloned()
            .collect();
        businesses.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(businesses)
    }

    async fn get(&self, id: &str) -> Result<Business> {
        fetch(&self.tables.read().await.businesses, "Business", id)
    }

    async fn create(&self, business: &Business) -> Result<()> {
        let mut tables = self.tables.write().await;
        insert(&mut tables.businesses, "Business", &business.id, business.clone())
    }

    async fn update(&self, business: &Business) -> Result<()> {
        let mut tables = self.tables.write().await;
        match tables.businesses.get_mut(&business.id) {
            Some(existing) => {
                *existing = business.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "Business",
                id: business.id.clone(),
            }),
        }
    }

    async fn delete(&self, id: &str) -> Result<()> {
        // No cascade: leads, campaigns, and appointments keep their
        // business_id and rely on lookup fallbacks.
        let mut tables = self.tables.write().await;
        remove(&mut tables.businesses, "Business", id)
    }
}

#[async_trait]
impl LeadRepository for MemoryStore {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Lead>> {
        let tables = self.tables.read().await;
        let mut leads: Vec<Lead> = tables
            .leads
            .values()
            .filter(|l| l.user_id == user_id)
            .cloned()
            .collect();
        leads.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(leads)
    }

    async fn get(&self, id: &str) -> Result<Lead> {
        fetch(&self.tables.read().await.leads, "Lead", id)
    }

    async fn create(&self, lead: &Lead) -> Result<()> {
        let mut tables = self.tables.write().await;
        insert(&mut tables.leads, "Lead", &lead.id, lead.clone())
    }

    async fn update(&self, lead: &Lead) -> Result<()> {
        let mut tables = self.tables.write().await;
        match tables.leads.get_mut(&lead.id) {
            Some(existing) => {
                *existing = lead.clone();
                Ok(())
            }
            None => Err(StoreError::NotFound {
                entity: "Lead",
                id: lead.id.clone(),
            }),
        }
    }

    async fn set_status(&self, id: &str, status: LeadStatus) -> Result<()> {
        let mut tables = self.tables.write().await;
        let lead = tables.leads.get_mut(id).ok_or_else(|| StoreError::NotFound {
            entity: "Lead",
            id: id.to_string(),
        })?;
        lead.status = status;
        lead.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut tables = self.tables.write().await;
        remove(&mut tables.leads, "Lead", id)
    }
}

#[async_trait]
impl CampaignRepository for MemoryStore {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Campaign>> {
        let tables = self.tables.read().await;
        let mut campaigns: Vec<Campaign> = tables
            .campaigns
            .values()
            .filter(|c| c.user_id == user_id)
            .cloned()
            .collect();
        campaigns.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(campaigns)
    }

    async fn get(&self, id: &str) -> Result<Campaign> {
        fetch(&self.tables.read().await.campaigns, "Campaign", id)
    }

    async fn create(&self, campaign: &Campaign) -> Result<()> {
        let mut tables = self.tables.write().await;
        insert(&mut tables.campaigns, "Campaign", &campaign.id, campaign.clone())
    }

    async fn set_status(&self, id: &str, status: CampaignStatus) -> Result<()> {
        let mut tables = self.tables.write().await;
        let campaign = tables
            .campaigns
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "Campaign",
                id: id.to_string(),
            })?;
        campaign.status = status;
        campaign.updated_at = Utc::now();
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut tables = self.tables.write().await;
        remove(&mut tables.campaigns, "Campaign", id)
    }
}

#[async_trait]
impl AppointmentRepository for MemoryStore {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Appointment>> {
        let tables = self.tables.read().await;
        let mut appointments: Vec<Appointment> = tables
            .appointments
            .values()
            .filter(|a| a.user_id == user_id)
            .cloned()
            .collect();
        appointments.sort_by(|a, b| a.scheduled_at.cmp(&b.scheduled_at));
        Ok(appointments)
    }

    async fn get(&self, id: &str) -> Result<Appointment> {
        fetch(&self.tables.read().await.appointments, "Appointment", id)
    }

    async fn create(&self, appointment: &Appointment) -> Result<()> {
        let mut tables = self.tables.write().await;
        insert(
            &mut tables.appointments,
            "Appointment",
            &appointment.id,
            appointment.clone(),
        )
    }

    async fn set_status(&self, id: &str, status: AppointmentStatus) -> Result<()> {
        let mut tables = self.tables.write().await;
        let appointment = tables
            .appointments
            .get_mut(id)
            .ok_or_else(|| StoreError::NotFound {
                entity: "Appointment",
                id: id.to_string(),
            })?;
        appointment.status = status;
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut tables = self.tables.write().await;
        remove(&mut tables.appointments, "Appointment", id)
    }
}

#[async_trait]
impl InteractionRepository for MemoryStore {
    async fn list_for_user(&self, user_id: &str) -> Result<Vec<Interaction>> {
        let tables = self.tables.read().await;
        let mut interactions: Vec<Interaction> = tables
            .interactions
            .values()
            .filter(|i| i.user_id == user_id)
            .cloned()
            .collect();
        interactions.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        Ok(interactions)
    }

    async fn create(&self, interaction: &Interaction) -> Result<()> {
        let mut tables = self.tables.write().await;
        insert(
            &mut tables.interactions,
            "Interaction",
            &interaction.id,
            interaction.clone(),
        )
    }
}

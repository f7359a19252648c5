//! SQLite persistence layer for the outreach platform.
//!
//! This crate provides async database operations for businesses, leads,
//! campaigns, appointments, and the interaction log using SQLx with SQLite,
//! and implements every repository trait from `outreach-core` on the
//! [`Database`] wrapper.
//!
//! # Example
//!
//! ```no_run
//! use database::Database;
//! use outreach_core::BusinessRepository;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:outreach.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     let businesses = db.list_for_user("user_1").await?;
//!     println!("{} businesses", businesses.len());
//!     Ok(())
//! }
//! ```

pub mod appointment;
pub mod business;
pub mod campaign;
pub mod error;
pub mod interaction;
pub mod lead;
mod repo;

pub use error::{DatabaseError, Result};

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    const DEFAULT_POOL_SIZE: u32 = 10;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `sqlite::memory:` for tests.
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?.create_if_missing(true);

        let pool = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30))
            .connect_with(options)
            .await?;

        tracing::info!("Connected to database: {} (pool size: {})", url, pool_size);

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use outreach_core::{
        Business, Campaign, CampaignStatus, Interaction, InteractionKind, InteractionStatus,
        Lead, LeadStatus,
    };

    use super::*;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn sample_business(id: &str, user_id: &str) -> Business {
        let now = Utc::now();
        Business {
            id: id.to_string(),
            user_id: user_id.to_string(),
            name: "Elite Fitness Studio".to_string(),
            service_type: "Fitness & Personal Training".to_string(),
            description: Some("Personal training".to_string()),
            phone: Some("+15551230000".to_string()),
            email: None,
            created_at: now,
            updated_at: now,
        }
    }

    fn sample_lead(id: &str, user_id: &str) -> Lead {
        let now = Utc::now();
        Lead {
            id: id.to_string(),
            user_id: user_id.to_string(),
            business_id: "business_1".to_string(),
            name: "Jane Doe".to_string(),
            phone: "+15551234567".to_string(),
            email: Some("jane@example.com".to_string()),
            status: LeadStatus::New,
            source: Some("Website".to_string()),
            notes: None,
            created_at: now,
            updated_at: now,
        }
    }

    #[tokio::test]
    async fn test_business_crud() {
        let db = test_db().await;
        let pool = db.pool();

        let b1 = sample_business("business_1", "user_1");
        business::create_business(pool, &b1).await.unwrap();

        // Read
        let fetched = business::get_business(pool, "business_1").await.unwrap();
        assert_eq!(fetched.name, "Elite Fitness Studio");
        assert_eq!(fetched.service_type, "Fitness & Personal Training");
        assert_eq!(fetched.phone.as_deref(), Some("+15551230000"));
        assert_eq!(fetched.email, None);

        // Duplicate id rejected
        let result = business::create_business(pool, &b1).await;
        assert!(matches!(result, Err(DatabaseError::AlreadyExists { .. })));

        // Update
        let mut updated = b1.clone();
        updated.name = "Elite Fitness".to_string();
        business::update_business(pool, &updated).await.unwrap();
        let fetched = business::get_business(pool, "business_1").await.unwrap();
        assert_eq!(fetched.name, "Elite Fitness");

        // Delete
        business::delete_business(pool, "business_1").await.unwrap();
        let result = business::get_business(pool, "business_1").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_lead_status_round_trip() {
        let db = test_db().await;
        let pool = db.pool();

        let l1 = sample_lead("lead_1", "user_1");
        lead::create_lead(pool, &l1).await.unwrap();

        let fetched = lead::get_lead(pool, "lead_1").await.unwrap();
        assert_eq!(fetched.status, LeadStatus::New);

        lead::set_lead_status(pool, "lead_1", LeadStatus::Converted)
            .await
            .unwrap();
        let fetched = lead::get_lead(pool, "lead_1").await.unwrap();
        assert_eq!(fetched.status, LeadStatus::Converted);
        assert!(fetched.updated_at >= l1.updated_at);
    }

    #[tokio::test]
    async fn test_lists_scoped_to_user() {
        let db = test_db().await;
        let pool = db.pool();

        let mut mine = sample_lead("lead_mine", "user_1");
        mine.created_at = Utc::now() - Duration::hours(1);
        let newer = sample_lead("lead_newer", "user_1");
        let theirs = sample_lead("lead_theirs", "user_2");
        lead::create_lead(pool, &mine).await.unwrap();
        lead::create_lead(pool, &newer).await.unwrap();
        lead::create_lead(pool, &theirs).await.unwrap();

        let leads = lead::list_leads(pool, "user_1").await.unwrap();
        assert_eq!(leads.len(), 2);
        // Newest first
        assert_eq!(leads[0].id, "lead_newer");
        assert_eq!(leads[1].id, "lead_mine");
    }

    #[tokio::test]
    async fn test_campaign_lifecycle_persistence() {
        let db = test_db().await;
        let pool = db.pool();

        let now = Utc::now();
        let c1 = Campaign {
            id: "campaign_1".to_string(),
            user_id: "user_1".to_string(),
            business_id: "business_1".to_string(),
            name: "Spring Promotion Outreach".to_string(),
            script: "Hello...".to_string(),
            status: CampaignStatus::Draft,
            scheduled_at: Some(now + Duration::days(1)),
            created_at: now,
            updated_at: now,
        };
        campaign::create_campaign(pool, &c1).await.unwrap();

        campaign::set_campaign_status(pool, "campaign_1", CampaignStatus::Active)
            .await
            .unwrap();
        let fetched = campaign::get_campaign(pool, "campaign_1").await.unwrap();
        assert_eq!(fetched.status, CampaignStatus::Active);
        assert_eq!(fetched.scheduled_at, c1.scheduled_at);

        campaign::delete_campaign(pool, "campaign_1").await.unwrap();
        let result = campaign::get_campaign(pool, "campaign_1").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }

    #[tokio::test]
    async fn test_appointments_ordered_by_schedule() {
        let db = test_db().await;
        let pool = db.pool();
        let now = Utc::now();

        for (id, offset) in [("a_late", 48i64), ("a_soon", 1), ("a_mid", 24)] {
            let a = outreach_core::Appointment {
                id: id.to_string(),
                user_id: "user_1".to_string(),
                lead_id: "lead_1".to_string(),
                business_id: "business_1".to_string(),
                title: "Initial Consultation".to_string(),
                description: None,
                scheduled_at: now + Duration::hours(offset),
                duration: 60,
                status: outreach_core::AppointmentStatus::Scheduled,
                created_at: now,
            };
            appointment::create_appointment(pool, &a).await.unwrap();
        }

        let listed = appointment::list_appointments(pool, "user_1").await.unwrap();
        let ids: Vec<_> = listed.iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, ["a_soon", "a_mid", "a_late"]);
    }

    #[tokio::test]
    async fn test_interaction_append_and_list() {
        let db = test_db().await;
        let pool = db.pool();
        let now = Utc::now();

        let older = Interaction {
            id: "interaction_1".to_string(),
            user_id: "user_1".to_string(),
            lead_id: "lead_1".to_string(),
            campaign_id: Some("campaign_1".to_string()),
            kind: InteractionKind::Call,
            status: InteractionStatus::Completed,
            content: Some("Intro call".to_string()),
            response: Some("Interested".to_string()),
            duration: Some(185),
            created_at: now - Duration::minutes(5),
        };
        let newer = Interaction {
            id: "interaction_2".to_string(),
            campaign_id: None,
            kind: InteractionKind::Whatsapp,
            status: InteractionStatus::Pending,
            content: None,
            response: None,
            duration: None,
            created_at: now,
            ..older.clone()
        };
        interaction::create_interaction(pool, &older).await.unwrap();
        interaction::create_interaction(pool, &newer).await.unwrap();

        let listed = interaction::list_interactions(pool, "user_1").await.unwrap();
        assert_eq!(listed.len(), 2);
        assert_eq!(listed[0].id, "interaction_2");
        assert_eq!(listed[0].campaign_id, None);
        assert_eq!(listed[1].kind, InteractionKind::Call);
        assert_eq!(listed[1].duration, Some(185));
    }
}

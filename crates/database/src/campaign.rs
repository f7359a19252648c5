//! Campaign CRUD operations.
//!
//! Transition legality is a view-layer concern; this module persists whatever
//! valid status it is handed.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use outreach_core::{Campaign, CampaignStatus};

use crate::error::{DatabaseError, Result};

#[derive(sqlx::FromRow)]
struct CampaignRow {
    id: String,
    user_id: String,
    business_id: String,
    name: String,
    script: String,
    status: String,
    scheduled_at: Option<DateTime<Utc>>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<CampaignRow> for Campaign {
    type Error = DatabaseError;

    fn try_from(row: CampaignRow) -> Result<Self> {
        let status = row.status.parse().map_err(|source| DatabaseError::Decode {
            entity: "Campaign",
            id: row.id.clone(),
            source,
        })?;

        Ok(Campaign {
            id: row.id,
            user_id: row.user_id,
            business_id: row.business_id,
            name: row.name,
            script: row.script,
            status,
            scheduled_at: row.scheduled_at,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const COLUMNS: &str =
    "id, user_id, business_id, name, script, status, scheduled_at, created_at, updated_at";

/// Create a new campaign.
pub async fn create_campaign(pool: &SqlitePool, campaign: &Campaign) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO campaigns (id, user_id, business_id, name, script, status, scheduled_at, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&campaign.id)
    .bind(&campaign.user_id)
    .bind(&campaign.business_id)
    .bind(&campaign.name)
    .bind(&campaign.script)
    .bind(campaign.status.as_str())
    .bind(campaign.scheduled_at)
    .bind(campaign.created_at)
    .bind(campaign.updated_at)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Campaign",
                    id: campaign.id.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Get a campaign by ID.
pub async fn get_campaign(pool: &SqlitePool, id: &str) -> Result<Campaign> {
    let row = sqlx::query_as::<_, CampaignRow>(&format!(
        "SELECT {COLUMNS} FROM campaigns WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Campaign",
        id: id.to_string(),
    })?;

    row.try_into()
}

/// Set a campaign's status, refreshing `updated_at`.
pub async fn set_campaign_status(
    pool: &SqlitePool,
    id: &str,
    status: CampaignStatus,
) -> Result<()> {
    let result = sqlx::query("UPDATE campaigns SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Campaign",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a campaign by ID.
pub async fn delete_campaign(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM campaigns WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Campaign",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// List a user's campaigns, newest first.
pub async fn list_campaigns(pool: &SqlitePool, user_id: &str) -> Result<Vec<Campaign>> {
    let rows = sqlx::query_as::<_, CampaignRow>(&format!(
        "SELECT {COLUMNS} FROM campaigns WHERE user_id = ? ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Campaign::try_from).collect()
}

//! Lead CRUD operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use outreach_core::{Lead, LeadStatus};

use crate::error::{DatabaseError, Result};

#[derive(sqlx::FromRow)]
struct LeadRow {
    id: String,
    user_id: String,
    business_id: String,
    name: String,
    phone: String,
    email: Option<String>,
    status: String,
    source: Option<String>,
    notes: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl TryFrom<LeadRow> for Lead {
    type Error = DatabaseError;

    fn try_from(row: LeadRow) -> Result<Self> {
        let status = row.status.parse().map_err(|source| DatabaseError::Decode {
            entity: "Lead",
            id: row.id.clone(),
            source,
        })?;

        Ok(Lead {
            id: row.id,
            user_id: row.user_id,
            business_id: row.business_id,
            name: row.name,
            phone: row.phone,
            email: row.email,
            status,
            source: row.source,
            notes: row.notes,
            created_at: row.created_at,
            updated_at: row.updated_at,
        })
    }
}

const COLUMNS: &str =
    "id, user_id, business_id, name, phone, email, status, source, notes, created_at, updated_at";

/// Create a new lead.
pub async fn create_lead(pool: &SqlitePool, lead: &Lead) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO leads (id, user_id, business_id, name, phone, email, status, source, notes, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&lead.id)
    .bind(&lead.user_id)
    .bind(&lead.business_id)
    .bind(&lead.name)
    .bind(&lead.phone)
    .bind(&lead.email)
    .bind(lead.status.as_str())
    .bind(&lead.source)
    .bind(&lead.notes)
    .bind(lead.created_at)
    .bind(lead.updated_at)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Lead",
                    id: lead.id.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Get a lead by ID.
pub async fn get_lead(pool: &SqlitePool, id: &str) -> Result<Lead> {
    let row = sqlx::query_as::<_, LeadRow>(&format!("SELECT {COLUMNS} FROM leads WHERE id = ?"))
        .bind(id)
        .fetch_optional(pool)
        .await?
        .ok_or_else(|| DatabaseError::NotFound {
            entity: "Lead",
            id: id.to_string(),
        })?;

    row.try_into()
}

/// Update an existing lead.
pub async fn update_lead(pool: &SqlitePool, lead: &Lead) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE leads
        SET business_id = ?, name = ?, phone = ?, email = ?, status = ?, source = ?, notes = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&lead.business_id)
    .bind(&lead.name)
    .bind(&lead.phone)
    .bind(&lead.email)
    .bind(lead.status.as_str())
    .bind(&lead.source)
    .bind(&lead.notes)
    .bind(lead.updated_at)
    .bind(&lead.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Lead",
            id: lead.id.clone(),
        });
    }

    Ok(())
}

/// Set a lead's status, refreshing `updated_at`.
pub async fn set_lead_status(pool: &SqlitePool, id: &str, status: LeadStatus) -> Result<()> {
    let result = sqlx::query("UPDATE leads SET status = ?, updated_at = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(Utc::now())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Lead",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete a lead by ID.
pub async fn delete_lead(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM leads WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Lead",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// List a user's leads, newest first.
pub async fn list_leads(pool: &SqlitePool, user_id: &str) -> Result<Vec<Lead>> {
    let rows = sqlx::query_as::<_, LeadRow>(&format!(
        "SELECT {COLUMNS} FROM leads WHERE user_id = ? ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Lead::try_from).collect()
}

//! Interaction log operations. Append-style: insert and list only.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use outreach_core::Interaction;

use crate::error::{DatabaseError, Result};

#[derive(sqlx::FromRow)]
struct InteractionRow {
    id: String,
    user_id: String,
    lead_id: String,
    campaign_id: Option<String>,
    #[sqlx(rename = "type")]
    kind: String,
    status: String,
    content: Option<String>,
    response: Option<String>,
    duration: Option<i64>,
    created_at: DateTime<Utc>,
}

impl TryFrom<InteractionRow> for Interaction {
    type Error = DatabaseError;

    fn try_from(row: InteractionRow) -> Result<Self> {
        let decode = |source| DatabaseError::Decode {
            entity: "Interaction",
            id: row.id.clone(),
            source,
        };
        let kind = row.kind.parse().map_err(decode)?;
        let status = row.status.parse().map_err(decode)?;

        Ok(Interaction {
            id: row.id,
            user_id: row.user_id,
            lead_id: row.lead_id,
            campaign_id: row.campaign_id,
            kind,
            status,
            content: row.content,
            response: row.response,
            duration: row.duration,
            created_at: row.created_at,
        })
    }
}

const COLUMNS: &str =
    "id, user_id, lead_id, campaign_id, type, status, content, response, duration, created_at";

/// Append a new interaction.
pub async fn create_interaction(pool: &SqlitePool, interaction: &Interaction) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO interactions (id, user_id, lead_id, campaign_id, type, status, content, response, duration, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&interaction.id)
    .bind(&interaction.user_id)
    .bind(&interaction.lead_id)
    .bind(&interaction.campaign_id)
    .bind(interaction.kind.as_str())
    .bind(interaction.status.as_str())
    .bind(&interaction.content)
    .bind(&interaction.response)
    .bind(interaction.duration)
    .bind(interaction.created_at)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Interaction",
                    id: interaction.id.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// List a user's interactions, newest first.
pub async fn list_interactions(pool: &SqlitePool, user_id: &str) -> Result<Vec<Interaction>> {
    let rows = sqlx::query_as::<_, InteractionRow>(&format!(
        "SELECT {COLUMNS} FROM interactions WHERE user_id = ? ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Interaction::try_from).collect()
}

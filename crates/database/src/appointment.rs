//! Appointment CRUD operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use outreach_core::{Appointment, AppointmentStatus};

use crate::error::{DatabaseError, Result};

#[derive(sqlx::FromRow)]
struct AppointmentRow {
    id: String,
    user_id: String,
    lead_id: String,
    business_id: String,
    title: String,
    description: Option<String>,
    scheduled_at: DateTime<Utc>,
    duration: i64,
    status: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<AppointmentRow> for Appointment {
    type Error = DatabaseError;

    fn try_from(row: AppointmentRow) -> Result<Self> {
        let status = row.status.parse().map_err(|source| DatabaseError::Decode {
            entity: "Appointment",
            id: row.id.clone(),
            source,
        })?;

        Ok(Appointment {
            id: row.id,
            user_id: row.user_id,
            lead_id: row.lead_id,
            business_id: row.business_id,
            title: row.title,
            description: row.description,
            scheduled_at: row.scheduled_at,
            duration: row.duration,
            status,
            created_at: row.created_at,
        })
    }
}

const COLUMNS: &str =
    "id, user_id, lead_id, business_id, title, description, scheduled_at, duration, status, created_at";

/// Create a new appointment.
pub async fn create_appointment(pool: &SqlitePool, appointment: &Appointment) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO appointments (id, user_id, lead_id, business_id, title, description, scheduled_at, duration, status, created_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&appointment.id)
    .bind(&appointment.user_id)
    .bind(&appointment.lead_id)
    .bind(&appointment.business_id)
    .bind(&appointment.title)
    .bind(&appointment.description)
    .bind(appointment.scheduled_at)
    .bind(appointment.duration)
    .bind(appointment.status.as_str())
    .bind(appointment.created_at)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Appointment",
                    id: appointment.id.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Get an appointment by ID.
pub async fn get_appointment(pool: &SqlitePool, id: &str) -> Result<Appointment> {
    let row = sqlx::query_as::<_, AppointmentRow>(&format!(
        "SELECT {COLUMNS} FROM appointments WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Appointment",
        id: id.to_string(),
    })?;

    row.try_into()
}

/// Set an appointment's status.
pub async fn set_appointment_status(
    pool: &SqlitePool,
    id: &str,
    status: AppointmentStatus,
) -> Result<()> {
    let result = sqlx::query("UPDATE appointments SET status = ? WHERE id = ?")
        .bind(status.as_str())
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Appointment",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// Delete an appointment by ID.
pub async fn delete_appointment(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM appointments WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Appointment",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// List a user's appointments, ascending by scheduled time.
pub async fn list_appointments(pool: &SqlitePool, user_id: &str) -> Result<Vec<Appointment>> {
    let rows = sqlx::query_as::<_, AppointmentRow>(&format!(
        "SELECT {COLUMNS} FROM appointments WHERE user_id = ? ORDER BY scheduled_at ASC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    rows.into_iter().map(Appointment::try_from).collect()
}

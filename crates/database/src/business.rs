//! Business CRUD operations.

use chrono::{DateTime, Utc};
use sqlx::SqlitePool;

use outreach_core::Business;

use crate::error::{DatabaseError, Result};

#[derive(sqlx::FromRow)]
struct BusinessRow {
    id: String,
    user_id: String,
    name: String,
    service_type: String,
    description: Option<String>,
    phone: Option<String>,
    email: Option<String>,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl From<BusinessRow> for Business {
    fn from(row: BusinessRow) -> Self {
        Business {
            id: row.id,
            user_id: row.user_id,
            name: row.name,
            service_type: row.service_type,
            description: row.description,
            phone: row.phone,
            email: row.email,
            created_at: row.created_at,
            updated_at: row.updated_at,
        }
    }
}

const COLUMNS: &str =
    "id, user_id, name, service_type, description, phone, email, created_at, updated_at";

/// Create a new business.
pub async fn create_business(pool: &SqlitePool, business: &Business) -> Result<()> {
    sqlx::query(
        r#"
        INSERT INTO businesses (id, user_id, name, service_type, description, phone, email, created_at, updated_at)
        VALUES (?, ?, ?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&business.id)
    .bind(&business.user_id)
    .bind(&business.name)
    .bind(&business.service_type)
    .bind(&business.description)
    .bind(&business.phone)
    .bind(&business.email)
    .bind(business.created_at)
    .bind(business.updated_at)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "Business",
                    id: business.id.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(())
}

/// Get a business by ID.
pub async fn get_business(pool: &SqlitePool, id: &str) -> Result<Business> {
    let row = sqlx::query_as::<_, BusinessRow>(&format!(
        "SELECT {COLUMNS} FROM businesses WHERE id = ?"
    ))
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Business",
        id: id.to_string(),
    })?;

    Ok(row.into())
}

/// Update an existing business.
pub async fn update_business(pool: &SqlitePool, business: &Business) -> Result<()> {
    let result = sqlx::query(
        r#"
        UPDATE businesses
        SET name = ?, service_type = ?, description = ?, phone = ?, email = ?, updated_at = ?
        WHERE id = ?
        "#,
    )
    .bind(&business.name)
    .bind(&business.service_type)
    .bind(&business.description)
    .bind(&business.phone)
    .bind(&business.email)
    .bind(business.updated_at)
    .bind(&business.id)
    .execute(pool)
    .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Business",
            id: business.id.clone(),
        });
    }

    Ok(())
}

/// Delete a business by ID. References from other tables are left dangling.
pub async fn delete_business(pool: &SqlitePool, id: &str) -> Result<()> {
    let result = sqlx::query("DELETE FROM businesses WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    if result.rows_affected() == 0 {
        return Err(DatabaseError::NotFound {
            entity: "Business",
            id: id.to_string(),
        });
    }

    Ok(())
}

/// List a user's businesses, newest first.
pub async fn list_businesses(pool: &SqlitePool, user_id: &str) -> Result<Vec<Business>> {
    let rows = sqlx::query_as::<_, BusinessRow>(&format!(
        "SELECT {COLUMNS} FROM businesses WHERE user_id = ? ORDER BY created_at DESC"
    ))
    .bind(user_id)
    .fetch_all(pool)
    .await?;

    Ok(rows.into_iter().map(Business::from).collect())
}

//! Business profile routes.

use axum::extract::{Path, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use outreach_core::ids::record_id;
use outreach_core::validation::validate_business;
use outreach_core::{Business, StoreError};

use crate::error::Result;
use crate::state::AppState;
use crate::user::CurrentUser;

/// Fields the client supplies when creating or updating a business.
#[derive(Deserialize)]
pub struct BusinessForm {
    pub name: String,
    pub service_type: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
}

/// List the user's businesses, newest first.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Business>>> {
    Ok(Json(state.businesses.list_for_user(&user_id).await?))
}

/// Create a business, then return the reloaded collection.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(form): Json<BusinessForm>,
) -> Result<Json<Vec<Business>>> {
    let now = Utc::now();
    let business = Business {
        id: record_id("business"),
        user_id: user_id.clone(),
        name: form.name,
        service_type: form.service_type,
        description: form.description,
        phone: form.phone,
        email: form.email,
        created_at: now,
        updated_at: now,
    };
    validate_business(&business).map_err(StoreError::from)?;

    state.businesses.create(&business).await?;
    info!(id = %business.id, "Business created");

    Ok(Json(state.businesses.list_for_user(&user_id).await?))
}

/// Update a business, then return the reloaded collection.
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(form): Json<BusinessForm>,
) -> Result<Json<Vec<Business>>> {
    let existing = owned_business(&state, &user_id, id).await?;

    let business = Business {
        name: form.name,
        service_type: form.service_type,
        description: form.description,
        phone: form.phone,
        email: form.email,
        updated_at: Utc::now(),
        ..existing
    };
    validate_business(&business).map_err(StoreError::from)?;

    state.businesses.update(&business).await?;
    info!(id = %business.id, "Business updated");

    Ok(Json(state.businesses.list_for_user(&user_id).await?))
}

/// Delete a business, then return the reloaded collection.
///
/// Leads, campaigns, and appointments referencing it stay in place; their
/// business lookups degrade to the fallback label.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Business>>> {
    let existing = owned_business(&state, &user_id, id).await?;

    state.businesses.delete(&existing.id).await?;
    info!(id = %existing.id, "Business deleted");

    Ok(Json(state.businesses.list_for_user(&user_id).await?))
}

/// Fetch a business and verify it belongs to the user; another user's record
/// is indistinguishable from a missing one.
async fn owned_business(state: &AppState, user_id: &str, id: String) -> Result<Business> {
    let existing = state.businesses.get(&id).await?;
    if existing.user_id != user_id {
        return Err(StoreError::NotFound {
            entity: "Business",
            id,
        }
        .into());
    }
    Ok(existing)
}

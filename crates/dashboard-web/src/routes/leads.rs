//! Lead routes.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::Utc;
use serde::Deserialize;
use tracing::info;

use outreach_core::ids::record_id;
use outreach_core::models::UnknownValue;
use outreach_core::validation::validate_lead;
use outreach_core::views::leads::filter_leads;
use outreach_core::views::Filter;
use outreach_core::{Lead, LeadStatus, StoreError};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::user::CurrentUser;

/// Search and status filters for the lead list.
#[derive(Deserialize, Default)]
pub struct ListQuery {
    #[serde(default)]
    pub search: String,
    /// Status filter; `"all"` or omitted matches every status.
    #[serde(default)]
    pub status: String,
}

/// Fields the client supplies when creating or updating a lead.
#[derive(Deserialize)]
pub struct LeadForm {
    pub business_id: String,
    pub name: String,
    pub phone: String,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub notes: Option<String>,
}

/// Status change request body.
#[derive(Deserialize)]
pub struct StatusChange {
    pub status: LeadStatus,
}

/// List the user's leads, newest first, optionally filtered by search term
/// and status.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<Vec<Lead>>> {
    let status: Filter<LeadStatus> =
        Filter::parse(&query.status)
            .map_err(|err: UnknownValue| ApiError::BadRequest(err.to_string()))?;

    let leads = state.leads.list_for_user(&user_id).await?;
    let filtered = filter_leads(&leads, &query.search, status)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(filtered))
}

/// Create a lead (status starts at `new`), then return the reloaded
/// collection.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(form): Json<LeadForm>,
) -> Result<Json<Vec<Lead>>> {
    let now = Utc::now();
    let lead = Lead {
        id: record_id("lead"),
        user_id: user_id.clone(),
        business_id: form.business_id,
        name: form.name,
        phone: form.phone,
        email: form.email,
        status: LeadStatus::New,
        source: form.source,
        notes: form.notes,
        created_at: now,
        updated_at: now,
    };
    validate_lead(&lead).map_err(StoreError::from)?;

    state.leads.create(&lead).await?;
    info!(id = %lead.id, "Lead created");

    Ok(Json(state.leads.list_for_user(&user_id).await?))
}

/// Update a lead's contact fields, then return the reloaded collection.
pub async fn update(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(form): Json<LeadForm>,
) -> Result<Json<Vec<Lead>>> {
    let existing = owned_lead(&state, &user_id, id).await?;

    let lead = Lead {
        business_id: form.business_id,
        name: form.name,
        phone: form.phone,
        email: form.email,
        source: form.source,
        notes: form.notes,
        updated_at: Utc::now(),
        ..existing
    };
    validate_lead(&lead).map_err(StoreError::from)?;

    state.leads.update(&lead).await?;
    info!(id = %lead.id, "Lead updated");

    Ok(Json(state.leads.list_for_user(&user_id).await?))
}

/// Move a lead through its lifecycle, then return the reloaded collection.
pub async fn set_status(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(change): Json<StatusChange>,
) -> Result<Json<Vec<Lead>>> {
    let existing = owned_lead(&state, &user_id, id).await?;

    state.leads.set_status(&existing.id, change.status).await?;
    info!(id = %existing.id, status = %change.status, "Lead status changed");

    Ok(Json(state.leads.list_for_user(&user_id).await?))
}

/// Delete a lead, then return the reloaded collection.
///
/// Appointments and interactions referencing it stay in place; their lead
/// lookups degrade to the fallback label.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Lead>>> {
    let existing = owned_lead(&state, &user_id, id).await?;

    state.leads.delete(&existing.id).await?;
    info!(id = %existing.id, "Lead deleted");

    Ok(Json(state.leads.list_for_user(&user_id).await?))
}

/// Fetch a lead and verify it belongs to the user; another user's record is
/// indistinguishable from a missing one.
async fn owned_lead(state: &AppState, user_id: &str, id: String) -> Result<Lead> {
    let existing = state.leads.get(&id).await?;
    if existing.user_id != user_id {
        return Err(StoreError::NotFound { entity: "Lead", id }.into());
    }
    Ok(existing)
}

//! Campaign routes, including lifecycle transitions.

use axum::extract::{Path, State};
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use tracing::info;

use outreach_core::ids::record_id;
use outreach_core::validation::ValidationError;
use outreach_core::views::campaigns::{apply, CampaignAction, DEFAULT_CALL_SCRIPT};
use outreach_core::{Campaign, CampaignStatus, StoreError};

use crate::error::Result;
use crate::state::AppState;
use crate::user::CurrentUser;

/// Fields the client supplies when creating a campaign.
#[derive(Deserialize)]
pub struct CampaignForm {
    pub business_id: String,
    pub name: String,
    /// Call script; omitted falls back to the stock script.
    #[serde(default)]
    pub script: Option<String>,
    #[serde(default)]
    pub scheduled_at: Option<DateTime<Utc>>,
}

/// List the user's campaigns, newest first.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Vec<Campaign>>> {
    Ok(Json(state.campaigns.list_for_user(&user_id).await?))
}

/// Create a campaign in `draft`, then return the reloaded collection.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(form): Json<CampaignForm>,
) -> Result<Json<Vec<Campaign>>> {
    if form.name.trim().is_empty() {
        return Err(StoreError::from(ValidationError::Empty("campaign name")).into());
    }

    let now = Utc::now();
    let campaign = Campaign {
        id: record_id("campaign"),
        user_id: user_id.clone(),
        business_id: form.business_id,
        name: form.name,
        script: form
            .script
            .filter(|script| !script.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CALL_SCRIPT.to_string()),
        status: CampaignStatus::Draft,
        scheduled_at: form.scheduled_at,
        created_at: now,
        updated_at: now,
    };

    state.campaigns.create(&campaign).await?;
    info!(id = %campaign.id, "Campaign created");

    Ok(Json(state.campaigns.list_for_user(&user_id).await?))
}

/// Activate a draft campaign.
pub async fn start(
    state: State<AppState>,
    user: CurrentUser,
    id: Path<String>,
) -> Result<Json<Vec<Campaign>>> {
    transition(state, user, id, CampaignAction::Start).await
}

/// Pause an active campaign.
pub async fn pause(
    state: State<AppState>,
    user: CurrentUser,
    id: Path<String>,
) -> Result<Json<Vec<Campaign>>> {
    transition(state, user, id, CampaignAction::Pause).await
}

/// Resume a paused campaign.
pub async fn resume(
    state: State<AppState>,
    user: CurrentUser,
    id: Path<String>,
) -> Result<Json<Vec<Campaign>>> {
    transition(state, user, id, CampaignAction::Resume).await
}

/// Complete a campaign from any non-completed status.
pub async fn complete(
    state: State<AppState>,
    user: CurrentUser,
    id: Path<String>,
) -> Result<Json<Vec<Campaign>>> {
    transition(state, user, id, CampaignAction::Complete).await
}

/// Delete a campaign, then return the reloaded collection.
///
/// Interactions referencing it stay in place; their campaign lookups degrade
/// to the fallback label.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<Vec<Campaign>>> {
    let existing = owned_campaign(&state, &user_id, id).await?;

    state.campaigns.delete(&existing.id).await?;
    info!(id = %existing.id, "Campaign deleted");

    Ok(Json(state.campaigns.list_for_user(&user_id).await?))
}

/// Check the transition against the lifecycle, persist the new status, then
/// return the reloaded collection. An illegal transition leaves the campaign
/// untouched.
async fn transition(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    action: CampaignAction,
) -> Result<Json<Vec<Campaign>>> {
    let existing = owned_campaign(&state, &user_id, id).await?;

    let next = apply(existing.status, action)?;
    state.campaigns.set_status(&existing.id, next).await?;
    info!(id = %existing.id, from = %existing.status, to = %next, "Campaign transition");

    Ok(Json(state.campaigns.list_for_user(&user_id).await?))
}

/// Fetch a campaign and verify it belongs to the user; another user's record
/// is indistinguishable from a missing one.
async fn owned_campaign(state: &AppState, user_id: &str, id: String) -> Result<Campaign> {
    let existing = state.campaigns.get(&id).await?;
    if existing.user_id != user_id {
        return Err(StoreError::NotFound {
            entity: "Campaign",
            id,
        }
        .into());
    }
    Ok(existing)
}

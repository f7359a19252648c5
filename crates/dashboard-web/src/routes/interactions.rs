//! Interaction log routes.

use axum::extract::{Query, State};
use axum::Json;
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use outreach_core::ids::record_id;
use outreach_core::views::interactions::{
    filter_interactions, format_duration, tally, InteractionFilter, InteractionTally,
};
use outreach_core::views::lookups::{campaign_label, lead_name};
use outreach_core::models::UnknownValue;
use outreach_core::views::Filter;
use outreach_core::{Interaction, InteractionKind, InteractionStatus};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::user::CurrentUser;

/// Search, channel, and status filters for the interaction log.
#[derive(Deserialize, Default)]
pub struct ListQuery {
    #[serde(default)]
    pub search: String,
    /// Channel filter; `"all"` or omitted matches every channel.
    #[serde(default, rename = "type")]
    pub kind: String,
    /// Status filter; `"all"` or omitted matches every status.
    #[serde(default)]
    pub status: String,
}

/// Fields the client supplies when logging a contact attempt.
#[derive(Deserialize)]
pub struct InteractionForm {
    pub lead_id: String,
    #[serde(default)]
    pub campaign_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    #[serde(default = "default_status")]
    pub status: InteractionStatus,
    #[serde(default)]
    pub content: Option<String>,
    #[serde(default)]
    pub response: Option<String>,
    /// Call duration in seconds, when known.
    #[serde(default)]
    pub duration: Option<i64>,
}

fn default_status() -> InteractionStatus {
    InteractionStatus::Pending
}

/// One log row with labels resolved from the sibling collections.
#[derive(Serialize)]
pub struct InteractionRow {
    #[serde(flatten)]
    pub record: Interaction,
    pub lead_name: String,
    pub campaign: String,
    /// Duration rendered as `m:ss`, or `N/A` when absent.
    pub duration_label: String,
}

/// Filtered log rows plus tallies over the full log.
#[derive(Serialize)]
pub struct InteractionList {
    pub interactions: Vec<InteractionRow>,
    pub tally: InteractionTally,
}

/// List the user's interactions, newest first, with resolved labels. The
/// search/type/status filters narrow the rows; the tally always covers the
/// full log.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<InteractionList>> {
    let filter = InteractionFilter {
        search: query.search,
        kind: Filter::parse(&query.kind)
            .map_err(|err: UnknownValue| ApiError::BadRequest(err.to_string()))?,
        status: Filter::parse(&query.status)
            .map_err(|err: UnknownValue| ApiError::BadRequest(err.to_string()))?,
    };

    let interactions = state.interactions.list_for_user(&user_id).await?;
    let leads = state.leads.list_for_user(&user_id).await?;
    let campaigns = state.campaigns.list_for_user(&user_id).await?;

    let counts = tally(&interactions);
    let rows = filter_interactions(&interactions, &leads, &campaigns, &filter)
        .into_iter()
        .map(|interaction| InteractionRow {
            lead_name: lead_name(&leads, &interaction.lead_id).to_string(),
            campaign: campaign_label(&campaigns, interaction.campaign_id.as_deref()).to_string(),
            duration_label: format_duration(interaction.duration),
            record: interaction.clone(),
        })
        .collect();

    Ok(Json(InteractionList {
        interactions: rows,
        tally: counts,
    }))
}

/// Append a contact attempt to the log, then return the reloaded unfiltered
/// list.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(form): Json<InteractionForm>,
) -> Result<Json<InteractionList>> {
    let interaction = Interaction {
        id: record_id("interaction"),
        user_id: user_id.clone(),
        lead_id: form.lead_id,
        campaign_id: form.campaign_id,
        kind: form.kind,
        status: form.status,
        content: form.content,
        response: form.response,
        duration: form.duration,
        created_at: Utc::now(),
    };

    state.interactions.create(&interaction).await?;
    info!(id = %interaction.id, kind = %interaction.kind, "Interaction logged");

    list(
        State(state),
        CurrentUser(user_id),
        Query(ListQuery::default()),
    )
    .await
}

//! Dashboard overview route.

use axum::extract::State;
use axum::Json;
use chrono::{DateTime, Utc};
use serde::Serialize;

use outreach_core::views::dashboard::{recent_interactions, DashboardStats};
use outreach_core::views::interactions::format_duration;
use outreach_core::views::lookups::{campaign_label, lead_name};
use outreach_core::{InteractionKind, InteractionStatus};

use crate::error::Result;
use crate::state::AppState;
use crate::user::CurrentUser;

/// How many interactions the activity feed shows.
const RECENT_LIMIT: usize = 5;

/// One entry in the recent-activity feed, labels resolved.
#[derive(Serialize)]
pub struct RecentActivity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub status: InteractionStatus,
    pub lead_name: String,
    pub campaign: String,
    pub duration_label: String,
    pub created_at: DateTime<Utc>,
}

/// Headline numbers plus the recent-activity feed.
#[derive(Serialize)]
pub struct Overview {
    pub stats: DashboardStats,
    pub recent: Vec<RecentActivity>,
}

/// Get the dashboard overview: stats over every collection and the most
/// recent interactions with resolved labels.
pub async fn overview(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
) -> Result<Json<Overview>> {
    let leads = state.leads.list_for_user(&user_id).await?;
    let campaigns = state.campaigns.list_for_user(&user_id).await?;
    let interactions = state.interactions.list_for_user(&user_id).await?;

    let stats = DashboardStats::compute(&leads, &campaigns, &interactions);
    let recent = recent_interactions(&interactions, RECENT_LIMIT)
        .into_iter()
        .map(|interaction| RecentActivity {
            id: interaction.id.clone(),
            kind: interaction.kind,
            status: interaction.status,
            lead_name: lead_name(&leads, &interaction.lead_id).to_string(),
            campaign: campaign_label(&campaigns, interaction.campaign_id.as_deref()).to_string(),
            duration_label: format_duration(interaction.duration),
            created_at: interaction.created_at,
        })
        .collect();

    Ok(Json(Overview { stats, recent }))
}

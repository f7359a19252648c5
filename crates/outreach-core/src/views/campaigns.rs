//! Campaign lifecycle actions and audience views.

use serde::{Deserialize, Serialize};

use crate::error::{Result, StoreError};
use crate::models::{Campaign, CampaignStatus, Lead};

/// Script template seeded into new campaigns.
pub const DEFAULT_CALL_SCRIPT: &str = "Hello, this is [Agent Name] calling from [Business Name].

I hope I'm not catching you at a bad time. I'm reaching out because we specialize in [Service Type] and I noticed you might benefit from our services.

Could I take just 2 minutes to tell you about how we've helped other customers like yourself?

[Wait for response]

Great! We offer [Brief Service Description]. What makes us different is [Unique Value Proposition].

Would you be interested in learning more? I could schedule a quick 15-minute consultation to discuss your specific needs.

What works better for you - this week or next week?";

/// Explicit lifecycle actions a user can take on a campaign.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CampaignAction {
    /// draft -> active
    Start,
    /// active -> paused
    Pause,
    /// paused -> active
    Resume,
    /// any non-completed -> completed (terminal; not offered in the UI but
    /// valid data)
    Complete,
}

impl CampaignAction {
    /// The status this action moves a campaign to.
    pub fn target(&self) -> CampaignStatus {
        match self {
            Self::Start | Self::Resume => CampaignStatus::Active,
            Self::Pause => CampaignStatus::Paused,
            Self::Complete => CampaignStatus::Completed,
        }
    }
}

/// Apply a lifecycle action to the current status.
///
/// Illegal transitions (starting an already-active campaign, resuming one
/// that was never paused, anything out of `Completed`) are rejected with
/// [`StoreError::InvalidTransition`]; the campaign is left untouched.
pub fn apply(status: CampaignStatus, action: CampaignAction) -> Result<CampaignStatus> {
    use CampaignAction::*;
    use CampaignStatus::*;

    match (status, action) {
        (Draft, Start) => Ok(Active),
        (Active, Pause) => Ok(Paused),
        (Paused, Resume) => Ok(Active),
        (Draft | Active | Paused, Complete) => Ok(Completed),
        (from, action) => Err(StoreError::InvalidTransition {
            from,
            to: action.target(),
        }),
    }
}

/// The leads a campaign would reach: everyone attached to its business.
pub fn leads_for_business<'a>(leads: &'a [Lead], business_id: &str) -> Vec<&'a Lead> {
    leads
        .iter()
        .filter(|lead| lead.business_id == business_id)
        .collect()
}

/// Count campaigns currently in a given status.
pub fn count_by_status(campaigns: &[Campaign], status: CampaignStatus) -> usize {
    campaigns.iter().filter(|c| c.status == status).count()
}

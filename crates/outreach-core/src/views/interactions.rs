//! Interaction log filtering, formatting, and tallies.

use serde::Serialize;

use crate::models::{Campaign, Interaction, InteractionKind, InteractionStatus, Lead};
use crate::views::lookups::{campaign_label, lead_name};
use crate::views::Filter;

/// Sentinel rendered when a duration is absent.
pub const NO_DURATION: &str = "N/A";

/// Combined search/type/status filter over the interaction log.
#[derive(Debug, Clone, Default)]
pub struct InteractionFilter {
    /// Case-insensitive term matched against the resolved lead name, resolved
    /// campaign label, and the interaction's content. Empty matches all.
    pub search: String,
    pub kind: Filter<InteractionKind>,
    pub status: Filter<InteractionStatus>,
}

impl InteractionFilter {
    /// Whether an interaction passes all three predicates (AND).
    ///
    /// The search term is matched against labels resolved from the sibling
    /// collections the view has already loaded, so "Manual" matches
    /// campaign-less interactions.
    pub fn matches(&self, interaction: &Interaction, leads: &[Lead], campaigns: &[Campaign]) -> bool {
        if !self.kind.matches(&interaction.kind) || !self.status.matches(&interaction.status) {
            return false;
        }
        if self.search.is_empty() {
            return true;
        }

        let term = self.search.to_lowercase();
        let lead = lead_name(leads, &interaction.lead_id).to_lowercase();
        let campaign = campaign_label(campaigns, interaction.campaign_id.as_deref()).to_lowercase();

        lead.contains(&term)
            || campaign.contains(&term)
            || interaction
                .content
                .as_deref()
                .is_some_and(|content| content.to_lowercase().contains(&term))
    }
}

/// Filter the log, preserving load order.
pub fn filter_interactions<'a>(
    interactions: &'a [Interaction],
    leads: &[Lead],
    campaigns: &[Campaign],
    filter: &InteractionFilter,
) -> Vec<&'a Interaction> {
    interactions
        .iter()
        .filter(|interaction| filter.matches(interaction, leads, campaigns))
        .collect()
}

/// Render a duration in seconds as `m:ss`, or [`NO_DURATION`] when absent.
///
/// A recorded zero renders as `0:00`, not the sentinel: only a missing
/// duration means "not measured".
pub fn format_duration(duration: Option<i64>) -> String {
    let Some(seconds) = duration else {
        return NO_DURATION.to_string();
    };
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

/// Tallies by status and by channel over the loaded log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InteractionTally {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub failed: usize,
    pub calls: usize,
    pub whatsapp: usize,
    pub emails: usize,
}

/// Count interactions by status and channel.
pub fn tally(interactions: &[Interaction]) -> InteractionTally {
    let by_status = |status: InteractionStatus| {
        interactions.iter().filter(|i| i.status == status).count()
    };
    let by_kind =
        |kind: InteractionKind| interactions.iter().filter(|i| i.kind == kind).count();

    InteractionTally {
        total: interactions.len(),
        completed: by_status(InteractionStatus::Completed),
        pending: by_status(InteractionStatus::Pending),
        failed: by_status(InteractionStatus::Failed),
        calls: by_kind(InteractionKind::Call),
        whatsapp: by_kind(InteractionKind::Whatsapp),
        emails: by_kind(InteractionKind::Email),
    }
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{CampaignStatus, LeadStatus};

    fn lead(id: &str, name: &str) -> Lead {
        Lead {
            id: id.to_string(),
            user_id: "user_1".to_string(),
            business_id: "business_1".to_string(),
            name: name.to_string(),
            phone: "+15551234567".to_string(),
            email: None,
            status: LeadStatus::New,
            source: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn campaign(id: &str, name: &str) -> Campaign {
        Campaign {
            id: id.to_string(),
            user_id: "user_1".to_string(),
            business_id: "business_1".to_string(),
            name: name.to_string(),
            script: String::new(),
            status: CampaignStatus::Active,
            scheduled_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn interaction(
        id: &str,
        lead_id: &str,
        campaign_id: Option<&str>,
        kind: InteractionKind,
        status: InteractionStatus,
        content: Option<&str>,
    ) -> Interaction {
        Interaction {
            id: id.to_string(),
            user_id: "user_1".to_string(),
            lead_id: lead_id.to_string(),
            campaign_id: campaign_id.map(str::to_string),
            kind,
            status,
            content: content.map(str::to_string),
            response: None,
            duration: None,
            created_at: Utc::now(),
        }
    }

    fn fixtures() -> (Vec<Interaction>, Vec<Lead>, Vec<Campaign>) {
        let leads = vec![lead("lead_1", "Jane Doe"), lead("lead_2", "John Smith")];
        let campaigns = vec![campaign("campaign_1", "Spring Promo")];
        let interactions = vec![
            interaction(
                "i1",
                "lead_1",
                Some("campaign_1"),
                InteractionKind::Call,
                InteractionStatus::Completed,
                Some("Intro call"),
            ),
            interaction(
                "i2",
                "lead_2",
                None,
                InteractionKind::Whatsapp,
                InteractionStatus::Pending,
                Some("Follow-up message"),
            ),
            interaction(
                "i3",
                "lead_1",
                Some("campaign_1"),
                InteractionKind::Email,
                InteractionStatus::Failed,
                None,
            ),
        ];
        (interactions, leads, campaigns)
    }

    #[test]
    fn test_search_matches_resolved_lead_name() {
        let (interactions, leads, campaigns) = fixtures();
        let filter = InteractionFilter {
            search: "jane".to_string(),
            ..Default::default()
        };
        let hits = filter_interactions(&interactions, &leads, &campaigns, &filter);
        assert_eq!(hits.len(), 2);
    }

    #[test]
    fn test_search_matches_manual_label() {
        let (interactions, leads, campaigns) = fixtures();
        let filter = InteractionFilter {
            search: "manual".to_string(),
            ..Default::default()
        };
        let hits = filter_interactions(&interactions, &leads, &campaigns, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "i2");
    }

    #[test]
    fn test_search_matches_content() {
        let (interactions, leads, campaigns) = fixtures();
        let filter = InteractionFilter {
            search: "follow-up".to_string(),
            ..Default::default()
        };
        let hits = filter_interactions(&interactions, &leads, &campaigns, &filter);
        assert_eq!(hits.len(), 1);
    }

    #[test]
    fn test_type_and_status_filters_and_together() {
        let (interactions, leads, campaigns) = fixtures();
        let filter = InteractionFilter {
            search: String::new(),
            kind: Filter::Only(InteractionKind::Call),
            status: Filter::Only(InteractionStatus::Completed),
        };
        let hits = filter_interactions(&interactions, &leads, &campaigns, &filter);
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].id, "i1");

        let filter = InteractionFilter {
            search: String::new(),
            kind: Filter::Only(InteractionKind::Call),
            status: Filter::Only(InteractionStatus::Failed),
        };
        assert!(filter_interactions(&interactions, &leads, &campaigns, &filter).is_empty());
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(None), "N/A");
        assert_eq!(format_duration(Some(0)), "0:00");
        assert_eq!(format_duration(Some(59)), "0:59");
        assert_eq!(format_duration(Some(60)), "1:00");
        assert_eq!(format_duration(Some(185)), "3:05");
    }

    #[test]
    fn test_tally() {
        let (interactions, _, _) = fixtures();
        let tally = tally(&interactions);
        assert_eq!(tally.total, 3);
        assert_eq!(tally.completed, 1);
        assert_eq!(tally.pending, 1);
        assert_eq!(tally.failed, 1);
        assert_eq!(tally.calls, 1);
        assert_eq!(tally.whatsapp, 1);
        assert_eq!(tally.emails, 1);
    }
}

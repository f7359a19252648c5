//! Dashboard statistics and recent-activity views.

use serde::Serialize;

use crate::models::{Campaign, CampaignStatus, Interaction, InteractionKind, Lead, LeadStatus};
use crate::views::campaigns::count_by_status;
use crate::views::leads::conversion_rate;

/// Headline numbers for the dashboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DashboardStats {
    pub total_leads: usize,
    pub new_leads: usize,
    pub active_campaigns: usize,
    pub draft_campaigns: usize,
    pub total_interactions: usize,
    pub calls_made: usize,
    pub conversions: usize,
    /// Integer percentage in [0, 100].
    pub conversion_rate: u8,
}

impl DashboardStats {
    /// Compute all stats from the loaded collections.
    pub fn compute(leads: &[Lead], campaigns: &[Campaign], interactions: &[Interaction]) -> Self {
        Self {
            total_leads: leads.len(),
            new_leads: leads.iter().filter(|l| l.status == LeadStatus::New).count(),
            active_campaigns: count_by_status(campaigns, CampaignStatus::Active),
            draft_campaigns: count_by_status(campaigns, CampaignStatus::Draft),
            total_interactions: interactions.len(),
            calls_made: interactions
                .iter()
                .filter(|i| i.kind == InteractionKind::Call)
                .count(),
            conversions: leads
                .iter()
                .filter(|l| l.status == LeadStatus::Converted)
                .count(),
            conversion_rate: conversion_rate(leads),
        }
    }
}

/// The `limit` most recent interactions, newest first.
///
/// The sort is stable: interactions sharing a timestamp keep their original
/// relative order.
pub fn recent_interactions(interactions: &[Interaction], limit: usize) -> Vec<&Interaction> {
    let mut sorted: Vec<&Interaction> = interactions.iter().collect();
    sorted.sort_by(|a, b| b.created_at.cmp(&a.created_at));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use chrono::{Duration, Utc};

    use super::*;
    use crate::models::InteractionStatus;

    fn lead(id: &str, status: LeadStatus) -> Lead {
        Lead {
            id: id.to_string(),
            user_id: "user_1".to_string(),
            business_id: "business_1".to_string(),
            name: "Lead".to_string(),
            phone: "+15550000000".to_string(),
            email: None,
            status,
            source: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn campaign(id: &str, status: CampaignStatus) -> Campaign {
        Campaign {
            id: id.to_string(),
            user_id: "user_1".to_string(),
            business_id: "business_1".to_string(),
            name: "Campaign".to_string(),
            script: String::new(),
            status,
            scheduled_at: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn interaction(id: &str, kind: InteractionKind, created_at: chrono::DateTime<Utc>) -> Interaction {
        Interaction {
            id: id.to_string(),
            user_id: "user_1".to_string(),
            lead_id: "lead_1".to_string(),
            campaign_id: None,
            kind,
            status: InteractionStatus::Completed,
            content: None,
            response: None,
            duration: None,
            created_at,
        }
    }

    #[test]
    fn test_stats_empty() {
        let stats = DashboardStats::compute(&[], &[], &[]);
        assert_eq!(stats.total_leads, 0);
        assert_eq!(stats.conversion_rate, 0);
    }

    #[test]
    fn test_stats_counts() {
        let leads = vec![
            lead("l1", LeadStatus::New),
            lead("l2", LeadStatus::Converted),
            lead("l3", LeadStatus::Contacted),
            lead("l4", LeadStatus::Converted),
        ];
        let campaigns = vec![
            campaign("c1", CampaignStatus::Active),
            campaign("c2", CampaignStatus::Draft),
            campaign("c3", CampaignStatus::Paused),
        ];
        let now = Utc::now();
        let interactions = vec![
            interaction("i1", InteractionKind::Call, now),
            interaction("i2", InteractionKind::Email, now),
        ];

        let stats = DashboardStats::compute(&leads, &campaigns, &interactions);
        assert_eq!(stats.total_leads, 4);
        assert_eq!(stats.new_leads, 1);
        assert_eq!(stats.active_campaigns, 1);
        assert_eq!(stats.draft_campaigns, 1);
        assert_eq!(stats.total_interactions, 2);
        assert_eq!(stats.calls_made, 1);
        assert_eq!(stats.conversions, 2);
        assert_eq!(stats.conversion_rate, 50);
    }

    #[test]
    fn test_recent_interactions_newest_first() {
        let now = Utc::now();
        let interactions = vec![
            interaction("old", InteractionKind::Call, now - Duration::hours(2)),
            interaction("newest", InteractionKind::Call, now),
            interaction("middle", InteractionKind::Call, now - Duration::hours(1)),
        ];
        let recent = recent_interactions(&interactions, 2);
        let ids: Vec<_> = recent.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids, ["newest", "middle"]);
    }

    #[test]
    fn test_recent_interactions_stable_on_ties() {
        let now = Utc::now();
        let interactions = vec![
            interaction("first", InteractionKind::Call, now),
            interaction("second", InteractionKind::Email, now),
            interaction("third", InteractionKind::Whatsapp, now),
        ];
        let recent = recent_interactions(&interactions, 10);
        let ids: Vec<_> = recent.iter().map(|i| i.id.as_str()).collect();
        // Equal timestamps preserve original relative order.
        assert_eq!(ids, ["first", "second", "third"]);
    }

    #[test]
    fn test_recent_interactions_length() {
        let now = Utc::now();
        let interactions = vec![interaction("i1", InteractionKind::Call, now)];
        assert_eq!(recent_interactions(&interactions, 5).len(), 1);
        assert_eq!(recent_interactions(&interactions, 0).len(), 0);
    }
}

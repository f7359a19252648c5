//! Cross-reference resolution over loaded sibling collections.
//!
//! Every "name for id" lookup is a linear scan that degrades to a fallback
//! label when the reference dangles (e.g. after a business is deleted).
//! Lookups never fail.

use crate::models::{Business, Campaign, Lead};

/// Fallback label for a missing lead.
pub const UNKNOWN_LEAD: &str = "Unknown Lead";

/// Fallback label for a missing business.
pub const UNKNOWN_BUSINESS: &str = "Unknown Business";

/// Fallback label for a missing campaign.
pub const UNKNOWN_CAMPAIGN: &str = "Unknown Campaign";

/// Label for interactions logged outside any campaign.
pub const MANUAL: &str = "Manual";

/// Resolve a lead's name, falling back to [`UNKNOWN_LEAD`].
pub fn lead_name<'a>(leads: &'a [Lead], lead_id: &str) -> &'a str {
    leads
        .iter()
        .find(|lead| lead.id == lead_id)
        .map(|lead| lead.name.as_str())
        .unwrap_or(UNKNOWN_LEAD)
}

/// Resolve a business's name, falling back to [`UNKNOWN_BUSINESS`].
pub fn business_name<'a>(businesses: &'a [Business], business_id: &str) -> &'a str {
    businesses
        .iter()
        .find(|business| business.id == business_id)
        .map(|business| business.name.as_str())
        .unwrap_or(UNKNOWN_BUSINESS)
}

/// Resolve a campaign label: [`MANUAL`] when no campaign is attached,
/// [`UNKNOWN_CAMPAIGN`] when the reference dangles.
pub fn campaign_label<'a>(campaigns: &'a [Campaign], campaign_id: Option<&str>) -> &'a str {
    let Some(campaign_id) = campaign_id else {
        return MANUAL;
    };
    campaigns
        .iter()
        .find(|campaign| campaign.id == campaign_id)
        .map(|campaign| campaign.name.as_str())
        .unwrap_or(UNKNOWN_CAMPAIGN)
}

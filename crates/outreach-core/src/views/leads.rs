//! Lead search and filtering.

use crate::models::{Lead, LeadStatus};
use crate::views::Filter;

/// Case-insensitive substring match against name, phone, and email.
/// An empty term matches every lead.
pub fn matches_search(lead: &Lead, term: &str) -> bool {
    if term.is_empty() {
        return true;
    }
    let term = term.to_lowercase();

    lead.name.to_lowercase().contains(&term)
        || lead.phone.to_lowercase().contains(&term)
        || lead
            .email
            .as_deref()
            .is_some_and(|email| email.to_lowercase().contains(&term))
}

/// Search leads by term; empty term is the identity.
pub fn search_leads<'a>(leads: &'a [Lead], term: &str) -> Vec<&'a Lead> {
    leads.iter().filter(|lead| matches_search(lead, term)).collect()
}

/// Combined predicate: search AND status filter, load order preserved.
pub fn filter_leads<'a>(
    leads: &'a [Lead],
    term: &str,
    status: Filter<LeadStatus>,
) -> Vec<&'a Lead> {
    leads
        .iter()
        .filter(|lead| matches_search(lead, term) && status.matches(&lead.status))
        .collect()
}

/// Integer conversion percentage: round(100 * converted / total), 0 when empty.
///
/// Also the per-campaign success rate when called over a campaign's audience.
pub fn conversion_rate(leads: &[Lead]) -> u8 {
    if leads.is_empty() {
        return 0;
    }
    let converted = leads
        .iter()
        .filter(|lead| lead.status == LeadStatus::Converted)
        .count();
    ((converted as f64 / leads.len() as f64) * 100.0).round() as u8
}

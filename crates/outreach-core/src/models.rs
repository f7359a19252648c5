//! Domain record types and their status enums.
//!
//! Every record is owned by exactly one user via `user_id`; a user's records
//! never reference another user's. Statuses are closed enums rather than open
//! strings so an invalid value is a parse error, not silently-accepted data.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Error returned when parsing a status or type string fails.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("unknown {field} value: {value}")]
pub struct UnknownValue {
    /// Which field was being parsed (e.g. "lead status").
    pub field: &'static str,
    /// The rejected input.
    pub value: String,
}

macro_rules! status_enum {
    (
        $(#[$meta:meta])*
        $name:ident ($field:literal) { $($variant:ident => $text:literal),+ $(,)? }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "snake_case")]
        pub enum $name {
            $($variant,)+
        }

        impl $name {
            /// Canonical snake_case wire form.
            pub fn as_str(&self) -> &'static str {
                match self {
                    $(Self::$variant => $text,)+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $name {
            type Err = UnknownValue;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($text => Ok(Self::$variant),)+
                    other => Err(UnknownValue {
                        field: $field,
                        value: other.to_string(),
                    }),
                }
            }
        }
    };
}

status_enum! {
    /// Lifecycle of a lead, from first contact to outcome.
    LeadStatus ("lead status") {
        New => "new",
        Contacted => "contacted",
        Interested => "interested",
        Converted => "converted",
        NotInterested => "not_interested",
    }
}

status_enum! {
    /// Campaign activation lifecycle. `Completed` is terminal.
    CampaignStatus ("campaign status") {
        Draft => "draft",
        Active => "active",
        Paused => "paused",
        Completed => "completed",
    }
}

status_enum! {
    /// Appointment outcome.
    AppointmentStatus ("appointment status") {
        Scheduled => "scheduled",
        Completed => "completed",
        Cancelled => "cancelled",
    }
}

status_enum! {
    /// Channel over which a contact attempt was made.
    InteractionKind ("interaction type") {
        Call => "call",
        Whatsapp => "whatsapp",
        Email => "email",
    }
}

status_enum! {
    /// Outcome of a contact attempt.
    InteractionStatus ("interaction status") {
        Pending => "pending",
        Completed => "completed",
        Failed => "failed",
    }
}

impl LeadStatus {
    /// Badge CSS classes for this status. Total over all five variants.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::New => "bg-blue-100 text-blue-800",
            Self::Contacted => "bg-yellow-100 text-yellow-800",
            Self::Interested => "bg-green-100 text-green-800",
            Self::Converted => "bg-emerald-100 text-emerald-800",
            Self::NotInterested => "bg-red-100 text-red-800",
        }
    }
}

impl CampaignStatus {
    /// Badge CSS classes for this status.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Draft => "bg-gray-100 text-gray-800",
            Self::Active => "bg-green-100 text-green-800",
            Self::Paused => "bg-yellow-100 text-yellow-800",
            Self::Completed => "bg-blue-100 text-blue-800",
        }
    }
}

impl InteractionStatus {
    /// Badge CSS classes for this status.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Completed => "bg-green-100 text-green-800",
            Self::Pending => "bg-yellow-100 text-yellow-800",
            Self::Failed => "bg-red-100 text-red-800",
        }
    }
}

impl InteractionKind {
    /// Badge CSS classes for this channel.
    pub fn badge_color(&self) -> &'static str {
        match self {
            Self::Call => "bg-blue-100 text-blue-800",
            Self::Whatsapp => "bg-green-100 text-green-800",
            Self::Email => "bg-purple-100 text-purple-800",
        }
    }
}

/// Service type choices offered when setting up a business profile.
pub const SERVICE_TYPES: [&str; 12] = [
    "Salon & Beauty",
    "Plumbing",
    "Fitness & Personal Training",
    "Real Estate",
    "Consulting",
    "Home Services",
    "Healthcare",
    "Legal Services",
    "Marketing Agency",
    "Restaurant",
    "Retail",
    "Other",
];

/// A business profile; the identity referenced by leads, campaigns, and
/// appointments.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    /// Client-generated id (`business_<millis>`), stable for the record's lifetime.
    pub id: String,
    /// Owning user.
    pub user_id: String,
    /// Business name (required).
    pub name: String,
    /// Service category (required), see [`SERVICE_TYPES`].
    pub service_type: String,
    pub description: Option<String>,
    pub phone: Option<String>,
    pub email: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A prospective customer tracked through the outreach lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Lead {
    pub id: String,
    pub user_id: String,
    /// Business this lead belongs to. May dangle after a business is deleted;
    /// name lookups fall back to "Unknown Business".
    pub business_id: String,
    /// Full name (required).
    pub name: String,
    /// Phone number (required).
    pub phone: String,
    pub email: Option<String>,
    pub status: LeadStatus,
    /// Where the lead came from (website, referral, ...).
    pub source: Option<String>,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A scripted outreach effort tied to one business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Campaign {
    pub id: String,
    pub user_id: String,
    pub business_id: String,
    pub name: String,
    /// The voice-call script read by the agent.
    pub script: String,
    pub status: CampaignStatus,
    pub scheduled_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A scheduled meeting tied to one lead and one business.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: String,
    pub user_id: String,
    pub lead_id: String,
    pub business_id: String,
    pub title: String,
    pub description: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    /// Duration in minutes, always positive.
    pub duration: i64,
    pub status: AppointmentStatus,
    pub created_at: DateTime<Utc>,
}

/// One logged contact attempt (call, WhatsApp message, or email).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Interaction {
    pub id: String,
    pub user_id: String,
    pub lead_id: String,
    /// Campaign that triggered the attempt; `None` for manual outreach.
    pub campaign_id: Option<String>,
    #[serde(rename = "type")]
    pub kind: InteractionKind,
    pub status: InteractionStatus,
    /// What was said or sent.
    pub content: Option<String>,
    /// What the lead answered.
    pub response: Option<String>,
    /// Call duration in seconds, when known.
    pub duration: Option<i64>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_round_trip() {
        for status in [
            LeadStatus::New,
            LeadStatus::Contacted,
            LeadStatus::Interested,
            LeadStatus::Converted,
            LeadStatus::NotInterested,
        ] {
            assert_eq!(status.as_str().parse::<LeadStatus>().unwrap(), status);
        }
        assert_eq!("draft".parse::<CampaignStatus>().unwrap(), CampaignStatus::Draft);
        assert_eq!("whatsapp".parse::<InteractionKind>().unwrap(), InteractionKind::Whatsapp);
    }

    #[test]
    fn test_unknown_status_rejected() {
        let err = "archived".parse::<LeadStatus>().unwrap_err();
        assert_eq!(err.field, "lead status");
        assert_eq!(err.value, "archived");
    }

    #[test]
    fn test_serde_uses_snake_case() {
        let json = serde_json::to_string(&LeadStatus::NotInterested).unwrap();
        assert_eq!(json, "\"not_interested\"");
    }

    #[test]
    fn test_interaction_type_field_name() {
        let interaction = Interaction {
            id: "interaction_1".to_string(),
            user_id: "user_1".to_string(),
            lead_id: "lead_1".to_string(),
            campaign_id: None,
            kind: InteractionKind::Call,
            status: InteractionStatus::Pending,
            content: None,
            response: None,
            duration: None,
            created_at: Utc::now(),
        };
        let json = serde_json::to_value(&interaction).unwrap();
        assert_eq!(json["type"], "call");
    }

    #[test]
    fn test_badge_colors_total() {
        assert_eq!(LeadStatus::New.badge_color(), "bg-blue-100 text-blue-800");
        assert_eq!(CampaignStatus::Completed.badge_color(), "bg-blue-100 text-blue-800");
        assert_eq!(InteractionKind::Email.badge_color(), "bg-purple-100 text-purple-800");
    }
}

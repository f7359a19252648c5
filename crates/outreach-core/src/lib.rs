//! Core domain types, repository traits, and derived views for the outreach
//! platform.
//!
//! This crate defines the shared vocabulary for every store in the system:
//!
//! - Record types ([`Business`], [`Lead`], [`Campaign`], [`Appointment`],
//!   [`Interaction`]) with closed status enums
//! - Repository traits ([`BusinessRepository`], [`LeadRepository`], ...) that
//!   persistence backends implement
//! - The derived-view layer in [`views`]: pure functions computing search
//!   results, dashboard statistics, calendar buckets, and cross-reference
//!   lookups from already-loaded collections
//!
//! # Example
//!
//! ```rust
//! use outreach_core::views::leads::{conversion_rate, filter_leads};
//! use outreach_core::views::Filter;
//!
//! let leads: Vec<outreach_core::Lead> = vec![];
//! assert_eq!(conversion_rate(&leads), 0);
//! assert!(filter_leads(&leads, "jane", Filter::All).is_empty());
//! ```

pub mod error;
pub mod ids;
pub mod models;
pub mod repository;
pub mod validation;
pub mod views;

pub use error::{Result, StoreError};
pub use models::{
    Appointment, AppointmentStatus, Business, Campaign, CampaignStatus, Interaction,
    InteractionKind, InteractionStatus, Lead, LeadStatus,
};
pub use repository::{
    AppointmentRepository, BusinessRepository, CampaignRepository, InteractionRepository,
    LeadRepository,
};
pub use validation::ValidationError;

// Re-export async_trait so implementors don't need a direct dependency.
pub use async_trait::async_trait;

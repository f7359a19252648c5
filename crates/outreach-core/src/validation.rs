//! Input validation for record creation.
//!
//! Validation runs at the edge, before a record reaches a backend. The rules
//! mirror the required-field checks of the original forms: a lead needs a name
//! and a phone, a business needs a name and a service type, an appointment
//! needs a title and a positive duration.

use thiserror::Error;

use crate::models::{Appointment, Business, Lead};

/// Validation error types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Empty value where one is required.
    #[error("{0} cannot be empty")]
    Empty(&'static str),

    /// Invalid email format.
    #[error("invalid email: {0}")]
    InvalidEmail(String),

    /// Value must be strictly positive.
    #[error("{field} must be positive (got {actual})")]
    NotPositive { field: &'static str, actual: i64 },
}

/// Validate an email address (basic format check).
///
/// Checks for exactly one `@`, a non-empty local part, and a domain containing
/// at least one dot with no leading/trailing/consecutive dots.
pub fn validate_email(email: &str) -> Result<(), ValidationError> {
    let email = email.trim();

    if email.is_empty() {
        return Err(ValidationError::Empty("email"));
    }

    let Some((local, domain)) = email.split_once('@') else {
        return Err(ValidationError::InvalidEmail(
            "must contain an @ symbol".to_string(),
        ));
    };

    if local.is_empty() || domain.is_empty() {
        return Err(ValidationError::InvalidEmail(
            "missing local part or domain".to_string(),
        ));
    }

    if domain.contains('@') {
        return Err(ValidationError::InvalidEmail(
            "must contain exactly one @ symbol".to_string(),
        ));
    }

    if !domain.contains('.') {
        return Err(ValidationError::InvalidEmail(
            "domain must contain at least one dot".to_string(),
        ));
    }

    if domain.starts_with('.') || domain.ends_with('.') || domain.contains("..") {
        return Err(ValidationError::InvalidEmail(
            "malformed domain".to_string(),
        ));
    }

    Ok(())
}

fn require(field: &'static str, value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::Empty(field));
    }
    Ok(())
}

fn optional_email(email: Option<&str>) -> Result<(), ValidationError> {
    match email {
        Some(email) => validate_email(email),
        None => Ok(()),
    }
}

/// Validate a business before creation: name and service type are required.
pub fn validate_business(business: &Business) -> Result<(), ValidationError> {
    require("name", &business.name)?;
    require("service_type", &business.service_type)?;
    optional_email(business.email.as_deref())
}

/// Validate a lead before creation: name, phone, and business are required.
pub fn validate_lead(lead: &Lead) -> Result<(), ValidationError> {
    require("name", &lead.name)?;
    require("phone", &lead.phone)?;
    require("business_id", &lead.business_id)?;
    optional_email(lead.email.as_deref())
}

/// Validate an appointment before creation: lead, business, and title are
/// required, and the duration must be positive.
pub fn validate_appointment(appointment: &Appointment) -> Result<(), ValidationError> {
    require("title", &appointment.title)?;
    require("lead_id", &appointment.lead_id)?;
    require("business_id", &appointment.business_id)?;

    if appointment.duration <= 0 {
        return Err(ValidationError::NotPositive {
            field: "duration",
            actual: appointment.duration,
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use chrono::Utc;

    use super::*;
    use crate::models::{AppointmentStatus, LeadStatus};

    fn sample_lead() -> Lead {
        Lead {
            id: "lead_1".to_string(),
            user_id: "user_1".to_string(),
            business_id: "business_1".to_string(),
            name: "Jane Doe".to_string(),
            phone: "+15551234567".to_string(),
            email: None,
            status: LeadStatus::New,
            source: None,
            notes: None,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    #[test]
    fn test_validate_email_valid() {
        assert!(validate_email("test@example.com").is_ok());
        assert!(validate_email("user.name@domain.co.uk").is_ok());
        assert!(validate_email(" test@example.com ").is_ok()); // trimmed
    }

    #[test]
    fn test_validate_email_invalid() {
        assert!(matches!(validate_email(""), Err(ValidationError::Empty(_))));
        assert!(validate_email("no-at-sign.com").is_err());
        assert!(validate_email("two@at@signs.com").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("test@").is_err());
        assert!(validate_email("test@localhost").is_err());
        assert!(validate_email("test@.example.com").is_err());
        assert!(validate_email("test@example..com").is_err());
    }

    #[test]
    fn test_validate_lead_requires_name_and_phone() {
        assert!(validate_lead(&sample_lead()).is_ok());

        let mut lead = sample_lead();
        lead.name = "  ".to_string();
        assert_eq!(validate_lead(&lead), Err(ValidationError::Empty("name")));

        let mut lead = sample_lead();
        lead.phone = String::new();
        assert_eq!(validate_lead(&lead), Err(ValidationError::Empty("phone")));
    }

    #[test]
    fn test_validate_lead_optional_email() {
        let mut lead = sample_lead();
        lead.email = Some("jane@example.com".to_string());
        assert!(validate_lead(&lead).is_ok());

        lead.email = Some("not-an-email".to_string());
        assert!(matches!(
            validate_lead(&lead),
            Err(ValidationError::InvalidEmail(_))
        ));
    }

    #[test]
    fn test_validate_appointment_duration() {
        let appointment = Appointment {
            id: "appointment_1".to_string(),
            user_id: "user_1".to_string(),
            lead_id: "lead_1".to_string(),
            business_id: "business_1".to_string(),
            title: "Initial Consultation".to_string(),
            description: None,
            scheduled_at: Utc::now(),
            duration: 0,
            status: AppointmentStatus::Scheduled,
            created_at: Utc::now(),
        };
        assert_eq!(
            validate_appointment(&appointment),
            Err(ValidationError::NotPositive {
                field: "duration",
                actual: 0
            })
        );
    }
}

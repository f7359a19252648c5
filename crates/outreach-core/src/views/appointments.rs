//! Calendar buckets and upcoming-appointment views.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::Serialize;

use crate::models::{Appointment, AppointmentStatus};

/// Default appointment length when the form leaves it unspecified.
pub const DEFAULT_DURATION_MIN: i64 = 60;

/// Durations offered by the guided scheduling form. A UI affordance only;
/// the store accepts any positive duration.
pub const DURATION_CHOICES_MIN: [i64; 5] = [15, 30, 60, 90, 120];

/// The local calendar day an appointment falls on.
pub fn local_day(appointment: &Appointment) -> NaiveDate {
    appointment.scheduled_at.with_timezone(&Local).date_naive()
}

/// Appointments falling on a given local calendar day, time-of-day ignored.
pub fn appointments_on<'a>(
    appointments: &'a [Appointment],
    date: NaiveDate,
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|appointment| local_day(appointment) == date)
        .collect()
}

/// The next `limit` appointments at or after `now` that are still scheduled.
///
/// Input order is preserved, so a collection loaded ascending by
/// `scheduled_at` yields the soonest appointments first.
pub fn upcoming<'a>(
    appointments: &'a [Appointment],
    now: DateTime<Utc>,
    limit: usize,
) -> Vec<&'a Appointment> {
    appointments
        .iter()
        .filter(|appointment| {
            appointment.scheduled_at >= now && appointment.status == AppointmentStatus::Scheduled
        })
        .take(limit)
        .collect()
}

/// Simple tallies over a loaded appointment collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AppointmentTally {
    pub total: usize,
    pub scheduled: usize,
    pub completed: usize,
    pub today: usize,
}

/// Count appointments by status plus how many fall on `today`.
pub fn tally(appointments: &[Appointment], today: NaiveDate) -> AppointmentTally {
    AppointmentTally {
        total: appointments.len(),
        scheduled: appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Scheduled)
            .count(),
        completed: appointments
            .iter()
            .filter(|a| a.status == AppointmentStatus::Completed)
            .count(),
        today: appointments_on(appointments, today).len(),
    }
}

//! Appointment and calendar routes.

use axum::extract::{Path, Query, State};
use axum::Json;
use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use outreach_core::ids::record_id;
use outreach_core::validation::validate_appointment;
use outreach_core::views::appointments::{
    appointments_on, tally, upcoming as upcoming_view, AppointmentTally, DEFAULT_DURATION_MIN,
};
use outreach_core::{Appointment, AppointmentStatus, StoreError};

use crate::error::{ApiError, Result};
use crate::state::AppState;
use crate::user::CurrentUser;

/// Number of appointments the "upcoming" widget shows by default.
const DEFAULT_UPCOMING_LIMIT: usize = 5;

/// Optional calendar-day filter for the appointment list.
#[derive(Deserialize, Default)]
pub struct ListQuery {
    /// Local calendar day (`YYYY-MM-DD`); omitted lists everything.
    #[serde(default)]
    pub date: Option<String>,
}

/// Limit for the upcoming-appointments list.
#[derive(Deserialize, Default)]
pub struct UpcomingQuery {
    #[serde(default)]
    pub limit: Option<usize>,
}

/// Fields the client supplies when scheduling an appointment.
#[derive(Deserialize)]
pub struct AppointmentForm {
    pub lead_id: String,
    pub business_id: String,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    pub scheduled_at: DateTime<Utc>,
    /// Duration in minutes; omitted falls back to the stock slot length.
    #[serde(default)]
    pub duration: Option<i64>,
}

/// Status change request body.
#[derive(Deserialize)]
pub struct StatusChange {
    pub status: AppointmentStatus,
}

/// Appointment list plus tallies over the full collection.
#[derive(Debug, Serialize)]
pub struct AppointmentList {
    pub appointments: Vec<Appointment>,
    pub tally: AppointmentTally,
}

/// List the user's appointments ascending by `scheduled_at`, optionally
/// restricted to one local calendar day. The tally always covers the full
/// collection.
pub async fn list(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<ListQuery>,
) -> Result<Json<AppointmentList>> {
    let all = state.appointments.list_for_user(&user_id).await?;
    let today = Local::now().date_naive();
    let counts = tally(&all, today);

    let appointments = match query.date.as_deref() {
        Some(raw) => {
            let date: NaiveDate = raw
                .parse()
                .map_err(|_| ApiError::BadRequest(format!("invalid date: {raw}")))?;
            appointments_on(&all, date).into_iter().cloned().collect()
        }
        None => all,
    };

    Ok(Json(AppointmentList {
        appointments,
        tally: counts,
    }))
}

/// The next few still-scheduled appointments at or after now.
pub async fn upcoming(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Query(query): Query<UpcomingQuery>,
) -> Result<Json<Vec<Appointment>>> {
    let all = state.appointments.list_for_user(&user_id).await?;
    let limit = query.limit.unwrap_or(DEFAULT_UPCOMING_LIMIT);
    let next = upcoming_view(&all, Utc::now(), limit)
        .into_iter()
        .cloned()
        .collect();
    Ok(Json(next))
}

/// Schedule an appointment, then return the reloaded collection.
pub async fn create(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Json(form): Json<AppointmentForm>,
) -> Result<Json<AppointmentList>> {
    let appointment = Appointment {
        id: record_id("appointment"),
        user_id: user_id.clone(),
        lead_id: form.lead_id,
        business_id: form.business_id,
        title: form.title,
        description: form.description,
        scheduled_at: form.scheduled_at,
        duration: form.duration.unwrap_or(DEFAULT_DURATION_MIN),
        status: AppointmentStatus::Scheduled,
        created_at: Utc::now(),
    };
    validate_appointment(&appointment).map_err(StoreError::from)?;

    state.appointments.create(&appointment).await?;
    info!(id = %appointment.id, scheduled_at = %appointment.scheduled_at, "Appointment created");

    reload(&state, &user_id).await
}

/// Mark an appointment completed or cancelled, then return the reloaded
/// collection.
pub async fn set_status(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
    Json(change): Json<StatusChange>,
) -> Result<Json<AppointmentList>> {
    let existing = owned_appointment(&state, &user_id, id).await?;

    state
        .appointments
        .set_status(&existing.id, change.status)
        .await?;
    info!(id = %existing.id, status = %change.status, "Appointment status changed");

    reload(&state, &user_id).await
}

/// Delete an appointment, then return the reloaded collection.
pub async fn remove(
    State(state): State<AppState>,
    CurrentUser(user_id): CurrentUser,
    Path(id): Path<String>,
) -> Result<Json<AppointmentList>> {
    let existing = owned_appointment(&state, &user_id, id).await?;

    state.appointments.delete(&existing.id).await?;
    info!(id = %existing.id, "Appointment deleted");

    reload(&state, &user_id).await
}

/// Re-list the full collection with fresh tallies after a mutation.
async fn reload(state: &AppState, user_id: &str) -> Result<Json<AppointmentList>> {
    let appointments = state.appointments.list_for_user(user_id).await?;
    let counts = tally(&appointments, Local::now().date_naive());
    Ok(Json(AppointmentList {
        appointments,
        tally: counts,
    }))
}

/// Fetch an appointment and verify it belongs to the user; another user's
/// record is indistinguishable from a missing one.
async fn owned_appointment(state: &AppState, user_id: &str, id: String) -> Result<Appointment> {
    let existing = state.appointments.get(&id).await?;
    if existing.user_id != user_id {
        return Err(StoreError::NotFound {
            entity: "Appointment",
            id,
        }
        .into());
    }
    Ok(existing)
}

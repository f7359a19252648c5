//! Static form metadata: the choice lists and defaults the client renders.

use axum::Json;
use serde::Serialize;

use outreach_core::models::SERVICE_TYPES;
use outreach_core::views::appointments::{DEFAULT_DURATION_MIN, DURATION_CHOICES_MIN};
use outreach_core::views::campaigns::DEFAULT_CALL_SCRIPT;

/// Choice lists and defaults for the setup and scheduling forms.
#[derive(Serialize)]
pub struct Meta {
    pub service_types: Vec<&'static str>,
    pub duration_choices_min: Vec<i64>,
    pub default_duration_min: i64,
    pub default_call_script: &'static str,
}

/// Get form metadata as JSON.
pub async fn meta() -> Json<Meta> {
    Json(Meta {
        service_types: SERVICE_TYPES.to_vec(),
        duration_choices_min: DURATION_CHOICES_MIN.to_vec(),
        default_duration_min: DEFAULT_DURATION_MIN,
        default_call_script: DEFAULT_CALL_SCRIPT,
    })
}

use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Deserialize;

use crate::errors::AppError;
use crate::models::{template, BusinessProfile, ProfilePatch};
use crate::services::settings::{self, ProfileField, SettingsView, TemplateButton};
use crate::state::AppState;

// GET /api/profile
pub async fn get_profile(State(state): State<Arc<AppState>>) -> Json<BusinessProfile> {
    Json(state.session().profile().clone())
}

// PUT /api/profile
pub async fn replace_profile(
    State(state): State<Arc<AppState>>,
    Json(profile): Json<BusinessProfile>,
) -> Json<BusinessProfile> {
    let mut session = state.session();
    session.replace_profile(profile);
    Json(session.profile().clone())
}

// PATCH /api/profile
pub async fn update_profile(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<ProfilePatch>,
) -> Json<BusinessProfile> {
    let mut session = state.session();
    session.update_profile(patch);
    Json(session.profile().clone())
}

// GET /api/settings
pub async fn get_settings(State(state): State<Arc<AppState>>) -> Json<SettingsView> {
    let session = state.session();
    Json(settings::settings_view(session.profile()))
}

// POST /api/settings/field
#[derive(Deserialize)]
pub struct FieldEdit {
    pub field: String,
    pub value: String,
}

pub async fn update_field(
    State(state): State<Arc<AppState>>,
    Json(edit): Json<FieldEdit>,
) -> Result<Json<SettingsView>, AppError> {
    let field: ProfileField = edit.field.parse()?;

    let mut session = state.session();
    let edited = settings::apply_field(session.profile(), field, &edit.value);
    session.replace_profile(edited);

    Ok(Json(settings::settings_view(session.profile())))
}

// GET /api/templates
pub async fn get_templates(State(state): State<Arc<AppState>>) -> Json<Vec<TemplateButton>> {
    let session = state.session();
    Json(settings::template_buttons(session.profile()))
}

// POST /api/templates/:key/load
pub async fn load_template(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
) -> Result<Json<SettingsView>, AppError> {
    let template =
        template::find_template(&key).ok_or_else(|| AppError::TemplateNotFound(key.clone()))?;

    tracing::info!(template = template.key, "loading profile template");

    let mut session = state.session();
    session.replace_profile(template.profile());

    Ok(Json(settings::settings_view(session.profile())))
}

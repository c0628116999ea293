use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::models::{parse_services, template, BusinessProfile};

/// A single editable attribute of the business profile.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Name,
    Industry,
    Description,
    Services,
    Pricing,
    Hours,
    Location,
    Contact,
    Policies,
}

impl FromStr for ProfileField {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "name" => Ok(ProfileField::Name),
            "industry" => Ok(ProfileField::Industry),
            "description" => Ok(ProfileField::Description),
            "services" => Ok(ProfileField::Services),
            "pricing" => Ok(ProfileField::Pricing),
            "hours" => Ok(ProfileField::Hours),
            "location" => Ok(ProfileField::Location),
            "contact" => Ok(ProfileField::Contact),
            "policies" => Ok(ProfileField::Policies),
            other => Err(AppError::UnknownField(other.to_string())),
        }
    }
}

/// The current profile with one field replaced.
pub fn apply_field(current: &BusinessProfile, field: ProfileField, value: &str) -> BusinessProfile {
    let mut profile = current.clone();
    let value = value.to_string();
    match field {
        ProfileField::Name => profile.name = value,
        ProfileField::Industry => profile.industry = value,
        ProfileField::Description => profile.description = value,
        ProfileField::Services => profile.services = parse_services(&value),
        ProfileField::Pricing => profile.pricing = value,
        ProfileField::Hours => profile.hours = value,
        ProfileField::Location => profile.location = value,
        ProfileField::Contact => profile.contact = value,
        ProfileField::Policies => profile.policies = value,
    }
    profile
}

#[derive(Debug, Clone, Serialize)]
pub struct TemplateButton {
    pub key: &'static str,
    pub label: &'static str,
    pub blurb: &'static str,
    pub active: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct SettingsView {
    pub profile: BusinessProfile,
    pub services_text: String,
    pub templates: Vec<TemplateButton>,
}

pub fn template_buttons(current: &BusinessProfile) -> Vec<TemplateButton> {
    template::templates()
        .iter()
        .map(|t| TemplateButton {
            key: t.key,
            label: t.label,
            blurb: t.blurb,
            // Name equality only; edited fields keep the highlight.
            active: t.profile().name == current.name,
        })
        .collect()
}

pub fn settings_view(current: &BusinessProfile) -> SettingsView {
    SettingsView {
        profile: current.clone(),
        services_text: current.services_text(),
        templates: template_buttons(current),
    }
}

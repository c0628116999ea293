use serde::{Deserialize, Serialize};

/// The business the assistant speaks for. Every field is free-form.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct BusinessProfile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub industry: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub services: Vec<String>,
    #[serde(default)]
    pub pricing: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub contact: String,
    #[serde(default)]
    pub policies: String,
}

/// Partial update; `None` leaves the field as it is.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ProfilePatch {
    pub name: Option<String>,
    pub industry: Option<String>,
    pub description: Option<String>,
    pub services: Option<Vec<String>>,
    pub pricing: Option<String>,
    pub hours: Option<String>,
    pub location: Option<String>,
    pub contact: Option<String>,
    pub policies: Option<String>,
}

impl BusinessProfile {
    pub fn apply(&mut self, patch: ProfilePatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(industry) = patch.industry {
            self.industry = industry;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(services) = patch.services {
            self.services = services;
        }
        if let Some(pricing) = patch.pricing {
            self.pricing = pricing;
        }
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(contact) = patch.contact {
            self.contact = contact;
        }
        if let Some(policies) = patch.policies {
            self.policies = policies;
        }
    }

    /// Services as edited in the settings textarea, one per line.
    pub fn services_text(&self) -> String {
        self.services.join("\n")
    }

    /// Context block injected into the system prompt.
    pub fn to_prompt(&self) -> String {
        let services = if self.services.is_empty() {
            "- (none listed)".to_string()
        } else {
            self.services
                .iter()
                .map(|s| format!("- {s}"))
                .collect::<Vec<_>>()
                .join("\n")
        };

        format!(
            "Business name: {}\n\
             Industry: {}\n\
             Description: {}\n\
             Services:\n{}\n\
             Pricing: {}\n\
             Hours: {}\n\
             Location: {}\n\
             Contact: {}\n\
             Policies: {}",
            self.name,
            self.industry,
            self.description,
            services,
            self.pricing,
            self.hours,
            self.location,
            self.contact,
            self.policies,
        )
    }
}

/// Inverse of [`BusinessProfile::services_text`]. Blank lines are kept.
pub fn parse_services(text: &str) -> Vec<String> {
    text.split('\n').map(str::to_string).collect()
}

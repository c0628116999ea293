use super::BusinessProfile;

/// A built-in sample profile offered for one-click loading.
#[derive(Debug, Clone, Copy)]
pub struct Template {
    pub key: &'static str,
    pub label: &'static str,
    pub blurb: &'static str,
    build: fn() -> BusinessProfile,
}

impl Template {
    pub fn profile(&self) -> BusinessProfile {
        (self.build)()
    }
}

pub const DEFAULT_TEMPLATE: &str = "barber";

static TEMPLATES: [Template; 2] = [
    Template {
        key: "barber",
        label: "Barbershop",
        blurb: "Appointments & Services",
        build: barbershop,
    },
    Template {
        key: "mechanic",
        label: "Mobile Mechanic",
        blurb: "Travels to customer",
        build: mobile_mechanic,
    },
];

pub fn templates() -> &'static [Template] {
    &TEMPLATES
}

pub fn find_template(key: &str) -> Option<&'static Template> {
    TEMPLATES.iter().find(|t| t.key == key)
}

pub fn default_profile() -> BusinessProfile {
    barbershop()
}

fn barbershop() -> BusinessProfile {
    BusinessProfile {
        name: "Fresh Cuts Barbershop".to_string(),
        industry: "Barber/Personal Care".to_string(),
        description: "A classic barbershop with a modern twist, specializing in fades, beard trims, and hot towel shaves.".to_string(),
        services: vec![
            "Classic Haircut ($35)".to_string(),
            "Skin Fade ($45)".to_string(),
            "Beard Trim & Line Up ($25)".to_string(),
            "Hot Towel Shave ($40)".to_string(),
            "The Full Works (Cut + Beard + Shave) ($80)".to_string(),
        ],
        pricing: "Prices are fixed for standard services. Custom designs may incur extra charges.".to_string(),
        hours: "Mon-Fri: 10am - 7pm, Sat: 9am - 5pm, Sun: Closed".to_string(),
        location: "123 Main St, Downtown Metro City".to_string(),
        contact: "555-0199".to_string(),
        policies: "Walk-ins welcome but appointments prioritized. Cancellation required 24h in advance. Late arrivals >15min may be rescheduled.".to_string(),
    }
}

fn mobile_mechanic() -> BusinessProfile {
    BusinessProfile {
        name: "Mike's Mobile Mechanics".to_string(),
        industry: "Automotive".to_string(),
        description: "We come to you! Certified mechanics handling diagnostics, batteries, brakes, and oil changes at your driveway.".to_string(),
        services: vec![
            "Diagnostic Visit ($99 - waived if repair booked)".to_string(),
            "Brake Pad Replacement (starts at $180/axle)".to_string(),
            "Battery Replacement ($150 + parts)".to_string(),
            "Oil Change (Synthetic) ($90)".to_string(),
        ],
        pricing: "Rough estimates provided. Final quote requires diagnostic.".to_string(),
        hours: "Daily: 8am - 8pm".to_string(),
        location: "Mobile Service (Serving Metro City & Suburbs)".to_string(),
        contact: "555-0244".to_string(),
        policies: "Payment due upon completion. We do not do transmission rebuilds or body work.".to_string(),
    }
}

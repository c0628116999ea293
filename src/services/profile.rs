use crate::models::{BusinessProfile, ProfilePatch};

/// Holds the one active business profile.
#[derive(Debug, Clone)]
pub struct ProfileStore {
    active: BusinessProfile,
}

/// What a replace or update did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfileChange {
    pub previous_name: String,
    pub name_changed: bool,
}

impl ProfileStore {
    pub fn new(profile: BusinessProfile) -> Self {
        Self { active: profile }
    }

    pub fn get(&self) -> &BusinessProfile {
        &self.active
    }

    pub fn replace(&mut self, profile: BusinessProfile) -> ProfileChange {
        let previous_name = std::mem::replace(&mut self.active, profile).name;
        self.change_from(previous_name)
    }

    pub fn update(&mut self, patch: ProfilePatch) -> ProfileChange {
        let previous_name = self.active.name.clone();
        self.active.apply(patch);
        self.change_from(previous_name)
    }

    fn change_from(&self, previous_name: String) -> ProfileChange {
        let name_changed = previous_name != self.active.name;
        ProfileChange {
            previous_name,
            name_changed,
        }
    }
}

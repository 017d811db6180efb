use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Fixed social links on the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ProfileLinks {
    #[serde(default)]
    pub instagram: String,
    #[serde(default)]
    pub linkedin: String,
    #[serde(default)]
    pub email: String,
}

/// The singleton record describing the site owner.
///
/// Overwritten wholesale on each save; there is no partial update. `avatar`
/// is a weak reference to a stored filename - deleting the file does not
/// touch the profile.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub bio: String,
    #[serde(default)]
    pub avatar: Option<String>,
    /// Append-only log of every avatar filename ever set, de-duplicated.
    #[serde(default)]
    pub avatar_history: Vec<String>,
    #[serde(default)]
    pub links: ProfileLinks,
}

impl Profile {
    /// Set a freshly uploaded avatar as current and record it in the
    /// history unless it is already present.
    pub fn record_avatar(&mut self, stored_filename: String) {
        if !self.avatar_history.contains(&stored_filename) {
            self.avatar_history.push(stored_filename.clone());
        }
        self.avatar = Some(stored_filename);
    }
}

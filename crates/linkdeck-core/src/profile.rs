//! Page profile
//!
//! A single profile exists per page: avatar, display name, and bio. Fields
//! are edited wholesale through the setters; there is no identity beyond
//! being the page's one profile.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub avatar_url: String,
    pub name: String,
    pub bio: String,
}

impl Default for Profile {
    fn default() -> Self {
        // Random seed so every fresh page gets its own placeholder portrait
        Self {
            avatar_url: format!("https://picsum.photos/seed/{}/200", Uuid::new_v4().simple()),
            name: "@yourname".to_string(),
            bio: "Welcome to my page! Discover my world through the links below.".to_string(),
        }
    }
}

impl Profile {
    pub fn set_avatar_url(&mut self, url: impl Into<String>) {
        self.avatar_url = url.into();
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_bio(&mut self, bio: impl Into<String>) {
        self.bio = bio.into();
    }
}

use chrono::{DateTime, Utc};

use crate::ids::UserId;
use crate::role::Role;

/// A registered account. The password hash is stored separately and never
/// travels with the profile.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct User {
    pub id: UserId,
    pub name: String,
    /// Stored lowercase; uniqueness is case-insensitive.
    pub email: String,
    pub role: Role,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn new(name: String, email: String, role: Role) -> Self {
        User {
            id: UserId::new(),
            name,
            email: email.to_lowercase(),
            role,
            created_at: Utc::now(),
        }
    }
}

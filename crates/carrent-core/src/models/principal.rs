//! The authenticated caller of an operation.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::user::{Role, User};

/// Verified identity supplied with every request. The core never
/// authenticates; it only compares this against resource ownership.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct Principal {
    pub id: Uuid,
    pub role: Role,
}

impl Principal {
    pub fn new(id: Uuid, role: Role) -> Self {
        Self { id, role }
    }

    pub fn is_owner(&self) -> bool {
        self.role == Role::Owner
    }
}

impl From<&User> for Principal {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            role: user.role,
        }
    }
}

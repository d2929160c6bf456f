//! Shared types used across the codebase

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use uuid::Uuid;

pub const TENANT_ADMIN_ROLE: &str = "Tenant Admin";
pub const USER_ROLE: &str = "User";

/// Access level a user can hold within a tenant
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    #[serde(rename = "Tenant Admin")]
    TenantAdmin,
    #[serde(rename = "User")]
    User,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::TenantAdmin => TENANT_ADMIN_ROLE,
            Role::User => USER_ROLE,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Unrecognized role name; carries the offending value
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0} is not a valid user role. Roles should be either Tenant Admin or User")]
pub struct InvalidRole(pub String);

impl FromStr for Role {
    type Err = InvalidRole;

    // Exact match only, the service rejects any other casing
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            TENANT_ADMIN_ROLE => Ok(Role::TenantAdmin),
            USER_ROLE => Ok(Role::User),
            other => Err(InvalidRole(other.to_string())),
        }
    }
}

/// Body of the role update call
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UpdateTenantUserRoles {
    pub user_id: Uuid,
    pub roles: Vec<Role>,
}

/// Whatever the tenant-management service answers with. Kept opaque and
/// only re-rendered for display.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TenantUserRoles(pub Value);

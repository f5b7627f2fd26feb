use std::collections::HashMap;

use crate::models::Role;
use crate::{Error, Result, Success};

/// Static role table
///
/// Maps each role to its display name. Registration and verification
/// resolve roles through this table and fail with a 500-class error
/// when a required role is absent.
#[derive(Serialize, Deserialize, Clone)]
pub struct RoleTable {
    /// Role assigned to freshly registered, unverified accounts
    pub default_role: Role,

    /// Role assigned at successful email verification
    pub verified_role: Role,

    /// Display names by role
    pub entries: HashMap<Role, String>,
}

impl Default for RoleTable {
    fn default() -> RoleTable {
        let mut entries = HashMap::new();
        entries.insert(Role::Public, "Public".to_string());
        entries.insert(Role::Customer, "Customer".to_string());
        entries.insert(Role::Seller, "Seller".to_string());
        entries.insert(Role::Admin, "Admin".to_string());

        RoleTable {
            default_role: Role::Public,
            verified_role: Role::Customer,
            entries,
        }
    }
}

impl RoleTable {
    /// Resolve a role's display name
    pub fn resolve(&self, role: Role) -> Result<&str> {
        self.entries
            .get(&role)
            .map(|name| name.as_str())
            .ok_or(Error::MissingRole {
                role: role.as_type_str(),
            })
    }

    /// Ensure the roles the account lifecycle depends on exist
    pub fn validate(&self) -> Success {
        self.resolve(self.default_role)?;
        self.resolve(self.verified_role)?;
        Ok(())
    }
}

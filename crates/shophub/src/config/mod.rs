mod email;
mod passwords;
mod roles;

pub use email::*;
pub use passwords::*;
pub use roles::*;

use crate::Success;

/// ShopHub configuration
#[derive(Default, Serialize, Deserialize, Clone)]
pub struct Config {
    /// Outbound email, templates and code expiry policy
    pub email: EmailConfig,

    /// Password length requirements
    pub passwords: PasswordPolicy,

    /// Role table
    pub roles: RoleTable,
}

impl Config {
    /// Fail fast on a broken deployment
    ///
    /// A missing default or verified role is a deployment error,
    /// not something to discover on the first registration.
    pub fn validate(&self) -> Success {
        self.roles.validate()
    }
}

use iso8601_timestamp::Timestamp;

/// Account role
///
/// Accounts start out `public` and are promoted to `customer`
/// once their email address has been verified.
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Public,
    Customer,
    Seller,
    Admin,
}

impl Role {
    pub fn as_type_str(&self) -> &'static str {
        match self {
            Role::Public => "public",
            Role::Customer => "customer",
            Role::Seller => "seller",
            Role::Admin => "admin",
        }
    }
}

impl Default for Role {
    fn default() -> Role {
        Role::Public
    }
}

/// One-time verification code
///
/// A single code slot is shared by the email-confirmation and
/// password-reset flows; issuing a new code overwrites the old one.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct OneTimeCode {
    /// 6-digit numeric code
    pub code: String,
    /// Time at which this code expires
    pub expiry: Timestamp,
}

/// URL-based password reset token
///
/// Alternate reset path: generated and mailed out alongside the code,
/// but never consumed by any handler. Kept write-only on purpose.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct ResetToken {
    /// 256-bit hex token embedded in the reset link
    pub token: String,
    /// Time at which this token expires
    pub expiry: Timestamp,
}

/// Account model
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Account {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// User's email
    pub email: String,

    /// Lowercased email used for case-insensitive lookups
    pub email_normalised: String,

    /// Unique username
    pub username: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,

    /// Argon2 hashed password
    pub password: String,

    /// Whether the email address has been verified
    ///
    /// Flips false to true exactly once and never reverts.
    #[serde(default)]
    pub confirmed: bool,

    /// Whether the account is blocked
    #[serde(default)]
    pub blocked: bool,

    /// Account role
    #[serde(default)]
    pub role: Role,

    /// Active one-time code, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub verification: Option<OneTimeCode>,

    /// Active URL reset token, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reset_token: Option<ResetToken>,
}

/// Sanitized account view returned to clients
///
/// Never carries the password hash or any verification state.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct AccountInfo {
    pub id: String,
    pub username: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub confirmed: bool,
    pub blocked: bool,
    /// Display name of the account's role
    pub role: String,
}

/// Password length requirements
///
/// The reset and change flows deliberately carry different minimums,
/// matching the behaviour clients already rely on.
#[derive(Serialize, Deserialize, Clone)]
pub struct PasswordPolicy {
    /// Minimum length accepted by the reset-password flow
    pub minimum_reset_length: usize,

    /// Minimum length accepted by the change-password flow
    pub minimum_change_length: usize,
}

impl Default for PasswordPolicy {
    fn default() -> PasswordPolicy {
        PasswordPolicy {
            minimum_reset_length: 6,
            minimum_change_length: 8,
        }
    }
}

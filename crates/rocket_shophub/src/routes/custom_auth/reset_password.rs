//! Finish a password reset
//! POST /custom-auth/reset-password

use rocket::serde::json::Json;
use rocket::State;

use shophub::util::{hash_password, normalise_email};
use shophub::{Error, Result, Shophub};

use crate::routes::ResponseMessage;

/// # Reset Data
#[derive(Serialize, Deserialize)]
pub struct DataResetPassword {
    pub email: String,
    /// 6-digit code from the reset email
    pub code: String,
    /// New password
    pub password: String,
}

/// # Reset Password
///
/// Set a new password and consume the code. The new password may not
/// equal the old one.
#[post("/reset-password", data = "<data>")]
pub async fn reset_password(
    shophub: &State<Shophub>,
    data: Json<DataResetPassword>,
) -> Result<Json<ResponseMessage>> {
    let data = data.into_inner();

    let minimum = shophub.config.passwords.minimum_reset_length;
    if data.password.len() < minimum {
        return Err(Error::ShortPassword { minimum });
    }

    let mut account = shophub
        .database
        .find_account_by_normalised_email(&normalise_email(data.email))
        .await?
        .ok_or(Error::InvalidCode)?;

    account.expect_code(&data.code)?;

    if account.password_matches(&data.password) {
        return Err(Error::SamePassword);
    }

    account.password = hash_password(data.password)?;
    account.clear_verification();
    account.save(shophub).await?;

    Ok(Json(ResponseMessage {
        message: "Password has been reset successfully".to_string(),
    }))
}

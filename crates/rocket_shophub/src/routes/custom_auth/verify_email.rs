//! Verify an email address with the mailed code
//! POST /custom-auth/verify-email

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::AccountInfo;
use shophub::util::normalise_email;
use shophub::{Error, Result, Shophub};

/// # Verification Data
#[derive(Serialize, Deserialize)]
pub struct DataVerifyEmail {
    /// Email address the code was sent to
    pub email: String,
    /// 6-digit code from the email
    pub code: String,
}

/// # Verify Response
#[derive(Serialize, Deserialize)]
pub struct ResponseVerifyEmail {
    /// Session token for the freshly verified account
    pub token: String,
    pub user: AccountInfo,
}

/// # Verify Email
///
/// Confirm the account, promote it to the verified role and open a
/// first session. A missing account and a wrong code are reported
/// identically.
#[post("/verify-email", data = "<data>")]
pub async fn verify_email(
    shophub: &State<Shophub>,
    data: Json<DataVerifyEmail>,
) -> Result<Json<ResponseVerifyEmail>> {
    let data = data.into_inner();

    let mut account = shophub
        .database
        .find_account_by_normalised_email(&normalise_email(data.email))
        .await?
        .ok_or(Error::InvalidCode)?;

    account.expect_code(&data.code)?;

    // Deployment invariant, not a user error
    let verified_role = shophub.config.roles.verified_role;
    shophub.config.roles.resolve(verified_role)?;

    account.confirmed = true;
    account.role = verified_role;
    account.clear_verification();
    account.save(shophub).await?;

    let session = account.create_session(shophub, "Unknown".to_string()).await?;

    Ok(Json(ResponseVerifyEmail {
        token: session.token,
        user: account.sanitized(shophub)?,
    }))
}

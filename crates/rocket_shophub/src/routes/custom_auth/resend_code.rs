//! Send a fresh verification code
//! POST /custom-auth/resend-code

use rocket::serde::json::Json;
use rocket::State;

use shophub::util::normalise_email;
use shophub::{Error, Result, Shophub};

use crate::routes::ResponseMessage;

/// # Resend Data
#[derive(Serialize, Deserialize)]
pub struct DataResendCode {
    /// Email address of an unverified account
    pub email: String,
}

/// # Resend Code
///
/// Issue a new code for an unverified account, overwriting the old one.
/// Verified and unknown accounts get the same flattened error.
#[post("/resend-code", data = "<data>")]
pub async fn resend_code(
    shophub: &State<Shophub>,
    data: Json<DataResendCode>,
) -> Result<Json<ResponseMessage>> {
    let data = data.into_inner();

    let account = shophub
        .database
        .find_account_by_normalised_email(&normalise_email(data.email))
        .await?;

    let mut account = match account {
        Some(account) if !account.confirmed => account,
        _ => return Err(Error::UnknownOrAlreadyVerified),
    };

    account.resend_verification(shophub).await?;

    Ok(Json(ResponseMessage {
        message: "Verification code sent successfully".to_string(),
    }))
}

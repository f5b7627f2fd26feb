//! Change the current account's password
//! PUT /custom-auth/change-password

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::Account;
use shophub::util::hash_password;
use shophub::{Error, Result, Shophub};

use crate::routes::ResponseMessage;

/// # Change Data
#[derive(Serialize, Deserialize)]
pub struct DataChangePassword {
    pub current_password: String,
    pub new_password: String,
}

/// # Change Password
///
/// Requires the current password; the logged-in flow demands a longer
/// minimum than the reset flow does.
#[put("/change-password", data = "<data>")]
pub async fn change_password(
    shophub: &State<Shophub>,
    mut account: Account,
    data: Json<DataChangePassword>,
) -> Result<Json<ResponseMessage>> {
    let data = data.into_inner();

    account.verify_password(&data.current_password)?;

    let minimum = shophub.config.passwords.minimum_change_length;
    if data.new_password.len() < minimum {
        return Err(Error::ShortPassword { minimum });
    }

    account.password = hash_password(data.new_password)?;
    account.save(shophub).await?;

    Ok(Json(ResponseMessage {
        message: "Password changed successfully".to_string(),
    }))
}

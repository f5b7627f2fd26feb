//! Log into an account
//! POST /custom-auth/login

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::AccountInfo;
use shophub::util::normalise_email;
use shophub::{Error, Result, Shophub};

/// # Login Data
#[derive(Serialize, Deserialize)]
pub struct DataLogin {
    /// Email address or username
    pub identifier: String,
    pub password: String,
}

/// # Login Response
#[derive(Serialize, Deserialize)]
pub struct ResponseLogin {
    /// Session token
    pub token: String,
    pub user: AccountInfo,
}

/// # Login
///
/// Open a session. Emails match case-insensitively, usernames exactly;
/// unverified and blocked accounts are turned away after the password
/// check.
#[post("/login", data = "<data>")]
pub async fn login(shophub: &State<Shophub>, data: Json<DataLogin>) -> Result<Json<ResponseLogin>> {
    let data = data.into_inner();

    let account = match shophub
        .database
        .find_account_by_identifier(&normalise_email(data.identifier.clone()))
        .await?
    {
        Some(account) => account,
        None => shophub
            .database
            .find_account_by_identifier(&data.identifier)
            .await?
            .ok_or(Error::InvalidCredentials)?,
    };

    account.verify_password(&data.password)?;

    if !account.confirmed {
        return Err(Error::UnverifiedAccount);
    }

    if account.blocked {
        return Err(Error::BlockedAccount);
    }

    let session = account.create_session(shophub, "Unknown".to_string()).await?;

    Ok(Json(ResponseLogin {
        token: session.token,
        user: account.sanitized(shophub)?,
    }))
}

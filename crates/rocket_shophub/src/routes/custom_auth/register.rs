//! Create a new account
//! POST /custom-auth/register

use rocket::serde::json::Json;
use rocket::State;

use shophub::{models::Account, Result, Shophub};

/// # Account Data
#[derive(Serialize, Deserialize)]
pub struct DataRegister {
    /// Valid email address
    pub email: String,
    /// Password
    pub password: String,
    /// Username, defaults to the email address
    pub username: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// # Register Response
#[derive(Serialize, Deserialize)]
pub struct ResponseRegister {
    pub message: String,
    /// Email address the verification code was sent to
    pub email: String,
}

/// # Register
///
/// Create a new account and send the verification code. No session is
/// issued; the client must verify the email address first.
#[post("/register", data = "<data>")]
pub async fn register(
    shophub: &State<Shophub>,
    data: Json<DataRegister>,
) -> Result<Json<ResponseRegister>> {
    let data = data.into_inner();

    let account = Account::create(
        shophub,
        data.email,
        data.password,
        data.username,
        data.first_name,
        data.last_name,
    )
    .await?;

    Ok(Json(ResponseRegister {
        message: "Registration successful. Please check your email for verification code."
            .to_string(),
        email: account.email,
    }))
}

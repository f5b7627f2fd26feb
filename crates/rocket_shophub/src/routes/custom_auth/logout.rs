//! Close the current session
//! POST /custom-auth/logout

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::Session;
use shophub::{Result, Shophub};

use crate::routes::ResponseMessage;

/// # Logout
///
/// Revoke the session the request was made with.
#[post("/logout")]
pub async fn logout(shophub: &State<Shophub>, session: Session) -> Result<Json<ResponseMessage>> {
    session.delete(shophub).await?;

    Ok(Json(ResponseMessage {
        message: "Logged out successfully".to_string(),
    }))
}

//! Revoke one of the current user's sessions
//! DELETE /custom-auth/sessions/<id>

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::Session;
use shophub::{Error, Result, Shophub};

use crate::routes::ResponseMessage;

/// # Revoke Session
///
/// A session belonging to someone else looks like it does not exist.
#[delete("/sessions/<id>")]
pub async fn revoke_session(
    shophub: &State<Shophub>,
    session: Session,
    id: String,
) -> Result<Json<ResponseMessage>> {
    let target = shophub.database.find_session(&id).await?;

    if target.user_id != session.user_id {
        return Err(Error::InvalidSession);
    }

    target.delete(shophub).await?;

    Ok(Json(ResponseMessage {
        message: "Session revoked successfully".to_string(),
    }))
}

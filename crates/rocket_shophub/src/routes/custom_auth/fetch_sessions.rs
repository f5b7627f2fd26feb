//! List the current user's sessions
//! GET /custom-auth/sessions

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::Session;
use shophub::{Result, Shophub};

/// # Session View
///
/// Tokens are never echoed back.
#[derive(Serialize, Deserialize)]
pub struct SessionInfo {
    pub id: String,
    pub name: String,
}

/// # Sessions Response
#[derive(Serialize, Deserialize)]
pub struct ResponseSessions {
    pub sessions: Vec<SessionInfo>,
}

/// # Fetch Sessions
#[get("/sessions")]
pub async fn fetch_sessions(
    shophub: &State<Shophub>,
    session: Session,
) -> Result<Json<ResponseSessions>> {
    let sessions = shophub
        .database
        .find_sessions(&session.user_id)
        .await?
        .into_iter()
        .map(|session| SessionInfo {
            id: session.id,
            name: session.name,
        })
        .collect();

    Ok(Json(ResponseSessions { sessions }))
}

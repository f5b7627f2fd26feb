use rocket::{
    http::{ContentType, Status},
    outcome::Outcome,
    request::{self, FromRequest},
    response::{self, Responder},
    Request, Response,
};

use crate::{
    models::{Account, Session},
    Error, Shophub,
};

/// HTTP response builder for Error enum
impl<'r> Responder<'r, 'static> for Error {
    fn respond_to(self, _: &'r Request<'_>) -> response::Result<'static> {
        let status = match self {
            Error::IncorrectData { .. } => Status::BadRequest,
            Error::DatabaseError { .. } => Status::InternalServerError,
            Error::InternalError => Status::InternalServerError,
            Error::OperationFailed => Status::InternalServerError,
            Error::RenderFail => Status::InternalServerError,
            Error::EmailFailed => Status::InternalServerError,
            Error::MissingRole { .. } => Status::InternalServerError,
            Error::MissingHeaders => Status::Unauthorized,
            Error::InvalidSession => Status::Unauthorized,
            Error::InvalidCredentials => Status::Unauthorized,
            Error::UnverifiedAccount => Status::Forbidden,
            Error::BlockedAccount => Status::Forbidden,
            Error::EmailInUse => Status::BadRequest,
            Error::UsernameTaken => Status::BadRequest,
            Error::InvalidCode => Status::BadRequest,
            Error::ExpiredCode => Status::BadRequest,
            Error::UnknownOrAlreadyVerified => Status::BadRequest,
            Error::SamePassword => Status::BadRequest,
            Error::ShortPassword { .. } => Status::BadRequest,
            Error::UnknownUser => Status::NotFound,
            Error::UnknownStore => Status::NotFound,
            Error::UnknownProduct => Status::NotFound,
            Error::UnknownComment => Status::NotFound,
            Error::StoreRequired => Status::BadRequest,
            Error::StoreExists => Status::BadRequest,
        };

        // Serialize the error data structure into JSON.
        let string = json!(self).to_string();

        // Build and send the request.
        Response::build()
            .sized_body(string.len(), std::io::Cursor::new(string))
            .header(ContentType::new("application", "json"))
            .status(status)
            .ok()
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Session {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        let header_session_token = request
            .headers()
            .get("x-session-token")
            .next()
            .map(|x| x.to_string());

        match (request.rocket().state::<Shophub>(), header_session_token) {
            (Some(shophub), Some(token)) => {
                if let Ok(session) = shophub.database.find_session_by_token(&token).await {
                    if let Some(session) = session {
                        Outcome::Success(session)
                    } else {
                        Outcome::Error((Status::Unauthorized, Error::InvalidSession))
                    }
                } else {
                    Outcome::Error((Status::Unauthorized, Error::InvalidSession))
                }
            }
            (_, _) => Outcome::Error((Status::Unauthorized, Error::MissingHeaders)),
        }
    }
}

#[rocket::async_trait]
impl<'r> FromRequest<'r> for Account {
    type Error = Error;

    async fn from_request(request: &'r Request<'_>) -> request::Outcome<Self, Self::Error> {
        match request.guard::<Session>().await {
            Outcome::Success(session) => {
                let shophub = request.rocket().state::<Shophub>().unwrap();

                if let Ok(account) = shophub.database.find_account(&session.user_id).await {
                    Outcome::Success(account)
                } else {
                    Outcome::Error((Status::InternalServerError, Error::InternalError))
                }
            }
            Outcome::Forward(f) => Outcome::Forward(f),
            Outcome::Error(err) => Outcome::Error(err),
        }
    }
}

use rocket::{Build, Rocket};

pub mod comment;
pub mod custom_auth;
pub mod product;
pub mod store;

/// Generic human-readable acknowledgement
#[derive(Serialize, Deserialize)]
pub struct ResponseMessage {
    pub message: String,
}

/// Mount every route on a Rocket instance
pub fn mount(rocket: Rocket<Build>) -> Rocket<Build> {
    rocket
        .mount("/custom-auth", custom_auth::routes())
        .mount("/", store::routes())
        .mount("/", product::routes())
        .mount("/", comment::routes())
}

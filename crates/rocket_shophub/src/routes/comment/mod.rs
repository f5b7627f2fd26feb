use rocket::Route;

pub mod create_comment;
pub mod delete_comment;
pub mod update_comment;

pub fn routes() -> Vec<Route> {
    routes![
        create_comment::create_comment,
        update_comment::update_comment,
        delete_comment::delete_comment,
    ]
}

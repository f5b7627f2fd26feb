use rocket::Route;

pub mod create_store;
pub mod fetch_mine;
pub mod update_store;

pub fn routes() -> Vec<Route> {
    routes![
        fetch_mine::fetch_mine,
        create_store::create_store,
        update_store::update_store,
    ]
}

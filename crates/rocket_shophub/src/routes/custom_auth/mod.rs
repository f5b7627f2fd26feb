use rocket::Route;

pub mod change_password;
pub mod delete_account;
pub mod fetch_sessions;
pub mod forgot_password;
pub mod login;
pub mod logout;
pub mod register;
pub mod resend_code;
pub mod reset_password;
pub mod revoke_session;
pub mod update_profile;
pub mod validate_reset_code;
pub mod verify_email;

pub fn routes() -> Vec<Route> {
    routes![
        register::register,
        verify_email::verify_email,
        resend_code::resend_code,
        login::login,
        logout::logout,
        fetch_sessions::fetch_sessions,
        revoke_session::revoke_session,
        forgot_password::forgot_password,
        validate_reset_code::validate_reset_code,
        reset_password::reset_password,
        update_profile::update_profile,
        change_password::change_password,
        delete_account::delete_account,
    ]
}

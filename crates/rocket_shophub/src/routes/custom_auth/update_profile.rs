//! Update the current account's profile
//! PUT /custom-auth/update-profile

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, AccountInfo};
use shophub::util::{normalise_email, validate_email};
use shophub::{Error, Result, Shophub};

/// # Profile Data
#[derive(Serialize, Deserialize)]
pub struct DataUpdateProfile {
    pub username: Option<String>,
    /// New email address; must not be in use by another account
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// # Profile Response
#[derive(Serialize, Deserialize)]
pub struct ResponseUpdateProfile {
    pub user: AccountInfo,
}

/// # Update Profile
#[put("/update-profile", data = "<data>")]
pub async fn update_profile(
    shophub: &State<Shophub>,
    mut account: Account,
    data: Json<DataUpdateProfile>,
) -> Result<Json<ResponseUpdateProfile>> {
    let data = data.into_inner();

    if let Some(username) = data.username {
        if username != account.username {
            if shophub
                .database
                .find_account_by_username(&username)
                .await?
                .is_some()
            {
                return Err(Error::UsernameTaken);
            }

            account.username = username;
        }
    }

    if let Some(first_name) = data.first_name {
        account.first_name = Some(first_name);
    }

    if let Some(last_name) = data.last_name {
        account.last_name = Some(last_name);
    }

    if let Some(email) = data.email {
        if !email.is_empty() && normalise_email(email.clone()) != account.email_normalised {
            validate_email(&email)?;

            let email_normalised = normalise_email(email.clone());
            if shophub
                .database
                .find_account_by_normalised_email(&email_normalised)
                .await?
                .is_some()
            {
                return Err(Error::EmailInUse);
            }

            account.email = email;
            account.email_normalised = email_normalised;
        }
    }

    account.save(shophub).await?;

    Ok(Json(ResponseUpdateProfile {
        user: account.sanitized(shophub)?,
    }))
}

#[cfg(test)]
mod tests {
    use crate::routes::custom_auth::update_profile::ResponseUpdateProfile;
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (shophub, session, _, _) = for_test_authenticated().await;
        let client = bootstrap_rocket_with_shophub(
            shophub.clone(),
            crate::routes::custom_auth::routes(),
        )
        .await;

        let res = client
            .put("/update-profile")
            .header(Header::new("x-session-token", session.token))
            .header(ContentType::JSON)
            .body(
                json!({
                    "username": "renamed",
                    "first_name": "Ada"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let response: ResponseUpdateProfile =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(response.user.username, "renamed");
        assert_eq!(response.user.first_name.as_deref(), Some("Ada"));
    }

    #[async_std::test]
    async fn fail_email_taken_by_someone_else() {
        let (shophub, session, _, _) = for_test_authenticated().await;

        Account::create(
            &shophub,
            "other@shophub.test".into(),
            "password_insecure".into(),
            None,
            None,
            None,
        )
        .await
        .unwrap();

        let client = bootstrap_rocket_with_shophub(
            shophub.clone(),
            crate::routes::custom_auth::routes(),
        )
        .await;

        let res = client
            .put("/update-profile")
            .header(Header::new("x-session-token", session.token))
            .header(ContentType::JSON)
            .body(json!({ "email": "OTHER@shophub.test" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::BadRequest);
        assert_eq!(
            res.into_string().await,
            Some("{\"type\":\"EmailInUse\"}".into())
        );
    }

    #[async_std::test]
    async fn fail_username_taken_by_someone_else() {
        let (shophub, session, _, _) = for_test_authenticated().await;

        Account::create(
            &shophub,
            "other@shophub.test".into(),
            "password_insecure".into(),
            Some("occupied".into()),
            None,
            None,
        )
        .await
        .unwrap();

        let client = bootstrap_rocket_with_shophub(
            shophub.clone(),
            crate::routes::custom_auth::routes(),
        )
        .await;

        let res = client
            .put("/update-profile")
            .header(Header::new("x-session-token", session.token))
            .header(ContentType::JSON)
            .body(json!({ "username": "occupied" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::BadRequest);
        assert_eq!(
            res.into_string().await,
            Some("{\"type\":\"UsernameTaken\"}".into())
        );
    }

    #[async_std::test]
    async fn own_username_is_not_a_conflict() {
        let (shophub, session, account, _) = for_test_authenticated().await;
        let client = bootstrap_rocket_with_shophub(
            shophub.clone(),
            crate::routes::custom_auth::routes(),
        )
        .await;

        let res = client
            .put("/update-profile")
            .header(Header::new("x-session-token", session.token))
            .header(ContentType::JSON)
            .body(json!({ "username": account.username }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);
    }

    #[async_std::test]
    async fn own_email_is_not_a_conflict() {
        let (shophub, session, account, _) = for_test_authenticated().await;
        let client = bootstrap_rocket_with_shophub(
            shophub.clone(),
            crate::routes::custom_auth::routes(),
        )
        .await;

        let res = client
            .put("/update-profile")
            .header(Header::new("x-session-token", session.token))
            .header(ContentType::JSON)
            .body(json!({ "email": account.email }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);
    }

    #[async_std::test]
    async fn fail_without_session() {
        let (client, _, _) = bootstrap_rocket(crate::routes::custom_auth::routes()).await;

        let res = client
            .put("/update-profile")
            .header(ContentType::JSON)
            .body(json!({ "username": "renamed" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Unauthorized);
    }
}

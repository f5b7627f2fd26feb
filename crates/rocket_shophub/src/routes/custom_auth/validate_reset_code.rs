//! Check a reset code ahead of the actual reset
//! POST /custom-auth/validate-reset-code

use rocket::serde::json::Json;
use rocket::State;

use shophub::util::normalise_email;
use shophub::{Result, Shophub};

/// # Validation Data
#[derive(Serialize, Deserialize)]
pub struct DataValidateResetCode {
    pub email: String,
    /// 6-digit code from the reset email
    pub code: String,
}

/// # Validation Response
#[derive(Serialize, Deserialize)]
pub struct ResponseValidateResetCode {
    pub valid: bool,
}

/// # Validate Reset Code
///
/// Report whether the code is currently good. A valid code gets its
/// expiry pushed out so the user has time to type a new password;
/// the code itself stays the same. Always answers 200.
#[post("/validate-reset-code", data = "<data>")]
pub async fn validate_reset_code(
    shophub: &State<Shophub>,
    data: Json<DataValidateResetCode>,
) -> Result<Json<ResponseValidateResetCode>> {
    let data = data.into_inner();

    let account = shophub
        .database
        .find_account_by_normalised_email(&normalise_email(data.email))
        .await?;

    let valid = if let Some(mut account) = account {
        if account.expect_code(&data.code).is_ok() {
            account.extend_code_expiry(shophub);
            account.save(shophub).await?;
            true
        } else {
            false
        }
    } else {
        false
    };

    Ok(Json(ResponseValidateResetCode { valid }))
}

#[cfg(test)]
mod tests {
    use crate::routes::custom_auth::validate_reset_code::ResponseValidateResetCode;
    use crate::test::*;

    async fn account_in_reset(shophub: &Shophub) -> (Account, String) {
        let mut account = Account::create(
            shophub,
            "example@shophub.test".into(),
            "password_insecure".into(),
            None,
            None,
            None,
        )
        .await
        .unwrap();

        account.confirmed = true;
        account.start_password_reset(shophub).await.unwrap();

        let code = account.verification.as_ref().unwrap().code.clone();
        (account, code)
    }

    async fn validate(
        client: &rocket::local::asynchronous::Client,
        email: &str,
        code: &str,
    ) -> (Status, ResponseValidateResetCode) {
        let res = client
            .post("/validate-reset-code")
            .header(ContentType::JSON)
            .body(json!({ "email": email, "code": code }).to_string())
            .dispatch()
            .await;

        let status = res.status();
        let response = serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        (status, response)
    }

    #[async_std::test]
    async fn valid_code_extends_the_window() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::custom_auth::routes()).await;
        let (account, code) = account_in_reset(&shophub).await;

        let before = account.verification.as_ref().unwrap().expiry;

        let (status, response) = validate(&client, "example@shophub.test", &code).await;
        assert_eq!(status, Status::Ok);
        assert!(response.valid);

        let account = shophub.database.find_account(&account.id).await.unwrap();
        let after = account.verification.as_ref().unwrap();

        assert!(after.expiry > before);
        assert_eq!(after.code, code);
    }

    #[async_std::test]
    async fn validated_code_still_completes_the_reset() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::custom_auth::routes()).await;
        let (account, code) = account_in_reset(&shophub).await;

        let (status, response) = validate(&client, "example@shophub.test", &code).await;
        assert_eq!(status, Status::Ok);
        assert!(response.valid);

        // The same code finishes the reset inside the grace window
        let res = client
            .post("/reset-password")
            .header(ContentType::JSON)
            .body(
                json!({
                    "email": "example@shophub.test",
                    "code": code,
                    "password": "new_password"
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let account = shophub.database.find_account(&account.id).await.unwrap();
        assert!(account.password_matches("new_password"));
        assert!(account.verification.is_none());
    }

    #[async_std::test]
    async fn wrong_code_answers_ok_with_valid_false() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::custom_auth::routes()).await;
        let (_, code) = account_in_reset(&shophub).await;

        let wrong = if code == "123456" { "654321" } else { "123456" };

        let (status, response) = validate(&client, "example@shophub.test", wrong).await;
        assert_eq!(status, Status::Ok);
        assert!(!response.valid);
    }

    #[async_std::test]
    async fn unknown_email_answers_ok_with_valid_false() {
        let (client, _, _) = bootstrap_rocket(crate::routes::custom_auth::routes()).await;

        let (status, response) = validate(&client, "nobody@shophub.test", "123456").await;
        assert_eq!(status, Status::Ok);
        assert!(!response.valid);
    }
}

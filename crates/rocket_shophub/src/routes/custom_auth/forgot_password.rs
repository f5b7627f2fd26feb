//! Request a password reset code
//! POST /custom-auth/forgot-password

use rocket::serde::json::Json;
use rocket::State;

use shophub::util::normalise_email;
use shophub::{Result, Shophub};

use crate::routes::ResponseMessage;

/// # Forgot Password Data
#[derive(Serialize, Deserialize)]
pub struct DataForgotPassword {
    pub email: String,
}

/// # Forgot Password
///
/// Mail a reset code to the account behind this email, if one exists.
/// The response never reveals whether it does.
#[post("/forgot-password", data = "<data>")]
pub async fn forgot_password(
    shophub: &State<Shophub>,
    data: Json<DataForgotPassword>,
) -> Result<Json<ResponseMessage>> {
    let data = data.into_inner();

    let account = shophub
        .database
        .find_account_by_normalised_email(&normalise_email(data.email))
        .await?;

    if let Some(mut account) = account {
        if account.confirmed {
            account.start_password_reset(shophub).await?;
        }
    }

    Ok(Json(ResponseMessage {
        message: "If the email exists, a password reset code has been sent.".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::routes::ResponseMessage;
    use crate::test::*;

    const NEUTRAL: &str = "If the email exists, a password reset code has been sent.";

    #[async_std::test]
    async fn success_sends_code_and_link() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::custom_auth::routes()).await;

        let mut account = Account::create(
            &shophub,
            "example@shophub.test".into(),
            "password_insecure".into(),
            None,
            None,
            None,
        )
        .await
        .unwrap();

        account.confirmed = true;
        account.clear_verification();
        account.save(&shophub).await.unwrap();

        let res = client
            .post("/forgot-password")
            .header(ContentType::JSON)
            .body(json!({ "email": "example@shophub.test" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let mail = mailer(&shophub).last_mail().await.unwrap();
        assert_eq!(mail.variables["code"].as_str().unwrap().len(), 6);
        assert!(mail.variables["url"]
            .as_str()
            .unwrap()
            .starts_with("http://localhost:3000/reset-password?token="));

        let account = shophub.database.find_account(&account.id).await.unwrap();
        assert!(account.verification.is_some());
        assert_eq!(account.reset_token.as_ref().unwrap().token.len(), 64);
    }

    #[async_std::test]
    async fn unknown_email_gets_the_same_answer() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::custom_auth::routes()).await;

        let res = client
            .post("/forgot-password")
            .header(ContentType::JSON)
            .body(json!({ "email": "nobody@shophub.test" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let response: ResponseMessage =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(response.message, NEUTRAL);

        // Nothing was mailed
        assert!(mailer(&shophub).last_mail().await.is_none());
    }

    #[async_std::test]
    async fn unverified_account_gets_the_same_answer_without_mail() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::custom_auth::routes()).await;

        Account::create(
            &shophub,
            "example@shophub.test".into(),
            "password_insecure".into(),
            None,
            None,
            None,
        )
        .await
        .unwrap();

        let registration_mails = mailer(&shophub).outbox.lock().await.len();

        let res = client
            .post("/forgot-password")
            .header(ContentType::JSON)
            .body(json!({ "email": "example@shophub.test" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);
        assert_eq!(mailer(&shophub).outbox.lock().await.len(), registration_mails);
    }
}

//! Delete the current account
//! DELETE /custom-auth/delete-account

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::Account;
use shophub::{Result, Shophub};

use crate::routes::ResponseMessage;

/// # Delete Account
///
/// Remove the account and revoke all of its sessions.
#[delete("/delete-account")]
pub async fn delete_account(
    shophub: &State<Shophub>,
    account: Account,
) -> Result<Json<ResponseMessage>> {
    account.delete(shophub).await?;

    Ok(Json(ResponseMessage {
        message: "Account deleted successfully".to_string(),
    }))
}

#[cfg(test)]
mod tests {
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (shophub, session, account, receiver) = for_test_authenticated().await;
        let client = bootstrap_rocket_with_shophub(
            shophub.clone(),
            crate::routes::custom_auth::routes(),
        )
        .await;

        let res = client
            .delete("/delete-account")
            .header(Header::new("x-session-token", session.token.clone()))
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        assert!(shophub.database.find_account(&account.id).await.is_err());
        assert!(shophub
            .database
            .find_session_by_token(&session.token)
            .await
            .unwrap()
            .is_none());

        // CreateAccount, CreateSession, then the deletion
        let mut saw_delete = false;
        while let Ok(event) = receiver.try_recv() {
            if let ShophubEvent::DeleteAccount { user_id } = event {
                assert_eq!(user_id, account.id);
                saw_delete = true;
            }
        }
        assert!(saw_delete);
    }

    #[async_std::test]
    async fn fail_without_session() {
        let (client, _, _) = bootstrap_rocket(crate::routes::custom_auth::routes()).await;

        let res = client.delete("/delete-account").dispatch().await;
        assert_eq!(res.status(), Status::Unauthorized);
    }
}

//! Fetch the current user's store
//! GET /stores/me

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, Store};
use shophub::{Result, Shophub};

/// # Store Response
#[derive(Serialize, Deserialize)]
pub struct ResponseStore {
    /// The store, or null if the user has not opened one
    pub store: Option<Store>,
}

/// # Fetch Own Store
#[get("/stores/me")]
pub async fn fetch_mine(
    shophub: &State<Shophub>,
    account: Account,
) -> Result<Json<ResponseStore>> {
    let store = shophub.database.find_store_by_owner(&account.id).await?;

    Ok(Json(ResponseStore { store }))
}

#[cfg(test)]
mod tests {
    use crate::routes::store::fetch_mine::ResponseStore;
    use crate::test::*;

    #[async_std::test]
    async fn null_before_a_store_exists() {
        let (shophub, session, _, _) = for_test_authenticated().await;
        let client =
            bootstrap_rocket_with_shophub(shophub.clone(), crate::routes::store::routes()).await;

        let res = client
            .get("/stores/me")
            .header(Header::new("x-session-token", session.token))
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let response: ResponseStore =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert!(response.store.is_none());
    }

    #[async_std::test]
    async fn returns_the_owned_store() {
        let (shophub, session, account, _) = for_test_authenticated().await;

        Store::create(&shophub, account.id.clone(), "Books".into(), None, None, None)
            .await
            .unwrap();

        let client =
            bootstrap_rocket_with_shophub(shophub.clone(), crate::routes::store::routes()).await;

        let res = client
            .get("/stores/me")
            .header(Header::new("x-session-token", session.token))
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let response: ResponseStore =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        let store = response.store.unwrap();
        assert_eq!(store.name, "Books");
        assert_eq!(store.owner, account.id);
    }
}

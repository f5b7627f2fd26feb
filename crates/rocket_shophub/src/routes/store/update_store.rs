//! Update the current user's store
//! PUT /stores/me

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, Store};
use shophub::{Error, Result, Shophub};

/// # Store Data
#[derive(Serialize, Deserialize)]
pub struct DataUpdateStore {
    pub name: Option<String>,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub banner: Option<String>,
    pub is_active: Option<bool>,
}

/// # Store Response
#[derive(Serialize, Deserialize)]
pub struct ResponseUpdateStore {
    pub store: Store,
}

/// # Update Store
#[put("/stores/me", data = "<data>")]
pub async fn update_store(
    shophub: &State<Shophub>,
    account: Account,
    data: Json<DataUpdateStore>,
) -> Result<Json<ResponseUpdateStore>> {
    let data = data.into_inner();

    let mut store = shophub
        .database
        .find_store_by_owner(&account.id)
        .await?
        .ok_or(Error::UnknownStore)?;

    if let Some(name) = data.name {
        store.name = name;
    }

    if let Some(description) = data.description {
        store.description = Some(description);
    }

    if let Some(logo) = data.logo {
        store.logo = Some(logo);
    }

    if let Some(banner) = data.banner {
        store.banner = Some(banner);
    }

    if let Some(is_active) = data.is_active {
        store.is_active = is_active;
    }

    store.save(shophub).await?;

    Ok(Json(ResponseUpdateStore { store }))
}

#[cfg(test)]
mod tests {
    use crate::routes::store::update_store::ResponseUpdateStore;
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (shophub, session, account, _) = for_test_authenticated().await;

        Store::create(&shophub, account.id, "Books".into(), None, None, None)
            .await
            .unwrap();

        let client =
            bootstrap_rocket_with_shophub(shophub.clone(), crate::routes::store::routes()).await;

        let res = client
            .put("/stores/me")
            .header(Header::new("x-session-token", session.token))
            .header(ContentType::JSON)
            .body(
                json!({
                    "name": "Rare Books",
                    "is_active": false
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let response: ResponseUpdateStore =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(response.store.name, "Rare Books");
        assert!(!response.store.is_active);
    }

    #[async_std::test]
    async fn fail_without_a_store() {
        let (shophub, session, _, _) = for_test_authenticated().await;
        let client =
            bootstrap_rocket_with_shophub(shophub.clone(), crate::routes::store::routes()).await;

        let res = client
            .put("/stores/me")
            .header(Header::new("x-session-token", session.token))
            .header(ContentType::JSON)
            .body(json!({ "name": "Rare Books" }).to_string())
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NotFound);
        assert_eq!(
            res.into_string().await,
            Some("{\"type\":\"UnknownStore\"}".into())
        );
    }
}

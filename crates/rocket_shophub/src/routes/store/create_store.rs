//! Open a store
//! POST /stores

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, Store};
use shophub::{Result, Shophub};

/// # Store Data
#[derive(Serialize, Deserialize)]
pub struct DataCreateStore {
    pub name: String,
    pub description: Option<String>,
    pub logo: Option<String>,
    pub banner: Option<String>,
}

/// # Store Response
#[derive(Serialize, Deserialize)]
pub struct ResponseCreateStore {
    pub store: Store,
}

/// # Create Store
///
/// Open a store for the current user. One store per user.
#[post("/stores", data = "<data>")]
pub async fn create_store(
    shophub: &State<Shophub>,
    account: Account,
    data: Json<DataCreateStore>,
) -> Result<Json<ResponseCreateStore>> {
    let data = data.into_inner();

    let store = Store::create(
        shophub,
        account.id,
        data.name,
        data.description,
        data.logo,
        data.banner,
    )
    .await?;

    Ok(Json(ResponseCreateStore { store }))
}

//! List a new product
//! POST /products

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, Product};
use shophub::{Error, Result, Shophub};

/// # Product Data
#[derive(Serialize, Deserialize)]
pub struct DataCreateProduct {
    pub name: String,
    pub description: String,
    pub price: f64,
    /// Strikethrough price shown next to the real one
    pub compare_price: Option<f64>,
    pub stock: i64,
    pub sku: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
}

/// # Product Response
#[derive(Serialize, Deserialize)]
pub struct ResponseCreateProduct {
    pub product: Product,
}

/// # Create Product
///
/// List a product in the current user's store. The user must have
/// opened a store first.
#[post("/products", data = "<data>")]
pub async fn create_product(
    shophub: &State<Shophub>,
    account: Account,
    data: Json<DataCreateProduct>,
) -> Result<Json<ResponseCreateProduct>> {
    let data = data.into_inner();

    let store = shophub
        .database
        .find_store_by_owner(&account.id)
        .await?
        .ok_or(Error::StoreRequired)?;

    let product = Product::create(
        shophub,
        store.id,
        account.id,
        data.name,
        data.description,
        data.price,
        data.compare_price,
        data.stock,
        data.sku,
        data.images.unwrap_or_default(),
        data.category,
        data.is_published.unwrap_or(false),
        data.is_featured.unwrap_or(false),
    )
    .await?;

    Ok(Json(ResponseCreateProduct { product }))
}

#[cfg(test)]
mod tests {
    use crate::routes::product::create_product::ResponseCreateProduct;
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (shophub, session, account, _) = for_test_authenticated().await;

        let store = Store::create(&shophub, account.id.clone(), "Books".into(), None, None, None)
            .await
            .unwrap();

        let client =
            bootstrap_rocket_with_shophub(shophub.clone(), crate::routes::product::routes()).await;

        let res = client
            .post("/products")
            .header(Header::new("x-session-token", session.token))
            .header(ContentType::JSON)
            .body(
                json!({
                    "name": "Dune",
                    "description": "Paperback, good condition",
                    "price": 7.5,
                    "stock": 3,
                    "is_published": true
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::Ok);

        let response: ResponseCreateProduct =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(response.product.store, store.id);
        assert_eq!(response.product.seller, account.id);
        assert_eq!(response.product.rating, 0.0);
        assert_eq!(response.product.reviews, 0);
    }

    #[async_std::test]
    async fn fail_without_a_store() {
        let (shophub, session, _, _) = for_test_authenticated().await;
        let client =
            bootstrap_rocket_with_shophub(shophub.clone(), crate::routes::product::routes()).await;

        let res = client
            .post("/products")
            .header(Header::new("x-session-token", session.token))
            .header(ContentType::JSON)
            .body(
                json!({
                    "name": "Dune",
                    "description": "Paperback",
                    "price": 7.5,
                    "stock": 3
                })
                .to_string(),
            )
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::BadRequest);
        assert_eq!(
            res.into_string().await,
            Some("{\"type\":\"StoreRequired\"}".into())
        );
    }
}

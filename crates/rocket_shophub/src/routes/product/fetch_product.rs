//! Fetch a single product
//! GET /products/<id>

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::Product;
use shophub::{Error, Result, Shophub};

/// # Product Response
#[derive(Serialize, Deserialize)]
pub struct ResponseProduct {
    pub product: Product,
}

/// # Fetch Product
///
/// Unpublished products are indistinguishable from missing ones.
#[get("/products/<id>")]
pub async fn fetch_product(shophub: &State<Shophub>, id: String) -> Result<Json<ResponseProduct>> {
    let product = shophub.database.find_product(&id).await?;

    if !product.is_published {
        return Err(Error::UnknownProduct);
    }

    Ok(Json(ResponseProduct { product }))
}

#[cfg(test)]
mod tests {
    use crate::routes::product::fetch_product::ResponseProduct;
    use crate::test::*;

    #[async_std::test]
    async fn success() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::product::routes()).await;

        let product = Product::create(
            &shophub,
            "store".into(),
            "seller".into(),
            "Dune".into(),
            "desc".into(),
            7.5,
            None,
            1,
            None,
            vec![],
            None,
            true,
            false,
        )
        .await
        .unwrap();

        let res = client
            .get(format!("/products/{}", product.id))
            .dispatch()
            .await;
        assert_eq!(res.status(), Status::Ok);

        let response: ResponseProduct =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(response.product.id, product.id);
    }

    #[async_std::test]
    async fn fail_unpublished_looks_missing() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::product::routes()).await;

        let product = Product::create(
            &shophub,
            "store".into(),
            "seller".into(),
            "Draft".into(),
            "desc".into(),
            7.5,
            None,
            1,
            None,
            vec![],
            None,
            false,
            false,
        )
        .await
        .unwrap();

        let res = client
            .get(format!("/products/{}", product.id))
            .dispatch()
            .await;

        assert_eq!(res.status(), Status::NotFound);
        assert_eq!(
            res.into_string().await,
            Some("{\"type\":\"UnknownProduct\"}".into())
        );
    }

    #[async_std::test]
    async fn fail_unknown_id() {
        let (client, _, _) = bootstrap_rocket(crate::routes::product::routes()).await;

        let res = client.get("/products/does-not-exist").dispatch().await;
        assert_eq!(res.status(), Status::NotFound);
    }
}

//! Fetch featured products
//! GET /products/featured

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Product, ProductQuery};
use shophub::{Result, Shophub};

/// # Featured Response
#[derive(Serialize, Deserialize)]
pub struct ResponseFeatured {
    pub products: Vec<Product>,
}

/// # Fetch Featured Products
///
/// Published products flagged as featured, newest first.
#[get("/products/featured?<limit>")]
pub async fn fetch_featured_products(
    shophub: &State<Shophub>,
    limit: Option<u64>,
) -> Result<Json<ResponseFeatured>> {
    let query = ProductQuery {
        published_only: true,
        featured_only: true,
        limit: limit.unwrap_or(12).clamp(1, 100) as i64,
        ..Default::default()
    };

    let products = shophub.database.find_products(&query).await?;

    Ok(Json(ResponseFeatured { products }))
}

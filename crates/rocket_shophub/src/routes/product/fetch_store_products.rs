//! Browse a store's published products
//! GET /stores/<store_id>/products

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::ProductQuery;
use shophub::{Result, Shophub};

use super::{page_params, Pagination, ResponseProducts};

/// # Fetch Store Products
///
/// Published products of one store, newest first. The store must
/// exist.
#[get("/stores/<store_id>/products?<page>&<page_size>")]
pub async fn fetch_store_products(
    shophub: &State<Shophub>,
    store_id: String,
    page: Option<u64>,
    page_size: Option<u64>,
) -> Result<Json<ResponseProducts>> {
    let store = shophub.database.find_store(&store_id).await?;

    let (page, page_size) = page_params(page, page_size);

    let query = ProductQuery {
        store: Some(store.id),
        published_only: true,
        offset: (page - 1) * page_size,
        limit: page_size as i64,
        ..Default::default()
    };

    let products = shophub.database.find_products(&query).await?;
    let total = shophub.database.count_products(&query).await?;

    Ok(Json(ResponseProducts {
        products,
        pagination: Pagination::of(total, page, page_size),
    }))
}

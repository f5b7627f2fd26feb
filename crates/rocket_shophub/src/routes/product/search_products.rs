//! Search published products
//! GET /products/search

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::ProductQuery;
use shophub::{Result, Shophub};

use super::{page_params, Pagination, ResponseProducts};

/// # Search Products
///
/// Case-insensitive substring search over name and description,
/// optionally narrowed by category and price range.
#[get("/products/search?<q>&<category>&<min_price>&<max_price>&<page>&<page_size>")]
#[allow(clippy::too_many_arguments)]
pub async fn search_products(
    shophub: &State<Shophub>,
    q: Option<String>,
    category: Option<String>,
    min_price: Option<f64>,
    max_price: Option<f64>,
    page: Option<u64>,
    page_size: Option<u64>,
) -> Result<Json<ResponseProducts>> {
    let (page, page_size) = page_params(page, page_size);

    let query = ProductQuery {
        published_only: true,
        search: q.filter(|q| !q.is_empty()),
        category,
        min_price,
        max_price,
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

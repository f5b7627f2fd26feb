//! List the current seller's products
//! GET /products/mine

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, ProductQuery};
use shophub::{Result, Shophub};

use super::{page_params, Pagination, ResponseProducts};

/// # Fetch Own Products
///
/// Every product the current user sells, drafts included.
#[get("/products/mine?<page>&<page_size>")]
pub async fn fetch_my_products(
    shophub: &State<Shophub>,
    account: Account,
    page: Option<u64>,
    page_size: Option<u64>,
) -> Result<Json<ResponseProducts>> {
    let (page, page_size) = page_params(page, page_size);

    let query = ProductQuery {
        seller: Some(account.id),
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

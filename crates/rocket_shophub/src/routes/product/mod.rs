use rocket::Route;

use shophub::models::Product;

pub mod create_product;
pub mod delete_product;
pub mod fetch_featured_products;
pub mod fetch_my_products;
pub mod fetch_product;
pub mod fetch_products;
pub mod fetch_store_products;
pub mod search_products;
pub mod update_product;

pub fn routes() -> Vec<Route> {
    routes![
        create_product::create_product,
        fetch_my_products::fetch_my_products,
        fetch_products::fetch_products,
        search_products::search_products,
        fetch_featured_products::fetch_featured_products,
        fetch_store_products::fetch_store_products,
        fetch_product::fetch_product,
        update_product::update_product,
        delete_product::delete_product,
    ]
}

/// Pagination envelope attached to product listings
#[derive(Serialize, Deserialize)]
pub struct Pagination {
    pub page: u64,
    pub page_size: u64,
    /// Number of pages at this page size
    pub page_count: u64,
    /// Matching products regardless of page
    pub total: u64,
}

impl Pagination {
    pub fn of(total: u64, page: u64, page_size: u64) -> Pagination {
        Pagination {
            page,
            page_size,
            page_count: total.div_ceil(page_size),
            total,
        }
    }
}

/// Clamp raw query parameters to sane values
pub fn page_params(page: Option<u64>, page_size: Option<u64>) -> (u64, u64) {
    let page = page.unwrap_or(1).max(1);
    let page_size = page_size.unwrap_or(20).clamp(1, 100);
    (page, page_size)
}

/// # Product Listing Response
#[derive(Serialize, Deserialize)]
pub struct ResponseProducts {
    pub products: Vec<Product>,
    pub pagination: Pagination,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_rounds_up() {
        let pagination = Pagination::of(21, 1, 20);
        assert_eq!(pagination.page_count, 2);

        let pagination = Pagination::of(0, 1, 20);
        assert_eq!(pagination.page_count, 0);
    }

    #[test]
    fn page_params_are_clamped() {
        assert_eq!(page_params(None, None), (1, 20));
        assert_eq!(page_params(Some(0), Some(500)), (1, 100));
        assert_eq!(page_params(Some(3), Some(10)), (3, 10));
    }
}

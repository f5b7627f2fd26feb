//! Browse published products
//! GET /products

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::ProductQuery;
use shophub::{Result, Shophub};

use super::{page_params, Pagination, ResponseProducts};

/// # Fetch Products
///
/// Public listing of published products, newest first.
#[get("/products?<page>&<page_size>&<category>")]
pub async fn fetch_products(
    shophub: &State<Shophub>,
    page: Option<u64>,
    page_size: Option<u64>,
    category: Option<String>,
) -> Result<Json<ResponseProducts>> {
    let (page, page_size) = page_params(page, page_size);

    let query = ProductQuery {
        published_only: true,
        category,
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

#[cfg(test)]
mod tests {
    use crate::routes::product::ResponseProducts;
    use crate::test::*;

    async fn seeded(shophub: &Shophub) {
        for (name, category, published) in [
            ("Dune", "books", true),
            ("Hyperion", "books", true),
            ("Catan", "games", true),
            ("Unlisted", "books", false),
        ] {
            Product::create(
                shophub,
                "store".into(),
                "seller".into(),
                name.into(),
                "desc".into(),
                10.0,
                None,
                1,
                None,
                vec![],
                Some(category.into()),
                published,
                false,
            )
            .await
            .unwrap();
        }
    }

    #[async_std::test]
    async fn lists_only_published() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::product::routes()).await;
        seeded(&shophub).await;

        let res = client.get("/products").dispatch().await;
        assert_eq!(res.status(), Status::Ok);

        let response: ResponseProducts =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(response.pagination.total, 3);
        assert!(response.products.iter().all(|p| p.is_published));
    }

    #[async_std::test]
    async fn filters_by_category() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::product::routes()).await;
        seeded(&shophub).await;

        let res = client.get("/products?category=games").dispatch().await;
        assert_eq!(res.status(), Status::Ok);

        let response: ResponseProducts =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(response.pagination.total, 1);
        assert_eq!(response.products[0].name, "Catan");
    }

    #[async_std::test]
    async fn paginates() {
        let (client, shophub, _) = bootstrap_rocket(crate::routes::product::routes()).await;
        seeded(&shophub).await;

        let res = client.get("/products?page=2&page_size=2").dispatch().await;
        assert_eq!(res.status(), Status::Ok);

        let response: ResponseProducts =
            serde_json::from_str(&res.into_string().await.unwrap()).unwrap();
        assert_eq!(response.products.len(), 1);
        assert_eq!(response.pagination.page_count, 2);
        assert_eq!(response.pagination.total, 3);
    }
}

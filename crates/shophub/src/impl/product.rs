use iso8601_timestamp::Timestamp;

use crate::{models::Product, Result, Shophub, Success};

impl Product {
    /// List a new product in a store
    #[allow(clippy::too_many_arguments)]
    pub async fn create(
        shophub: &Shophub,
        store: String,
        seller: String,
        name: String,
        description: String,
        price: f64,
        compare_price: Option<f64>,
        stock: i64,
        sku: Option<String>,
        images: Vec<String>,
        category: Option<String>,
        is_published: bool,
        is_featured: bool,
    ) -> Result<Product> {
        let product = Product {
            id: ulid::Ulid::new().to_string(),
            store,
            seller,

            name,
            description,
            price,
            compare_price,
            stock,
            sku,
            images,
            category,

            is_published,
            is_featured,

            rating: 0.0,
            reviews: 0,

            created_at: Timestamp::now_utc(),
        };

        shophub.database.save_product(&product).await?;

        Ok(product)
    }

    /// Save model
    pub async fn save(&self, shophub: &Shophub) -> Success {
        shophub.database.save_product(self).await
    }

    /// Delete product
    pub async fn delete(self, shophub: &Shophub) -> Success {
        shophub.database.delete_product(&self.id).await
    }

    /// Recompute the review aggregate for a product
    ///
    /// Called after every comment mutation referencing the product:
    /// `rating` becomes the mean of comment ratings rounded to one
    /// decimal (0 when there are none), `reviews` the comment count.
    pub async fn recalculate_rating(shophub: &Shophub, product_id: &str) -> Success {
        let mut product = shophub.database.find_product(product_id).await?;
        let comments = shophub.database.find_comments_by_product(product_id).await?;

        let reviews = comments.len() as i64;
        let rating = if reviews > 0 {
            let total: f64 = comments.iter().map(|comment| comment.rating).sum();
            (total / reviews as f64 * 10.0).round() / 10.0
        } else {
            0.0
        };

        product.rating = rating;
        product.reviews = reviews;
        product.save(shophub).await
    }
}

//! Review a product
//! POST /comments

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, Comment, Product};
use shophub::{Result, Shophub};

/// # Comment Data
#[derive(Serialize, Deserialize)]
pub struct DataCreateComment {
    /// Product being reviewed
    pub product: String,
    pub content: String,
    /// Star rating, feeds the product's aggregate
    pub rating: f64,
}

/// # Comment Response
#[derive(Serialize, Deserialize)]
pub struct ResponseCreateComment {
    pub comment: Comment,
}

/// # Create Comment
///
/// Post a review; the product's rating aggregate is recomputed right
/// away.
#[post("/comments", data = "<data>")]
pub async fn create_comment(
    shophub: &State<Shophub>,
    account: Account,
    data: Json<DataCreateComment>,
) -> Result<Json<ResponseCreateComment>> {
    let data = data.into_inner();

    // 404 before anything is written
    let product = shophub.database.find_product(&data.product).await?;

    let comment = Comment {
        id: ulid::Ulid::new().to_string(),
        product: product.id.clone(),
        author: account.id,
        content: data.content,
        rating: data.rating,
    };

    comment.save(shophub).await?;
    Product::recalculate_rating(shophub, &product.id).await?;

    Ok(Json(ResponseCreateComment { comment }))
}

//! Delete a review
//! DELETE /comments/<id>

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, Product, Role};
use shophub::{Error, Result, Shophub};

use crate::routes::ResponseMessage;

/// # Delete Comment
///
/// Only the author or an admin may delete a review; the product
/// aggregate is recomputed afterwards.
#[delete("/comments/<id>")]
pub async fn delete_comment(
    shophub: &State<Shophub>,
    account: Account,
    id: String,
) -> Result<Json<ResponseMessage>> {
    let comment = shophub.database.find_comment(&id).await?;

    if comment.author != account.id && account.role != Role::Admin {
        return Err(Error::UnknownComment);
    }

    let product_id = comment.product.clone();

    comment.delete(shophub).await?;
    Product::recalculate_rating(shophub, &product_id).await?;

    Ok(Json(ResponseMessage {
        message: "Comment deleted successfully".to_string(),
    }))
}

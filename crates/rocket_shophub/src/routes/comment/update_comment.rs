//! Edit a review
//! PUT /comments/<id>

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, Comment, Product, Role};
use shophub::{Error, Result, Shophub};

/// # Comment Data
#[derive(Serialize, Deserialize)]
pub struct DataUpdateComment {
    pub content: Option<String>,
    pub rating: Option<f64>,
}

/// # Comment Response
#[derive(Serialize, Deserialize)]
pub struct ResponseUpdateComment {
    pub comment: Comment,
}

/// # Update Comment
///
/// Only the author or an admin may edit a review; a rating change
/// recomputes the product aggregate.
#[put("/comments/<id>", data = "<data>")]
pub async fn update_comment(
    shophub: &State<Shophub>,
    account: Account,
    id: String,
    data: Json<DataUpdateComment>,
) -> Result<Json<ResponseUpdateComment>> {
    let data = data.into_inner();

    let mut comment = shophub.database.find_comment(&id).await?;

    if comment.author != account.id && account.role != Role::Admin {
        return Err(Error::UnknownComment);
    }

    if let Some(content) = data.content {
        comment.content = content;
    }

    if let Some(rating) = data.rating {
        comment.rating = rating;
    }

    comment.save(shophub).await?;
    Product::recalculate_rating(shophub, &comment.product).await?;

    Ok(Json(ResponseUpdateComment { comment }))
}

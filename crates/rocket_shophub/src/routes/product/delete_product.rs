//! Delete a product
//! DELETE /products/<id>

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, Role};
use shophub::{Error, Result, Shophub};

use crate::routes::ResponseMessage;

/// # Delete Product
///
/// Only the seller or an admin may delete a product.
#[delete("/products/<id>")]
pub async fn delete_product(
    shophub: &State<Shophub>,
    account: Account,
    id: String,
) -> Result<Json<ResponseMessage>> {
    let product = shophub.database.find_product(&id).await?;

    if product.seller != account.id && account.role != Role::Admin {
        return Err(Error::UnknownProduct);
    }

    product.delete(shophub).await?;

    Ok(Json(ResponseMessage {
        message: "Product deleted successfully".to_string(),
    }))
}

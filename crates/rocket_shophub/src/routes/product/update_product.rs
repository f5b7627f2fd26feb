//! Update a product
//! PUT /products/<id>

use rocket::serde::json::Json;
use rocket::State;

use shophub::models::{Account, Product, Role};
use shophub::{Error, Result, Shophub};

/// # Product Data
#[derive(Serialize, Deserialize)]
pub struct DataUpdateProduct {
    pub name: Option<String>,
    pub description: Option<String>,
    pub price: Option<f64>,
    pub compare_price: Option<f64>,
    pub stock: Option<i64>,
    pub sku: Option<String>,
    pub images: Option<Vec<String>>,
    pub category: Option<String>,
    pub is_published: Option<bool>,
    pub is_featured: Option<bool>,
}

/// # Product Response
#[derive(Serialize, Deserialize)]
pub struct ResponseUpdateProduct {
    pub product: Product,
}

/// # Update Product
///
/// Only the seller or an admin may edit a product; to anyone else it
/// looks missing.
#[put("/products/<id>", data = "<data>")]
pub async fn update_product(
    shophub: &State<Shophub>,
    account: Account,
    id: String,
    data: Json<DataUpdateProduct>,
) -> Result<Json<ResponseUpdateProduct>> {
    let data = data.into_inner();

    let mut product = shophub.database.find_product(&id).await?;

    if product.seller != account.id && account.role != Role::Admin {
        return Err(Error::UnknownProduct);
    }

    if let Some(name) = data.name {
        product.name = name;
    }

    if let Some(description) = data.description {
        product.description = description;
    }

    if let Some(price) = data.price {
        product.price = price;
    }

    if let Some(compare_price) = data.compare_price {
        product.compare_price = Some(compare_price);
    }

    if let Some(stock) = data.stock {
        product.stock = stock;
    }

    if let Some(sku) = data.sku {
        product.sku = Some(sku);
    }

    if let Some(images) = data.images {
        product.images = images;
    }

    if let Some(category) = data.category {
        product.category = Some(category);
    }

    if let Some(is_published) = data.is_published {
        product.is_published = is_published;
    }

    if let Some(is_featured) = data.is_featured {
        product.is_featured = is_featured;
    }

    product.save(shophub).await?;

    Ok(Json(ResponseUpdateProduct { product }))
}

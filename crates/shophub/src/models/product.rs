use iso8601_timestamp::Timestamp;

/// Product model
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Product {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Store this product belongs to
    pub store: String,

    /// User Id of the seller
    pub seller: String,

    pub name: String,
    pub description: String,
    pub price: f64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub compare_price: Option<f64>,

    pub stock: i64,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku: Option<String>,

    #[serde(default)]
    pub images: Vec<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,

    #[serde(default)]
    pub is_published: bool,

    #[serde(default)]
    pub is_featured: bool,

    /// Mean of review ratings, rounded to 1 decimal
    ///
    /// Maintained by the review recompute, never written directly.
    #[serde(default)]
    pub rating: f64,

    /// Number of reviews
    #[serde(default)]
    pub reviews: i64,

    pub created_at: Timestamp,
}

/// Read-model filter for product listings
///
/// Every listing endpoint assembles one of these explicitly
/// instead of relying on implicit relation traversal.
#[derive(Debug, Clone)]
pub struct ProductQuery {
    /// Only products sold by this user
    pub seller: Option<String>,
    /// Only products in this store
    pub store: Option<String>,
    /// Only published products
    pub published_only: bool,
    /// Only featured products
    pub featured_only: bool,
    pub category: Option<String>,
    /// Case-insensitive substring match on name or description
    pub search: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub offset: u64,
    pub limit: i64,
}

impl Default for ProductQuery {
    fn default() -> ProductQuery {
        ProductQuery {
            seller: None,
            store: None,
            published_only: false,
            featured_only: false,
            category: None,
            search: None,
            min_price: None,
            max_price: None,
            offset: 0,
            limit: 20,
        }
    }
}

impl ProductQuery {
    /// Whether a product satisfies this filter, ignoring offset and limit
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(seller) = &self.seller {
            if &product.seller != seller {
                return false;
            }
        }

        if let Some(store) = &self.store {
            if &product.store != store {
                return false;
            }
        }

        if self.published_only && !product.is_published {
            return false;
        }

        if self.featured_only && !product.is_featured {
            return false;
        }

        if let Some(category) = &self.category {
            if product.category.as_deref() != Some(category.as_str()) {
                return false;
            }
        }

        if let Some(search) = &self.search {
            let needle = search.to_lowercase();
            if !product.name.to_lowercase().contains(&needle)
                && !product.description.to_lowercase().contains(&needle)
            {
                return false;
            }
        }

        if let Some(min_price) = self.min_price {
            if product.price < min_price {
                return false;
            }
        }

        if let Some(max_price) = self.max_price {
            if product.price > max_price {
                return false;
            }
        }

        true
    }
}

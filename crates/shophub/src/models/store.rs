/// Store model
///
/// Each seller owns at most one store.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Store {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Owning user Id
    pub owner: String,

    pub name: String,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo: Option<String>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub banner: Option<String>,

    /// Whether the store is visible to customers
    #[serde(default)]
    pub is_active: bool,
}

/// Product review comment
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct Comment {
    /// Unique Id
    #[serde(rename = "_id")]
    pub id: String,

    /// Product this comment reviews
    pub product: String,

    /// User Id of the author
    pub author: String,

    pub content: String,

    /// Review rating
    pub rating: f64,
}

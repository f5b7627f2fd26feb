use crate::{models::Comment, Shophub, Success};

impl Comment {
    /// Save model
    pub async fn save(&self, shophub: &Shophub) -> Success {
        shophub.database.save_comment(self).await
    }

    /// Delete comment
    pub async fn delete(self, shophub: &Shophub) -> Success {
        shophub.database.delete_comment(&self.id).await
    }
}

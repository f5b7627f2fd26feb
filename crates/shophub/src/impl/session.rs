use crate::{models::Session, Shophub, ShophubEvent, Success};

impl Session {
    /// Save model
    pub async fn save(&self, shophub: &Shophub) -> Success {
        shophub.database.save_session(self).await
    }

    /// Delete session
    pub async fn delete(self, shophub: &Shophub) -> Success {
        shophub.database.delete_session(&self.id).await?;

        shophub
            .publish_event(ShophubEvent::DeleteSession {
                user_id: self.user_id,
                session_id: self.id,
            })
            .await;

        Ok(())
    }
}

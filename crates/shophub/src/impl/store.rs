use crate::{models::Store, Error, Result, Shophub, Success};

impl Store {
    /// Open a store for a user
    ///
    /// Each user owns at most one store; stores are activated on
    /// creation.
    pub async fn create(
        shophub: &Shophub,
        owner: String,
        name: String,
        description: Option<String>,
        logo: Option<String>,
        banner: Option<String>,
    ) -> Result<Store> {
        if shophub
            .database
            .find_store_by_owner(&owner)
            .await?
            .is_some()
        {
            return Err(Error::StoreExists);
        }

        let store = Store {
            id: ulid::Ulid::new().to_string(),
            owner,
            name,
            description,
            logo,
            banner,
            is_active: true,
        };

        shophub.database.save_store(&store).await?;

        Ok(store)
    }

    /// Save model
    pub async fn save(&self, shophub: &Shophub) -> Success {
        shophub.database.save_store(self).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[async_std::test]
    async fn one_store_per_owner() {
        let shophub = Shophub::default();

        Store::create(&shophub, "user".into(), "Books".into(), None, None, None)
            .await
            .unwrap();

        let err = Store::create(&shophub, "user".into(), "Games".into(), None, None, None)
            .await
            .unwrap_err();

        assert_eq!(err, Error::StoreExists);
    }
}

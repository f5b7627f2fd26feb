use crate::{
    models::{Account, Comment, Product, ProductQuery, Session, Store},
    Error, Result, Success,
};

use futures::lock::Mutex;
use std::collections::HashMap;
use std::sync::Arc;

use super::{definition::AbstractDatabase, Migration};

#[derive(Default, Clone)]
pub struct DummyDb {
    pub accounts: Arc<Mutex<HashMap<String, Account>>>,
    pub sessions: Arc<Mutex<HashMap<String, Session>>>,
    pub stores: Arc<Mutex<HashMap<String, Store>>>,
    pub products: Arc<Mutex<HashMap<String, Product>>>,
    pub comments: Arc<Mutex<HashMap<String, Comment>>>,
}

#[async_trait]
impl AbstractDatabase for DummyDb {
    /// Run a database migration
    async fn run_migration(&self, migration: Migration) -> Success {
        info!("skip migration {:?}", migration);
        Ok(())
    }

    /// Find account by id
    async fn find_account(&self, id: &str) -> Result<Account> {
        let accounts = self.accounts.lock().await;
        accounts.get(id).cloned().ok_or(Error::UnknownUser)
    }

    /// Find account by normalised email
    async fn find_account_by_normalised_email(
        &self,
        normalised_email: &str,
    ) -> Result<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .values()
            .find(|account| account.email_normalised == normalised_email)
            .cloned())
    }

    /// Find account by normalised email or exact username
    async fn find_account_by_identifier(&self, identifier: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .values()
            .find(|account| {
                account.email_normalised == identifier || account.username == identifier
            })
            .cloned())
    }

    /// Find account by exact username
    async fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        let accounts = self.accounts.lock().await;
        Ok(accounts
            .values()
            .find(|account| account.username == username)
            .cloned())
    }

    /// Save account
    async fn save_account(&self, account: &Account) -> Success {
        let mut accounts = self.accounts.lock().await;
        accounts.insert(account.id.to_string(), account.clone());
        Ok(())
    }

    /// Delete account
    async fn delete_account(&self, id: &str) -> Success {
        let mut accounts = self.accounts.lock().await;
        if accounts.remove(id).is_some() {
            Ok(())
        } else {
            Err(Error::UnknownUser)
        }
    }

    /// Find session by id
    async fn find_session(&self, id: &str) -> Result<Session> {
        let sessions = self.sessions.lock().await;
        sessions.get(id).cloned().ok_or(Error::InvalidSession)
    }

    /// Find sessions by user id
    async fn find_sessions(&self, user_id: &str) -> Result<Vec<Session>> {
        let sessions = self.sessions.lock().await;
        Ok(sessions
            .values()
            .filter(|session| session.user_id == user_id)
            .cloned()
            .collect())
    }

    /// Find session by token
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>> {
        let sessions = self.sessions.lock().await;
        Ok(sessions
            .values()
            .find(|session| session.token == token)
            .cloned())
    }

    /// Save session
    async fn save_session(&self, session: &Session) -> Success {
        let mut sessions = self.sessions.lock().await;
        sessions.insert(session.id.to_string(), session.clone());
        Ok(())
    }

    /// Delete session
    async fn delete_session(&self, id: &str) -> Success {
        let mut sessions = self.sessions.lock().await;
        if sessions.remove(id).is_some() {
            Ok(())
        } else {
            Err(Error::InvalidSession)
        }
    }

    /// Delete all of a user's sessions
    async fn delete_all_sessions(&self, user_id: &str, ignore: Option<String>) -> Success {
        let mut sessions = self.sessions.lock().await;
        sessions.retain(|_, session| {
            if session.user_id == user_id {
                if let Some(ignore) = &ignore {
                    ignore == &session.id
                } else {
                    false
                }
            } else {
                true
            }
        });

        Ok(())
    }

    /// Find store by id
    async fn find_store(&self, id: &str) -> Result<Store> {
        let stores = self.stores.lock().await;
        stores.get(id).cloned().ok_or(Error::UnknownStore)
    }

    /// Find store by owning user
    async fn find_store_by_owner(&self, owner: &str) -> Result<Option<Store>> {
        let stores = self.stores.lock().await;
        Ok(stores.values().find(|store| store.owner == owner).cloned())
    }

    /// Save store
    async fn save_store(&self, store: &Store) -> Success {
        let mut stores = self.stores.lock().await;
        stores.insert(store.id.to_string(), store.clone());
        Ok(())
    }

    /// Find product by id
    async fn find_product(&self, id: &str) -> Result<Product> {
        let products = self.products.lock().await;
        products.get(id).cloned().ok_or(Error::UnknownProduct)
    }

    /// Find products matching a filter, newest first
    async fn find_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        let products = self.products.lock().await;

        let mut matching: Vec<Product> = products
            .values()
            .filter(|product| query.matches(product))
            .cloned()
            .collect();

        matching.sort_by(|a, b| b.created_at.cmp(&a.created_at));

        Ok(matching
            .into_iter()
            .skip(query.offset as usize)
            .take(query.limit.max(0) as usize)
            .collect())
    }

    /// Count products matching a filter, ignoring offset and limit
    async fn count_products(&self, query: &ProductQuery) -> Result<u64> {
        let products = self.products.lock().await;
        Ok(products
            .values()
            .filter(|product| query.matches(product))
            .count() as u64)
    }

    /// Save product
    async fn save_product(&self, product: &Product) -> Success {
        let mut products = self.products.lock().await;
        products.insert(product.id.to_string(), product.clone());
        Ok(())
    }

    /// Delete product
    async fn delete_product(&self, id: &str) -> Success {
        let mut products = self.products.lock().await;
        if products.remove(id).is_some() {
            Ok(())
        } else {
            Err(Error::UnknownProduct)
        }
    }

    /// Find comment by id
    async fn find_comment(&self, id: &str) -> Result<Comment> {
        let comments = self.comments.lock().await;
        comments.get(id).cloned().ok_or(Error::UnknownComment)
    }

    /// Find all comments for a product
    async fn find_comments_by_product(&self, product_id: &str) -> Result<Vec<Comment>> {
        let comments = self.comments.lock().await;
        Ok(comments
            .values()
            .filter(|comment| comment.product == product_id)
            .cloned()
            .collect())
    }

    /// Save comment
    async fn save_comment(&self, comment: &Comment) -> Success {
        let mut comments = self.comments.lock().await;
        comments.insert(comment.id.to_string(), comment.clone());
        Ok(())
    }

    /// Delete comment
    async fn delete_comment(&self, id: &str) -> Success {
        let mut comments = self.comments.lock().await;
        if comments.remove(id).is_some() {
            Ok(())
        } else {
            Err(Error::UnknownComment)
        }
    }
}

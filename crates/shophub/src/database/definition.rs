use crate::{
    models::{Account, Comment, Product, ProductQuery, Session, Store},
    Result, Success,
};

use super::Migration;

#[async_trait]
pub trait AbstractDatabase: std::marker::Sync {
    /// Run a database migration
    async fn run_migration(&self, migration: Migration) -> Success;

    /// Find account by id
    async fn find_account(&self, id: &str) -> Result<Account>;

    /// Find account by normalised email
    async fn find_account_by_normalised_email(
        &self,
        normalised_email: &str,
    ) -> Result<Option<Account>>;

    /// Find account by normalised email or exact username
    async fn find_account_by_identifier(&self, identifier: &str) -> Result<Option<Account>>;

    /// Find account by exact username
    async fn find_account_by_username(&self, username: &str) -> Result<Option<Account>>;

    /// Save account
    async fn save_account(&self, account: &Account) -> Success;

    /// Delete account
    async fn delete_account(&self, id: &str) -> Success;

    /// Find session by id
    async fn find_session(&self, id: &str) -> Result<Session>;

    /// Find sessions by user id
    async fn find_sessions(&self, user_id: &str) -> Result<Vec<Session>>;

    /// Find session by token
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>>;

    /// Save session
    async fn save_session(&self, session: &Session) -> Success;

    /// Delete session
    async fn delete_session(&self, id: &str) -> Success;

    /// Delete all of a user's sessions
    async fn delete_all_sessions(&self, user_id: &str, ignore: Option<String>) -> Success;

    /// Find store by id
    async fn find_store(&self, id: &str) -> Result<Store>;

    /// Find store by owning user
    async fn find_store_by_owner(&self, owner: &str) -> Result<Option<Store>>;

    /// Save store
    async fn save_store(&self, store: &Store) -> Success;

    /// Find product by id
    async fn find_product(&self, id: &str) -> Result<Product>;

    /// Find products matching a filter, newest first
    async fn find_products(&self, query: &ProductQuery) -> Result<Vec<Product>>;

    /// Count products matching a filter, ignoring offset and limit
    async fn count_products(&self, query: &ProductQuery) -> Result<u64>;

    /// Save product
    async fn save_product(&self, product: &Product) -> Success;

    /// Delete product
    async fn delete_product(&self, id: &str) -> Success;

    /// Find comment by id
    async fn find_comment(&self, id: &str) -> Result<Comment>;

    /// Find all comments for a product
    async fn find_comments_by_product(&self, product_id: &str) -> Result<Vec<Comment>>;

    /// Save comment
    async fn save_comment(&self, comment: &Comment) -> Success;

    /// Delete comment
    async fn delete_comment(&self, id: &str) -> Success;
}

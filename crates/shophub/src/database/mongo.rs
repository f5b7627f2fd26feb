use bson::{to_document, Document};
use futures::stream::TryStreamExt;
use mongodb::options::{FindOptions, UpdateOptions};
use std::ops::Deref;

use crate::{
    models::{Account, Comment, Product, ProductQuery, Session, Store},
    Error, Result, Success,
};

use super::{definition::AbstractDatabase, Migration};

#[derive(Clone)]
pub struct MongoDb(pub mongodb::Database);

impl Deref for MongoDb {
    type Target = mongodb::Database;

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

fn product_filter(query: &ProductQuery) -> Document {
    let mut filter = doc! {};

    if let Some(seller) = &query.seller {
        filter.insert("seller", seller);
    }

    if let Some(store) = &query.store {
        filter.insert("store", store);
    }

    if query.published_only {
        filter.insert("is_published", true);
    }

    if query.featured_only {
        filter.insert("is_featured", true);
    }

    if let Some(category) = &query.category {
        filter.insert("category", category);
    }

    if let Some(search) = &query.search {
        filter.insert(
            "$or",
            vec![
                doc! { "name": { "$regex": search, "$options": "i" } },
                doc! { "description": { "$regex": search, "$options": "i" } },
            ],
        );
    }

    if query.min_price.is_some() || query.max_price.is_some() {
        let mut range = doc! {};

        if let Some(min_price) = query.min_price {
            range.insert("$gte", min_price);
        }

        if let Some(max_price) = query.max_price {
            range.insert("$lte", max_price);
        }

        filter.insert("price", range);
    }

    filter
}

#[async_trait]
impl AbstractDatabase for MongoDb {
    /// Run a database migration
    async fn run_migration(&self, migration: Migration) -> Success {
        match migration {
            #[cfg(debug_assertions)]
            Migration::WipeAll => {
                // Drop the entire database
                self.drop(None).await.unwrap();
            }
            Migration::M2025_08_01InitialIndexes => {
                let list = self.list_collection_names(None).await.unwrap();
                let collections = ["accounts", "sessions", "stores", "products", "comments"];

                for name in collections {
                    if !list.contains(&name.to_string()) {
                        self.create_collection(name, None).await.unwrap();
                    }
                }

                self.run_command(
                    doc! {
                        "createIndexes": "accounts",
                        "indexes": [
                            {
                                "key": { "email_normalised": 1 },
                                "name": "email_normalised",
                                "unique": true
                            },
                            {
                                "key": { "username": 1 },
                                "name": "username",
                                "unique": true
                            }
                        ]
                    },
                    None,
                )
                .await
                .unwrap();

                self.run_command(
                    doc! {
                        "createIndexes": "sessions",
                        "indexes": [
                            {
                                "key": { "token": 1 },
                                "name": "token",
                                "unique": true
                            },
                            {
                                "key": { "user_id": 1 },
                                "name": "user_id"
                            }
                        ]
                    },
                    None,
                )
                .await
                .unwrap();

                self.run_command(
                    doc! {
                        "createIndexes": "stores",
                        "indexes": [
                            {
                                "key": { "owner": 1 },
                                "name": "owner",
                                "unique": true
                            }
                        ]
                    },
                    None,
                )
                .await
                .unwrap();

                self.run_command(
                    doc! {
                        "createIndexes": "products",
                        "indexes": [
                            {
                                "key": { "seller": 1 },
                                "name": "seller"
                            },
                            {
                                "key": { "store": 1 },
                                "name": "store"
                            },
                            {
                                "key": { "is_published": 1 },
                                "name": "is_published"
                            }
                        ]
                    },
                    None,
                )
                .await
                .unwrap();

                self.run_command(
                    doc! {
                        "createIndexes": "comments",
                        "indexes": [
                            {
                                "key": { "product": 1 },
                                "name": "product"
                            }
                        ]
                    },
                    None,
                )
                .await
                .unwrap();
            }
        }

        Ok(())
    }

    /// Find account by id
    async fn find_account(&self, id: &str) -> Result<Account> {
        self.collection("accounts")
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "account",
            })?
            .ok_or(Error::UnknownUser)
    }

    /// Find account by normalised email
    async fn find_account_by_normalised_email(
        &self,
        normalised_email: &str,
    ) -> Result<Option<Account>> {
        self.collection("accounts")
            .find_one(doc! { "email_normalised": normalised_email }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "account",
            })
    }

    /// Find account by normalised email or exact username
    async fn find_account_by_identifier(&self, identifier: &str) -> Result<Option<Account>> {
        self.collection("accounts")
            .find_one(
                doc! {
                    "$or": [
                        { "email_normalised": identifier },
                        { "username": identifier }
                    ]
                },
                None,
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "account",
            })
    }

    /// Find account by exact username
    async fn find_account_by_username(&self, username: &str) -> Result<Option<Account>> {
        self.collection("accounts")
            .find_one(doc! { "username": username }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "account",
            })
    }

    /// Save account
    async fn save_account(&self, account: &Account) -> Success {
        self.collection::<Account>("accounts")
            .update_one(
                doc! { "_id": &account.id },
                doc! {
                    "$set": to_document(account).map_err(|_| Error::DatabaseError {
                        operation: "to_document",
                        with: "account",
                    })?
                },
                UpdateOptions::builder().upsert(true).build(),
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "upsert_one",
                with: "account",
            })
            .map(|_| ())
    }

    /// Delete account
    async fn delete_account(&self, id: &str) -> Success {
        self.collection::<Account>("accounts")
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "delete_one",
                with: "account",
            })
            .map(|_| ())
    }

    /// Find session by id
    async fn find_session(&self, id: &str) -> Result<Session> {
        self.collection("sessions")
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "session",
            })?
            .ok_or(Error::InvalidSession)
    }

    /// Find sessions by user id
    async fn find_sessions(&self, user_id: &str) -> Result<Vec<Session>> {
        self.collection::<Session>("sessions")
            .find(doc! { "user_id": user_id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find",
                with: "sessions",
            })?
            .try_collect()
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "collect",
                with: "sessions",
            })
    }

    /// Find session by token
    async fn find_session_by_token(&self, token: &str) -> Result<Option<Session>> {
        self.collection("sessions")
            .find_one(doc! { "token": token }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "session",
            })
    }

    /// Save session
    async fn save_session(&self, session: &Session) -> Success {
        self.collection::<Session>("sessions")
            .update_one(
                doc! { "_id": &session.id },
                doc! {
                    "$set": to_document(session).map_err(|_| Error::DatabaseError {
                        operation: "to_document",
                        with: "session",
                    })?
                },
                UpdateOptions::builder().upsert(true).build(),
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "upsert_one",
                with: "session",
            })
            .map(|_| ())
    }

    /// Delete session
    async fn delete_session(&self, id: &str) -> Success {
        self.collection::<Session>("sessions")
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "delete_one",
                with: "session",
            })
            .map(|_| ())
    }

    /// Delete all of a user's sessions
    async fn delete_all_sessions(&self, user_id: &str, ignore: Option<String>) -> Success {
        let mut query = doc! { "user_id": user_id };

        if let Some(id) = ignore {
            query.insert("_id", doc! { "$ne": id });
        }

        self.collection::<Session>("sessions")
            .delete_many(query, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "delete_many",
                with: "sessions",
            })
            .map(|_| ())
    }

    /// Find store by id
    async fn find_store(&self, id: &str) -> Result<Store> {
        self.collection("stores")
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "store",
            })?
            .ok_or(Error::UnknownStore)
    }

    /// Find store by owning user
    async fn find_store_by_owner(&self, owner: &str) -> Result<Option<Store>> {
        self.collection("stores")
            .find_one(doc! { "owner": owner }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "store",
            })
    }

    /// Save store
    async fn save_store(&self, store: &Store) -> Success {
        self.collection::<Store>("stores")
            .update_one(
                doc! { "_id": &store.id },
                doc! {
                    "$set": to_document(store).map_err(|_| Error::DatabaseError {
                        operation: "to_document",
                        with: "store",
                    })?
                },
                UpdateOptions::builder().upsert(true).build(),
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "upsert_one",
                with: "store",
            })
            .map(|_| ())
    }

    /// Find product by id
    async fn find_product(&self, id: &str) -> Result<Product> {
        self.collection("products")
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "product",
            })?
            .ok_or(Error::UnknownProduct)
    }

    /// Find products matching a filter, newest first
    async fn find_products(&self, query: &ProductQuery) -> Result<Vec<Product>> {
        self.collection::<Product>("products")
            .find(
                product_filter(query),
                FindOptions::builder()
                    .sort(doc! { "created_at": -1 })
                    .skip(query.offset)
                    .limit(query.limit)
                    .build(),
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find",
                with: "products",
            })?
            .try_collect()
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "collect",
                with: "products",
            })
    }

    /// Count products matching a filter, ignoring offset and limit
    async fn count_products(&self, query: &ProductQuery) -> Result<u64> {
        self.collection::<Product>("products")
            .count_documents(product_filter(query), None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "count_documents",
                with: "products",
            })
    }

    /// Save product
    async fn save_product(&self, product: &Product) -> Success {
        self.collection::<Product>("products")
            .update_one(
                doc! { "_id": &product.id },
                doc! {
                    "$set": to_document(product).map_err(|_| Error::DatabaseError {
                        operation: "to_document",
                        with: "product",
                    })?
                },
                UpdateOptions::builder().upsert(true).build(),
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "upsert_one",
                with: "product",
            })
            .map(|_| ())
    }

    /// Delete product
    async fn delete_product(&self, id: &str) -> Success {
        self.collection::<Product>("products")
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "delete_one",
                with: "product",
            })
            .map(|_| ())
    }

    /// Find comment by id
    async fn find_comment(&self, id: &str) -> Result<Comment> {
        self.collection("comments")
            .find_one(doc! { "_id": id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find_one",
                with: "comment",
            })?
            .ok_or(Error::UnknownComment)
    }

    /// Find all comments for a product
    async fn find_comments_by_product(&self, product_id: &str) -> Result<Vec<Comment>> {
        self.collection::<Comment>("comments")
            .find(doc! { "product": product_id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "find",
                with: "comments",
            })?
            .try_collect()
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "collect",
                with: "comments",
            })
    }

    /// Save comment
    async fn save_comment(&self, comment: &Comment) -> Success {
        self.collection::<Comment>("comments")
            .update_one(
                doc! { "_id": &comment.id },
                doc! {
                    "$set": to_document(comment).map_err(|_| Error::DatabaseError {
                        operation: "to_document",
                        with: "comment",
                    })?
                },
                UpdateOptions::builder().upsert(true).build(),
            )
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "upsert_one",
                with: "comment",
            })
            .map(|_| ())
    }

    /// Delete comment
    async fn delete_comment(&self, id: &str) -> Success {
        self.collection::<Comment>("comments")
            .delete_one(doc! { "_id": id }, None)
            .await
            .map_err(|_| Error::DatabaseError {
                operation: "delete_one",
                with: "comment",
            })
            .map(|_| ())
    }
}

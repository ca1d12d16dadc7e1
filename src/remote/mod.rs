//! Remote catalog access.
//!
//! This module provides the typed accessor for the two server-owned
//! collections (`projects` and `saved`) and the error shape used when the
//! server or the network fails.

pub mod error;
pub mod http;

use std::fmt;
use std::future::Future;
use std::sync::Arc;

use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::error::Result;
use crate::types::ProjectId;

pub use error::ApiError;
pub use http::HttpCollectionClient;

/// A named, server-owned set of records
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Collection {
    Projects,
    Saved,
}

impl Collection {
    /// Path segment under `/api`
    pub fn path(self) -> &'static str {
        match self {
            Collection::Projects => "projects",
            Collection::Saved => "saved",
        }
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.path())
    }
}

/// The kind of request issued against a collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RemoteOperation {
    List(Collection),
    Create(Collection),
    Remove(Collection),
}

impl RemoteOperation {
    /// Message shown when the server gives no reason of its own
    pub fn fallback_message(self) -> &'static str {
        match self {
            RemoteOperation::List(Collection::Projects) => "Failed to fetch projects",
            RemoteOperation::List(Collection::Saved) => "Failed to fetch saved projects",
            RemoteOperation::Create(Collection::Projects) => "Failed to add project",
            RemoteOperation::Create(Collection::Saved) => "Failed to save project",
            RemoteOperation::Remove(Collection::Projects) => "Failed to delete project",
            RemoteOperation::Remove(Collection::Saved) => "Failed to delete the project.",
        }
    }
}

impl fmt::Display for RemoteOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RemoteOperation::List(c) => write!(f, "list {c}"),
            RemoteOperation::Create(c) => write!(f, "create {c}"),
            RemoteOperation::Remove(c) => write!(f, "remove {c}"),
        }
    }
}

/// Common interface for reaching the catalog collections.
///
/// Implementations do not retry, cache, or reorder: each call maps to exactly
/// one request and its failure is returned to the caller as-is.
pub trait CollectionClient: Send + Sync {
    /// Fetch every record of a collection in server order
    fn list<T>(&self, collection: Collection) -> impl Future<Output = Result<Vec<T>>> + Send
    where
        T: DeserializeOwned + Send;

    /// Create a record and return the server's copy (with its assigned id)
    fn create<P, T>(
        &self,
        collection: Collection,
        payload: &P,
    ) -> impl Future<Output = Result<T>> + Send
    where
        P: Serialize + Sync,
        T: DeserializeOwned + Send;

    /// Delete a record by id
    fn remove(&self, collection: Collection, id: ProjectId)
    -> impl Future<Output = Result<()>> + Send;
}

impl<C: CollectionClient> CollectionClient for Arc<C> {
    fn list<T>(&self, collection: Collection) -> impl Future<Output = Result<Vec<T>>> + Send
    where
        T: DeserializeOwned + Send,
    {
        (**self).list(collection)
    }

    fn create<P, T>(
        &self,
        collection: Collection,
        payload: &P,
    ) -> impl Future<Output = Result<T>> + Send
    where
        P: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        (**self).create(collection, payload)
    }

    fn remove(
        &self,
        collection: Collection,
        id: ProjectId,
    ) -> impl Future<Output = Result<()>> + Send {
        (**self).remove(collection, id)
    }
}

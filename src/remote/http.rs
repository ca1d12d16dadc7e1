//! HTTP implementation of [`CollectionClient`] over the catalog's JSON API.
//!
//! | Operation | Method | Path |
//! |---|---|---|
//! | list | GET | `/api/{collection}` |
//! | create | POST | `/api/{collection}` |
//! | remove | DELETE | `/api/{collection}/{id}` |

use reqwest::{Client, Method, RequestBuilder, Response};
use serde::Serialize;
use serde::de::DeserializeOwned;
use url::Url;

use crate::config::Config;
use crate::error::{CatalogError, Result};
use crate::types::ProjectId;

use super::{ApiError, Collection, CollectionClient, RemoteOperation};

/// Catalog API client
#[derive(Debug, Clone)]
pub struct HttpCollectionClient {
    client: Client,
    base_url: Url,
}

impl HttpCollectionClient {
    /// Create a client rooted at `base_url` with the transport's default timeouts
    pub fn new(mut base_url: Url) -> Result<Self> {
        if !base_url.path().ends_with('/') {
            let path = format!("{}/", base_url.path());
            base_url.set_path(&path);
        }

        let client = Client::builder().build()?;

        Ok(Self { client, base_url })
    }

    /// Create a client from configuration (environment override included)
    pub fn from_config(config: &Config) -> Result<Self> {
        Self::new(config.base_url()?)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// URL of a whole collection, e.g. `/api/projects`
    pub fn collection_url(&self, collection: Collection) -> Result<Url> {
        Ok(self.base_url.join(&format!("api/{}", collection.path()))?)
    }

    /// URL of one record, e.g. `/api/saved/7`
    pub fn item_url(&self, collection: Collection, id: ProjectId) -> Result<Url> {
        Ok(self
            .base_url
            .join(&format!("api/{}/{}", collection.path(), id))?)
    }

    /// Send a request and turn anything but a 2xx into an [`ApiError`]
    async fn send(&self, operation: RemoteOperation, request: RequestBuilder) -> Result<Response> {
        let response = request.send().await.map_err(|e| {
            tracing::warn!("{operation} failed before a response arrived: {e}");
            ApiError::transport(operation, &e)
        })?;

        let status = response.status();
        if status.is_success() {
            tracing::debug!("{operation} -> {status}");
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let error = ApiError::from_response(operation, status, &body);
        tracing::warn!("{operation} -> {status}: {}", error.message());
        Err(error.into())
    }

    async fn decode<T: DeserializeOwned>(operation: RemoteOperation, response: Response) -> Result<T> {
        let body = response.bytes().await.map_err(|e| ApiError::transport(operation, &e))?;
        // An empty 2xx body decodes as JSON null
        let body: &[u8] = if body.iter().all(u8::is_ascii_whitespace) {
            b"null"
        } else {
            &body
        };
        serde_json::from_slice(body).map_err(|e| {
            tracing::warn!("{operation} returned an unexpected body: {e}");
            CatalogError::Decode(operation.to_string(), e.to_string())
        })
    }

    fn request(&self, method: Method, url: Url) -> RequestBuilder {
        tracing::debug!("{method} {url}");
        self.client.request(method, url)
    }
}

impl CollectionClient for HttpCollectionClient {
    async fn list<T>(&self, collection: Collection) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let operation = RemoteOperation::List(collection);
        let url = self.collection_url(collection)?;
        let response = self.send(operation, self.request(Method::GET, url)).await?;
        Self::decode(operation, response).await
    }

    async fn create<P, T>(&self, collection: Collection, payload: &P) -> Result<T>
    where
        P: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let operation = RemoteOperation::Create(collection);
        let url = self.collection_url(collection)?;
        let request = self.request(Method::POST, url).json(payload);
        let response = self.send(operation, request).await?;
        Self::decode(operation, response).await
    }

    async fn remove(&self, collection: Collection, id: ProjectId) -> Result<()> {
        let operation = RemoteOperation::Remove(collection);
        let url = self.item_url(collection, id)?;
        self.send(operation, self.request(Method::DELETE, url)).await?;
        Ok(())
    }
}

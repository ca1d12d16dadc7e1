//! In-memory catalog used by controller tests

use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};

use parking_lot::Mutex;
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tokio::sync::Semaphore;

use crate::error::{CatalogError, Result};
use crate::remote::{Collection, CollectionClient, RemoteOperation};
use crate::types::{Project, ProjectId};

/// Records requests, can fail chosen operations, and can hold every call
/// until the test releases it.
pub struct FakeCatalog {
    collections: Mutex<HashMap<Collection, Vec<Value>>>,
    failures: Mutex<HashMap<RemoteOperation, Option<String>>>,
    responses: Mutex<HashMap<RemoteOperation, Value>>,
    calls: Mutex<Vec<(RemoteOperation, Option<ProjectId>)>>,
    gate: Mutex<Option<Arc<Semaphore>>>,
    next_id: AtomicU64,
}

impl Default for FakeCatalog {
    fn default() -> Self {
        Self {
            collections: Mutex::new(HashMap::new()),
            failures: Mutex::new(HashMap::new()),
            responses: Mutex::new(HashMap::new()),
            calls: Mutex::new(Vec::new()),
            gate: Mutex::new(None),
            next_id: AtomicU64::new(100),
        }
    }
}

impl FakeCatalog {
    pub fn with_projects(projects: Vec<Project>) -> Arc<Self> {
        let fake = Self::default();
        fake.seed(Collection::Projects, &projects);
        Arc::new(fake)
    }

    pub fn seed<T: Serialize>(&self, collection: Collection, items: &[T]) {
        let values = items
            .iter()
            .map(|item| serde_json::to_value(item).unwrap())
            .collect();
        self.collections.lock().insert(collection, values);
    }

    /// Fail `operation`, optionally with a server message
    pub fn fail(&self, operation: RemoteOperation, server_message: Option<&str>) {
        self.failures
            .lock()
            .insert(operation, server_message.map(str::to_string));
    }

    /// Answer a successful `create` with `body` instead of the stored record
    pub fn respond(&self, operation: RemoteOperation, body: Value) {
        self.responses.lock().insert(operation, body);
    }

    pub fn recover(&self, operation: RemoteOperation) {
        self.failures.lock().remove(&operation);
    }

    /// Make every following call wait for a permit on the returned semaphore
    pub fn hold(&self) -> Arc<Semaphore> {
        let gate = Arc::new(Semaphore::new(0));
        *self.gate.lock() = Some(gate.clone());
        gate
    }

    pub fn calls(&self) -> Vec<(RemoteOperation, Option<ProjectId>)> {
        self.calls.lock().clone()
    }

    pub fn call_count(&self, operation: RemoteOperation) -> usize {
        self.calls
            .lock()
            .iter()
            .filter(|(op, _)| *op == operation)
            .count()
    }

    pub fn stored(&self, collection: Collection) -> Vec<Value> {
        self.collections
            .lock()
            .get(&collection)
            .cloned()
            .unwrap_or_default()
    }

    async fn enter(&self, operation: RemoteOperation, id: Option<ProjectId>) -> Result<()> {
        self.calls.lock().push((operation, id));

        let gate = self.gate.lock().clone();
        if let Some(gate) = gate {
            gate.acquire()
                .await
                .map_err(|e| CatalogError::Other(e.to_string()))?
                .forget();
        }

        let failure = self.failures.lock().get(&operation).cloned();
        match failure {
            Some(message) => Err(CatalogError::Transport {
                operation: operation.to_string(),
                status: Some(500),
                message: message.unwrap_or_else(|| operation.fallback_message().to_string()),
            }),
            None => Ok(()),
        }
    }
}

fn decode<T: DeserializeOwned>(operation: RemoteOperation, value: Value) -> Result<T> {
    serde_json::from_value(value)
        .map_err(|e| CatalogError::Decode(operation.to_string(), e.to_string()))
}

impl CollectionClient for FakeCatalog {
    async fn list<T>(&self, collection: Collection) -> Result<Vec<T>>
    where
        T: DeserializeOwned + Send,
    {
        let operation = RemoteOperation::List(collection);
        self.enter(operation, None).await?;
        self.stored(collection)
            .into_iter()
            .map(|value| decode(operation, value))
            .collect()
    }

    async fn create<P, T>(&self, collection: Collection, payload: &P) -> Result<T>
    where
        P: Serialize + Sync,
        T: DeserializeOwned + Send,
    {
        let operation = RemoteOperation::Create(collection);
        let mut value = serde_json::to_value(payload)?;
        self.enter(operation, None).await?;

        if let Value::Object(map) = &mut value
            && !map.contains_key("id")
        {
            let id = self.next_id.fetch_add(1, Ordering::SeqCst);
            map.insert("id".to_string(), Value::from(id));
        }

        self.collections
            .lock()
            .entry(collection)
            .or_default()
            .push(value.clone());
        let body = self.responses.lock().get(&operation).cloned();
        decode(operation, body.unwrap_or(value))
    }

    async fn remove(&self, collection: Collection, id: ProjectId) -> Result<()> {
        let operation = RemoteOperation::Remove(collection);
        self.enter(operation, Some(id)).await?;
        if let Some(values) = self.collections.lock().get_mut(&collection) {
            values.retain(|v| v.get("id").and_then(Value::as_u64) != Some(id));
        }
        Ok(())
    }
}

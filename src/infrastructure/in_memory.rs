use crate::domain::ports::{Artifact, ArtifactSink};
use crate::error::Result;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

/// A thread-safe in-memory sink for finished documents.
///
/// Clones share the same storage, so a test can keep a handle while the
/// generator owns a boxed copy.
#[derive(Default, Clone)]
pub struct InMemorySink {
    documents: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl InMemorySink {
    /// Creates a new, empty in-memory sink.
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn get(&self, file_name: &str) -> Option<Vec<u8>> {
        let documents = self.documents.read().await;
        documents.get(file_name).cloned()
    }

    pub async fn len(&self) -> usize {
        self.documents.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.documents.read().await.is_empty()
    }
}

#[async_trait]
impl ArtifactSink for InMemorySink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<Artifact> {
        let size = bytes.len();
        let mut documents = self.documents.write().await;
        documents.insert(file_name.to_string(), bytes);

        Ok(Artifact {
            file_name: file_name.to_string(),
            location: None,
            size,
        })
    }
}

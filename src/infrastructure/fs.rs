use crate::domain::ports::{Artifact, ArtifactSink};
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;
use tracing::debug;

/// Writes finished documents into a directory, creating it on first use.
#[derive(Debug, Clone)]
pub struct FileSink {
    output_dir: PathBuf,
}

impl FileSink {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }
}

#[async_trait]
impl ArtifactSink for FileSink {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<Artifact> {
        tokio::fs::create_dir_all(&self.output_dir).await?;
        let path = self.output_dir.join(file_name);
        let size = bytes.len();
        tokio::fs::write(&path, bytes).await?;
        debug!(path = %path.display(), size, "document written");

        Ok(Artifact {
            file_name: file_name.to_string(),
            location: Some(path),
            size,
        })
    }
}

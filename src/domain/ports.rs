use super::invoice::{InvoiceDocument, QrImage};
use crate::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// Encodes a payment payload into a scannable image.
pub trait QrRenderer: Send + Sync {
    fn render(&self, payload: &str) -> Result<QrImage>;
}

/// Lays an invoice out on a single printable page.
pub trait DocumentLayout: Send + Sync {
    /// File extension of the produced document, without the dot.
    fn extension(&self) -> &'static str;
    fn layout(&self, document: &InvoiceDocument) -> Result<Vec<u8>>;
}

/// A finished document handed back to the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Artifact {
    pub file_name: String,
    /// Where the sink put it, if it has a location at all.
    pub location: Option<PathBuf>,
    pub size: usize,
}

#[async_trait]
pub trait ArtifactSink: Send + Sync {
    async fn deliver(&self, file_name: &str, bytes: Vec<u8>) -> Result<Artifact>;
}

pub type QrRendererBox = Box<dyn QrRenderer>;
pub type DocumentLayoutBox = Box<dyn DocumentLayout>;
pub type ArtifactSinkBox = Box<dyn ArtifactSink>;

use crate::domain::invoice::InvoiceInput;
use crate::error::{InvoiceError, Result};
use std::io::Read;

/// Reads invoice inputs from a CSV source, one invoice per row.
///
/// Column names match the `InvoiceInput` field names; whitespace around values
/// is trimmed.
pub struct InvoiceReader<R: Read> {
    reader: csv::Reader<R>,
}

impl<R: Read> InvoiceReader<R> {
    /// Creates a new `InvoiceReader` from any `Read` source (e.g., File, Stdin).
    pub fn new(source: R) -> Self {
        let reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(source);
        Self { reader }
    }

    /// Returns an iterator that lazily reads and deserializes invoices.
    ///
    /// A bad row yields an error for that row only; iteration continues.
    pub fn invoices(self) -> impl Iterator<Item = Result<InvoiceInput>> {
        self.reader
            .into_deserialize()
            .map(|result| result.map_err(InvoiceError::from))
    }
}

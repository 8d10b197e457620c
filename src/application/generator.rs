use crate::config::Settings;
use crate::domain::account::Iban;
use crate::domain::invoice::{InvoiceDocument, InvoiceInput, Money};
use crate::domain::payment::PaymentInstruction;
use crate::domain::ports::{Artifact, ArtifactSinkBox, DocumentLayoutBox, QrRendererBox};
use crate::error::Result;
use tracing::{debug, info, instrument};

/// Outcome of one successful generation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GeneratedInvoice {
    pub iban: Iban,
    pub artifact: Artifact,
}

/// The main entry point for turning form input into a finished invoice.
///
/// `InvoiceGenerator` owns the external collaborators (QR renderer, page
/// layout, delivery sink). All financial data is validated and derived before
/// any of them is called, so invalid input never produces a partial document.
pub struct InvoiceGenerator {
    renderer: QrRendererBox,
    layout: DocumentLayoutBox,
    sink: ArtifactSinkBox,
    settings: Settings,
}

impl InvoiceGenerator {
    /// Creates a new `InvoiceGenerator` instance.
    ///
    /// # Arguments
    ///
    /// * `renderer` - Encodes the payment code into an image.
    /// * `layout` - Places the invoice on a printable page.
    /// * `sink` - Receives the finished document.
    /// * `settings` - Currency, labels and file naming.
    pub fn new(
        renderer: QrRendererBox,
        layout: DocumentLayoutBox,
        sink: ArtifactSinkBox,
        settings: Settings,
    ) -> Self {
        Self {
            renderer,
            layout,
            sink,
            settings,
        }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Validates the input and derives the IBAN and payment instruction.
    ///
    /// Pure: no collaborator is touched. The returned document has no QR image.
    pub fn prepare(&self, input: &InvoiceInput) -> Result<InvoiceDocument> {
        input.validate()?;
        let iban = input.account_reference()?.to_iban()?;
        let total = input.total()?;
        let payment = PaymentInstruction::new(
            iban.clone(),
            total,
            &self.settings.currency,
            &input.invoice_number,
        )?;
        debug!(payload = %payment, "payment code built");

        Ok(InvoiceDocument {
            input: input.clone(),
            unit_price: Money::new(input.item_price, self.settings.currency_label.as_str()),
            total: Money::new(total, self.settings.currency_label.as_str()),
            iban,
            payment,
            qr_code: None,
        })
    }

    /// Prepares, renders, lays out and delivers one invoice.
    #[instrument(skip_all, fields(invoice = %input.invoice_number))]
    pub async fn generate(&self, input: &InvoiceInput) -> Result<GeneratedInvoice> {
        let mut document = self.prepare(input)?;
        document.qr_code = Some(self.renderer.render(&document.payment.to_spd())?);

        let bytes = self.layout.layout(&document)?;
        let file_name = self
            .settings
            .file_name(&input.invoice_number, self.layout.extension());
        let artifact = self.sink.deliver(&file_name, bytes).await?;

        info!(file = %artifact.file_name, size = artifact.size, "invoice generated");
        Ok(GeneratedInvoice {
            iban: document.iban,
            artifact,
        })
    }
}

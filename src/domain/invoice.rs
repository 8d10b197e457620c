use super::account::{DomesticAccountReference, Iban};
use super::payment::PaymentInstruction;
use crate::error::FormatError;
use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Everything the form collects for one invoice.
///
/// The record is immutable input to the generator; nothing derived from it is
/// stored. Dates use ISO `YYYY-MM-DD`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InvoiceInput {
    pub client_name: String,
    pub client_address: String,
    pub client_ico: String,
    #[serde(default)]
    pub client_dic: String,
    pub invoice_number: String,
    pub issue_date: NaiveDate,
    pub due_date: NaiveDate,
    pub item_description: String,
    pub item_quantity: u32,
    pub item_price: Decimal,
    pub provider_name: String,
    pub provider_address: String,
    pub provider_ico: String,
    /// Raw `<account>/<bank code>` as typed.
    pub provider_bank_account: String,
}

impl InvoiceInput {
    /// Quantity times unit price; a product outside `Decimal` range is rejected.
    pub fn total(&self) -> Result<Decimal, FormatError> {
        Decimal::from(self.item_quantity)
            .checked_mul(self.item_price)
            .ok_or_else(|| {
                FormatError::AmountTooLarge(format!(
                    "{} x {}",
                    self.item_quantity, self.item_price
                ))
            })
    }

    /// Checks the invoice-level rules that the payment fields do not cover.
    pub fn validate(&self) -> Result<(), FormatError> {
        if self.invoice_number.trim().is_empty() {
            return Err(FormatError::InvalidInvoice(
                "invoice number must not be empty".to_string(),
            ));
        }
        if self.item_quantity == 0 {
            return Err(FormatError::InvalidInvoice(
                "item quantity must be at least 1".to_string(),
            ));
        }
        if self.item_price.is_sign_negative() && !self.item_price.is_zero() {
            return Err(FormatError::NegativeAmount(self.item_price.to_string()));
        }
        if self.due_date < self.issue_date {
            return Err(FormatError::InvalidInvoice(format!(
                "due date {} precedes issue date {}",
                self.due_date, self.issue_date
            )));
        }
        Ok(())
    }

    pub fn account_reference(&self) -> Result<DomesticAccountReference, FormatError> {
        DomesticAccountReference::parse(&self.provider_bank_account)
    }
}

/// A monetary amount paired with its display label, e.g. `1500 Kč`.
///
/// Only for human-facing text; payment payloads take the bare [`Decimal`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Money {
    pub amount: Decimal,
    pub label: String,
}

impl Money {
    pub fn new(amount: Decimal, label: impl Into<String>) -> Self {
        Self {
            amount,
            label: label.into(),
        }
    }
}

impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.amount.normalize(), self.label)
    }
}

/// An invoice with all derived payment data resolved, ready for rendering.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceDocument {
    pub input: InvoiceInput,
    pub unit_price: Money,
    pub total: Money,
    pub iban: Iban,
    pub payment: PaymentInstruction,
    /// QR image in the renderer's output format, filled in after rendering.
    pub qr_code: Option<QrImage>,
}

/// An encoded payment code image.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QrImage {
    pub media_type: &'static str,
    pub data: String,
}

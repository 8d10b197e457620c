use thiserror::Error;

/// Validation failures for financial input.
///
/// Raised synchronously and never corrected on the caller's behalf: a value
/// that does not fit is rejected, not truncated or substituted.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormatError {
    #[error("account reference must have the form <account>/<bank code>, got {0:?}")]
    MalformedReference(String),
    #[error("account number must not be empty")]
    EmptyAccountNumber,
    #[error("account number {value:?} exceeds {max} characters")]
    AccountNumberTooLong { value: String, max: usize },
    #[error("invalid character {found:?} in {field}")]
    InvalidCharacter { field: &'static str, found: char },
    #[error("bank code must be exactly 4 digits or uppercase letters, got {0:?}")]
    InvalidBankCode(String),
    #[error("invalid IBAN {value:?}: {reason}")]
    InvalidIban { value: String, reason: &'static str },
    #[error("amount must not be negative, got {0}")]
    NegativeAmount(String),
    #[error("amount {0} has more than 2 decimal places")]
    AmountPrecision(String),
    #[error("amount {0} does not fit the 10-character payment field")]
    AmountTooLarge(String),
    #[error("currency must be a 3-letter uppercase ISO code, got {0:?}")]
    InvalidCurrency(String),
    #[error("variable symbol must be 1 to 10 ASCII letters or digits, got {0:?}")]
    InvalidVariableSymbol(String),
    #[error("invalid invoice: {0}")]
    InvalidInvoice(String),
}

#[derive(Error, Debug)]
pub enum InvoiceError {
    #[error("Format error: {0}")]
    Format(#[from] FormatError),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Configuration error: {0}")]
    Config(#[from] toml::de::Error),
    #[error("Rendering error: {0}")]
    Render(String),
}

pub type Result<T> = std::result::Result<T, InvoiceError>;

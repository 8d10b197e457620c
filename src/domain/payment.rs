use super::account::Iban;
use crate::error::FormatError;
use rust_decimal::Decimal;
use std::fmt;

/// Preamble identifying the Short Payment Descriptor format, version 1.0.
pub const SPD_HEADER: &str = "SPD*1.0*";
/// Currency used when nothing else is configured.
pub const DEFAULT_CURRENCY: &str = "CZK";

const MAX_AMOUNT_LENGTH: usize = 10;
const MAX_AMOUNT_SCALE: u32 = 2;
const MAX_VARIABLE_SYMBOL_LENGTH: usize = 10;

/// A validated payment request destined for a QR payment code.
///
/// Built once per invoice and immutable afterwards. All fields are checked on
/// construction so `to_spd` cannot fail.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaymentInstruction {
    iban: Iban,
    amount: Decimal,
    currency: String,
    variable_symbol: String,
}

impl PaymentInstruction {
    pub fn new(
        iban: Iban,
        amount: Decimal,
        currency: &str,
        variable_symbol: &str,
    ) -> Result<Self, FormatError> {
        let amount = validate_amount(amount)?;
        validate_currency(currency)?;
        validate_variable_symbol(variable_symbol)?;

        Ok(Self {
            iban,
            amount,
            currency: currency.to_string(),
            variable_symbol: variable_symbol.to_string(),
        })
    }

    pub fn iban(&self) -> &Iban {
        &self.iban
    }

    pub fn amount(&self) -> Decimal {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn variable_symbol(&self) -> &str {
        &self.variable_symbol
    }

    /// Renders the asterisk-delimited payload. Field order is fixed.
    pub fn to_spd(&self) -> String {
        format!(
            "{SPD_HEADER}ACC:{}*AM:{}*CC:{}*X-VS:{}",
            self.iban, self.amount, self.currency, self.variable_symbol
        )
    }
}

impl fmt::Display for PaymentInstruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_spd())
    }
}

/// Builds the payment code string for `iban`.
///
/// ```
/// use qr_faktura::domain::account::convert;
/// use qr_faktura::domain::payment::build;
/// use rust_decimal_macros::dec;
///
/// let iban = convert("2600420569", "2010").unwrap();
/// let code = build(&iban, dec!(1500), "CZK", "2024001").unwrap();
/// assert_eq!(code, "SPD*1.0*ACC:CZ9420100000002600420569*AM:1500*CC:CZK*X-VS:2024001");
/// ```
pub fn build(
    iban: &Iban,
    amount: Decimal,
    currency: &str,
    variable_symbol: &str,
) -> Result<String, FormatError> {
    PaymentInstruction::new(iban.clone(), amount, currency, variable_symbol)
        .map(|instruction| instruction.to_spd())
}

/// Returns the amount in canonical form (trailing zeros removed).
fn validate_amount(amount: Decimal) -> Result<Decimal, FormatError> {
    if amount.is_sign_negative() && !amount.is_zero() {
        return Err(FormatError::NegativeAmount(amount.to_string()));
    }
    let normalized = amount.normalize();
    if normalized.scale() > MAX_AMOUNT_SCALE {
        return Err(FormatError::AmountPrecision(amount.to_string()));
    }
    if normalized.to_string().len() > MAX_AMOUNT_LENGTH {
        return Err(FormatError::AmountTooLarge(amount.to_string()));
    }
    Ok(normalized)
}

pub(crate) fn validate_currency(currency: &str) -> Result<(), FormatError> {
    if currency.len() == 3 && currency.chars().all(|c| c.is_ascii_uppercase()) {
        Ok(())
    } else {
        Err(FormatError::InvalidCurrency(currency.to_string()))
    }
}

fn validate_variable_symbol(variable_symbol: &str) -> Result<(), FormatError> {
    let valid = !variable_symbol.is_empty()
        && variable_symbol.len() <= MAX_VARIABLE_SYMBOL_LENGTH
        && variable_symbol.chars().all(|c| c.is_ascii_alphanumeric());
    if valid {
        Ok(())
    } else {
        Err(FormatError::InvalidVariableSymbol(variable_symbol.to_string()))
    }
}

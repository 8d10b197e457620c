use crate::error::FormatError;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Country whose national account layout the converter implements.
pub const COUNTRY_CODE: &str = "CZ";
pub const BANK_CODE_LENGTH: usize = 4;
/// Length of the zero-padded account number inside the BBAN.
pub const ACCOUNT_NUMBER_LENGTH: usize = 16;
pub const IBAN_LENGTH: usize = COUNTRY_CODE.len() + 2 + BANK_CODE_LENGTH + ACCOUNT_NUMBER_LENGTH;

// Split of the 16 account characters when written as `prefix-number`.
const PREFIX_LENGTH: usize = 6;
const BASE_NUMBER_LENGTH: usize = 10;

/// A domestic account as typed by the user: `<account_number>/<bank_code>`.
///
/// The account number may use the national `prefix-number` notation,
/// e.g. `19-2000145399/0800`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DomesticAccountReference {
    account_number: String,
    bank_code: String,
}

impl DomesticAccountReference {
    /// Splits a raw reference on the first `/`.
    ///
    /// Both segments must be non-empty; a further `/` is rejected rather than
    /// folded into the bank code.
    pub fn parse(raw: &str) -> Result<Self, FormatError> {
        let malformed = || FormatError::MalformedReference(raw.to_string());
        let (account_number, bank_code) = raw.trim().split_once('/').ok_or_else(malformed)?;
        let (account_number, bank_code) = (account_number.trim(), bank_code.trim());

        if account_number.is_empty() || bank_code.is_empty() || bank_code.contains('/') {
            return Err(malformed());
        }

        Ok(Self {
            account_number: account_number.to_string(),
            bank_code: bank_code.to_string(),
        })
    }

    pub fn account_number(&self) -> &str {
        &self.account_number
    }

    pub fn bank_code(&self) -> &str {
        &self.bank_code
    }

    pub fn to_iban(&self) -> Result<Iban, FormatError> {
        convert(&self.account_number, &self.bank_code)
    }
}

impl FromStr for DomesticAccountReference {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl fmt::Display for DomesticAccountReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.account_number, self.bank_code)
    }
}

/// An international account identifier for the supported country.
///
/// Always `IBAN_LENGTH` characters, uppercase, without spaces, and with check
/// digits satisfying the mod-97 relation. Instances only come out of
/// [`convert`] or a checked [`FromStr`] parse.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Iban(String);

impl Iban {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn country_code(&self) -> &str {
        &self.0[..2]
    }

    pub fn check_digits(&self) -> &str {
        &self.0[2..4]
    }

    pub fn bank_code(&self) -> &str {
        &self.0[4..4 + BANK_CODE_LENGTH]
    }

    /// The zero-padded 16-character account number.
    pub fn account_number(&self) -> &str {
        &self.0[4 + BANK_CODE_LENGTH..]
    }

    pub fn bban(&self) -> &str {
        &self.0[4..]
    }

    /// Print form: groups of four separated by single spaces.
    pub fn to_grouped(&self) -> String {
        let mut grouped = String::with_capacity(self.0.len() + self.0.len() / 4);
        for (i, c) in self.0.chars().enumerate() {
            if i > 0 && i % 4 == 0 {
                grouped.push(' ');
            }
            grouped.push(c);
        }
        grouped
    }
}

impl fmt::Display for Iban {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Iban {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for Iban {
    type Err = FormatError;

    /// Parses electronic or grouped form and verifies the check digits.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let compact: String = s.chars().filter(|c| !c.is_whitespace()).collect();
        let invalid = |reason| FormatError::InvalidIban {
            value: s.to_string(),
            reason,
        };

        if !compact.is_ascii() {
            return Err(invalid("invalid character"));
        }
        if compact.len() != IBAN_LENGTH {
            return Err(invalid("wrong length"));
        }
        if !compact.starts_with(COUNTRY_CODE) {
            return Err(invalid("unsupported country"));
        }
        let (head, bban) = compact.split_at(4);
        if !head[2..].chars().all(|c| c.is_ascii_digit()) {
            return Err(invalid("check digits are not numeric"));
        }
        if !bban.chars().all(is_bban_char) {
            return Err(invalid("invalid character"));
        }
        if mod97(bban.chars().chain(head.chars())) != 1 {
            return Err(invalid("checksum mismatch"));
        }

        Ok(Self(compact))
    }
}

/// Converts a domestic account number and bank code into an [`Iban`].
///
/// The account number is zero-padded to 16 characters (or, in `prefix-number`
/// form, prefix to 6 and number to 10), prefixed with the bank code, and the
/// check digits are `98 - (N mod 97)` where `N` is the digit-mapped
/// `bban ++ country ++ "00"`. Letters map to `ord - 55` (`A` = 10).
///
/// Both inputs accept ASCII digits and uppercase letters only; the single
/// `-` separating prefix from number is the one other character allowed.
///
/// `N` routinely exceeds 30 digits, so the remainder is reduced while
/// streaming instead of materialising the integer.
pub fn convert(account_number: &str, bank_code: &str) -> Result<Iban, FormatError> {
    validate_bank_code(bank_code)?;
    let account = pad_account_number(account_number)?;
    let bban = format!("{bank_code}{account}");

    let remainder = mod97(bban.chars().chain(COUNTRY_CODE.chars()).chain("00".chars()));
    let check = 98 - remainder;

    Ok(Iban(format!("{COUNTRY_CODE}{check:02}{bban}")))
}

fn validate_bank_code(bank_code: &str) -> Result<(), FormatError> {
    if bank_code.len() == BANK_CODE_LENGTH && bank_code.chars().all(is_bban_char) {
        Ok(())
    } else {
        Err(FormatError::InvalidBankCode(bank_code.to_string()))
    }
}

fn pad_account_number(account_number: &str) -> Result<String, FormatError> {
    if account_number.is_empty() {
        return Err(FormatError::EmptyAccountNumber);
    }

    match account_number.split_once('-') {
        Some((prefix, number)) => {
            if prefix.is_empty() || number.is_empty() {
                return Err(FormatError::InvalidCharacter {
                    field: "account number",
                    found: '-',
                });
            }
            check_segment(prefix, PREFIX_LENGTH)?;
            check_segment(number, BASE_NUMBER_LENGTH)?;
            Ok(format!(
                "{prefix:0>pw$}{number:0>nw$}",
                pw = PREFIX_LENGTH,
                nw = BASE_NUMBER_LENGTH
            ))
        }
        None => {
            check_segment(account_number, ACCOUNT_NUMBER_LENGTH)?;
            Ok(format!(
                "{account_number:0>width$}",
                width = ACCOUNT_NUMBER_LENGTH
            ))
        }
    }
}

fn check_segment(segment: &str, max: usize) -> Result<(), FormatError> {
    if let Some(found) = segment.chars().find(|c| !is_bban_char(*c)) {
        return Err(FormatError::InvalidCharacter {
            field: "account number",
            found,
        });
    }
    if segment.len() > max {
        return Err(FormatError::AccountNumberTooLong {
            value: segment.to_string(),
            max,
        });
    }
    Ok(())
}

// Only uppercase ASCII maps correctly under `ord - 55`.
fn is_bban_char(c: char) -> bool {
    c.is_ascii_digit() || c.is_ascii_uppercase()
}

/// Remainder mod 97 of the decimal numeral formed by mapping each character.
///
/// Callers guarantee every character satisfies `is_bban_char` or is a digit.
fn mod97(chars: impl Iterator<Item = char>) -> u32 {
    chars.fold(0, |acc, c| match c.to_digit(10) {
        Some(digit) => (acc * 10 + digit) % 97,
        None => (acc * 100 + (c as u32 - 55)) % 97,
    })
}

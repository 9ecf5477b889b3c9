//! Brazilian registration number validation (CPF and CNPJ).
//!
//! # Validation Rules
//!
//! - Punctuation (`.`, `-`, `/`) and whitespace are stripped before checking.
//! - CPF numbers carry 11 digits, CNPJ numbers 14.
//! - The final two digits are modulo-11 check digits over the preceding ones.
//! - Numbers made of a single repeated digit are rejected even though their
//!   check digits happen to line up.

use thiserror::Error;

/// Number of digits in a CPF (personal registration number).
pub const CPF_LENGTH: usize = 11;

/// Number of digits in a CNPJ (corporate registration number).
pub const CNPJ_LENGTH: usize = 14;

const CNPJ_FIRST_WEIGHTS: [u32; 12] = [5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];
const CNPJ_SECOND_WEIGHTS: [u32; 13] = [6, 5, 4, 3, 2, 9, 8, 7, 6, 5, 4, 3, 2];

/// Kind of registration number recognised by [`validate_document`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DocumentKind {
    /// Personal registration number (11 digits).
    Cpf,
    /// Corporate registration number (14 digits).
    Cnpj,
}

/// Reasons a document number fails validation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DocumentError {
    /// The input is empty once punctuation is removed.
    #[error("document number must not be empty")]
    Empty,
    /// The input contains something other than digits and punctuation.
    #[error("document number may only contain digits, '.', '-' or '/'")]
    InvalidCharacters,
    /// The digit count matches neither CPF nor CNPJ.
    #[error("document number must have 11 (CPF) or 14 (CNPJ) digits, found {length}")]
    InvalidLength {
        /// Number of digits found after normalisation.
        length: usize,
    },
    /// Every digit is identical.
    #[error("document number must not repeat a single digit")]
    RepeatedDigits,
    /// The trailing check digits do not match the computed ones.
    #[error("document number check digits do not match")]
    CheckDigitMismatch,
}

/// Strips punctuation and whitespace, returning the bare digit string.
///
/// # Errors
///
/// Returns [`DocumentError::InvalidCharacters`] when any character other
/// than an ASCII digit, `.`, `-`, `/` or whitespace is present, and
/// [`DocumentError::Empty`] when nothing remains.
///
/// # Examples
///
/// ```
/// use producer_rules::normalize_document;
///
/// assert_eq!(normalize_document("11.222.333/0001-81").as_deref(), Ok("11222333000181"));
/// ```
pub fn normalize_document(raw: &str) -> Result<String, DocumentError> {
    let mut digits = String::with_capacity(raw.len());
    for c in raw.chars() {
        match c {
            '0'..='9' => digits.push(c),
            '.' | '-' | '/' => {}
            c if c.is_whitespace() => {}
            _ => return Err(DocumentError::InvalidCharacters),
        }
    }
    if digits.is_empty() {
        return Err(DocumentError::Empty);
    }
    Ok(digits)
}

/// Validates a CPF or CNPJ, returning which kind it is.
///
/// # Errors
///
/// Returns the first [`DocumentError`] encountered.
///
/// # Examples
///
/// ```
/// use producer_rules::{DocumentError, DocumentKind, validate_document};
///
/// assert_eq!(validate_document("11144477735"), Ok(DocumentKind::Cpf));
/// assert_eq!(validate_document("11.222.333/0001-81"), Ok(DocumentKind::Cnpj));
/// assert_eq!(
///     validate_document("11144477734"),
///     Err(DocumentError::CheckDigitMismatch)
/// );
/// ```
pub fn validate_document(raw: &str) -> Result<DocumentKind, DocumentError> {
    let normalized = normalize_document(raw)?;
    let digits = to_digits(&normalized);

    let kind = match digits.len() {
        CPF_LENGTH => DocumentKind::Cpf,
        CNPJ_LENGTH => DocumentKind::Cnpj,
        length => return Err(DocumentError::InvalidLength { length }),
    };

    if digits.windows(2).all(|pair| pair.first() == pair.last()) {
        return Err(DocumentError::RepeatedDigits);
    }

    let split = digits.len().saturating_sub(2);
    let (base, check) = digits.split_at(split);
    let expected = match kind {
        DocumentKind::Cpf => base.try_into().map(cpf_check_digits),
        DocumentKind::Cnpj => base.try_into().map(cnpj_check_digits),
    }
    .map_err(|_| DocumentError::CheckDigitMismatch)?;

    if check == expected {
        Ok(kind)
    } else {
        Err(DocumentError::CheckDigitMismatch)
    }
}

/// Returns `true` when `raw` is a valid CPF or CNPJ.
#[must_use]
pub fn is_valid_document(raw: &str) -> bool {
    validate_document(raw).is_ok()
}

/// Computes the two CPF check digits for a nine-digit base.
///
/// # Examples
///
/// ```
/// use producer_rules::cpf_check_digits;
///
/// assert_eq!(cpf_check_digits([1, 1, 1, 4, 4, 4, 7, 7, 7]), [3, 5]);
/// ```
#[must_use]
pub fn cpf_check_digits(base: [u8; 9]) -> [u8; 2] {
    let first = check_digit(base.iter().zip((2..=10).rev()));
    let second = check_digit(
        base.iter()
            .chain(std::iter::once(&first))
            .zip((2..=11).rev()),
    );
    [first, second]
}

/// Computes the two CNPJ check digits for a twelve-digit base.
///
/// # Examples
///
/// ```
/// use producer_rules::cnpj_check_digits;
///
/// assert_eq!(cnpj_check_digits([1, 1, 2, 2, 2, 3, 3, 3, 0, 0, 0, 1]), [8, 1]);
/// ```
#[must_use]
pub fn cnpj_check_digits(base: [u8; 12]) -> [u8; 2] {
    let first = check_digit(base.iter().zip(CNPJ_FIRST_WEIGHTS));
    let second = check_digit(
        base.iter()
            .chain(std::iter::once(&first))
            .zip(CNPJ_SECOND_WEIGHTS),
    );
    [first, second]
}

/// Formats a valid digit string with the conventional punctuation.
///
/// Inputs that are neither 11 nor 14 digits long are returned unchanged.
///
/// # Examples
///
/// ```
/// use producer_rules::format_document;
///
/// assert_eq!(format_document("11144477735"), "111.444.777-35");
/// assert_eq!(format_document("11222333000181"), "11.222.333/0001-81");
/// ```
#[must_use]
pub fn format_document(digits: &str) -> String {
    let chars: Vec<char> = digits.chars().collect();
    let segment = |from: usize, to: usize| -> String {
        chars.get(from..to).map(|s| s.iter().collect()).unwrap_or_default()
    };
    match chars.len() {
        CPF_LENGTH => format!(
            "{}.{}.{}-{}",
            segment(0, 3),
            segment(3, 6),
            segment(6, 9),
            segment(9, 11)
        ),
        CNPJ_LENGTH => format!(
            "{}.{}.{}/{}-{}",
            segment(0, 2),
            segment(2, 5),
            segment(5, 8),
            segment(8, 12),
            segment(12, 14)
        ),
        _ => digits.to_owned(),
    }
}

fn to_digits(normalized: &str) -> Vec<u8> {
    normalized
        .bytes()
        .map(|byte| byte.saturating_sub(b'0'))
        .collect()
}

#[expect(
    clippy::integer_division_remainder_used,
    reason = "modulo-11 is the check-digit algorithm"
)]
fn check_digit<'a>(weighted: impl Iterator<Item = (&'a u8, u32)>) -> u8 {
    let sum: u32 = weighted
        .map(|(digit, weight)| u32::from(*digit) * weight)
        .sum();
    let remainder = sum % 11;
    if remainder < 2 {
        0
    } else {
        // 11 - remainder is at most 9 here.
        u8::try_from(11 - remainder).unwrap_or(0)
    }
}

//! Pure validation rules for producer records.
//!
//! These rules are shared by the registry service, the command-line client,
//! and the synthetic data generator so every layer agrees on what a valid
//! record looks like. Nothing here performs I/O.
//!
//! # Overview
//!
//! - [`document`]: CPF/CNPJ normalisation and check-digit validation.
//! - [`area`]: the land-use invariant `farmable + vegetation <= total`.
//!
//! # Example
//!
//! ```
//! use producer_rules::{DocumentKind, check_land_use, validate_document};
//!
//! assert_eq!(validate_document("111.444.777-35"), Ok(DocumentKind::Cpf));
//! assert!(check_land_use(100.0, 60.0, 30.0).is_ok());
//! assert!(check_land_use(100.0, 60.0, 50.0).is_err());
//! ```

pub mod area;
pub mod document;

pub use area::{AreaError, AreaField, check_land_use};
pub use document::{
    CNPJ_LENGTH, CPF_LENGTH, DocumentError, DocumentKind, cnpj_check_digits, cpf_check_digits,
    format_document, is_valid_document, normalize_document, validate_document,
};

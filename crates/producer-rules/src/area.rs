//! Land-use invariant for producer records.
//!
//! Areas are hectares. Each figure must be finite and non-negative, and the
//! farmable plus vegetation areas must fit inside the total area.

use std::fmt;

use thiserror::Error;

/// Identifies which area figure an [`AreaError`] refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AreaField {
    /// Total farm area.
    Total,
    /// Area available for crops.
    Farmable,
    /// Area under native vegetation.
    Vegetation,
}

impl AreaField {
    /// Stable snake_case name used in error payloads.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Total => "total_area",
            Self::Farmable => "farmable_area",
            Self::Vegetation => "vegetation_area",
        }
    }
}

impl fmt::Display for AreaField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Violations of the land-use rules.
#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum AreaError {
    /// An area is NaN or infinite.
    #[error("{field} must be a finite number")]
    NotFinite {
        /// Offending field.
        field: AreaField,
    },
    /// An area is below zero.
    #[error("{field} must not be negative")]
    Negative {
        /// Offending field.
        field: AreaField,
    },
    /// Farmable plus vegetation area exceeds the total area.
    #[error("farmable plus vegetation area ({used}) exceeds total area ({total})")]
    ExceedsTotal {
        /// Declared total area.
        total: f64,
        /// Sum of farmable and vegetation areas.
        used: f64,
    },
}

/// Checks the land-use figures of a record.
///
/// The sum is compared with plain `f64` arithmetic and no tolerance, so
/// figures such as `0.1 + 0.2` against a total of `0.3` are rejected.
///
/// # Errors
///
/// Returns [`AreaError::NotFinite`] or [`AreaError::Negative`] for the first
/// malformed figure, then [`AreaError::ExceedsTotal`] when
/// `farmable + vegetation > total`.
///
/// # Examples
///
/// ```
/// use producer_rules::{AreaError, check_land_use};
///
/// assert!(check_land_use(100.0, 60.0, 40.0).is_ok());
/// assert!(matches!(
///     check_land_use(100.0, 60.0, 50.0),
///     Err(AreaError::ExceedsTotal { .. })
/// ));
/// ```
#[expect(
    clippy::float_arithmetic,
    reason = "the invariant is defined over hectare sums"
)]
pub fn check_land_use(total: f64, farmable: f64, vegetation: f64) -> Result<(), AreaError> {
    for (field, value) in [
        (AreaField::Total, total),
        (AreaField::Farmable, farmable),
        (AreaField::Vegetation, vegetation),
    ] {
        if !value.is_finite() {
            return Err(AreaError::NotFinite { field });
        }
        if value < 0.0 {
            return Err(AreaError::Negative { field });
        }
    }

    let used = farmable + vegetation;
    if used > total {
        return Err(AreaError::ExceedsTotal { total, used });
    }
    Ok(())
}

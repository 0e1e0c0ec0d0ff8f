//! Storage quantity normalization
//!
//! Translates between the size and unit a user types into a form, the
//! binary-suffixed quantity strings the Kubernetes API expects (`10Gi`), and
//! the label shown back in the console (`10GB`).
//!
//! The display form is a label substitution, not a unit conversion: `10Gi`
//! is shown as `10GB` even though the two differ in magnitude. Consoles rely
//! on that label so it is kept as-is.

use crate::error::{Error, Result};
use std::fmt;
use std::str::FromStr;

/// Suffix marking a binary (power of two) quantity in the API
pub const BINARY_SUFFIX: char = 'i';

/// Suffix shown in place of [`BINARY_SUFFIX`] in the console
pub const DISPLAY_SUFFIX: char = 'B';

// =============================================================================
// Quantity
// =============================================================================

/// A quantity in the `<integer><unit-letter>i` grammar, e.g. `10Gi`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Quantity {
    size: u64,
    unit: char,
}

impl Quantity {
    /// Create a quantity from a size and a unit letter (`'G'`, `'M'`, ...)
    pub fn new(size: u64, unit: char) -> Self {
        Self { size, unit }
    }

    pub fn size(&self) -> u64 {
        self.size
    }

    pub fn unit(&self) -> char {
        self.unit
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}{}", self.size, self.unit, BINARY_SUFFIX)
    }
}

impl FromStr for Quantity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let stem = s
            .strip_suffix(BINARY_SUFFIX)
            .ok_or_else(|| Error::malformed_quantity(s))?;
        let mut chars = stem.chars();
        let unit = chars
            .next_back()
            .filter(|c| c.is_ascii_alphabetic())
            .ok_or_else(|| Error::malformed_quantity(s))?;
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return Err(Error::malformed_quantity(s));
        }
        let size = digits.parse().map_err(|_| Error::malformed_quantity(s))?;
        Ok(Self { size, unit })
    }
}

// =============================================================================
// Conversions
// =============================================================================

/// Build an API quantity string from a size and unit letter
pub fn to_api_quantity(size: u64, unit_letter: char) -> String {
    Quantity::new(size, unit_letter).to_string()
}

/// Convert an API quantity into its console label
///
/// A trailing `i` becomes `B`. Anything else is returned unchanged.
pub fn to_display_quantity(api_quantity: &str) -> String {
    match api_quantity.strip_suffix(BINARY_SUFFIX) {
        Some(stem) => format!("{}{}", stem, DISPLAY_SUFFIX),
        None => api_quantity.to_string(),
    }
}

/// First character of a previously displayed quantity
///
/// For `10GB` this is `'1'`: only the leading digit survives, which is how
/// existing claims have always been re-derived.
pub fn derived_unit_letter(existing_display: &str) -> Result<char> {
    existing_display
        .chars()
        .next()
        .ok_or_else(|| Error::malformed_quantity(existing_display))
}

/// Unit letter of a form unit such as `GB` or `MB`
pub fn unit_letter(size_unit: &str) -> Result<char> {
    size_unit
        .chars()
        .next()
        .filter(|c| c.is_ascii_alphabetic())
        .ok_or_else(|| Error::malformed_quantity(size_unit))
}

/// Re-derive an API quantity from a previously displayed one
///
/// Keeps the leading character from [`derived_unit_letter`] and the unit
/// letter of the label, so `10GB` becomes `1Gi`.
pub fn rederive_api_quantity(existing_display: &str) -> Result<Quantity> {
    let leading = derived_unit_letter(existing_display)?;
    let size = leading
        .to_digit(10)
        .ok_or_else(|| Error::malformed_quantity(existing_display))?;
    let unit = existing_display
        .chars()
        .find(|c| c.is_ascii_alphabetic())
        .ok_or_else(|| Error::malformed_quantity(existing_display))?;
    Ok(Quantity::new(u64::from(size), unit))
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;

    #[test]
    fn test_api_and_display_labels() {
        let api = to_api_quantity(10, 'G');
        assert_eq!(api, "10Gi");
        assert_eq!(to_display_quantity(&api), "10GB");
        assert_eq!(to_display_quantity("500Mi"), "500MB");
    }

    #[test]
    fn test_display_leaves_decimal_quantities() {
        assert_eq!(to_display_quantity("5G"), "5G");
        assert_eq!(to_display_quantity(""), "");
    }

    #[test]
    fn test_parse_quantity() {
        let q: Quantity = "20Gi".parse().unwrap();
        assert_eq!(q.size(), 20);
        assert_eq!(q.unit(), 'G');
        assert_eq!(to_display_quantity(&q.to_string()), "20GB");
        assert_eq!(q.to_string(), "20Gi");

        assert_matches!("20GB".parse::<Quantity>(), Err(Error::MalformedQuantity { .. }));
        assert_matches!("Gi".parse::<Quantity>(), Err(Error::MalformedQuantity { .. }));
        assert_matches!("20i".parse::<Quantity>(), Err(Error::MalformedQuantity { .. }));
        assert_matches!("2.5Gi".parse::<Quantity>(), Err(Error::MalformedQuantity { .. }));
    }

    #[test]
    fn test_rederive_truncates_to_leading_digit() {
        assert_eq!(derived_unit_letter("10GB").unwrap(), '1');
        assert_eq!(rederive_api_quantity("10GB").unwrap().to_string(), "1Gi");
        assert_eq!(rederive_api_quantity("8MB").unwrap().to_string(), "8Mi");
    }

    #[test]
    fn test_rederive_rejects_unusable_labels() {
        assert_matches!(derived_unit_letter(""), Err(Error::MalformedQuantity { .. }));
        assert_matches!(rederive_api_quantity("GB"), Err(Error::MalformedQuantity { .. }));
        assert_matches!(rederive_api_quantity("10"), Err(Error::MalformedQuantity { .. }));
    }

    #[test]
    fn test_unit_letter() {
        assert_eq!(unit_letter("GB").unwrap(), 'G');
        assert_eq!(unit_letter("TB").unwrap(), 'T');
        assert_matches!(unit_letter(""), Err(Error::MalformedQuantity { .. }));
    }
}

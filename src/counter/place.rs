// src/counter/place.rs
// =============================================================================
// Place lists: which digit of the number each slot of the counter shows.
//
// A place is either a power-of-ten weight (100, 10, 1, 0.1, ...) or the
// decimal point marker, written "." on the command line.
//
//   value 1234.5  ->  [1000, 100, 10, 1, ".", 0.1]
//
// The counter itself trusts whatever list it is given. `validate_places` is
// there for code that accepts lists from users (like our CLI) and wants to
// reject malformed ones up front.
// =============================================================================

use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// One slot of the counter
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Place {
    /// Shows the digit at this power of ten
    Weight(f64),
    /// A literal decimal point; never animates
    Decimal,
}

impl Place {
    pub fn is_decimal(&self) -> bool {
        matches!(self, Place::Decimal)
    }

    /// The weight, or None for the decimal point
    pub fn weight(&self) -> Option<f64> {
        match self {
            Place::Weight(w) => Some(*w),
            Place::Decimal => None,
        }
    }
}

impl fmt::Display for Place {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Place::Weight(w) => write!(f, "{}", w),
            Place::Decimal => f.write_str("."),
        }
    }
}

/// Why a place list was rejected
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlaceError {
    #[error("place list is empty")]
    Empty,

    #[error("'{0}' is not a positive power of ten or '.'")]
    InvalidWeight(String),

    #[error("place list has more than one decimal point")]
    MultipleDecimals,

    #[error("place weights must decrease: {previous} is followed by {next}")]
    NotDecreasing { previous: f64, next: f64 },
}

impl FromStr for Place {
    type Err = PlaceError;

    // "." is the decimal point, anything else must be a positive number
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s == "." {
            return Ok(Place::Decimal);
        }

        match s.parse::<f64>() {
            Ok(w) if w.is_finite() && w > 0.0 => Ok(Place::Weight(w)),
            _ => Err(PlaceError::InvalidWeight(s.to_string())),
        }
    }
}

// 10^exp, computed so that negative exponents give the same f64 as the
// decimal literal (10^-1 == 0.1, 10^-2 == 0.01)
pub fn pow10(exp: i32) -> f64 {
    if exp >= 0 {
        10f64.powi(exp)
    } else {
        1.0 / 10f64.powi(-exp)
    }
}

// Derives one place per digit of the value as it is written out
//
// The value is rendered in its shortest decimal form. Each digit gets the
// weight of its position, and the decimal point (if any) becomes the
// Decimal marker. A leading minus sign is not a digit and gets no slot,
// so -12.5 derives [10, 1, ".", 0.1] rather than one slot per character.
//
// Examples:
//   1234.5 -> [1000, 100, 10, 1, ".", 0.1]
//   42     -> [10, 1]
//   0.05   -> [1, ".", 0.1, 0.01]
//
// Non-finite values have no digits and derive an empty list.
pub fn derive_places(value: f64) -> Vec<Place> {
    if !value.is_finite() {
        return Vec::new();
    }

    let text = value.to_string();
    let digits: Vec<char> = text.trim_start_matches('-').chars().collect();
    let len = digits.len() as i32;
    let dot = digits.iter().position(|&c| c == '.').map(|i| i as i32);

    digits
        .iter()
        .enumerate()
        .map(|(i, &ch)| {
            let i = i as i32;
            if ch == '.' {
                return Place::Decimal;
            }

            let exp = match dot {
                None => len - i - 1,
                Some(dot) if i < dot => dot - i - 1,
                Some(dot) => -(i - dot),
            };
            Place::Weight(pow10(exp))
        })
        .collect()
}

// Is w (within float noise) a power of ten?
fn is_power_of_ten(w: f64) -> bool {
    if !w.is_finite() || w <= 0.0 {
        return false;
    }
    let exp = w.log10().round() as i32;
    let expected = pow10(exp);
    (w - expected).abs() <= 1e-9 * expected
}

// Checks a user-supplied place list
//
// Rules:
// - at least one place
// - every weight is a positive power of ten
// - at most one decimal point
// - weights strictly decrease on each side of the decimal point
pub fn validate_places(places: &[Place]) -> Result<(), PlaceError> {
    if places.is_empty() {
        return Err(PlaceError::Empty);
    }

    let mut seen_decimal = false;
    let mut previous: Option<f64> = None;

    for place in places {
        match place {
            Place::Decimal => {
                if seen_decimal {
                    return Err(PlaceError::MultipleDecimals);
                }
                seen_decimal = true;
                // Ordering restarts after the point
                previous = None;
            }
            Place::Weight(w) => {
                if !is_power_of_ten(*w) {
                    return Err(PlaceError::InvalidWeight(w.to_string()));
                }
                if let Some(prev) = previous {
                    if *w >= prev {
                        return Err(PlaceError::NotDecreasing { previous: prev, next: *w });
                    }
                }
                previous = Some(*w);
            }
        }
    }

    Ok(())
}

// -----------------------------------------------------------------------------
// BEGINNER NOTES:
//
// 1. Why an enum instead of a magic value like -1 for the decimal point?
//    - The compiler makes every match handle Place::Decimal explicitly
//    - There is no way to mistake the marker for a real weight
//
// 2. What does implementing FromStr buy us?
//    - "100".parse::<Place>() works like any built-in type
//    - clap uses it to parse --places without extra glue code
// -----------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    fn w(x: f64) -> Place {
        Place::Weight(x)
    }

    #[test]
    fn test_derive_integer_and_fraction() {
        assert_eq!(
            derive_places(1234.5),
            vec![w(1000.0), w(100.0), w(10.0), w(1.0), Place::Decimal, w(0.1)]
        );
    }

    #[test]
    fn test_derive_various_digit_counts() {
        assert_eq!(derive_places(7.0), vec![w(1.0)]);
        assert_eq!(derive_places(42.0), vec![w(10.0), w(1.0)]);
        assert_eq!(derive_places(100.0), vec![w(100.0), w(10.0), w(1.0)]);
        assert_eq!(derive_places(2.75), vec![w(1.0), Place::Decimal, w(0.1), w(0.01)]);
        assert_eq!(
            derive_places(12.345),
            vec![w(10.0), w(1.0), Place::Decimal, w(0.1), w(0.01), w(0.001)]
        );
    }

    #[test]
    fn test_derive_leading_zero_and_sign() {
        assert_eq!(derive_places(0.05), vec![w(1.0), Place::Decimal, w(0.1), w(0.01)]);
        assert_eq!(derive_places(-12.5), vec![w(10.0), w(1.0), Place::Decimal, w(0.1)]);
        assert!(derive_places(f64::NAN).is_empty());
    }

    #[test]
    fn test_derived_lists_are_valid() {
        for value in [1.0, 42.0, 1234.5, 0.05, 99.99, 1000000.0] {
            assert_eq!(validate_places(&derive_places(value)), Ok(()), "value {}", value);
        }
    }

    #[test]
    fn test_parse_place() {
        assert_eq!(".".parse::<Place>(), Ok(Place::Decimal));
        assert_eq!("100".parse::<Place>(), Ok(w(100.0)));
        assert_eq!(" 0.1 ".parse::<Place>(), Ok(w(0.1)));
        assert!("-10".parse::<Place>().is_err());
        assert!("ten".parse::<Place>().is_err());
    }

    #[test]
    fn test_validate_rejects_malformed_lists() {
        assert_eq!(validate_places(&[]), Err(PlaceError::Empty));
        assert_eq!(
            validate_places(&[w(1.0), Place::Decimal, w(0.1), Place::Decimal]),
            Err(PlaceError::MultipleDecimals)
        );
        assert!(matches!(
            validate_places(&[w(1.0), w(10.0)]),
            Err(PlaceError::NotDecreasing { .. })
        ));
        assert!(matches!(validate_places(&[w(20.0)]), Err(PlaceError::InvalidWeight(_))));
    }

    #[test]
    fn test_validate_accepts_custom_list() {
        assert_eq!(validate_places(&[w(100.0), w(10.0), w(1.0), Place::Decimal, w(0.1)]), Ok(()));
    }
}
